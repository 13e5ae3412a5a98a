pub(crate) mod opt;
mod command;
mod convert;
mod render;
mod run;
mod schema;

use crate::opt::{Cli, Commands};
use anyhow::{Error, Result, anyhow};
use convert::convert;
use dataflow_config::DataflowConfig;
use dataflow_model::workflow::{ConversionPhase, WorkflowState};
use dataflow_utils::loader::file_system::FileSystemLoader;
use dataflow_utils::tracing::{TracingConfig, setup};
use run::run;
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use tracing_core::LevelFilter;

pub(crate) async fn exec(cli: Cli) -> Result<(), Error> {
    setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .default_level(level(cli.verbose))
            .build(),
    )?;

    match cli.command {
        Commands::Run(o) => run(load_config(cli.config.as_deref()).await?, o).await,
        Commands::Convert(o) => convert(load_config(cli.config.as_deref()).await?, o).await,
        Commands::Schema(o) => schema::exec(o),
    }
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

async fn load_config(path: Option<&Path>) -> Result<DataflowConfig> {
    let Some(path) = path else {
        tracing::debug!("no config file given, using defaults");
        return Ok(DataflowConfig::default());
    };
    let (loader, name) = loader_for(path)?;
    let config = dataflow_config::load(&loader, &name).await?;
    tracing::info!(path = %path.display(), accounts = config.accounts().len(), "loaded config");
    Ok(config)
}

/// Splits a path into a loader rooted at its directory and the file name.
pub(crate) fn loader_for(path: &Path) -> Result<(FileSystemLoader, PathBuf)> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("{} does not name a file", path.display()))?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((FileSystemLoader::new(dir.to_path_buf()), PathBuf::from(name)))
}

/// Prints a progress line per update until the conversion leaves `Converting`.
pub(crate) async fn follow_progress(mut receiver: watch::Receiver<WorkflowState>) -> Result<WorkflowState> {
    loop {
        let state = receiver.borrow_and_update().clone();
        if state.conversion_phase != ConversionPhase::Converting {
            return Ok(state);
        }
        println!("{}", render::progress_line(&state));
        receiver.changed().await?;
    }
}
