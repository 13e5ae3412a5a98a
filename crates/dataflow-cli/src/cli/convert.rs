use crate::cli::{follow_progress, loader_for};
use crate::opt::Convert;
use anyhow::{Error, Result, anyhow, bail};
use dataflow_config::DataflowConfig;
use dataflow_core::App;
use dataflow_core::download::{DownloadSink, FileSystemSink};
use dataflow_core::upload::candidate_from_file;
use dataflow_model::navigation::NavigationSection;
use dataflow_model::workflow::ConversionPhase;
use dataflow_utils::loader::LoaderTrait;
use std::path::PathBuf;

/// Runs the whole workflow without prompting and returns where the download was saved.
pub(crate) async fn convert(config: DataflowConfig, opt: Convert) -> Result<(), Error> {
    let location = convert_file(config, opt).await?;
    println!("Saved {}", location.display());
    Ok(())
}

async fn convert_file(config: DataflowConfig, opt: Convert) -> Result<PathBuf> {
    let Convert {
        file,
        to,
        email,
        password,
        provider,
        output_dir,
        quiet,
    } = opt;

    let mut app = App::from_config(&config);
    if provider {
        app.sign_in_with_provider();
    } else {
        let email = email.ok_or_else(|| anyhow!("--email is required unless --provider is set"))?;
        let password = password.ok_or_else(|| anyhow!("--password is required unless --provider is set"))?;
        app.attempt_login(&email, &password).await?;
    }
    app.set_section(NavigationSection::Upload)?;

    let (loader, name) = loader_for(&file)?;
    let loaded = loader.load_file(&name).await?;
    app.submit_file(candidate_from_file(loaded))?;

    if !app.available_targets().contains(&to) {
        tracing::warn!(target_format = %to, "target is not among the suggested formats");
    }
    app.start_conversion(Some(to))?;

    let state = if quiet {
        app.wait_for_completion().await?
    } else {
        follow_progress(app.subscribe()).await?
    };
    if state.conversion_phase != ConversionPhase::Succeeded {
        bail!("Conversion ended in phase {}", state.conversion_phase);
    }

    let artifact = app.download()?;
    let sink = FileSystemSink::new(output_dir);
    sink.save(&artifact).await?;
    Ok(sink.location(&artifact))
}
