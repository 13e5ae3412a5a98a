use crate::cli::command::{self, Command, HELP};
use crate::cli::run::prompt::StatePrompt;
use crate::cli::{follow_progress, loader_for, render};
use crate::opt::Run;
use anyhow::{Error, Result};
use dataflow_config::DataflowConfig;
use dataflow_core::App;
use dataflow_core::download::{DownloadSink, FileSystemSink};
use dataflow_core::upload::candidate_from_file;
use dataflow_utils::loader::LoaderTrait;
use reedline::{Reedline, Signal};

pub(crate) mod prompt;

#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Exit,
    Text(String),
}

pub(crate) async fn run(config: DataflowConfig, opt: Run) -> Result<(), Error> {
    let mut app = App::from_config(&config);
    let sink = FileSystemSink::new(opt.output_dir);
    let mut line_editor = Reedline::create();

    println!("{}\n\nType /help for all commands.", render::render_view(&app.view()));

    loop {
        let prompt = StatePrompt::new(render::prompt_label(&app.view()));
        let sig = line_editor.read_line(&prompt)?;
        let Signal::Success(user_input) = sig else {
            println!("\nAborted!");
            break;
        };
        if user_input.trim().is_empty() {
            continue;
        }
        tracing::debug!(input = %user_input, "got input");

        let command = match command::parse(&user_input) {
            Ok(command) => command,
            Err(error) => {
                eprintln!("{error}");
                continue;
            }
        };
        match handle(&mut app, &sink, command).await {
            Ok(Reply::Exit) => break,
            Ok(Reply::Text(text)) => println!("{text}"),
            Err(error) => eprintln!("{error}"),
        }
    }
    Ok(())
}

async fn handle<S: DownloadSink>(app: &mut App, sink: &S, command: Command) -> Result<Reply> {
    match command {
        Command::Exit => return Ok(Reply::Exit),
        Command::Help => return Ok(Reply::Text(HELP.to_owned())),
        Command::Login { email, password } => app.attempt_login(&email, &password).await?,
        Command::Provider => app.sign_in_with_provider(),
        Command::SignUp => app.show_register(),
        Command::SignIn => app.show_sign_in(),
        Command::Register(form) => app.register(&form)?,
        Command::Section(section) => app.set_section(section)?,
        Command::Upload(path) => {
            let (loader, name) = loader_for(&path)?;
            let file = loader.load_file(&name).await?;
            app.submit_file(candidate_from_file(file))?;
        }
        Command::Targets => return Ok(Reply::Text(render::render_targets(&app.workflow_state()))),
        Command::Convert(format) => {
            if !app.available_targets().is_empty() && !app.available_targets().contains(&format) {
                tracing::warn!(%format, "target is not among the suggested formats");
            }
            app.start_conversion(Some(format))?;
        }
        Command::Status => {}
        Command::Wait => {
            let state = follow_progress(app.subscribe()).await?;
            return Ok(Reply::Text(render::render_workflow(&state)));
        }
        Command::Download => {
            let artifact = app.download()?;
            sink.save(&artifact).await?;
            return Ok(Reply::Text(format!("Saved {}", artifact.file_name)));
        }
        Command::Reset => app.reset()?,
    }
    Ok(Reply::Text(render::render_view(&app.view())))
}
