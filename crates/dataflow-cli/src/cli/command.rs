use crate::cli::command::error::CommandError;
use dataflow_model::format::DataFormat;
use dataflow_model::navigation::NavigationSection;
use dataflow_model::session::RegistrationForm;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

pub(crate) mod error;

static COMMAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(\w+)(?:\s+(.*))?$").expect("command regex is valid"));

pub(crate) const HELP: &str = "\
Commands:
  /login <email> <password>   sign in with email and password
  /google                     sign in with the provider
  /signup                     show the registration form
  /signin                     show the sign in form
  /register <first> <last> <email> <password> <confirm>
  /section <dashboard|upload|files>
  /upload <path>              select a JSON, CSV, Parquet or Avro file
  /targets                    list the suggested output formats
  /convert <format>           start converting the selected file
  /status                     show the current screen
  /wait                       follow the conversion until it finishes
  /download                   save the converted file
  /reset                      start over with a new file
  /help
  /exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Exit,
    Help,
    Login { email: String, password: String },
    Provider,
    SignUp,
    SignIn,
    Register(RegistrationForm),
    Section(NavigationSection),
    Upload(PathBuf),
    Targets,
    Convert(DataFormat),
    Status,
    Wait,
    Download,
    Reset,
}

pub(crate) fn parse(input: &str) -> Result<Command, CommandError> {
    let captures = COMMAND_REGEX
        .captures(input.trim())
        .ok_or(CommandError::NotACommand)?;
    let Some(command) = captures.get(1).map(|m| m.as_str()) else {
        return Err(CommandError::NotACommand);
    };
    let arg = captures.get(2).map_or("", |m| m.as_str().trim());
    let args: Vec<&str> = arg.split_whitespace().collect();

    let command = match command {
        "exit" | "quit" => Command::Exit,
        "help" => Command::Help,
        "login" => match args.as_slice() {
            [email, password] => Command::Login {
                email: (*email).to_owned(),
                password: (*password).to_owned(),
            },
            _ => return Err(CommandError::usage("login", "/login <email> <password>")),
        },
        "google" => Command::Provider,
        "signup" => Command::SignUp,
        "signin" => Command::SignIn,
        "register" => match args.as_slice() {
            [first_name, last_name, email, password, confirm_password] => Command::Register(RegistrationForm {
                first_name: (*first_name).to_owned(),
                last_name: (*last_name).to_owned(),
                email: (*email).to_owned(),
                password: (*password).to_owned(),
                confirm_password: (*confirm_password).to_owned(),
            }),
            _ => {
                return Err(CommandError::usage(
                    "register",
                    "/register <first> <last> <email> <password> <confirm>",
                ));
            }
        },
        "section" => match args.as_slice() {
            [section] => Command::Section(
                section
                    .parse()
                    .map_err(|_| CommandError::InvalidSection((*section).to_owned()))?,
            ),
            _ => return Err(CommandError::usage("section", "/section <dashboard|upload|files>")),
        },
        // Paths may contain spaces, so the whole argument is taken
        "upload" if !arg.is_empty() => Command::Upload(PathBuf::from(arg)),
        "upload" => return Err(CommandError::usage("upload", "/upload <path>")),
        "targets" => Command::Targets,
        "convert" => match args.as_slice() {
            [format] => Command::Convert(
                format
                    .parse()
                    .map_err(|_| CommandError::InvalidFormat((*format).to_owned()))?,
            ),
            _ => return Err(CommandError::usage("convert", "/convert <format>")),
        },
        "status" => Command::Status,
        "wait" => Command::Wait,
        "download" => Command::Download,
        "reset" => Command::Reset,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("/exit").unwrap(), Command::Exit);
        assert_eq!(parse("  /status  ").unwrap(), Command::Status);
        assert_eq!(parse("/google").unwrap(), Command::Provider);
        assert_eq!(parse("/download").unwrap(), Command::Download);
    }

    #[test]
    fn test_login() {
        assert_eq!(
            parse("/login administrador@test.com test123").unwrap(),
            Command::Login {
                email: "administrador@test.com".to_owned(),
                password: "test123".to_owned(),
            }
        );
        assert!(matches!(
            parse("/login administrador@test.com"),
            Err(CommandError::MissingArgument { command: "login", .. })
        ));
    }

    #[test]
    fn test_register() {
        let Command::Register(form) = parse("/register Ada Lovelace ada@test.com pw pw").unwrap() else {
            panic!("expected register");
        };
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.confirm_password, "pw");
    }

    #[test]
    fn test_upload_keeps_spaces() {
        assert_eq!(
            parse("/upload my data/report.csv").unwrap(),
            Command::Upload(PathBuf::from("my data/report.csv"))
        );
        assert!(parse("/upload").is_err());
    }

    #[test]
    fn test_convert_format() {
        assert_eq!(parse("/convert json").unwrap(), Command::Convert(DataFormat::Json));
        assert_eq!(parse("/convert PARQUET").unwrap(), Command::Convert(DataFormat::Parquet));
        assert!(matches!(parse("/convert xlsx"), Err(CommandError::InvalidFormat(f)) if f == "xlsx"));
    }

    #[test]
    fn test_section() {
        assert_eq!(parse("/section files").unwrap(), Command::Section(NavigationSection::Files));
        assert!(matches!(parse("/section admin"), Err(CommandError::InvalidSection(_))));
    }

    #[test]
    fn test_not_a_command() {
        assert!(matches!(parse("hello"), Err(CommandError::NotACommand)));
        assert!(matches!(parse("/frobnicate"), Err(CommandError::Unknown(c)) if c == "frobnicate"));
    }
}
