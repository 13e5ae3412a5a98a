use clap::{ArgAction, Parser, Subcommand};
use dataflow_model::format::DataFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dataflow", about = "Upload a data file and convert it to another format")]
pub(crate) struct Cli {
    #[arg(long, global = true, env = "DATAFLOW_CONFIG", help = "Path of the YAML config file")]
    pub(crate) config: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "More log output, repeat for more")]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Interactive session
    Run(Run),

    /// Sign in, upload, convert and download in one go
    Convert(Convert),

    /// Write the JSON schema of the config file
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct Run {
    #[arg(short, long, default_value = ".", help = "Directory downloads are saved to")]
    pub(crate) output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct Convert {
    #[arg(required = true)]
    pub(crate) file: PathBuf,

    #[arg(short, long, help = "Target format (csv, json, parquet, avro)")]
    pub(crate) to: DataFormat,

    #[arg(long, env = "DATAFLOW_EMAIL")]
    pub(crate) email: Option<String>,

    #[arg(long, env = "DATAFLOW_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,

    #[arg(long, conflicts_with_all = ["email", "password"], help = "Use the provider sign-in instead of a password")]
    pub(crate) provider: bool,

    #[arg(short, long, default_value = ".", help = "Directory the converted file is saved to")]
    pub(crate) output_dir: PathBuf,

    #[arg(short, long, help = "Do not print progress")]
    pub(crate) quiet: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "dataflow",
            "convert",
            "report.csv",
            "--to",
            "json",
            "--email",
            "administrador@test.com",
            "--password",
            "test123",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(convert) = cli.command else {
            panic!("expected convert command");
        };
        assert_eq!(convert.to, DataFormat::Json);
        assert_eq!(convert.file, PathBuf::from("report.csv"));
        assert_eq!(convert.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_provider_conflicts_with_password() {
        let result = Cli::try_parse_from([
            "dataflow",
            "convert",
            "report.csv",
            "--to",
            "avro",
            "--provider",
            "--password",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["dataflow", "convert", "report.csv", "--to", "xlsx"]);
        assert!(result.is_err());
    }
}
