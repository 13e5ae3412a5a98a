use thiserror::Error;
use tracing_core::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Set by the binary so the reported version is the binary's own
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
    #[builder(default = true)]
    pub ansi: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn setup(config: TracingConfig) -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .try_init()?;

    tracing::debug!(
        package = config.package,
        version = config.version,
        "tracing initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TracingConfig::builder()
            .package("dataflow-cli")
            .version("0.1.0")
            .build();
        assert_eq!(config.default_level, LevelFilter::INFO);
        assert!(config.ansi);

        let config = TracingConfig::builder()
            .package("dataflow-cli")
            .version("0.1.0")
            .default_level(LevelFilter::WARN)
            .ansi(false)
            .build();
        assert_eq!(config.default_level, LevelFilter::WARN);
        assert!(!config.ansi);
    }
}
