mod app;
mod cli;

use std::process::ExitCode;

use filicon_common::FiliconError;
use filicon_config::{toml_loader, validation, FiliconConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use crate::app::App;

const DEFAULT_LOG_DIRECTIVE: &str = "info";

fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
    )
}

fn load_config(path: Option<&std::path::Path>) -> Result<FiliconConfig, FiliconError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging before the config is read; the config level is
    // swapped in afterwards unless --log-level was given.
    let initial = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let (filter, filter_handle) = reload::Layer::new(log_filter(initial));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("filicon: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.log_level.is_none() {
        if let Err(e) = filter_handle.reload(log_filter(&config.logging.level)) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }

    let app = App::new(config, args.theme, args.contributions);
    tracing::info!(theme = app.theme_id(), "filicon starting");

    match app.run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("filicon: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_uses_given_directive() {
        assert!(log_filter("debug").to_string().contains("debug"));
    }

    #[test]
    fn log_filter_falls_back_on_garbage() {
        let filter = log_filter("info,[[[").to_string();
        assert!(filter.contains(DEFAULT_LOG_DIRECTIVE));
    }

    #[test]
    fn missing_config_path_is_reported_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(matches!(
            err,
            FiliconError::Config(filicon_common::ConfigError::FileNotFound(_))
        ));
    }
}
