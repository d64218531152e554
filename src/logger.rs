use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    layer::SubscriberExt,
    Layer,
};

/// The name of the log file, inside the configured log dir
const LOG_FILE_NAME: &str = "fnapi.log";

/// Try to setup a logger.
///
/// `RUST_LOG` overrides the default level.
/// The returned guard must be kept alive for file logs to be flushed.
pub fn setup(config: &Config, verbose: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()
        .context("failed to parse RUST_LOG")?;

    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_dir() {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("failed to create log dir '{log_dir}'"))?;

            let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .boxed();

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
