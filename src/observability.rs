use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over the configured level. JSON output is meant
/// for production log shipping, pretty output for local development.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    config: &LoggingConfig,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_filter(env_filter))
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        log.format = ?config.format,
        "Observability initialized"
    );

    Ok(())
}
