// ABOUTME: Installs the global tracing subscriber for a Prism process
// ABOUTME: One registry, every enabled sink layered on it, one level filter on top

use anyhow::{Context, Result};
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{BoxedLayer, Sink, create_env_filter};

/// Layers for every sink the configuration enables
pub fn build_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>> {
    Sink::enabled(config)
        .into_iter()
        .map(|sink| {
            let label = format!("{sink:?}");
            sink.into_layer()
                .with_context(|| format!("cannot set up log sink {label}"))
        })
        .collect()
}

/// Install the process-wide subscriber.
///
/// Fails if one is already installed.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let filter = create_env_filter(&config)?;
    let layers = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("global tracing subscriber already set")?;

    tracing::debug!(
        level = %config.level.0,
        targets = config.module_levels.len(),
        json = config.output.json,
        file = config.output.file,
        "Logging ready"
    );
    Ok(())
}
