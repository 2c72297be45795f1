// ABOUTME: Maps the configured sinks onto tracing-subscriber fmt layers
// ABOUTME: Text or JSON on stdout, plus an optional daily-rolling plain-text file

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// A destination for formatted events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Human-readable stdout, compact or multi-line
    Console { pretty: bool },
    /// Newline-delimited JSON on stdout
    Json,
    /// Rolling file at the given base path
    File(PathBuf),
}

impl Sink {
    /// Sinks enabled by `config`. JSON takes stdout over the text console.
    pub fn enabled(config: &LoggingConfig) -> Vec<Sink> {
        let OutputConfig {
            console,
            file,
            json,
            pretty_console,
        } = config.output;

        let stdout = match (json, console) {
            (true, _) => Some(Sink::Json),
            (false, true) => Some(Sink::Console {
                pretty: pretty_console,
            }),
            (false, false) => None,
        };
        let file = file.then(|| Sink::File(config.file.path.clone()));

        stdout.into_iter().chain(file).collect()
    }

    pub fn into_layer(self) -> Result<BoxedLayer> {
        Ok(match self {
            Sink::Console { pretty: true } => fmt::layer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .pretty()
                .boxed(),
            Sink::Console { pretty: false } => fmt::layer().with_target(true).compact().boxed(),
            Sink::Json => fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .boxed(),
            Sink::File(path) => file_layer(&path)?,
        })
    }
}

fn file_layer(path: &Path) -> Result<BoxedLayer> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    std::fs::create_dir_all(directory)
        .with_context(|| format!("cannot create log directory {}", directory.display()))?;

    let (writer, guard) = non_blocking(rolling::daily(directory, file_name));
    // Flushes on drop; must live as long as the global subscriber
    std::mem::forget(guard);

    Ok(fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .boxed())
}

/// Level filter from the global level plus per-target directives
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    config
        .module_levels
        .iter()
        .try_fold(EnvFilter::new(config.level.0.as_str()), |filter, (target, level)| -> Result<EnvFilter> {
            let directive = format!("{target}={}", level.0)
                .parse()
                .with_context(|| format!("invalid filter target '{target}'"))?;
            Ok(filter.add_directive(directive))
        })
}
