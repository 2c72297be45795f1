// ABOUTME: Logging settings for Prism: verbosity, per-target directives, sinks, log file location
// ABOUTME: Defaults are console-only at info; PRISM_LOG* and RUST_LOG variables override them

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// `tracing::Level` that reads and writes as a lower-case name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        parse_log_level(&name)
            .map(LogLevel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        Self(level)
    }
}

/// One comma-separated item of a `RUST_LOG` style value
#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Global(Level),
    Target(String, Level),
}

impl FromStr for Directive {
    type Err = anyhow::Error;

    fn from_str(item: &str) -> Result<Self> {
        match item.split_once('=') {
            Some((target, level)) => {
                let level = parse_log_level(level)
                    .with_context(|| format!("bad level in directive '{item}'"))?;
                Ok(Self::Target(target.trim().to_string(), level))
            }
            None => Ok(Self::Global(parse_log_level(item)?)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for targets without their own directive
    pub level: LogLevel,

    /// Per-target levels, keyed by module path such as `prism_palette`
    pub module_levels: HashMap<String, LogLevel>,

    pub output: OutputConfig,

    pub file: FileConfig,
}

/// Which sinks receive events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub console: bool,
    pub file: bool,
    /// Emit newline-delimited JSON instead of text on stdout
    pub json: bool,
    /// Multi-line human formatting for the console
    pub pretty_console: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base path of the rolling log; rotation appends the date
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO.into(),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: dirs::config_dir()
                .map(|dir| dir.join("prism"))
                .unwrap_or_default()
                .join("prism.log"),
        }
    }
}

impl LoggingConfig {
    /// Defaults with the process environment applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup`.
    ///
    /// `PRISM_LOG` (a single level) shadows `RUST_LOG` (directives). The
    /// `PRISM_LOG_JSON`, `PRISM_LOG_NO_CONSOLE` and `PRISM_LOG_NO_FILE`
    /// switches act on presence alone.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        match (lookup("PRISM_LOG"), lookup("RUST_LOG")) {
            (Some(level), _) => {
                self.level = parse_log_level(&level).context("PRISM_LOG")?.into();
            }
            (None, Some(directives)) => {
                self.apply_directives(&directives).context("RUST_LOG")?;
            }
            (None, None) => {}
        }

        self.output.json |= lookup("PRISM_LOG_JSON").is_some();
        self.output.console &= lookup("PRISM_LOG_NO_CONSOLE").is_none();
        self.output.file &= lookup("PRISM_LOG_NO_FILE").is_none();
        Ok(())
    }

    /// Apply `warn,prism_palette=debug` style directives
    fn apply_directives(&mut self, value: &str) -> Result<()> {
        let directives = value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Directive::from_str)
            .collect::<Result<Vec<_>>>()?;

        for directive in directives {
            match directive {
                Directive::Global(level) => self.level = level.into(),
                Directive::Target(target, level) => {
                    self.module_levels.insert(target, level.into());
                }
            }
        }
        Ok(())
    }
}

/// Level from a case-insensitive name (`warning` is accepted for `warn`)
pub fn parse_log_level(name: &str) -> Result<Level> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("warning") {
        return Ok(Level::WARN);
    }
    Level::from_str(name).map_err(|_| {
        anyhow!("unknown log level '{name}', expected trace, debug, info, warn or error")
    })
}
