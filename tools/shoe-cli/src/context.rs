//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shoe_observability::{LogLevel, RunId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Structured logger for this run.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, command: &str) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try the current directory, then its parents
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let level = if output.is_verbose() {
            config.log.level.min(LogLevel::Debug)
        } else {
            config.log.level
        };
        let logger = StructuredLogger::new(RunId::generate())
            .with_command(command)
            .with_min_level(level)
            .with_format(config.log.format);

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest existing file wins; a file that fails to parse is an error,
    /// not a reason to keep walking up.
    fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
