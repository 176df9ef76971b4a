//! Structured logging with run context.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::run::RunId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    #[default]
    Json,
    /// Human-readable lines, for terminals.
    Human,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Run ID for correlation.
    pub run_id: String,
    /// Command that produced the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string. Fields are sorted by key.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(" | ");
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Structured logger bound to one CLI run.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    run_id: RunId,
    command: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            command: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the command name.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, HashMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, HashMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, HashMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, HashMap::new());
    }

    /// Whether an entry at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Build the entry that `log` would write, or `None` when filtered out.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if !self.enabled(level) {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            run_id: self.run_id.to_string(),
            command: self.command.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        let Some(entry) = self.entry(level, message, fields) else {
            return;
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        // stderr keeps stdout free for rendered cards
        eprintln!("{}", output);
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with typed fields.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Build the entry without writing it.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}
