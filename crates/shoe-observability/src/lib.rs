//! Structured logging for shoe card tooling.
//!
//! This crate provides:
//! - `RunId` - Identifier correlating the log lines of one CLI run
//! - `StructuredLogger` - Leveled JSON or human-readable logs on stderr
//! - `LogBuilder` - Typed fields for a single entry

mod logging;
mod run;

pub use logging::*;
pub use run::*;
