//! Resolved logger configuration
//!
//! Fields accept both snake_case keys and the `LogLevel`, `Json`, `Format`,
//! `FullPath`, `MsgMinLen`, `writeFields` spelling.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default text template
pub const DEFAULT_FORMAT: &str = "{time} {level} {path} {msg} {fields}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level emitted
    #[serde(alias = "LogLevel")]
    pub level: LogLevel,

    /// Emit JSON objects instead of template lines
    #[serde(alias = "Json")]
    pub json: bool,

    /// Text template, used only when `json` is false
    #[serde(alias = "Format")]
    pub format: String,

    /// Keep the full call-site path instead of the file name
    #[serde(alias = "FullPath")]
    pub full_path: bool,

    /// Messages shorter than this are padded with trailing spaces
    #[serde(alias = "MsgMinLen")]
    pub msg_min_len: usize,

    /// Include entry fields in the output
    #[serde(alias = "writeFields", alias = "WriteFields")]
    pub write_fields: bool,

    /// Color level labels and field keys in text mode
    #[serde(alias = "UseColors")]
    pub use_colors: bool,

    #[serde(alias = "TimestampFormat")]
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            json: false,
            format: DEFAULT_FORMAT.to_string(),
            full_path: false,
            msg_min_len: 0,
            write_fields: true,
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.json && self.format.trim().is_empty() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "format must not be empty in text mode",
            ));
        }
        Ok(())
    }
}
