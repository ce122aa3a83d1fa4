//! Terminal color tags and level labels
//!
//! Color codes come from the `colored` crate's color table but are rendered
//! as raw ANSI tags, so output does not depend on `colored`'s global
//! environment overrides.

use super::log_level::LogLevel;
use std::collections::HashMap;

const RESET: &str = "\x1b[0m";

/// Per-level color tags used for field keys and level labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && cfg!(feature = "console"),
        }
    }

    /// Opening tag for a level, empty when colors are off
    pub fn tag(&self, level: LogLevel) -> String {
        if !self.enabled {
            return String::new();
        }
        Self::ansi(level)
    }

    /// Closing tag, empty when colors are off
    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    /// Wrap `text` in the level's tag
    pub fn paint(&self, level: LogLevel, text: &str) -> String {
        format!("{}{}{}", self.tag(level), text, self.reset())
    }

    #[cfg(feature = "console")]
    fn ansi(level: LogLevel) -> String {
        use colored::Color::*;
        let color = match level {
            LogLevel::Trace | LogLevel::Debug => White,
            LogLevel::Info => Cyan,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => Red,
        };
        format!("\x1b[{}m", color.to_fg_str())
    }

    #[cfg(not(feature = "console"))]
    fn ansi(_level: LogLevel) -> String {
        String::new()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Text labels per level, plus the lookup that maps a label to its
/// external name in JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLabels {
    text: HashMap<LogLevel, String>,
    json: HashMap<String, String>,
}

impl LevelLabels {
    /// Upper-case level names painted with the palette; each label maps to
    /// the lower-case name in JSON.
    pub fn new(palette: &Palette) -> Self {
        let mut labels = Self {
            text: HashMap::new(),
            json: HashMap::new(),
        };
        for level in LogLevel::ALL {
            labels.set_label(level, palette.paint(level, level.to_str()));
        }
        labels
    }

    /// Replace a level's text label and map it to the level's JSON name.
    pub fn set_label(&mut self, level: LogLevel, label: impl Into<String>) {
        let label = label.into();
        self.json
            .insert(label.clone(), level.to_str().to_lowercase());
        self.text.insert(level, label);
    }

    /// Override the JSON name for a label.
    pub fn set_json_name(&mut self, label: impl Into<String>, name: impl Into<String>) {
        self.json.insert(label.into(), name.into());
    }

    pub fn label(&self, level: LogLevel) -> &str {
        self.text
            .get(&level)
            .map(String::as_str)
            .unwrap_or_else(|| level.to_str())
    }

    /// External name for `label`, falling back to the label itself
    pub fn json_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.json.get(label).map(String::as_str).unwrap_or(label)
    }
}

impl Default for LevelLabels {
    fn default() -> Self {
        Self::new(&Palette::new(false))
    }
}
