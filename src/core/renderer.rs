//! Line rendering: JSON object or interpolated text template
//!
//! Every line is built from the same field map `{level, time, path, msg}`.
//! JSON mode merges entry fields into that map at the top level and remaps
//! the level label; text mode adds a colored `fields` string and hands the
//! map to the template interpolator.

use super::call_site::{short_path, CallSiteResolver, TrackedFrames};
use super::config::LoggerConfig;
use super::field_set::{FieldSet, FieldValue};
use super::interpolate::interpolate;
use super::log_level::LogLevel;
use super::palette::{LevelLabels, Palette};
use super::printf::sprintf;
use super::timestamp::TimeSource;
use std::collections::HashMap;
use std::panic::Location;

pub struct Renderer {
    config: LoggerConfig,
    resolver: CallSiteResolver,
    palette: Palette,
    labels: LevelLabels,
    clock: Box<dyn TimeSource>,
}

impl Renderer {
    pub fn new(
        config: LoggerConfig,
        resolver: CallSiteResolver,
        palette: Palette,
        labels: LevelLabels,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        Self {
            config,
            resolver,
            palette,
            labels,
            clock,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn labels(&self) -> &LevelLabels {
        &self.labels
    }

    /// Render one line for a call made at `caller`.
    pub fn render(
        &self,
        level: LogLevel,
        format: &str,
        args: &[FieldValue],
        fields: &FieldSet,
        caller: &'static Location<'static>,
    ) -> String {
        let path = self.path(caller);
        let msg = pad_message(sprintf(format, args), self.config.msg_min_len);
        let label = self.labels.label(level);
        let time = self.clock.now();

        if self.config.json {
            self.render_json(label, time, path, msg, fields)
        } else {
            self.render_text(level, label, time, path, msg, fields)
        }
    }

    fn path(&self, caller: &'static Location<'static>) -> String {
        let frames = TrackedFrames::new(Location::caller(), caller);
        let path = self.resolver.resolve(&frames);
        if self.config.full_path {
            path
        } else {
            short_path(&path).to_string()
        }
    }

    fn render_json(
        &self,
        label: &str,
        time: String,
        path: String,
        msg: String,
        fields: &FieldSet,
    ) -> String {
        use serde_json::Value;

        let mut data = serde_json::Map::new();
        data.insert("level".to_string(), Value::String(label.to_string()));
        data.insert("time".to_string(), Value::String(time));
        data.insert("path".to_string(), Value::String(path));
        data.insert("msg".to_string(), Value::String(msg));

        if self.config.write_fields {
            data.extend(fields.to_json_map());
            data.remove("fields");
        }

        if let Some(Value::String(level)) = data.get("level") {
            let mapped = self.labels.json_name(level).to_string();
            data.insert("level".to_string(), Value::String(mapped));
        }

        serde_json::to_string(&Value::Object(data)).unwrap_or_else(|e| {
            eprintln!("[LOGGER ERROR] Failed to encode JSON line: {}", e);
            "{}".to_string()
        })
    }

    fn render_text(
        &self,
        level: LogLevel,
        label: &str,
        time: String,
        path: String,
        msg: String,
        fields: &FieldSet,
    ) -> String {
        let mut data: HashMap<&str, String> = HashMap::with_capacity(5);
        data.insert("level", label.to_string());
        data.insert("time", time);
        data.insert("path", path);
        data.insert("msg", msg);

        if self.config.write_fields {
            let tag = self.palette.tag(level);
            data.insert("fields", fields.render_text(&tag, self.palette.reset()));
        }

        interpolate(&self.config.format, &data)
    }
}

/// Pad `msg` with trailing spaces up to `min_len` characters.
pub fn pad_message(mut msg: String, min_len: usize) -> String {
    let len = msg.chars().count();
    if len < min_len {
        msg.extend(std::iter::repeat(' ').take(min_len - len));
    }
    msg
}
