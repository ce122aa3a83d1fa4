//! Process-wide logger: resolved configuration plus output plumbing
//!
//! A `Logger` is built once and is immutable afterwards. It hands out
//! [`Entry`] values, which carry per-context fields and expose the level
//! methods. Share the logger behind an `Arc` or a `static` when several
//! threads log.

use super::{
    appender::Appender,
    call_site::CallSiteResolver,
    config::LoggerConfig,
    entry::Entry,
    error::Result,
    field_set::FieldValue,
    level_gate::LevelGate,
    log_level::LogLevel,
    palette::{LevelLabels, Palette},
    renderer::Renderer,
    terminator::{ProcessExit, Terminator},
    timestamp::{SystemClock, TimeSource, TimestampFormat},
};
use crate::appenders::ConsoleAppender;

pub struct Logger {
    gate: LevelGate,
    renderer: Renderer,
    appender: Box<dyn Appender>,
    terminator: Box<dyn Terminator>,
}

impl Logger {
    /// Console logger for a resolved configuration
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        self.renderer.config()
    }

    pub fn gate(&self) -> LevelGate {
        self.gate
    }

    /// Whether a call at `level` would be emitted
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.gate.allows(level)
    }

    /// Fresh entry with no fields
    pub fn entry(&self) -> Entry<'_> {
        Entry::new(self)
    }

    /// Fresh entry carrying `fields`
    pub fn with<I, K, V>(&self, fields: I) -> Entry<'_>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Entry::new(self).with(fields)
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.flush()
    }

    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Hand a rendered line to the appender; failures are reported on
    /// stderr and never reach the caller.
    pub(crate) fn write_line(&self, line: &str) {
        if let Err(e) = self.appender.append(line) {
            eprintln!(
                "[LOGGER ERROR] Appender '{}' failed: {}",
                self.appender.name(),
                e
            );
        }
    }

    pub(crate) fn terminate(&self, code: i32) -> ! {
        if let Err(e) = self.appender.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        self.terminator.terminate(code)
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().assemble()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use flog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .format("{level} {msg} {fields}")
///     .use_colors(false)
///     .build()
///     .expect("valid configuration");
///
/// logger.entry().with_field("port", 8080).info(&["listening".into()]);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
    terminator: Option<Box<dyn Terminator>>,
    clock: Option<Box<dyn TimeSource>>,
    resolver: Option<CallSiteResolver>,
    labels: Vec<(LogLevel, String)>,
    json_names: Vec<(String, String)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appender: None,
            terminator: None,
            clock: None,
            resolver: None,
            labels: Vec::new(),
            json_names: Vec::new(),
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn json(mut self, json: bool) -> Self {
        self.config.json = json;
        self
    }

    /// Set the text template
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn full_path(mut self, full_path: bool) -> Self {
        self.config.full_path = full_path;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn msg_min_len(mut self, len: usize) -> Self {
        self.config.msg_min_len = len;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_fields(mut self, write_fields: bool) -> Self {
        self.config.write_fields = write_fields;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Set the output destination (console by default)
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Set the Fatal-level terminating action (process exit by default)
    #[must_use = "builder methods return a new value"]
    pub fn terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    /// Set the time source (UTC wall clock by default)
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: TimeSource + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Override the library root used for call-site attribution
    #[must_use = "builder methods return a new value"]
    pub fn resolver(mut self, resolver: CallSiteResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the text label for a level
    #[must_use = "builder methods return a new value"]
    pub fn level_label(mut self, level: LogLevel, label: impl Into<String>) -> Self {
        self.labels.push((level, label.into()));
        self
    }

    /// Map a level label to a different name in JSON output
    #[must_use = "builder methods return a new value"]
    pub fn json_level_name(mut self, label: impl Into<String>, name: impl Into<String>) -> Self {
        self.json_names.push((label.into(), name.into()));
        self
    }

    /// Validate the configuration and build the logger
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Logger {
        let palette = Palette::new(self.config.use_colors);
        let mut labels = LevelLabels::new(&palette);
        for (level, label) in self.labels {
            labels.set_label(level, label);
        }
        for (label, name) in self.json_names {
            labels.set_json_name(label, name);
        }

        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new(self.config.timestamp_format.clone())));
        let resolver = self.resolver.unwrap_or_default();

        Logger {
            gate: LevelGate::new(self.config.level),
            renderer: Renderer::new(self.config, resolver, palette, labels, clock),
            appender: self.appender.unwrap_or_else(|| Box::new(ConsoleAppender::new())),
            terminator: self.terminator.unwrap_or_else(|| Box::new(ProcessExit)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::error::LoggerError;
    use crate::core::timestamp::FixedClock;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&self, _line: &str) -> Result<()> {
            Err(LoggerError::appender("failing", "always fails"))
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build().expect("default config is valid");
        assert_eq!(logger.config(), &LoggerConfig::default());
        assert_eq!(logger.gate().threshold(), LogLevel::Info);
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_builder_rejects_empty_format() {
        let result = Logger::builder().format("").build();
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_custom_labels() {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .format("{level}")
            .use_colors(false)
            .level_label(LogLevel::Info, "I")
            .appender(memory.clone())
            .build()
            .unwrap();

        logger.entry().info(&[]);
        assert_eq!(memory.lines(), vec!["I"]);
    }

    #[test]
    fn test_json_level_name_override() {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .json(true)
            .use_colors(false)
            .json_level_name("WARN", "warning")
            .clock(FixedClock("T".into()))
            .appender(memory.clone())
            .build()
            .unwrap();

        logger.entry().warn(&["careful".into()]);
        let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
        assert_eq!(parsed["level"], "warning");
        assert_eq!(parsed["time"], "T");
    }

    #[test]
    fn test_appender_failure_is_absorbed() {
        let logger = Logger::builder()
            .appender(FailingAppender)
            .build()
            .unwrap();

        // Must not panic or surface the error
        logger.entry().error(&["lost".into()]);
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
