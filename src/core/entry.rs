//! Per-context log entry and the level methods
//!
//! Every level has a plain method taking values and an `f` method taking a
//! format string plus values. Both go through the same rendering path; the
//! plain form synthesizes a format with one verb per value. Level methods
//! are `#[track_caller]`, so lines are attributed to the code that called
//! them.

use super::{
    error::{LoggerError, Result},
    field_set::{FieldSet, FieldValue},
    log_level::LogLevel,
    logger::Logger,
    printf::default_format,
    terminator::FATAL_EXIT_CODE,
};
use std::panic::Location;

/// Fields for one logging context plus a reference to the shared logger.
///
/// Not meant for unsynchronized mutation from several threads; give each
/// thread its own entry or clone it.
#[derive(Clone)]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: FieldSet,
}

impl<'a> Entry<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            fields: FieldSet::new(),
        }
    }

    /// Merge fields, overwriting existing keys
    #[must_use]
    pub fn with<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.merge(fields);
        self
    }

    /// Merge a single field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    /// Merge fields in place (mutable version)
    pub fn add_fields<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.merge(fields);
        self
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    #[track_caller]
    pub fn trace(&self, args: &[FieldValue]) {
        self.emit(LogLevel::Trace, None, args);
    }

    #[track_caller]
    pub fn tracef(&self, format: &str, args: &[FieldValue]) {
        self.emit(LogLevel::Trace, Some(format), args);
    }

    #[track_caller]
    pub fn debug(&self, args: &[FieldValue]) {
        self.emit(LogLevel::Debug, None, args);
    }

    #[track_caller]
    pub fn debugf(&self, format: &str, args: &[FieldValue]) {
        self.emit(LogLevel::Debug, Some(format), args);
    }

    #[track_caller]
    pub fn info(&self, args: &[FieldValue]) {
        self.emit(LogLevel::Info, None, args);
    }

    #[track_caller]
    pub fn infof(&self, format: &str, args: &[FieldValue]) {
        self.emit(LogLevel::Info, Some(format), args);
    }

    #[track_caller]
    pub fn warn(&self, args: &[FieldValue]) {
        self.emit(LogLevel::Warn, None, args);
    }

    #[track_caller]
    pub fn warnf(&self, format: &str, args: &[FieldValue]) {
        self.emit(LogLevel::Warn, Some(format), args);
    }

    #[track_caller]
    pub fn error(&self, args: &[FieldValue]) {
        self.emit(LogLevel::Error, None, args);
    }

    #[track_caller]
    pub fn errorf(&self, format: &str, args: &[FieldValue]) {
        self.emit(LogLevel::Error, Some(format), args);
    }

    /// Write the line, then run the logger's terminator with exit status 1.
    #[track_caller]
    pub fn fatal(&self, args: &[FieldValue]) {
        if self.emit(LogLevel::Fatal, None, args).is_some() {
            self.logger.terminate(FATAL_EXIT_CODE);
        }
    }

    #[track_caller]
    pub fn fatalf(&self, format: &str, args: &[FieldValue]) {
        if self.emit(LogLevel::Fatal, Some(format), args).is_some() {
            self.logger.terminate(FATAL_EXIT_CODE);
        }
    }

    /// Write the line, then return it as [`LoggerError::Panic`].
    ///
    /// Returns `Ok(())` when the level is filtered out. Callers decide
    /// whether to propagate, unwind or abort.
    #[track_caller]
    pub fn panic(&self, args: &[FieldValue]) -> Result<()> {
        match self.emit(LogLevel::Panic, None, args) {
            Some(line) => Err(LoggerError::panic(line)),
            None => Ok(()),
        }
    }

    #[track_caller]
    pub fn panicf(&self, format: &str, args: &[FieldValue]) -> Result<()> {
        match self.emit(LogLevel::Panic, Some(format), args) {
            Some(line) => Err(LoggerError::panic(line)),
            None => Ok(()),
        }
    }

    /// Gate, render and write; returns the written line.
    #[track_caller]
    fn emit(&self, level: LogLevel, format: Option<&str>, args: &[FieldValue]) -> Option<String> {
        if !self.logger.enabled(level) {
            return None;
        }

        let caller = Location::caller();
        let renderer = self.logger.renderer();
        let line = match format {
            Some(format) => renderer.render(level, format, args, &self.fields, caller),
            None => renderer.render(level, &default_format(args), args, &self.fields, caller),
        };
        self.logger.write_line(&line);
        Some(line)
    }
}
