//! Logging macros that convert their arguments into [`FieldValue`]s.
//!
//! Each level has a plain macro (`info!`) that forwards values to the plain
//! method and an `f` macro (`infof!`) that takes a format string first.
//! Call sites are attributed to the macro invocation.
//!
//! # Examples
//!
//! ```
//! use flog::prelude::*;
//! use flog::{info, infof, warn};
//!
//! let logger = Logger::builder().use_colors(false).build().unwrap();
//! let entry = logger.entry();
//!
//! info!(entry, "server started");
//! infof!(entry, "listening on port %d", 8080);
//! warn!(entry, "retry", 3, "of", 5);
//! ```
//!
//! [`FieldValue`]: crate::FieldValue

/// Build a [`FieldSet`](crate::FieldSet) from `key => value` pairs.
///
/// ```
/// use flog::fields;
///
/// let set = fields! { "user" => "alice", "attempts" => 3 };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::FieldSet::new();
        $( set.insert($key, $value); )*
        set
    }};
}

/// Log values at trace level.
#[macro_export]
macro_rules! trace {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.trace(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at trace level.
#[macro_export]
macro_rules! tracef {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.tracef($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at debug level.
#[macro_export]
macro_rules! debug {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.debug(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at debug level.
#[macro_export]
macro_rules! debugf {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.debugf($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at info level.
#[macro_export]
macro_rules! info {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.info(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at info level.
#[macro_export]
macro_rules! infof {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.infof($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at warn level.
#[macro_export]
macro_rules! warn {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.warn(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at warn level.
#[macro_export]
macro_rules! warnf {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.warnf($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at error level.
#[macro_export]
macro_rules! error {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.error(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at error level.
#[macro_export]
macro_rules! errorf {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.errorf($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at fatal level, then terminate.
#[macro_export]
macro_rules! fatal {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.fatal(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at fatal level, then terminate.
#[macro_export]
macro_rules! fatalf {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.fatalf($format, &[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log values at panic level; evaluates to the `Result` of
/// [`Entry::panic`](crate::Entry::panic).
#[macro_export]
macro_rules! log_panic {
    ($entry:expr $(, $arg:expr)* $(,)?) => {
        $entry.panic(&[$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a formatted message at panic level; evaluates to the `Result` of
/// [`Entry::panicf`](crate::Entry::panicf).
#[macro_export]
macro_rules! log_panicf {
    ($entry:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $entry.panicf($format, &[$($crate::FieldValue::from($arg)),*])
    };
}
