//! # flog
//!
//! A leveled, structured console/JSON logger.
//!
//! ## Features
//!
//! - **Level filtering**: one threshold, checked before any formatting work
//! - **Structured fields**: per-entry key/value fields with last-write-wins merge
//! - **Two output modes**: flat JSON objects or `{placeholder}` text templates
//! - **Call-site attribution**: every line carries the caller's `file:line`
//!
//! ```
//! use flog::prelude::*;
//! use flog::{fields, infof};
//!
//! let logger = Logger::builder()
//!     .format("{level} {path} {msg} {fields}")
//!     .use_colors(false)
//!     .build()
//!     .expect("valid configuration");
//!
//! let entry = logger.entry().with(fields! { "request_id" => "abc-123" });
//! infof!(entry, "served %d bytes", 512);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, CallSiteResolver, Entry, FieldSet, FieldValue, FixedClock, LevelGate,
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, SystemClock,
        Terminator, TimeSource, TimestampFormat, UnwindExit,
    };
}

pub use appenders::{ConsoleAppender, MemoryAppender};
pub use core::{
    Appender, CallSite, CallSiteResolver, Entry, FieldSet, FieldValue, FixedClock, FrameInspector,
    LevelGate, LevelLabels, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, Palette,
    ProcessExit, Result, SystemClock, Terminator, TimeSource, TimestampFormat, TrackedFrames,
    UnwindExit, DEFAULT_FORMAT, FATAL_EXIT_CODE,
};
