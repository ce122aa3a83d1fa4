//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod entry;
pub mod error;
pub mod field_set;
pub mod interpolate;
pub mod level_gate;
pub mod log_level;
pub mod logger;
pub mod palette;
pub mod printf;
pub mod renderer;
pub mod terminator;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::{CallSite, CallSiteResolver, FrameInspector, TrackedFrames};
pub use config::{LoggerConfig, DEFAULT_FORMAT};
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use field_set::{FieldSet, FieldValue};
pub use interpolate::interpolate;
pub use level_gate::LevelGate;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use palette::{LevelLabels, Palette};
pub use renderer::Renderer;
pub use terminator::{ProcessExit, Terminator, UnwindExit, FATAL_EXIT_CODE};
pub use timestamp::{FixedClock, SystemClock, TimeSource, TimestampFormat};
