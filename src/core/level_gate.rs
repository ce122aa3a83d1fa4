//! Minimum-level filtering

use super::log_level::LogLevel;

/// Whether a call at `call` passes a logger configured at `configured`.
#[inline]
pub fn allows(configured: LogLevel, call: LogLevel) -> bool {
    configured >= call.gate_level()
}

/// Holds the configured threshold and answers the per-call gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelGate {
    threshold: LogLevel,
}

impl LevelGate {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    #[inline]
    pub fn allows(&self, call: LogLevel) -> bool {
        allows(self.threshold, call)
    }
}
