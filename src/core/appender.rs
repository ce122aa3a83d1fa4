//! Appender trait for the rendered-line destination

use super::error::Result;

/// Receives each rendered line exactly once.
///
/// Implementations serialize concurrent writes themselves; the logger adds
/// no locking around `append`.
pub trait Appender: Send + Sync {
    fn append(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
