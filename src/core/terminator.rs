//! Terminating action run after a Fatal-level line is written

/// Exit status used for Fatal-level calls
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the caller's flow after a Fatal line has been written.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32) -> !;
}

/// Exits the process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        use std::io::Write;
        let _ = std::io::stdout().flush();
        std::process::exit(code)
    }
}

/// Unwinds with the exit code as panic payload instead of exiting.
///
/// Lets a host (or a test) observe Fatal calls via `catch_unwind` and
/// downcast the payload to `i32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwindExit;

impl Terminator for UnwindExit {
    fn terminate(&self, code: i32) -> ! {
        std::panic::panic_any(code)
    }
}
