//! Where violations go, and how the process ends.

use std::io::{self, Write};
use std::process;

use crate::violation::Violation;

/// Exit status of a process stopped by a contract violation (`EX_SOFTWARE`).
pub const VIOLATION_EXIT_CODE: i32 = 70;

/// Receives a violation and never returns control to the check.
pub trait Reporter {
    fn report(self, violation: &Violation<'_>) -> !;
}

/// Writes the diagnostic line to `W`, then terminates the process.
#[derive(Debug)]
pub struct Fatal<W> {
    out: W,
}

impl Fatal<io::Stderr> {
    /// The reporter the check macros use.
    #[inline]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Fatal<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes `violation` as one newline-terminated line and flushes.
    pub fn emit(&mut self, violation: &Violation<'_>) -> io::Result<()> {
        #[cfg(feature = "log")]
        log::error!(target: "dbc", "{violation}");

        writeln!(self.out, "{violation}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for Fatal<W> {
    #[cold]
    fn report(mut self, violation: &Violation<'_>) -> ! {
        // The process is going down either way.
        let _ = self.emit(violation);
        terminate()
    }
}

/// Exits immediately with [`VIOLATION_EXIT_CODE`]. No unwinding.
#[cold]
#[inline(never)]
pub fn terminate() -> ! {
    process::exit(VIOLATION_EXIT_CODE)
}

/// Test reporter: panics with the rendered line instead of exiting.
#[cfg(test)]
pub(crate) struct Panicking;

#[cfg(test)]
impl Reporter for Panicking {
    fn report(self, violation: &Violation<'_>) -> ! {
        panic!("{violation}")
    }
}
