//! The cooperative shell loop driver.
//!
//! Owns the line buffer, drains the receive ring through the line editor,
//! and dispatches completed lines against the registry. Everything here
//! runs in loop context; the only interrupt-side collaborator is the ring.

use core::fmt::Write;

use crate::diag::DiagRing;
use crate::diag_debug;
use crate::diag_warn;
use crate::ring::RxRing;

use super::args::Args;
use super::line::{LineBuffer, LineEvent};
use super::registry::Registry;

/// Version string (set by build.rs, includes git hash).
pub const VERSION: &str = env!("VERSION_STRING");

/// Console shell state machine.
pub struct Shell<'a> {
    line: LineBuffer,
    ring: &'a RxRing,
    registry: &'a Registry,
    diag: &'a DiagRing,
}

impl<'a> Shell<'a> {
    /// Create a shell over its input ring, command table and diagnostics.
    pub const fn new(ring: &'a RxRing, registry: &'a Registry, diag: &'a DiagRing) -> Self {
        Self {
            line: LineBuffer::new(),
            ring,
            registry,
            diag,
        }
    }

    /// Re-render the prompt and any partial line, called before each suspend.
    pub fn prompt(&self, out: &mut dyn Write) {
        let _ = write!(out, "\r> {}", self.line.as_str());
    }

    /// Print welcome banner.
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = write!(out, "\r\n{}\r\n", VERSION);
        let _ = write!(out, "Type 'HELP' for commands.\r\n");
    }

    /// Drain pending input and dispatch at most one completed line.
    ///
    /// Returns `true` if a line was dispatched. Bytes already received for
    /// the next line stay queued in the ring until the next call: one
    /// command per iteration, even when more lines are waiting.
    pub fn service(&mut self, out: &mut dyn Write) -> bool {
        let lost = self.ring.take_lost();
        if lost > 0 {
            diag_warn!(self.diag, "input overrun, {} bytes lost", lost);
        }

        while let Some(byte) = self.ring.pop() {
            if self.line.feed(byte, out) == LineEvent::LineReady {
                let _ = out.write_str("\r\n");
                self.dispatch(out);
                self.line.clear();
                return true;
            }
        }

        false
    }

    /// Resolve and run one completed command line.
    fn dispatch(&mut self, out: &mut dyn Write) {
        let mut args = Args::new(self.line.as_str());

        // Blank lines fall through to a fresh prompt.
        let Some(name) = args.next_token() else {
            return;
        };

        match self.registry.find(name) {
            Some(cmd) => {
                if let Err(err) = cmd.execute(&mut args, out) {
                    diag_debug!(self.diag, "{} returned {}", cmd.name(), err);
                }
            }
            None => {
                let _ = write!(out, "Unrecognized command: {}\r\n", name);
            }
        }
    }
}
