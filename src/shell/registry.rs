//! Command registry: the fixed, ordered dispatch table.

use core::fmt::Write;

use super::args::Args;
use super::error::CmdError;

/// The capability set every registered command exposes.
///
/// Implementations are `'static` objects holding whatever peripheral state
/// they need in atomics; the shell never locks around them because every
/// `execute` runs in loop context.
pub trait Command: Sync {
    /// Command name. Unique across the registry, matched case-insensitively.
    fn name(&self) -> &'static str;

    /// One-line description for the command listing.
    fn brief(&self) -> &'static str;

    /// One-time peripheral setup, called in registry order before the
    /// shell loop starts.
    fn init(&self) {}

    /// Run the command with the unconsumed remainder of the line.
    ///
    /// Handlers print their own diagnostics; the returned error is only
    /// logged by the dispatcher.
    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError>;

    /// Print this command's usage lines.
    fn print_help(&self, out: &mut dyn Write);
}

/// Ordered, immutable command table.
///
/// Built once at compile time; never mutated. Names are required to be
/// unique, so first-match lookup is exact-match lookup.
pub struct Registry {
    commands: &'static [&'static dyn Command],
}

impl Registry {
    /// Wrap a static command table.
    pub const fn new(commands: &'static [&'static dyn Command]) -> Self {
        Self { commands }
    }

    /// Look up a command by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Initialize every command, in registry order, exactly once each.
    pub fn init_all(&self) {
        for c in self.commands {
            c.init();
        }
    }

    /// Iterate the table in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Command> + '_ {
        self.commands.iter().copied()
    }
}
