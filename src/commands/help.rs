//! HELP: the built-in command listing.

use core::fmt::Write;

use crate::shell::{Args, CmdError, Command};

pub struct HelpCommand;

pub static HELP: HelpCommand = HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "HELP"
    }

    fn brief(&self) -> &'static str {
        "Displays help for commands"
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        // With an argument, show that command's own help.
        if let Some(arg) = args.next_token() {
            return match super::REGISTRY.find(arg) {
                Some(cmd) => {
                    let _ = write!(out, "Available {} commands:\r\n", cmd.name());
                    cmd.print_help(out);
                    Ok(())
                }
                None => {
                    let _ = write!(out, "HELP: No such command: {}\r\n", arg);
                    Err(CmdError::UnknownArg)
                }
            };
        }

        let _ = write!(out, "Available commands:\r\n");
        for cmd in super::REGISTRY.iter() {
            let _ = write!(out, "\t{}\t{}\r\n", cmd.name(), cmd.brief());
        }
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tHELP\tPrint a summary of available commands\r\n");
        let _ = write!(out, "\tHELP <command>\tShow help for given command\r\n");
    }
}
