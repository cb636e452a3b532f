//! RESET: restart the microcontroller.

use core::fmt::Write;

use crate::shell::{Args, CmdError, Command};

pub struct ResetCommand;

pub static RESET: ResetCommand = ResetCommand;

impl Command for ResetCommand {
    fn name(&self) -> &'static str {
        "RESET"
    }

    fn brief(&self) -> &'static str {
        "Reset the microcontroller"
    }

    fn execute(&self, _args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        let _ = write!(out, "Resetting...\r\n");

        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: does not return.
        unsafe {
            esp_idf_svc::sys::esp_restart();
        }

        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tRESET\tResets this microcontroller\r\n");
    }
}
