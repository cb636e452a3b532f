//! BUTTON: push button state and input configuration.
//!
//! Inversion is applied in the read path; the GPIO block has no input
//! inverter.

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::shell::{Args, CmdError, Command};

pub struct ButtonCommand {
    invert: AtomicBool,
    pullup: AtomicBool,
}

pub static BUTTON: ButtonCommand = ButtonCommand {
    invert: AtomicBool::new(false),
    pullup: AtomicBool::new(false),
};

fn on_off(v: bool) -> &'static str {
    if v {
        "ON"
    } else {
        "OFF"
    }
}

impl ButtonCommand {
    fn read_raw(&self) -> bool {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: pin was configured as input in init.
        let level = unsafe { esp_idf_svc::sys::gpio_get_level(crate::config::BUTTON_PIN) != 0 };

        // Host stand-in: line at rest.
        #[cfg(any(test, not(target_os = "espidf")))]
        let level = false;

        level
    }

    fn apply_pullup(&self, enabled: bool) {
        self.pullup.store(enabled, Ordering::Relaxed);

        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: plain pull-mode write on the configured input pin.
        unsafe {
            use esp_idf_svc::sys;
            let mode = if enabled {
                sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY
            } else {
                sys::gpio_pull_mode_t_GPIO_FLOATING
            };
            sys::gpio_set_pull_mode(crate::config::BUTTON_PIN, mode);
        }
    }
}

impl Command for ButtonCommand {
    fn name(&self) -> &'static str {
        "BUTTON"
    }

    fn brief(&self) -> &'static str {
        "Displays and configures the push button"
    }

    fn init(&self) {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: one-time input direction setup.
        unsafe {
            use esp_idf_svc::sys;
            sys::gpio_set_direction(crate::config::BUTTON_PIN, sys::gpio_mode_t_GPIO_MODE_INPUT);
        }
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        let Some(arg) = args.next_token() else {
            let logical = self.read_raw() ^ self.invert.load(Ordering::Relaxed);
            let _ = write!(out, "Button logical state: {}\r\n", logical as u8);
            let _ = write!(out, "State invert: {}\r\n", on_off(self.invert.load(Ordering::Relaxed)));
            let _ = write!(out, "Pull-up resistor: {}\r\n", on_off(self.pullup.load(Ordering::Relaxed)));
            return Ok(());
        };

        let is_invert = arg.eq_ignore_ascii_case("INV");
        if !is_invert && !arg.eq_ignore_ascii_case("PUP") {
            let _ = write!(out, "BUTTON: Unknown argument: {}\r\n", arg);
            return Err(CmdError::UnknownArg);
        }

        let setting = if is_invert { "INV" } else { "PUP" };

        let Some(value) = args.next_token() else {
            let _ = write!(out, "BUTTON: Usage: BUTTON {} [ON|OFF]\r\n", setting);
            return Err(CmdError::MissingArg);
        };

        let enabled = if value.eq_ignore_ascii_case("ON") {
            true
        } else if value.eq_ignore_ascii_case("OFF") {
            false
        } else {
            let _ = write!(out, "BUTTON: Usage: BUTTON {} [ON|OFF]\r\n", setting);
            return Err(CmdError::InvalidValue);
        };

        if is_invert {
            self.invert.store(enabled, Ordering::Relaxed);
        } else {
            self.apply_pullup(enabled);
        }
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tBUTTON\tPrints the status of the button\r\n");
        let _ = write!(out, "\tBUTTON INV [ON|OFF]\tConfigures whether inversion is on\r\n");
        let _ = write!(out, "\tBUTTON PUP [ON|OFF]\tConfigures pull-up resistor\r\n");
    }
}
