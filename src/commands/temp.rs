//! TEMP: read the internal temperature sensor.

use core::fmt::Write;

use crate::shell::{Args, CmdError, Command};

pub struct TempCommand;

pub static TEMP: TempCommand = TempCommand;

impl TempCommand {
    fn read_celsius(&self) -> i32 {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: sensor was started in init; the read blocks until the
        // conversion is done.
        let celsius = unsafe {
            let mut value: f32 = 0.0;
            esp_idf_svc::sys::temp_sensor_read_celsius(&mut value);
            value as i32
        };

        // Host stand-in: room temperature.
        #[cfg(any(test, not(target_os = "espidf")))]
        let celsius = 25;

        celsius
    }
}

impl Command for TempCommand {
    fn name(&self) -> &'static str {
        "TEMP"
    }

    fn brief(&self) -> &'static str {
        "Displays the internal temperature"
    }

    fn init(&self) {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: one-time sensor bring-up with the driver defaults.
        unsafe {
            use esp_idf_svc::sys;
            let mut config = sys::temp_sensor_config_t::default();
            sys::temp_sensor_get_config(&mut config);
            sys::temp_sensor_set_config(config);
            sys::temp_sensor_start();
        }
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        // Takes no arguments.
        if let Some(arg) = args.next_token() {
            let _ = write!(out, "TEMP: Unknown argument: {}\r\n", arg);
            return Err(CmdError::UnknownArg);
        }

        let _ = write!(
            out,
            "Internal temperature is {} degrees Celsius\r\n",
            self.read_celsius()
        );
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tTEMP\tPrints the internal temperature in degrees Celsius\r\n");
    }
}
