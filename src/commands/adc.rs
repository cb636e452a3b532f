//! ADC: read the selected analog input channel.

use core::fmt::Write;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::shell::{Args, CmdError, Command};

const USAGE: &str = "ADC: Usage: ADC SET A<n> (0 <= n <= 9)\r\n";

/// ADC1 input channel names.
const CHANNELS: [(&str, u8); 10] = [
    ("A0", 0),
    ("A1", 1),
    ("A2", 2),
    ("A3", 3),
    ("A4", 4),
    ("A5", 5),
    ("A6", 6),
    ("A7", 7),
    ("A8", 8),
    ("A9", 9),
];

pub struct AdcCommand {
    channel: AtomicU8,
}

pub static ADC: AdcCommand = AdcCommand {
    channel: AtomicU8::new(6),
};

impl AdcCommand {
    fn read_raw(&self) -> i32 {
        let channel = self.channel.load(Ordering::Relaxed);

        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: plain driver call; blocks until the conversion completes.
        let value = unsafe {
            esp_idf_svc::sys::adc1_get_raw(channel as esp_idf_svc::sys::adc1_channel_t)
        };

        // Host stand-in: mid-scale reading.
        #[cfg(any(test, not(target_os = "espidf")))]
        let value = {
            let _ = channel;
            512
        };

        value
    }
}

impl Command for AdcCommand {
    fn name(&self) -> &'static str {
        "ADC"
    }

    fn brief(&self) -> &'static str {
        "Reads an analog voltage as digital value"
    }

    fn init(&self) {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: one-time converter setup before the loop starts.
        unsafe {
            esp_idf_svc::sys::adc1_config_width(esp_idf_svc::sys::adc_bits_width_t_ADC_WIDTH_BIT_12);
        }
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        let Some(arg) = args.next_token() else {
            let _ = write!(out, "ADC value: {}\r\n", self.read_raw());
            return Ok(());
        };

        if !arg.eq_ignore_ascii_case("SET") {
            let _ = write!(out, "ADC: Unknown argument: {}\r\n", arg);
            return Err(CmdError::UnknownArg);
        }

        let Some(name) = args.next_token() else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::MissingArg);
        };

        let Some(&(_, channel)) = CHANNELS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name))
        else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::InvalidValue);
        };

        self.channel.store(channel, Ordering::Relaxed);
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tADC\tPrints the value currently being read\r\n");
        let _ = write!(out, "\tADC SET A<n>\tSets the input channel (0 <= n <= 9)\r\n");
    }
}
