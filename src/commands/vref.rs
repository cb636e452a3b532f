//! VREF: select the ADC full-scale reference.
//!
//! The reference is chosen from the converter's attenuation ladder; each
//! name is the nominal full-scale voltage it yields. The selection applies
//! to every input channel, like a shared reference register.

use core::fmt::Write;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::shell::{Args, CmdError, Command};

const USAGE: &str = "VREF: Usage: VREF SET [0V95|1V25|1V75|3V1]\r\n";

/// Reference names and the attenuation step behind each.
const REFERENCES: [&str; 4] = ["0V95", "1V25", "1V75", "3V1"];

pub struct VrefCommand {
    selected: AtomicU8,
}

pub static VREF: VrefCommand = VrefCommand {
    selected: AtomicU8::new(0),
};

impl VrefCommand {
    fn apply(&self, index: u8) {
        self.selected.store(index, Ordering::Relaxed);

        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: per-channel attenuation writes; the reference is shared,
        // so every input channel gets the new setting.
        unsafe {
            use esp_idf_svc::sys;
            let atten = match index {
                0 => sys::adc_atten_t_ADC_ATTEN_DB_0,
                1 => sys::adc_atten_t_ADC_ATTEN_DB_2_5,
                2 => sys::adc_atten_t_ADC_ATTEN_DB_6,
                _ => sys::adc_atten_t_ADC_ATTEN_DB_11,
            };
            for channel in 0..10 {
                sys::adc1_config_channel_atten(channel as sys::adc1_channel_t, atten);
            }
        }
    }
}

impl Command for VrefCommand {
    fn name(&self) -> &'static str {
        "VREF"
    }

    fn brief(&self) -> &'static str {
        "Displays and sets the reference voltage"
    }

    fn init(&self) {
        // Lowest reference by default.
        self.apply(0);
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        let Some(arg) = args.next_token() else {
            let index = self.selected.load(Ordering::Relaxed) as usize;
            let _ = write!(out, "Current reference voltage: {}\r\n", REFERENCES[index]);
            return Ok(());
        };

        if !arg.eq_ignore_ascii_case("SET") {
            let _ = write!(out, "VREF: Unknown argument: {}\r\n", arg);
            return Err(CmdError::UnknownArg);
        }

        let Some(name) = args.next_token() else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::MissingArg);
        };

        let Some(index) = REFERENCES.iter().position(|r| r.eq_ignore_ascii_case(name)) else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::InvalidValue);
        };

        self.apply(index as u8);
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tVREF\tPrints the selected reference voltage\r\n");
        let _ = write!(out, "\tVREF SET [0V95|1V25|1V75|3V1]\tSets the reference voltage\r\n");
    }
}
