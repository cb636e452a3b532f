//! LED: steady on/off control and PWM brightness.
//!
//! The original duty-cycle blink loop becomes a hardware PWM channel;
//! `LED SET <n>` programs an 8-bit duty, ON/OFF force the ends of the
//! range.

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::shell::{Args, CmdError, Command};

const USAGE: &str = "LED: Usage: LED SET <n> (0 <= n <= 255)\r\n";

pub struct LedCommand {
    duty: AtomicU8,
    /// True when a SET duty is active, false after ON/OFF.
    pwm: AtomicBool,
}

pub static LED: LedCommand = LedCommand {
    duty: AtomicU8::new(0),
    pwm: AtomicBool::new(false),
};

impl LedCommand {
    fn apply_duty(&self, duty: u8) {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: channel was configured in init.
        unsafe {
            use esp_idf_svc::sys;
            sys::ledc_set_duty(
                sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                sys::ledc_channel_t_LEDC_CHANNEL_0,
                duty as u32,
            );
            sys::ledc_update_duty(
                sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                sys::ledc_channel_t_LEDC_CHANNEL_0,
            );
        }

        self.duty.store(duty, Ordering::Relaxed);
    }
}

impl Command for LedCommand {
    fn name(&self) -> &'static str {
        "LED"
    }

    fn brief(&self) -> &'static str {
        "Displays and configures the LED"
    }

    fn init(&self) {
        #[cfg(all(not(test), target_os = "espidf"))]
        // SAFETY: one-time PWM timer and channel setup, LED off.
        unsafe {
            use esp_idf_svc::sys;

            let timer = sys::ledc_timer_config_t {
                speed_mode: sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                duty_resolution: sys::ledc_timer_bit_t_LEDC_TIMER_8_BIT,
                timer_num: sys::ledc_timer_t_LEDC_TIMER_0,
                freq_hz: 5000,
                clk_cfg: sys::ledc_clk_cfg_t_LEDC_AUTO_CLK,
                ..Default::default()
            };
            sys::ledc_timer_config(&timer);

            let channel = sys::ledc_channel_config_t {
                gpio_num: crate::config::LED_PIN,
                speed_mode: sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel: sys::ledc_channel_t_LEDC_CHANNEL_0,
                timer_sel: sys::ledc_timer_t_LEDC_TIMER_0,
                duty: 0,
                hpoint: 0,
                ..Default::default()
            };
            sys::ledc_channel_config(&channel);
        }
    }

    fn execute(&self, args: &mut Args<'_>, out: &mut dyn Write) -> Result<(), CmdError> {
        let Some(arg) = args.next_token() else {
            let duty = self.duty.load(Ordering::Relaxed);
            let mode = if self.pwm.load(Ordering::Relaxed) {
                "PWM"
            } else if duty > 0 {
                "ON"
            } else {
                "OFF"
            };
            let _ = write!(out, "LED duty: {}\r\n", duty);
            let _ = write!(out, "LED mode: {}\r\n", mode);
            return Ok(());
        };

        if arg.eq_ignore_ascii_case("ON") || arg.eq_ignore_ascii_case("OFF") {
            self.pwm.store(false, Ordering::Relaxed);
            self.apply_duty(if arg.eq_ignore_ascii_case("ON") { 255 } else { 0 });
            return Ok(());
        }

        if !arg.eq_ignore_ascii_case("SET") {
            let _ = write!(out, "LED: Unknown argument: {}\r\n", arg);
            return Err(CmdError::UnknownArg);
        }

        let Some(value) = args.next_token() else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::MissingArg);
        };

        let Ok(duty) = value.parse::<i32>() else {
            let _ = out.write_str(USAGE);
            return Err(CmdError::InvalidValue);
        };
        if !(0..=255).contains(&duty) {
            let _ = out.write_str(USAGE);
            return Err(CmdError::OutOfRange);
        }

        self.pwm.store(true, Ordering::Relaxed);
        self.apply_duty(duty as u8);
        Ok(())
    }

    fn print_help(&self, out: &mut dyn Write) {
        let _ = write!(out, "\tLED\tQuery LED brightness and ON/OFF state\r\n");
        let _ = write!(out, "\tLED [ON|OFF]\tTurn the LED on or off\r\n");
        let _ = write!(out, "\tLED SET <n>\tSet LED brightness (0 <= n <= 255)\r\n");
    }
}
