//! Command handlers.
//!
//! One module per command, each a static object owning its peripheral
//! state. Register access is confined to `target_os = "espidf"` builds;
//! grammars and printed output are identical on the host.

pub mod adc;
pub mod button;
pub mod help;
pub mod led;
pub mod reset;
pub mod temp;
pub mod vref;

use crate::shell::{Command, Registry};

/// All available commands, in listing order.
static COMMAND_TABLE: &[&'static dyn Command] = &[
    &help::HELP,
    &adc::ADC,
    &vref::VREF,
    &temp::TEMP,
    &led::LED,
    &button::BUTTON,
    &reset::RESET,
];

/// The process-wide command registry.
pub static REGISTRY: Registry = Registry::new(COMMAND_TABLE);
