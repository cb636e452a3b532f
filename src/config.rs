//! Compile-time configuration.
//!
//! Everything here is a constant: nothing persists and nothing is tunable
//! at runtime, so the whole configuration surface is a handful of consts.

/// Receive ring capacity in bytes. Must be a power of 2.
pub const RX_RING_SIZE: usize = 256;

/// Maximum command line length in bytes.
pub const LINE_SIZE: usize = 128;

/// Diagnostics ring capacity in entries. Must be a power of 2.
pub const DIAG_RING_SIZE: usize = 32;

/// UART baud rate for the console link.
pub const CONSOLE_BAUD: u32 = 115_200;

/// LED PWM output pin.
pub const LED_PIN: i32 = 8;

/// Push button input pin.
pub const BUTTON_PIN: i32 = 9;
