//! Command handler tests
//!
//! Run against the real registry on the host: grammars, printed output and
//! state transitions are identical to the firmware build, only the register
//! side effects are compiled out.

use esp_serial_shell::commands::REGISTRY;
use esp_serial_shell::shell::{Args, CmdError};

fn execute(line: &str, out: &mut String) -> Result<(), CmdError> {
    let mut args = Args::new(line);
    let name = args.next_token().expect("test line has a command");
    let cmd = REGISTRY.find(name).expect("command registered");
    cmd.execute(&mut args, out)
}

#[test]
fn test_registry_has_all_commands() {
    let expected = ["HELP", "ADC", "VREF", "TEMP", "LED", "BUTTON", "RESET"];

    for name in expected {
        assert!(
            REGISTRY.find(name).is_some(),
            "Command '{}' should be in registry",
            name
        );
    }
}

#[test]
fn test_registry_lookup_is_case_insensitive() {
    let cmd = REGISTRY.find("reset").expect("lowercase lookup");
    assert_eq!(cmd.name(), "RESET");
    assert!(REGISTRY.find("Button").is_some());
    assert!(REGISTRY.find("PING").is_none());
}

#[test]
fn test_help_lists_every_command() {
    let mut out = String::new();
    assert!(execute("HELP", &mut out).is_ok());

    assert!(out.contains("Available commands:"));
    for name in ["HELP", "ADC", "VREF", "TEMP", "LED", "BUTTON", "RESET"] {
        assert!(out.contains(name), "listing should mention {}", name);
    }
}

#[test]
fn test_help_for_one_command_prints_its_help() {
    let mut out = String::new();
    assert!(execute("HELP RESET", &mut out).is_ok());

    assert!(out.contains("Available RESET commands:"));
    assert!(out.contains("Resets this microcontroller"));
    // Help must not run the command itself.
    assert!(!out.contains("Resetting"));
}

#[test]
fn test_help_unknown_command() {
    let mut out = String::new();
    assert_eq!(execute("HELP FOO", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("HELP: No such command: FOO"));
}

#[test]
fn test_adc_read_and_channel_select() {
    let mut out = String::new();
    assert!(execute("ADC", &mut out).is_ok());
    assert!(out.contains("ADC value: 512"));

    out.clear();
    assert!(execute("ADC SET a3", &mut out).is_ok());
    assert!(out.is_empty(), "successful SET prints nothing");

    out.clear();
    assert_eq!(execute("ADC SET", &mut out), Err(CmdError::MissingArg));
    assert!(out.contains("ADC: Usage: ADC SET A<n>"));

    out.clear();
    assert_eq!(execute("ADC SET B2", &mut out), Err(CmdError::InvalidValue));
    assert!(out.contains("ADC: Usage: ADC SET A<n>"));

    out.clear();
    assert_eq!(execute("ADC READ", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("ADC: Unknown argument: READ"));
}

#[test]
fn test_vref_query_and_set() {
    let mut out = String::new();
    assert!(execute("VREF", &mut out).is_ok());
    assert!(out.contains("Current reference voltage: 0V95"));

    out.clear();
    assert!(execute("VREF SET 1v75", &mut out).is_ok());
    out.clear();
    assert!(execute("VREF", &mut out).is_ok());
    assert!(out.contains("Current reference voltage: 1V75"));

    out.clear();
    assert_eq!(execute("VREF SET 9V9", &mut out), Err(CmdError::InvalidValue));
    assert!(out.contains("VREF: Usage: VREF SET [0V95|1V25|1V75|3V1]"));

    out.clear();
    assert_eq!(execute("VREF SET", &mut out), Err(CmdError::MissingArg));

    out.clear();
    assert_eq!(execute("VREF FOO", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("VREF: Unknown argument: FOO"));
}

#[test]
fn test_temp_reads_and_rejects_arguments() {
    let mut out = String::new();
    assert!(execute("TEMP", &mut out).is_ok());
    assert!(out.contains("Internal temperature is 25 degrees Celsius"));

    out.clear();
    assert_eq!(execute("TEMP NOW", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("TEMP: Unknown argument: NOW"));
}

#[test]
fn test_led_lifecycle() {
    let mut out = String::new();
    assert!(execute("LED", &mut out).is_ok());
    assert!(out.contains("LED duty: 0"));
    assert!(out.contains("LED mode: OFF"));

    out.clear();
    assert!(execute("LED ON", &mut out).is_ok());
    out.clear();
    assert!(execute("LED", &mut out).is_ok());
    assert!(out.contains("LED duty: 255"));
    assert!(out.contains("LED mode: ON"));

    out.clear();
    assert!(execute("LED SET 128", &mut out).is_ok());
    out.clear();
    assert!(execute("LED", &mut out).is_ok());
    assert!(out.contains("LED duty: 128"));
    assert!(out.contains("LED mode: PWM"));

    out.clear();
    assert_eq!(execute("LED SET 999", &mut out), Err(CmdError::OutOfRange));
    assert!(out.contains("LED: Usage: LED SET <n> (0 <= n <= 255)"));

    out.clear();
    assert_eq!(execute("LED SET bright", &mut out), Err(CmdError::InvalidValue));

    out.clear();
    assert_eq!(execute("LED SET", &mut out), Err(CmdError::MissingArg));

    out.clear();
    assert_eq!(execute("LED BLINK", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("LED: Unknown argument: BLINK"));

    out.clear();
    assert!(execute("LED off", &mut out).is_ok());
    out.clear();
    assert!(execute("LED", &mut out).is_ok());
    assert!(out.contains("LED mode: OFF"));
}

#[test]
fn test_button_status_and_config() {
    let mut out = String::new();
    assert!(execute("BUTTON", &mut out).is_ok());
    assert!(out.contains("Button logical state: 0"));
    assert!(out.contains("State invert: OFF"));
    assert!(out.contains("Pull-up resistor: OFF"));

    // Inversion flips the logical state (raw level is low on the host).
    out.clear();
    assert!(execute("BUTTON INV ON", &mut out).is_ok());
    out.clear();
    assert!(execute("BUTTON", &mut out).is_ok());
    assert!(out.contains("Button logical state: 1"));
    assert!(out.contains("State invert: ON"));

    out.clear();
    assert!(execute("BUTTON PUP ON", &mut out).is_ok());
    out.clear();
    assert!(execute("BUTTON", &mut out).is_ok());
    assert!(out.contains("Pull-up resistor: ON"));

    out.clear();
    assert_eq!(execute("BUTTON INV", &mut out), Err(CmdError::MissingArg));
    assert!(out.contains("BUTTON: Usage: BUTTON INV [ON|OFF]"));

    out.clear();
    assert_eq!(execute("BUTTON PUP maybe", &mut out), Err(CmdError::InvalidValue));
    assert!(out.contains("BUTTON: Usage: BUTTON PUP [ON|OFF]"));

    out.clear();
    assert_eq!(execute("BUTTON FOO", &mut out), Err(CmdError::UnknownArg));
    assert!(out.contains("BUTTON: Unknown argument: FOO"));

    // Leave the shared state as we found it.
    out.clear();
    assert!(execute("BUTTON INV OFF", &mut out).is_ok());
    assert!(execute("BUTTON PUP OFF", &mut out).is_ok());
}

#[test]
fn test_reset_announces_restart() {
    let mut out = String::new();
    assert!(execute("RESET", &mut out).is_ok());
    assert!(out.contains("Resetting..."));
}
