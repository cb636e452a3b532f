//! esp-serial-shell - Firmware entry point
//!
//! Brings up the console UART, initializes every registered command in
//! registry order, then runs the cooperative shell loop: re-render the
//! prompt, suspend until the receive interrupt delivers input, drain it
//! through the shell, flush deferred diagnostics.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys as esp_idf_sys;

#[cfg(target_os = "espidf")]
use esp_serial_shell::{
    commands::REGISTRY,
    config::CONSOLE_BAUD,
    diag::{self, DiagRing},
    ring::RxRing,
    shell::Shell,
};

/// Console port.
#[cfg(target_os = "espidf")]
const UART: esp_idf_sys::uart_port_t = 0;

// The receive ring is the one object shared with interrupt context; the
// diagnostics ring is drained only here in the loop.
#[cfg(target_os = "espidf")]
static RX_RING: RxRing = RxRing::new();
#[cfg(target_os = "espidf")]
static DIAG: DiagRing = DiagRing::new();

/// Serial output channel handed to the shell and every command.
#[cfg(target_os = "espidf")]
struct UartOut;

#[cfg(target_os = "espidf")]
impl core::fmt::Write for UartOut {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // SAFETY: driver installed before the loop starts; blocking TX.
        unsafe {
            esp_idf_sys::uart_write_bytes(
                UART,
                s.as_ptr() as *const core::ffi::c_void,
                s.len() as _,
            );
        }
        Ok(())
    }
}

/// Move every byte the RX interrupt has buffered into the ring.
#[cfg(target_os = "espidf")]
fn pump_rx() {
    let mut byte = 0u8;
    loop {
        // SAFETY: single-byte read with zero timeout never blocks.
        let n = unsafe {
            esp_idf_sys::uart_read_bytes(
                UART,
                &mut byte as *mut u8 as *mut core::ffi::c_void,
                1,
                0,
            )
        };
        if n <= 0 {
            break;
        }
        RX_RING.push(byte);
    }
}

#[cfg(target_os = "espidf")]
#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    // SAFETY: one-time UART bring-up before anything touches the port.
    unsafe {
        let config = esp_idf_sys::uart_config_t {
            baud_rate: CONSOLE_BAUD as i32,
            data_bits: esp_idf_sys::uart_word_length_t_UART_DATA_8_BITS,
            parity: esp_idf_sys::uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: esp_idf_sys::uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: esp_idf_sys::uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };
        esp_idf_sys::uart_param_config(UART, &config);
        esp_idf_sys::uart_driver_install(UART, 256, 0, 0, core::ptr::null_mut(), 0);
    }

    // Every command gets its one-time peripheral setup, in registry order,
    // before the loop starts.
    REGISTRY.init_all();

    let mut out = UartOut;
    let mut shell = Shell::new(&RX_RING, &REGISTRY, &DIAG);
    shell.print_banner(&mut out);

    loop {
        shell.prompt(&mut out);

        // Suspend until the receive interrupt delivers at least one byte,
        // then take whatever arrived with it.
        let mut byte = 0u8;
        // SAFETY: blocking single-byte read; woken by the RX interrupt.
        let n = unsafe {
            esp_idf_sys::uart_read_bytes(
                UART,
                &mut byte as *mut u8 as *mut core::ffi::c_void,
                1,
                esp_idf_sys::portMAX_DELAY,
            )
        };
        if n > 0 {
            RX_RING.push(byte);
        }
        pump_rx();

        shell.service(&mut out);

        while let Some(entry) = DIAG.drain() {
            diag::write_entry(&mut out, &entry);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("esp-serial-shell: firmware image; build for the espidf target");
}
