//! # esp-serial-shell
//!
//! Interactive UART command shell for peripheral bring-up.
//!
//! ## Architecture
//!
//! A single cooperative loop drives everything. The UART receive interrupt
//! pushes bytes into [`RxRing`]; the loop drains them through the line
//! editor, dispatches completed lines against the [`Registry`], and flushes
//! deferred diagnostics. The ring's two cursors are the only state shared
//! across the interrupt/loop boundary.
//!
//! Zero heap allocation: every buffer is a fixed-size static.

#![cfg_attr(not(test), no_std)]

pub mod commands;
pub mod config;
pub mod diag;
pub mod ring;
pub mod shell;

pub use commands::REGISTRY;
pub use diag::{DiagLevel, DiagRing};
pub use ring::RxRing;
pub use shell::{Args, CmdError, Command, LineBuffer, LineEvent, Registry, Shell};
