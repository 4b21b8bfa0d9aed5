//! # libcli - Embedded console command interpreter
//!
//! The command-line core of an embedded device's diagnostic console. A raw
//! line arriving on any console transport is tokenized in place, matched
//! against a table of registered commands, and handed to the matching
//! command's handler together with the transport it came from.
//!
//! ## Features
//!
//! ### Console Transports
//! - **Capability trait**: one [`console::ConsoleIo`] implementation per
//!   UART, USB or network console
//! - **Line editing**: echo and backspace handling for byte-oriented links
//! - **Typed errors**: C-style negative return codes mapped to [`console::Error`]
//!
//! ### Interpreter
//! - **Command Registry**: fixed-capacity, registration-ordered, exact lookup
//! - **Tokenizer**: zero-copy, quote and escape aware
//! - **Dispatcher**: diagnostics for unknown and malformed commands, built-in `help`
//! - **Shared Output Buffer**: one scratch buffer for every console
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Wiring a UART console
//!
//! ```rust,no_run
//! use core::time::Duration;
//! use libcli::console::{ConsoleIo, Error, LineEditor};
//! use libcli::shell::{CommandDefinition, Interpreter, OutputBuffer, Session};
//!
//! struct Uart {
//!     editor: LineEditor,
//! }
//!
//! impl ConsoleIo for Uart {
//!     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Error> {
//!         // Pull bytes from the RX FIFO
//!         Ok(0)
//!     }
//!
//!     fn read_timeout(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize, Error> {
//!         self.read(buf)
//!     }
//!
//!     fn readline(&mut self, line: &mut [u8]) -> Result<Option<usize>, Error> {
//!         let mut editor = core::mem::take(&mut self.editor);
//!         let result = editor.poll_line(self, line);
//!         self.editor = editor;
//!         result
//!     }
//!
//!     fn write(&mut self, _bytes: &[u8]) -> Result<(), Error> {
//!         // Push bytes into the TX FIFO
//!         Ok(())
//!     }
//! }
//!
//! fn uptime(io: &mut dyn ConsoleIo, _out: &mut OutputBuffer, _argc: usize, _argv: &[&str]) {
//!     let _ = io.print("up 42 s\r\n");
//! }
//!
//! static UPTIME: CommandDefinition =
//!     CommandDefinition::new("uptime", "uptime:\r\n    Time since boot\r\n", uptime);
//!
//! let mut shell = Interpreter::new();
//! shell.register(&UPTIME).unwrap();
//!
//! let mut session = Session::new(Uart { editor: LineEditor::new() });
//! session.start(&shell).unwrap();
//! loop {
//!     session.run_until_idle(&mut shell).unwrap();
//! }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Implement `std::error::Error` for the error types (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Console transport abstraction.
///
/// Defines the capability set a physical console must provide, the transport
/// error type, and line-editing helpers for byte-oriented links.
pub mod console;

/// Command interpreter core.
///
/// Contains the command registry, the tokenizer, the dispatcher, the shared
/// output buffer and the per-transport session driver.
pub mod shell;
