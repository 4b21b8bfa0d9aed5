//! Command interpreter core for embedded diagnostic consoles.
//!
//! This module turns a raw line typed on a console into a call of a
//! registered command handler. It is designed for `no_std` firmware: every
//! buffer has a fixed capacity and nothing is allocated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Session       │───▶│   Tokenizer     │───▶│   Registry      │
//! │   (readline on  │    │   (in place,    │    │   (exact name   │
//! │   a ConsoleIo)  │    │   quote aware)  │    │   lookup)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                                        │
//!                                                        ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Console       │◀───│   Output        │◀───│   Handler       │
//! │   (write/print) │    │   Buffer        │    │   (io, argc,    │
//! │                 │    │   (shared)      │    │   argv)         │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! One dispatch is `Idle → Tokenizing → Lookup → {Dispatching | NoMatch | Empty} → Idle`,
//! strictly in that order and fully synchronous.
//!
//! # Usage
//!
//! ```rust
//! use core::fmt::Write;
//! # use core::time::Duration;
//! use libcli::console::{ConsoleIo, Error};
//! use libcli::shell::{CommandDefinition, Interpreter, OutputBuffer, Outcome};
//!
//! # struct Uart;
//! # impl ConsoleIo for Uart {
//! #     fn read(&mut self, _: &mut [u8]) -> Result<usize, Error> { Ok(0) }
//! #     fn read_timeout(&mut self, _: &mut [u8], _: Duration) -> Result<usize, Error> { Ok(0) }
//! #     fn readline(&mut self, _: &mut [u8]) -> Result<Option<usize>, Error> { Ok(None) }
//! #     fn write(&mut self, _: &[u8]) -> Result<(), Error> { Ok(()) }
//! # }
//! fn heapstat(_io: &mut dyn ConsoleIo, out: &mut OutputBuffer, _argc: usize, _argv: &[&str]) {
//!     let _ = write!(out, "free: {} bytes\r\n", 20_480);
//! }
//!
//! static HEAPSTAT: CommandDefinition =
//!     CommandDefinition::new("heapstat", "heapstat:\r\n    Show heap usage\r\n", heapstat);
//!
//! let mut shell = Interpreter::new();
//! shell.register(&HEAPSTAT).unwrap();
//!
//! let mut uart = Uart;
//! let mut line = *b"heapstat\r\n";
//! assert_eq!(shell.process_command(&mut uart, &mut line), Outcome::Executed);
//!
//! let mut line = *b"   \r\n";
//! assert_eq!(shell.process_command(&mut uart, &mut line), Outcome::Empty);
//! ```

#![deny(unsafe_code)]

mod command;
/// Error types for the command interpreter
pub mod error;
mod interpreter;
mod output;
mod registry;
mod session;
pub mod tokenizer;

pub use command::{CommandDefinition, CommandFn};
pub use error::{MalformedInput, RegistrationError};
pub use interpreter::{Config, HELP_COMMAND, HELP_TEXT, Interpreter, Outcome};
pub use output::OutputBuffer;
pub use registry::Registry;
pub use session::Session;
pub use tokenizer::{QuotePolicy, Tokens, tokenize};

/// Maximum length of one command line, terminator excluded.
pub const MAX_LINE_LEN: usize = 256;

/// Maximum number of arguments after the command name.
pub const MAX_ARGS: usize = 16;

/// Maximum number of commands in the registry.
pub const MAX_COMMANDS: usize = 32;

/// Maximum length of a command name.
pub const MAX_COMMAND_NAME_LEN: usize = 32;

/// Capacity of the shared output buffer in bytes.
pub const OUTPUT_BUFFER_LEN: usize = 1024;
