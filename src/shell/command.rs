use core::fmt;

use super::output::OutputBuffer;
use crate::console::ConsoleIo;

/// Function signature for command handlers.
///
/// Handlers receive the console the command was typed on, the shared output
/// buffer, the argument count and the argument vector. The command name is
/// *not* part of `argv`; `argc == argv.len()`.
///
/// Handlers return nothing. Results, including failures, are reported by
/// writing to the console or into the output buffer; whatever is left in the
/// buffer when the handler returns is written to the console.
///
/// The argument slices borrow the input line and are only valid for the
/// duration of the call.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// use libcli::console::ConsoleIo;
/// use libcli::shell::{CommandFn, OutputBuffer};
///
/// let echo: CommandFn = |_io, out, argc, argv| {
///     for (i, arg) in argv.iter().enumerate() {
///         let sep = if i + 1 < argc { " " } else { "\r\n" };
///         let _ = write!(out, "{}{}", arg, sep);
///     }
/// };
/// ```
pub type CommandFn =
    fn(io: &mut dyn ConsoleIo, out: &mut OutputBuffer, argc: usize, argv: &[&str]);

/// An entry in the command table.
///
/// Definitions are immutable and normally live in a `static`; the registry
/// only stores references to them. Identity is the command name.
///
/// # Examples
///
/// ```rust
/// use libcli::console::ConsoleIo;
/// use libcli::shell::{CommandDefinition, OutputBuffer};
///
/// fn uptime(io: &mut dyn ConsoleIo, _out: &mut OutputBuffer, _argc: usize, _argv: &[&str]) {
///     let _ = io.print("up 3 days\r\n");
/// }
///
/// static UPTIME: CommandDefinition = CommandDefinition::new(
///     "uptime",
///     "uptime:\r\n    Print the time since boot\r\n",
///     uptime,
/// );
/// ```
#[derive(Clone, Copy)]
pub struct CommandDefinition {
    /// The command name as typed by the user.
    ///
    /// Matched exactly and case-sensitively against the first token of the
    /// line. Conventionally lowercase; must not contain whitespace.
    pub name: &'static str,

    /// Usage text shown by the built-in `help`.
    ///
    /// Should start with the command itself and end with `"\r\n"`.
    pub help: &'static str,

    /// The function that implements the command.
    pub handler: CommandFn,
}

impl CommandDefinition {
    /// Build a definition, usable in `static` and `const` items.
    pub const fn new(name: &'static str, help: &'static str, handler: CommandFn) -> Self {
        Self {
            name,
            help,
            handler,
        }
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
