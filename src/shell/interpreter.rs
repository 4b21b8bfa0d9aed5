use core::fmt::{self, Write};

use super::command::CommandDefinition;
use super::error::{MalformedInput, RegistrationError};
use super::output::OutputBuffer;
use super::registry::Registry;
use super::tokenizer::{QuotePolicy, tokenize};
use crate::console::ConsoleIo;

/// Name of the built-in command that lists registered commands.
pub const HELP_COMMAND: &str = "help";

/// Help text of the built-in `help` command.
pub const HELP_TEXT: &str =
    "help:\r\n    Lists all the registered commands\r\n    help <command>: Shows usage of one command\r\n\r\n";

/// Runtime options of an [`Interpreter`].
///
/// # Examples
///
/// ```rust
/// use libcli::shell::{Config, Interpreter, QuotePolicy};
///
/// let config = Config {
///     quote_policy: QuotePolicy::Reject,
///     ..Config::new()
/// };
/// let shell = Interpreter::with_config(config);
/// assert!(shell.config().help_command);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Provide the built-in `help` command (default: on).
    ///
    /// A registered command named `help` always takes precedence.
    pub help_command: bool,
    /// Answer `<command> -h` and `<command> --help` with the command's help
    /// text instead of invoking it (default: off).
    pub help_flag: bool,
    /// Handling of unterminated quotes (default: [`QuotePolicy::Lenient`]).
    pub quote_policy: QuotePolicy,
    /// Prompt printed by a [`Session`](super::Session) (default: `"> "`).
    pub prompt: &'static str,
}

impl Config {
    /// The default configuration, usable in `const` contexts.
    pub const fn new() -> Self {
        Self {
            help_command: true,
            help_flag: false,
            quote_policy: QuotePolicy::Lenient,
            prompt: "> ",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// What a call to [`Interpreter::process_command`] did.
///
/// Purely informational: every outcome has already been reported on the
/// console by the time it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The line held no tokens; nothing was written.
    Empty,
    /// A registered handler was invoked once.
    Executed,
    /// Help text was printed instead of invoking a handler.
    Help,
    /// No command matched the first token; a diagnostic was written.
    NoMatch,
    /// The line could not be tokenized; a diagnostic was written.
    Malformed(MalformedInput),
}

/// The command interpreter.
///
/// Owns the command [`Registry`] and the shared [`OutputBuffer`]. Each call
/// to [`process_command`](Self::process_command) runs one full
/// tokenize → lookup → invoke cycle synchronously on the caller's thread.
///
/// # Single flight
///
/// Dispatch takes `&mut self`, and handlers never receive the interpreter,
/// so a second dispatch cannot start while one is running. Callers that
/// drive several transports from different tasks must serialize access to
/// the interpreter themselves, for example by keeping it behind a mutex.
/// The interpreter never calls the transport's `lock`/`unlock`.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// # use core::time::Duration;
/// use libcli::console::{ConsoleIo, Error};
/// use libcli::shell::{CommandDefinition, Interpreter, OutputBuffer};
///
/// # struct Uart;
/// # impl ConsoleIo for Uart {
/// #     fn read(&mut self, _: &mut [u8]) -> Result<usize, Error> { Ok(0) }
/// #     fn read_timeout(&mut self, _: &mut [u8], _: Duration) -> Result<usize, Error> { Ok(0) }
/// #     fn readline(&mut self, _: &mut [u8]) -> Result<Option<usize>, Error> { Ok(None) }
/// #     fn write(&mut self, _: &[u8]) -> Result<(), Error> { Ok(()) }
/// # }
/// fn kill(_io: &mut dyn ConsoleIo, out: &mut OutputBuffer, argc: usize, argv: &[&str]) {
///     if argc != 1 {
///         let _ = out.write_str("usage: kill <pid>\r\n");
///         return;
///     }
///     let _ = write!(out, "killed {}\r\n", argv[0]);
/// }
///
/// static KILL: CommandDefinition =
///     CommandDefinition::new("kill", "kill <pid>:\r\n    Stop a task\r\n", kill);
///
/// let mut shell = Interpreter::new();
/// shell.register(&KILL).unwrap();
///
/// let mut uart = Uart;
/// let mut line = *b"kill 7\r\n";
/// shell.process_command(&mut uart, &mut line);
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    registry: Registry,
    output: OutputBuffer,
    config: Config,
}

impl Interpreter {
    /// Create an interpreter with the default [`Config`] and no commands.
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Create an interpreter with the given configuration.
    pub const fn with_config(config: Config) -> Self {
        Self {
            registry: Registry::new(),
            output: OutputBuffer::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enable or disable the built-in `help` command.
    pub fn set_help_command(&mut self, enabled: bool) {
        self.config.help_command = enabled;
    }

    /// Enable or disable `-h`/`--help` handling for registered commands.
    pub fn set_help_flag(&mut self, enabled: bool) {
        self.config.help_flag = enabled;
    }

    /// Choose how unterminated quotes are handled.
    pub fn set_quote_policy(&mut self, policy: QuotePolicy) {
        self.config.quote_policy = policy;
    }

    /// Set the prompt printed by sessions.
    pub fn set_prompt(&mut self, prompt: &'static str) {
        self.config.prompt = prompt;
    }

    /// Register one command. See [`Registry::register`] for failure cases.
    pub fn register(
        &mut self,
        definition: &'static CommandDefinition,
    ) -> Result<(), RegistrationError> {
        match self.registry.register(definition) {
            Ok(()) => {
                info!("registered command {=str}", definition.name);
                Ok(())
            }
            Err(err) => {
                warn!("rejected command {=str}: {}", definition.name, err);
                Err(err)
            }
        }
    }

    /// Register a whole command table.
    ///
    /// All or nothing: if any entry is refused, none of the table is added
    /// and the error for the first refused entry is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::console::ConsoleIo;
    /// use libcli::shell::{CommandDefinition, Interpreter, OutputBuffer};
    ///
    /// fn ps(_: &mut dyn ConsoleIo, _: &mut OutputBuffer, _: usize, _: &[&str]) {}
    /// fn reset(_: &mut dyn ConsoleIo, _: &mut OutputBuffer, _: usize, _: &[&str]) {}
    ///
    /// static COMMANDS: [CommandDefinition; 2] = [
    ///     CommandDefinition::new("ps", "ps:\r\n    List tasks\r\n", ps),
    ///     CommandDefinition::new("reset", "reset:\r\n    Reboot\r\n", reset),
    /// ];
    ///
    /// let mut shell = Interpreter::new();
    /// shell.register_all(&COMMANDS).unwrap();
    /// assert_eq!(shell.registry().len(), 2);
    /// ```
    pub fn register_all(
        &mut self,
        definitions: &'static [CommandDefinition],
    ) -> Result<(), RegistrationError> {
        let mut staged = self.registry.clone();
        for definition in definitions {
            if let Err(err) = staged.register(definition) {
                warn!("rejected command table at {=str}: {}", definition.name, err);
                return Err(err);
            }
        }
        info!("registered {=usize} commands", definitions.len());
        self.registry = staged;
        Ok(())
    }

    /// The command table.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The shared output buffer.
    ///
    /// The interpreter only sends what a handler leaves behind. Text written
    /// here between dispatches must be sent with [`OutputBuffer::flush_to`];
    /// anything still pending when the next dispatch starts is discarded.
    pub fn output_buffer(&mut self) -> &mut OutputBuffer {
        &mut self.output
    }

    /// Tokenize `line`, look up its command and invoke the handler.
    ///
    /// The line buffer is modified in place. Diagnostics for unknown commands
    /// and malformed lines are written to `io`; an empty line is ignored.
    /// Whatever the handler leaves in the output buffer is written to `io`
    /// after it returns.
    ///
    /// The returned [`Outcome`] is informational and may be ignored; every
    /// result has already been reported on `io`.
    pub fn process_command(&mut self, io: &mut dyn ConsoleIo, line: &mut [u8]) -> Outcome {
        debug!("dispatching {=usize} byte line", line.len());

        let tokens = match tokenize(line, self.config.quote_policy) {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!("malformed command line: {}", err);
                self.report(io, format_args!("Malformed command: {}.\r\n", err));
                return Outcome::Malformed(err);
            }
        };

        let Some(name) = tokens.command() else {
            return Outcome::Empty;
        };
        let args = tokens.args();

        if let Some(definition) = self.registry.lookup(name) {
            if self.config.help_flag && matches!(args, ["-h"] | ["--help"]) {
                print_help(io, definition.help);
                return Outcome::Help;
            }

            trace!("invoking {=str} with {=usize} args", name, args.len());
            self.output.clear();
            (definition.handler)(io, &mut self.output, args.len(), args);
            if let Err(err) = self.output.flush_to(io) {
                error!("console write failed: {}", err);
            }
            return Outcome::Executed;
        }

        if self.config.help_command && name == HELP_COMMAND {
            self.help(io, args);
            return Outcome::Help;
        }

        warn!("unknown command {=str}", name);
        self.report_unknown(io, name);
        Outcome::NoMatch
    }

    fn help(&mut self, io: &mut dyn ConsoleIo, args: &[&str]) {
        match args.first() {
            None => {
                print_help(io, HELP_TEXT);
                for definition in self.registry.list() {
                    print_help(io, definition.help);
                }
            }
            Some(&HELP_COMMAND) => print_help(io, HELP_TEXT),
            Some(name) => match self.registry.lookup(name) {
                Some(definition) => print_help(io, definition.help),
                None => self.report_unknown(io, name),
            },
        }
    }

    fn report_unknown(&mut self, io: &mut dyn ConsoleIo, name: &str) {
        if self.config.help_command {
            self.report(
                io,
                format_args!(
                    "Command not recognized: '{}'. Enter '{}' to view a list of available commands.\r\n",
                    name, HELP_COMMAND
                ),
            );
        } else {
            self.report(io, format_args!("Command not recognized: '{}'.\r\n", name));
        }
    }

    /// Format a diagnostic into the output buffer and send it as one write.
    fn report(&mut self, io: &mut dyn ConsoleIo, message: fmt::Arguments<'_>) {
        self.output.clear();
        if self.output.write_fmt(message).is_err() {
            warn!("diagnostic truncated");
        }
        if let Err(err) = self.output.flush_to(io) {
            error!("console write failed: {}", err);
        }
    }
}

fn print_help(io: &mut dyn ConsoleIo, text: &str) {
    let mut result = io.print(text);
    if result.is_ok() && !text.ends_with('\n') {
        result = io.print("\r\n");
    }
    if let Err(err) = result {
        error!("console write failed: {}", err);
    }
}
