use heapless::Vec;

use super::command::CommandDefinition;
use super::error::RegistrationError;
use super::{MAX_COMMAND_NAME_LEN, MAX_COMMANDS};

/// The ordered command table.
///
/// Holds references to [`CommandDefinition`]s in registration order. Built
/// once at startup through [`register`](Registry::register) and read-only
/// afterwards, so lookups need no locking.
///
/// Duplicate names are refused: a name identifies exactly one command.
///
/// # Examples
///
/// ```rust
/// use libcli::console::ConsoleIo;
/// use libcli::shell::{CommandDefinition, OutputBuffer, Registry};
///
/// fn reset(_: &mut dyn ConsoleIo, _: &mut OutputBuffer, _: usize, _: &[&str]) {}
///
/// static RESET: CommandDefinition = CommandDefinition::new("reset", "reset:\r\n", reset);
///
/// let mut registry = Registry::new();
/// registry.register(&RESET).unwrap();
/// assert!(registry.lookup("reset").is_some());
/// assert!(registry.lookup("Reset").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<&'static CommandDefinition, MAX_COMMANDS>,
}

impl Registry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command definition to the end of the table.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command registered
    /// * [`RegistrationError::InvalidName`] - Name empty, longer than
    ///   [`MAX_COMMAND_NAME_LEN`], or containing whitespace or `"`
    /// * [`RegistrationError::DuplicateName`] - Name already registered
    /// * [`RegistrationError::RegistryFull`] - All [`MAX_COMMANDS`] slots used
    pub fn register(
        &mut self,
        definition: &'static CommandDefinition,
    ) -> Result<(), RegistrationError> {
        if !is_valid_name(definition.name) {
            return Err(RegistrationError::InvalidName);
        }

        if self.lookup(definition.name).is_some() {
            return Err(RegistrationError::DuplicateName);
        }

        self.commands
            .push(definition)
            .map_err(|_| RegistrationError::RegistryFull)
    }

    /// Find the command whose name equals `name` exactly.
    pub fn lookup(&self, name: &str) -> Option<&'static CommandDefinition> {
        self.commands.iter().copied().find(|cmd| cmd.name == name)
    }

    /// Iterate over all commands in registration order.
    ///
    /// Each call starts a fresh pass over the table.
    pub fn list(&self) -> impl Iterator<Item = &'static CommandDefinition> + '_ {
        self.commands.iter().copied()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total number of commands the table can hold.
    pub const fn capacity(&self) -> usize {
        MAX_COMMANDS
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_COMMAND_NAME_LEN
        && !name.chars().any(|c| c.is_whitespace() || c == '"')
}
