//! Error types for the command interpreter

use core::fmt;

/// Reasons a command definition can be refused by the registry.
///
/// A failed registration never modifies the registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegistrationError {
    /// The fixed-capacity command table is full.
    RegistryFull,
    /// A command with the same name is already registered.
    DuplicateName,
    /// The name is empty, too long, or contains whitespace or quotes.
    InvalidName,
}

/// Reasons a command line cannot be tokenized.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MalformedInput {
    /// A double-quoted argument was never closed.
    UnterminatedQuote,
    /// The line holds more arguments than the argument vector can store.
    TooManyArguments,
    /// A token is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationError::RegistryFull => "command table full",
            RegistrationError::DuplicateName => "command already registered",
            RegistrationError::InvalidName => "invalid command name",
        })
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedInput::UnterminatedQuote => "unterminated quote",
            MalformedInput::TooManyArguments => "too many arguments",
            MalformedInput::InvalidUtf8 => "invalid character encoding",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistrationError {}

#[cfg(feature = "std")]
impl std::error::Error for MalformedInput {}

#[cfg(feature = "defmt")]
impl defmt::Format for RegistrationError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RegistrationError::RegistryFull => defmt::write!(f, "RegistryFull"),
            RegistrationError::DuplicateName => defmt::write!(f, "DuplicateName"),
            RegistrationError::InvalidName => defmt::write!(f, "InvalidName"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MalformedInput {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MalformedInput::UnterminatedQuote => defmt::write!(f, "UnterminatedQuote"),
            MalformedInput::TooManyArguments => defmt::write!(f, "TooManyArguments"),
            MalformedInput::InvalidUtf8 => defmt::write!(f, "InvalidUtf8"),
        }
    }
}
