//! Common error types for console transports

use core::fmt;

/// A common error type for console transport operations.
///
/// This is the typed form of the negative return codes a transport driver
/// reports. A read that finds no data is *not* an error: it returns `Ok(0)`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation.
    WriteError,
    /// The underlying stream has ended and will deliver no more data.
    Disconnected,
    /// An input line exceeded the line buffer before it was terminated.
    LineTooLong,
    /// A driver-specific negative error code.
    Code(i32),
}

impl Error {
    /// The negative return code a C-style driver would report for this error.
    pub fn code(&self) -> i32 {
        match self {
            Error::ReadError => -1,
            Error::WriteError => -2,
            Error::Disconnected => -3,
            Error::LineTooLong => -4,
            Error::Code(code) => *code,
        }
    }
}

/// Convert a C-style transport return value into a `Result`.
///
/// Zero and positive values are byte counts (`0` meaning "nothing available
/// right now"), negative values are errors. The well-known codes produced by
/// [`Error::code`] map back to their named variants.
///
/// # Examples
///
/// ```rust
/// use libcli::console::{from_code, Error};
///
/// assert_eq!(from_code(12), Ok(12));
/// assert_eq!(from_code(0), Ok(0));
/// assert_eq!(from_code(-3), Err(Error::Disconnected));
/// assert_eq!(from_code(-110), Err(Error::Code(-110)));
/// ```
pub fn from_code(code: i32) -> Result<usize, Error> {
    match code {
        n if n >= 0 => Ok(n as usize),
        -1 => Err(Error::ReadError),
        -2 => Err(Error::WriteError),
        -3 => Err(Error::Disconnected),
        -4 => Err(Error::LineTooLong),
        n => Err(Error::Code(n)),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReadError => f.write_str("console read failed"),
            Error::WriteError => f.write_str("console write failed"),
            Error::Disconnected => f.write_str("console disconnected"),
            Error::LineTooLong => f.write_str("input line too long"),
            Error::Code(code) => write!(f, "console error code {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::Disconnected => defmt::write!(f, "Disconnected"),
            Error::LineTooLong => defmt::write!(f, "LineTooLong"),
            Error::Code(code) => defmt::write!(f, "Code({=i32})", code),
        }
    }
}
