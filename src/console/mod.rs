//! Console transport abstraction for the command interpreter.
//!
//! A console is any byte-oriented medium an operator can type commands into:
//! a UART, a USB CDC endpoint, a semihosting channel, a telnet-style socket.
//! The interpreter never talks to hardware directly; it only sees the
//! [`ConsoleIo`] capability set defined here, passed by reference into every
//! dispatch and every command handler.
//!
//! # Capability contract
//!
//! | Operation        | Returns                                               |
//! |------------------|-------------------------------------------------------|
//! | `read`           | bytes read, `Ok(0)` when nothing is available          |
//! | `read_timeout`   | bytes read, `Ok(0)` when the timeout expired           |
//! | `readline`       | `Some(len)` for a complete line, `None` if none yet    |
//! | `write`          | transmits every byte, embedded NULs included           |
//! | `print`          | transmits a string, length taken from the string       |
//! | `lock`/`unlock`  | the transport's own exclusive-access section           |
//!
//! Transport failures are reported as [`Error`]. A driver that speaks C-style
//! return codes can convert them with [`from_code`].
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use libcli::console::{ConsoleIo, Error, LineEditor};
//!
//! struct Loopback {
//!     rx: &'static [u8],
//!     editor: LineEditor,
//! }
//!
//! impl ConsoleIo for Loopback {
//!     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
//!         let n = buf.len().min(self.rx.len());
//!         buf[..n].copy_from_slice(&self.rx[..n]);
//!         self.rx = &self.rx[n..];
//!         Ok(n)
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
//!         Ok(())
//!     }
//! }
//! ```

#![deny(unsafe_code)]

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::time::Duration;

/// Common error types for console transports
pub mod error;

/// Character-at-a-time line editing on top of [`ConsoleIo::read`].
pub mod line;

pub use error::{Error, from_code};
pub use line::LineEditor;

/// The capability set a console transport exposes to the interpreter.
///
/// Implemented once per physical transport and handed to the interpreter as
/// `&mut dyn ConsoleIo`. Nothing here is assumed to be thread-safe beyond
/// what [`lock`](ConsoleIo::lock) and [`unlock`](ConsoleIo::unlock) provide.
pub trait ConsoleIo {
    /// Read whatever input is available into `buf`.
    ///
    /// May block or return immediately at the transport's discretion.
    /// `Ok(0)` means no data right now and is not an error.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error>;

    /// Read into `buf`, waiting at most `timeout` for the first byte.
    ///
    /// An expired timeout returns `Ok(0)`, never an error.
    fn read_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, Error>;

    /// Fill `line` with one complete input line, without its terminator.
    ///
    /// What counts as complete is the transport's choice (typically CR or LF).
    /// Returns `Ok(None)` when no complete line is available yet.
    fn readline(&mut self, line: &mut [u8]) -> Result<Option<usize>, Error>;

    /// Transmit exactly `bytes`, including embedded zero bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Transmit a string.
    fn print(&mut self, text: &str) -> Result<(), Error> {
        self.write(text.as_bytes())
    }

    /// Enter the transport's exclusive-access section.
    fn lock(&mut self) {}

    /// Leave the transport's exclusive-access section.
    fn unlock(&mut self) {}
}

impl<T: ConsoleIo + ?Sized> ConsoleIo for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        (**self).read(buf)
    }

    fn read_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, Error> {
        (**self).read_timeout(buf, timeout)
    }

    fn readline(&mut self, line: &mut [u8]) -> Result<Option<usize>, Error> {
        (**self).readline(line)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        (**self).write(bytes)
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        (**self).print(text)
    }

    fn lock(&mut self) {
        (**self).lock()
    }

    fn unlock(&mut self) {
        (**self).unlock()
    }
}

/// Lets handlers use `write!` directly on the console they were given.
impl fmt::Write for dyn ConsoleIo + '_ {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}

/// Scoped hold on a transport's [`lock`](ConsoleIo::lock).
///
/// The lock is released when the guard is dropped. The guard dereferences to
/// the transport so output can be written while it is held.
///
/// ```rust
/// # use core::time::Duration;
/// # use libcli::console::{ConsoleIo, Error, LockGuard};
/// # struct Uart;
/// # impl ConsoleIo for Uart {
/// #     fn read(&mut self, _: &mut [u8]) -> Result<usize, Error> { Ok(0) }
/// #     fn read_timeout(&mut self, _: &mut [u8], _: Duration) -> Result<usize, Error> { Ok(0) }
/// #     fn readline(&mut self, _: &mut [u8]) -> Result<Option<usize>, Error> { Ok(None) }
/// #     fn write(&mut self, _: &[u8]) -> Result<(), Error> { Ok(()) }
/// # }
/// let mut uart = Uart;
/// {
///     let mut console = LockGuard::new(&mut uart);
///     console.print("line one\r\n").unwrap();
///     console.print("line two\r\n").unwrap();
/// } // unlocked here
/// ```
#[derive(Debug)]
pub struct LockGuard<'a, T: ConsoleIo + ?Sized> {
    io: &'a mut T,
}

impl<'a, T: ConsoleIo + ?Sized> LockGuard<'a, T> {
    /// Lock `io` and return a guard that unlocks it on drop.
    pub fn new(io: &'a mut T) -> Self {
        io.lock();
        Self { io }
    }
}

impl<T: ConsoleIo + ?Sized> Deref for LockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.io
    }
}

impl<T: ConsoleIo + ?Sized> DerefMut for LockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.io
    }
}

impl<T: ConsoleIo + ?Sized> Drop for LockGuard<'_, T> {
    fn drop(&mut self) {
        self.io.unlock();
    }
}
