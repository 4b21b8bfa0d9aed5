use super::MAX_LINE_LEN;
use super::interpreter::{Interpreter, Outcome};
use crate::console::{ConsoleIo, Error};

/// Drives one console transport: read a line, dispatch it, print a prompt.
///
/// A session owns its transport and the line buffer the tokenizer works in.
/// Several sessions can feed one [`Interpreter`]; each `poll` borrows the
/// interpreter mutably, so their dispatches never overlap.
///
/// # Examples
///
/// ```rust
/// # use core::time::Duration;
/// use libcli::console::{ConsoleIo, Error};
/// use libcli::shell::{Interpreter, Outcome, Session};
///
/// # struct Uart { line: Option<&'static [u8]> }
/// # impl ConsoleIo for Uart {
/// #     fn read(&mut self, _: &mut [u8]) -> Result<usize, Error> { Ok(0) }
/// #     fn read_timeout(&mut self, _: &mut [u8], _: Duration) -> Result<usize, Error> { Ok(0) }
/// #     fn readline(&mut self, out: &mut [u8]) -> Result<Option<usize>, Error> {
/// #         Ok(self.line.take().map(|l| { out[..l.len()].copy_from_slice(l); l.len() }))
/// #     }
/// #     fn write(&mut self, _: &[u8]) -> Result<(), Error> { Ok(()) }
/// # }
/// let mut shell = Interpreter::new();
/// let mut session = Session::new(Uart { line: Some(b"help") });
///
/// session.start(&shell).unwrap();
/// assert_eq!(session.poll(&mut shell).unwrap(), Some(Outcome::Help));
/// assert_eq!(session.poll(&mut shell).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct Session<T: ConsoleIo> {
    io: T,
    line: [u8; MAX_LINE_LEN],
}

impl<T: ConsoleIo> Session<T> {
    /// Create a session on `io`.
    pub fn new(io: T) -> Self {
        Self {
            io,
            line: [0; MAX_LINE_LEN],
        }
    }

    /// The transport.
    pub fn io(&self) -> &T {
        &self.io
    }

    /// The transport, mutably.
    pub fn io_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Give the transport back.
    pub fn into_inner(self) -> T {
        self.io
    }

    /// Print the initial prompt.
    pub fn start(&mut self, shell: &Interpreter) -> Result<(), Error> {
        self.io.print(shell.config().prompt)
    }

    /// Dispatch at most one input line.
    ///
    /// Returns `Ok(None)` when the transport has no complete line yet.
    /// Otherwise the line is dispatched, the prompt printed again, and the
    /// dispatch outcome returned. Transport errors are passed to the caller,
    /// which decides whether to retry, reset the link or give up.
    pub fn poll(&mut self, shell: &mut Interpreter) -> Result<Option<Outcome>, Error> {
        let Some(len) = self.io.readline(&mut self.line)? else {
            return Ok(None);
        };
        let len = len.min(MAX_LINE_LEN);

        let outcome = shell.process_command(&mut self.io, &mut self.line[..len]);
        self.io.print(shell.config().prompt)?;
        Ok(Some(outcome))
    }

    /// Dispatch lines until the transport has none left.
    ///
    /// Returns how many lines were dispatched.
    pub fn run_until_idle(&mut self, shell: &mut Interpreter) -> Result<usize, Error> {
        let mut dispatched = 0;
        while self.poll(shell)?.is_some() {
            dispatched += 1;
        }
        Ok(dispatched)
    }
}
