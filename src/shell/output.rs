use core::fmt;

use heapless::String;

use super::OUTPUT_BUFFER_LEN;
use crate::console::{ConsoleIo, Error};

/// The interpreter's shared scratch buffer for command output.
///
/// One instance lives inside the [`Interpreter`](super::Interpreter) and is
/// lent to every handler it invokes, so consoles on several transports share
/// the same [`OUTPUT_BUFFER_LEN`] bytes instead of each carrying their own.
/// Because it is handed out as `&mut`, at most one dispatch can be writing
/// into it at any time.
///
/// Text is appended with `write!`. Output that does not fit is truncated at
/// a character boundary and the write reports [`fmt::Error`].
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// use libcli::shell::OutputBuffer;
///
/// let mut out = OutputBuffer::new();
/// write!(out, "free heap: {} bytes\r\n", 48_312).unwrap();
/// assert_eq!(out.as_str(), "free heap: 48312 bytes\r\n");
/// ```
#[derive(Debug, Default)]
pub struct OutputBuffer {
    text: String<OUTPUT_BUFFER_LEN>,
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// The buffered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The buffered text as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Fixed capacity in bytes.
    pub const fn capacity(&self) -> usize {
        OUTPUT_BUFFER_LEN
    }

    /// Bytes still free.
    pub fn remaining(&self) -> usize {
        OUTPUT_BUFFER_LEN - self.text.len()
    }

    /// Discard the buffered text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Write the buffered text to `io` in a single `write` and clear the
    /// buffer. Does nothing when the buffer is empty.
    ///
    /// The buffer is cleared even if the transport reports an error.
    pub fn flush_to<T: ConsoleIo + ?Sized>(&mut self, io: &mut T) -> Result<(), Error> {
        if self.text.is_empty() {
            return Ok(());
        }
        let result = io.write(self.text.as_bytes());
        self.text.clear();
        result
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.text.push_str(s).is_ok() {
            return Ok(());
        }

        let mut cut = self.remaining();
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        // `cut` bytes always fit
        let _ = self.text.push_str(&s[..cut]);
        Err(fmt::Error)
    }
}
