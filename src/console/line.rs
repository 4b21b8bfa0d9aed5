use heapless::Vec;

use super::{ConsoleIo, Error};
use crate::shell::MAX_LINE_LEN;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;

/// Accumulates raw console bytes into complete command lines.
///
/// Transports whose hardware only offers byte reads can implement
/// [`ConsoleIo::readline`] by owning a `LineEditor` and calling
/// [`poll_line`](LineEditor::poll_line) from it.
///
/// # Character Handling
///
/// - **CR/LF**: completes the current line; an LF right after a CR belongs
///   to the same terminator
/// - **Backspace/Delete**: removes the last character (a whole UTF-8
///   sequence), echoing `"\x08 \x08"`
/// - **Printable ASCII and bytes >= 0x80**: appended to the line, echoed when
///   echo is enabled. Malformed UTF-8 is left for the tokenizer to reject
/// - **Anything else**: ignored
///
/// A line that overflows is reported once as [`Error::LineTooLong`]; the
/// rest of it, up to and including its terminator, is dropped.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: Vec<u8, MAX_LINE_LEN>,
    echo_disabled: bool,
    discarding: bool,
    after_cr: bool,
}

impl LineEditor {
    /// Create an empty editor with echo enabled.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            echo_disabled: false,
            discarding: false,
            after_cr: false,
        }
    }

    /// Enable or disable echoing typed characters back to the console.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_disabled = !enabled;
    }

    /// The partial line typed so far.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether the editor is dropping the remainder of an overlong line.
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }

    /// Discard the partial line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Process one input byte.
    ///
    /// Returns `Ok(true)` when `byte` terminated a line; the line is then
    /// available through [`take_line`](Self::take_line). A byte that does
    /// not fit discards the partial line, reports [`Error::LineTooLong`] and
    /// makes the editor drop input until the next terminator.
    pub fn feed<T: ConsoleIo + ?Sized>(&mut self, io: &mut T, byte: u8) -> Result<bool, Error> {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == ASCII_CR);
        if after_cr && byte == ASCII_LF {
            return Ok(false);
        }

        if self.discarding {
            if matches!(byte, ASCII_CR | ASCII_LF) {
                trace!("overlong line dropped");
                self.discarding = false;
            }
            return Ok(false);
        }

        match byte {
            ASCII_CR | ASCII_LF => {
                if !self.echo_disabled {
                    io.write(&[byte])?;
                }
                Ok(true)
            }
            ASCII_BACKSPACE | ASCII_DEL => {
                if self.pop_char() && !self.echo_disabled {
                    io.print("\x08 \x08")?;
                }
                Ok(false)
            }
            0x20..=0x7E | 0x80..=0xFF => {
                if self.buffer.push(byte).is_err() {
                    warn!("console line longer than {=usize} bytes", MAX_LINE_LEN);
                    self.buffer.clear();
                    self.discarding = true;
                    return Err(Error::LineTooLong);
                }
                if !self.echo_disabled {
                    io.write(&[byte])?;
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Remove the last character, including all bytes of a UTF-8 sequence.
    fn pop_char(&mut self) -> bool {
        let Some(mut byte) = self.buffer.pop() else {
            return false;
        };
        // continuation bytes are 0b10xx_xxxx
        while byte & 0xC0 == 0x80 {
            match self.buffer.pop() {
                Some(prev) => byte = prev,
                None => break,
            }
        }
        true
    }

    /// Move the accumulated line into `out` and reset the editor.
    ///
    /// Fails with [`Error::LineTooLong`] if `out` cannot hold the line; the
    /// line is discarded either way.
    pub fn take_line(&mut self, out: &mut [u8]) -> Result<usize, Error> {
        let len = self.buffer.len();
        let result = match out.get_mut(..len) {
            Some(dst) => {
                dst.copy_from_slice(&self.buffer);
                Ok(len)
            }
            None => Err(Error::LineTooLong),
        };
        self.buffer.clear();
        result
    }

    /// Drain available input from `io` until a line completes.
    ///
    /// Reads one byte at a time so no input past the terminator is consumed.
    /// Returns `Ok(Some(len))` with the line copied into `out`, or `Ok(None)`
    /// once `read` reports no more data; the partial line is kept for the
    /// next call.
    pub fn poll_line<T: ConsoleIo + ?Sized>(
        &mut self,
        io: &mut T,
        out: &mut [u8],
    ) -> Result<Option<usize>, Error> {
        let mut byte = [0u8; 1];
        loop {
            if io.read(&mut byte)? == 0 {
                return Ok(None);
            }
            if self.feed(io, byte[0])? {
                return self.take_line(out).map(Some);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    struct Script {
        rx: &'static [u8],
        tx: Vec<u8, 512>,
    }

    impl Script {
        fn new(rx: &'static [u8]) -> Self {
            Self { rx, tx: Vec::new() }
        }
    }

    impl ConsoleIo for Script {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
            let n = buf.len().min(self.rx.len());
            buf[..n].copy_from_slice(&self.rx[..n]);
            self.rx = &self.rx[n..];
            Ok(n)
        }

        fn read_timeout(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize, Error> {
            self.read(buf)
        }

        fn readline(&mut self, _line: &mut [u8]) -> Result<Option<usize>, Error> {
            Ok(None)
        }

        fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
            self.tx.extend_from_slice(bytes).map_err(|_| Error::WriteError)
        }
    }

    #[test]
    fn completes_line_on_carriage_return() {
        let mut io = Script::new(b"ps\rnext");
        let mut editor = LineEditor::new();
        let mut out = [0u8; MAX_LINE_LEN];

        let len = editor.poll_line(&mut io, &mut out).unwrap();
        assert_eq!(len, Some(2));
        assert_eq!(&out[..2], b"ps");
        assert_eq!(&io.tx[..], b"ps\r");
        assert_eq!(io.rx, b"next");
    }

    #[test]
    fn partial_line_survives_until_terminator() {
        let mut io = Script::new(b"upt");
        let mut editor = LineEditor::new();
        let mut out = [0u8; MAX_LINE_LEN];

        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), None);
        assert_eq!(editor.pending(), b"upt");

        io.rx = b"ime\n";
        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), Some(6));
        assert_eq!(&out[..6], b"uptime");
        assert!(editor.pending().is_empty());
    }

    #[test]
    fn backspace_edits_and_echoes() {
        let mut io = Script::new(b"helo\x08\x08lo\r");
        let mut editor = LineEditor::new();
        let mut out = [0u8; MAX_LINE_LEN];

        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), Some(4));
        assert_eq!(&out[..4], b"helo");
        let echoed = core::str::from_utf8(&io.tx).unwrap();
        assert!(echoed.contains("\x08 \x08"));
    }

    #[test]
    fn backspace_on_empty_line_is_silent() {
        let mut io = Script::new(&[ASCII_DEL, ASCII_BACKSPACE]);
        let mut editor = LineEditor::new();
        let mut out = [0u8; 8];

        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), None);
        assert!(io.tx.is_empty());
    }

    #[test]
    fn echo_can_be_disabled() {
        let mut io = Script::new(b"reset\r");
        let mut editor = LineEditor::new();
        editor.set_echo(false);
        let mut out = [0u8; 8];

        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), Some(5));
        assert!(io.tx.is_empty());
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut io = Script::new(&[0x01, b'a', 0x1B, b'b', 0x1F, ASCII_LF]);
        let mut editor = LineEditor::new();
        let mut out = [0u8; 8];

        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), Some(2));
        assert_eq!(&out[..2], b"ab");
    }

    #[test]
    fn overflow_discards_partial_line() {
        let mut io = Script::new(b"");
        let mut editor = LineEditor::new();
        editor.set_echo(false);

        for _ in 0..MAX_LINE_LEN {
            assert_eq!(editor.feed(&mut io, b'a'), Ok(false));
        }
        assert_eq!(editor.feed(&mut io, b'a'), Err(Error::LineTooLong));
        assert!(editor.pending().is_empty());
    }

    #[test]
    fn take_line_into_short_buffer_fails() {
        let mut io = Script::new(b"");
        let mut editor = LineEditor::new();
        for &b in b"heapstat" {
            editor.feed(&mut io, b).unwrap();
        }
        let mut out = [0u8; 4];
        assert_eq!(editor.take_line(&mut out), Err(Error::LineTooLong));
        assert!(editor.pending().is_empty());
    }

    #[test]
    fn empty_line_is_reported() {
        let mut io = Script::new(b"\r");
        let mut editor = LineEditor::new();
        let mut out = [0u8; 4];
        assert_eq!(editor.poll_line(&mut io, &mut out).unwrap(), Some(0));
    }

    #[test]
    fn overflow_drops_rest_of_line() {
        let mut io = Script::new(b"");
        let mut editor = LineEditor::new();
        editor.set_echo(false);

        for _ in 0..MAX_LINE_LEN {
            editor.feed(&mut io, b'a').unwrap();
        }
        assert_eq!(editor.feed(&mut io, b'a'), Err(Error::LineTooLong));
        assert!(editor.is_discarding());

        for &b in b" reset" {
            assert_eq!(editor.feed(&mut io, b), Ok(false));
        }
        assert_eq!(editor.feed(&mut io, ASCII_CR), Ok(false));
        assert!(!editor.is_discarding());
        assert!(editor.pending().is_empty());

        io.rx = b"ps\r";
        let mut out = [0u8; 8];
        assert_eq!(editor.poll_line(&mut io, &mut out), Ok(Some(2)));
        assert_eq!(&out[..2], b"ps");
    }

    #[test]
    fn crlf_is_one_terminator() {
        let mut io = Script::new(b"ps\r\nkill\n\n");
        let mut editor = LineEditor::new();
        editor.set_echo(false);
        let mut out = [0u8; 8];

        assert_eq!(editor.poll_line(&mut io, &mut out), Ok(Some(2)));
        assert_eq!(editor.poll_line(&mut io, &mut out), Ok(Some(4)));
        assert_eq!(&out[..4], b"kill");
        // a bare LF is its own line
        assert_eq!(editor.poll_line(&mut io, &mut out), Ok(Some(0)));
        assert_eq!(editor.poll_line(&mut io, &mut out), Ok(None));
    }

    #[test]
    fn utf8_bytes_are_kept() {
        let mut io = Script::new("name Gerät\r".as_bytes());
        let mut editor = LineEditor::new();
        let mut out = [0u8; 16];

        let len = editor.poll_line(&mut io, &mut out).unwrap().unwrap();
        assert_eq!(core::str::from_utf8(&out[..len]), Ok("name Gerät"));
    }

    #[test]
    fn backspace_removes_whole_utf8_sequence() {
        let mut io = Script::new("ab\u{20ac}\u{e4}\x08\x08c\r".as_bytes());
        let mut editor = LineEditor::new();
        let mut out = [0u8; 16];

        let len = editor.poll_line(&mut io, &mut out).unwrap().unwrap();
        assert_eq!(&out[..len], b"abc");
        let echoed = core::str::from_utf8(&io.tx).unwrap();
        assert_eq!(echoed.matches("\x08 \x08").count(), 2);
    }
}
