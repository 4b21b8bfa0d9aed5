#![allow(dead_code)]

use libcli::console::{ConsoleIo, Error, LineEditor};
use std::collections::VecDeque;
use std::time::Duration;

/// In-memory console transport recording everything written to it.
#[derive(Debug, Default)]
pub struct MockConsole {
    input: VecDeque<u8>,
    output: Vec<u8>,
    editor: LineEditor,
    pub writes: usize,
    pub locks: usize,
    pub unlocks: usize,
    pub disconnected: bool,
}

impl MockConsole {
    pub fn new() -> Self {
        let mut console = Self::default();
        console.editor.set_echo(false);
        console
    }

    pub fn with_input(input: &str) -> Self {
        let mut console = Self::new();
        console.push_input(input);
        console
    }

    pub fn push_input(&mut self, input: &str) {
        self.input.extend(input.bytes());
    }

    pub fn push_bytes(&mut self, input: &[u8]) {
        self.input.extend(input.iter().copied());
    }

    pub fn set_echo(&mut self, enabled: bool) {
        self.editor.set_echo(enabled);
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn take_output(&mut self) -> String {
        let text = self.output();
        self.output.clear();
        self.writes = 0;
        text
    }
}

impl ConsoleIo for MockConsole {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        if self.input.is_empty() && self.disconnected {
            return Err(Error::Disconnected);
        }
        let n = buf.len().min(self.input.len());
        for (slot, byte) in buf.iter_mut().zip(self.input.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn read_timeout(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize, Error> {
        self.read(buf)
    }

    fn readline(&mut self, line: &mut [u8]) -> Result<Option<usize>, Error> {
        let mut editor = std::mem::take(&mut self.editor);
        let result = editor.poll_line(self, line);
        self.editor = editor;
        result
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.writes += 1;
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn lock(&mut self) {
        self.locks += 1;
    }

    fn unlock(&mut self) {
        self.unlocks += 1;
    }
}
