//! In-place command line tokenizer.
//!
//! Splits a mutable line buffer into a command name and an argument vector
//! without copying: every token is a `&str` into the original buffer.
//! Separators and quote characters are overwritten with NUL terminators and
//! escape sequences inside quotes are decoded by compacting the buffer, so
//! the buffer no longer holds the original text afterwards.
//!
//! ```text
//! config set "device name" "My \"Lab\" Board"
//! ├────┘ ├─┘  ├─────────┘   ├──────────────┘
//! command args[0] args[1]   args[2] = My "Lab" Board
//! ```
//!
//! # Rules
//!
//! - Spaces and tabs separate tokens; runs of them never yield empty tokens.
//! - Scanning stops at the first CR, LF or NUL byte.
//! - A `"` opens a quoted token that runs to the next unescaped `"`. Inside
//!   it whitespace is kept verbatim and `\"`, `\\`, `\n`, `\t`, `\r` are
//!   decoded; any other escaped byte is kept as-is.
//! - A `"` inside an unquoted run ends that token and opens a quoted one.
//! - `""` is an explicit empty argument.
//! - An unclosed quote either extends to the end of the line
//!   ([`QuotePolicy::Lenient`]) or rejects the line ([`QuotePolicy::Reject`]).

use core::str;

use heapless::Vec;

use super::MAX_ARGS;
use super::error::MalformedInput;

const MAX_TOKENS: usize = MAX_ARGS + 1;

/// How an unterminated quoted token is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Treat everything after the opening quote as one token.
    #[default]
    Lenient,
    /// Reject the whole line with [`MalformedInput::UnterminatedQuote`].
    Reject,
}

/// The result of tokenizing one line.
///
/// Borrows the line buffer; it cannot outlive the dispatch that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    command: Option<&'a str>,
    args: Vec<&'a str, MAX_ARGS>,
}

impl<'a> Tokens<'a> {
    /// The first token, or `None` for an empty or all-whitespace line.
    pub fn command(&self) -> Option<&'a str> {
        self.command
    }

    /// The tokens following the command name.
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// Number of arguments after the command name.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// Whether the line held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.command.is_none()
    }
}

/// Tokenize `line` in place.
///
/// # Examples
///
/// ```rust
/// use libcli::shell::{tokenize, QuotePolicy};
///
/// let mut line = *b"set key \"hello world\"\r\n";
/// let tokens = tokenize(&mut line, QuotePolicy::Lenient).unwrap();
/// assert_eq!(tokens.command(), Some("set"));
/// assert_eq!(tokens.args(), &["key", "hello world"]);
/// ```
pub fn tokenize(line: &mut [u8], policy: QuotePolicy) -> Result<Tokens<'_>, MalformedInput> {
    let end = line
        .iter()
        .position(|&b| matches!(b, b'\r' | b'\n' | 0))
        .unwrap_or(line.len());

    let mut spans: Vec<(usize, usize), MAX_TOKENS> = Vec::new();
    let mut i = 0;

    while i < end {
        if is_separator(line[i]) {
            line[i] = 0;
            i += 1;
            continue;
        }

        let span = if line[i] == b'"' {
            line[i] = 0;
            let (span, next) = unquote(line, i + 1, end, policy)?;
            i = next;
            span
        } else {
            let start = i;
            while i < end && !is_separator(line[i]) && line[i] != b'"' {
                i += 1;
            }
            (start, i - start)
        };

        spans
            .push(span)
            .map_err(|_| MalformedInput::TooManyArguments)?;
    }

    let line: &[u8] = line;
    let mut tokens = Tokens::default();
    for &(start, len) in &spans {
        let text =
            str::from_utf8(&line[start..start + len]).map_err(|_| MalformedInput::InvalidUtf8)?;
        if tokens.command.is_none() {
            tokens.command = Some(text);
        } else {
            tokens
                .args
                .push(text)
                .map_err(|_| MalformedInput::TooManyArguments)?;
        }
    }

    Ok(tokens)
}

fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Decode a quoted token whose content starts at `start`.
///
/// Returns the `(start, len)` span of the decoded text and the index just
/// past the closing quote.
fn unquote(
    line: &mut [u8],
    start: usize,
    end: usize,
    policy: QuotePolicy,
) -> Result<((usize, usize), usize), MalformedInput> {
    let mut read = start;
    let mut write = start;

    while read < end {
        match line[read] {
            b'"' => {
                line[write..=read].fill(0);
                return Ok(((start, write - start), read + 1));
            }
            b'\\' if read + 1 < end => {
                line[write] = match line[read + 1] {
                    b'n' => b'\n',
                    b't' => b'\t',
                    b'r' => b'\r',
                    other => other,
                };
                write += 1;
                read += 2;
            }
            byte => {
                line[write] = byte;
                write += 1;
                read += 1;
            }
        }
    }

    match policy {
        QuotePolicy::Lenient => {
            line[write..end].fill(0);
            Ok(((start, write - start), end))
        }
        QuotePolicy::Reject => Err(MalformedInput::UnterminatedQuote),
    }
}
