//! Line-oriented console input
//!
//! Every prompt reads one whole line and converts it explicitly. Integer prompts
//! repeat until a valid number is entered. End of input is reported as `None`.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors that can occur while reading console input
#[derive(Debug, Error)]
pub enum InputError {
    /// Line could not be parsed as an integer
    #[error("Invalid number: '{0}'. Please enter an integer.")]
    InvalidNumber(String),

    /// IO error on the console streams
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a student id from a line of input
pub fn parse_id(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

/// Prompting reader over a pair of console streams
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output stream, for printing results between prompts
    pub const fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Release the wrapped streams
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Read one line without its terminator, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so such a
    /// line fails validation like any other bad input.
    pub fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Print `message` and read the answer line
    pub fn ask(&mut self, message: &str) -> Result<Option<String>, InputError> {
        write!(self.writer, "{message} ")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Print `message` and read an integer, reprompting on invalid input
    pub fn ask_id(&mut self, message: &str) -> Result<Option<i64>, InputError> {
        loop {
            let Some(line) = self.ask(message)? else {
                return Ok(None);
            };
            match parse_id(&line) {
                Ok(id) => return Ok(Some(id)),
                Err(err @ InputError::InvalidNumber(_)) => {
                    log::debug!("rejected id input: {line:?}");
                    writeln!(self.writer, "{err}")?;
                },
                Err(err) => return Err(err),
            }
        }
    }
}
