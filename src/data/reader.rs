//! Tokenizer for the CSV-style digits data format.

use std::io::BufRead;

use crate::error::{DataError, Position};

/// Pulls unsigned decimal numbers out of a digits data file.
///
/// The format is a stream of numbers separated by commas or newlines.
/// `#` starts a comment running to the end of the line; spaces, tabs
/// and carriage returns are skipped (even between the digits of one
/// number); any other byte is malformed. A comment does not end a
/// pending number — the newline or the end of input does.
///
/// The reader tracks the [`Position`] of the last byte it consumed and
/// stamps it on every error it returns.
pub struct NumberReader<R> {
    reader: R,
    position: Position,
}

impl<R: BufRead> NumberReader<R> {
    pub fn new(reader: R) -> NumberReader<R> {
        NumberReader {
            reader,
            position: Position { row: 1, col: 0 },
        }
    }

    /// Position of the most recently consumed byte.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Reads the next number, or `None` once the input is exhausted.
    /// A number still pending at end of input is delivered first.
    pub fn next_number(&mut self) -> Result<Option<u32>, DataError> {
        let mut value: u32 = 0;
        let mut seen_digit = false;
        let mut comment = false;

        loop {
            let byte = match self.read_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => {
                    return Ok(if seen_digit { Some(value) } else { None });
                }
                Err(source) => {
                    return Err(DataError::Io {
                        position: self.position,
                        source,
                    });
                }
            };

            // Newlines count even inside comments: they end the comment
            // and flush a pending number.
            if byte == b'\n' {
                self.position.row += 1;
                self.position.col = 0;
                comment = false;
                if seen_digit {
                    return Ok(Some(value));
                }
                continue;
            }

            self.position.col += 1;

            if comment {
                continue;
            }

            match byte {
                b'#' => comment = true,
                b',' => {
                    if !seen_digit {
                        return Err(DataError::MissingNumber {
                            position: self.position,
                        });
                    }
                    return Ok(Some(value));
                }
                b'0'..=b'9' => {
                    seen_digit = true;
                    let digit = u32::from(byte - b'0');
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(DataError::NumberOverflow {
                            position: self.position,
                        })?;
                }
                b' ' | b'\t' | b'\r' => {}
                other => {
                    return Err(DataError::IllegalCharacter {
                        found: other as char,
                        position: self.position,
                    });
                }
            }
        }
    }

    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        match buf.first().copied() {
            Some(byte) => {
                self.reader.consume(1);
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}
