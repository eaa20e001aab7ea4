//! Frame reader
//!
//! Incremental, stateful parser over a byte stream. Assembles one complete
//! command (name + typed argument list) per call, validating every framing
//! symbol and length along the way. Works over any `BufRead`, so the same
//! code path serves TCP streams and in-memory buffers.

use std::io::BufRead;

use bytes::Bytes;

use crate::error::{KvError, Result};

use super::{
    bytes_to_int, TypedValue, ARRAY_MARKER, BOOL_MARKER, BULK_MARKER, INT_MARKER,
};

/// Maximum number of typed arguments after the command name
pub const MAX_COMMAND_ARGS: usize = 2;

/// Streaming command-frame parser
pub struct FrameReader<R> {
    reader: R,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read exactly one command frame.
    ///
    /// Every frame starts with an array header `*<count>\r\n` where the count
    /// includes the command name, followed by the name as a bulk string and
    /// up to [`MAX_COMMAND_ARGS`] typed arguments.
    ///
    /// End-of-stream before the first header byte is reported as
    /// [`KvError::ConnectionClosed`]; framing violations are reported as the
    /// matching protocol error and leave the stream usable for the next
    /// frame.
    pub fn read_command(&mut self) -> Result<(String, Vec<TypedValue>)> {
        let header = self.read_frame_line()?;
        let declared = parse_array_header(&header)?;

        match self.read_marker_byte()? {
            Some(BULK_MARKER) => {}
            Some(_) => return Err(KvError::MissingBulkMarker),
            None => return Err(KvError::InvalidFrame),
        }
        let name = self.read_bulk_string()?;

        let args = self.read_args(declared)?;

        Ok((String::from_utf8_lossy(&name).into_owned(), args))
    }

    /// Read the typed arguments owed by the array header.
    ///
    /// The loop is bounded by the declared element count (minus the name),
    /// capped at [`MAX_COMMAND_ARGS`]. A clean end-of-stream at a tag-byte
    /// position is not an error: the command simply carries the arguments
    /// read so far.
    fn read_args(&mut self, declared: i64) -> Result<Vec<TypedValue>> {
        let expected = ((declared - 1) as usize).min(MAX_COMMAND_ARGS);
        let mut args = Vec::with_capacity(expected);

        for _ in 0..expected {
            let Some(marker) = self.read_marker_byte()? else {
                break;
            };

            let value = match marker {
                BULK_MARKER => TypedValue::bulk(self.read_bulk_string()?),
                BOOL_MARKER => TypedValue::boolean(self.read_bool()?),
                INT_MARKER => TypedValue::integer(self.read_int()?),
                _ => return Err(KvError::UnsupportedType),
            };

            args.push(value);
        }

        Ok(args)
    }

    /// Read one `\r\n`-terminated line at a frame boundary, without the
    /// terminator. Clean EOF here means the client hung up.
    fn read_frame_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line)?;

        if read == 0 {
            return Err(KvError::ConnectionClosed);
        }
        if line.last() != Some(&b'\n') {
            return Err(KvError::InvalidFrame);
        }
        line.pop();
        if line.pop() != Some(b'\r') {
            return Err(KvError::InvalidFrame);
        }

        Ok(line)
    }

    /// Read a bulk string body: `<len>\r\n<bytes>\r\n` (the `$` marker has
    /// already been consumed). A declared/actual length mismatch is a
    /// distinct error from a missing terminator.
    fn read_bulk_string(&mut self) -> Result<Bytes> {
        let len_digits = self.read_until_cr()?;
        let length = bytes_to_int(&len_digits)?;
        if length <= 0 {
            return Err(KvError::IncorrectDataLength);
        }
        self.expect_newline()?;

        let mut data = vec![0u8; length as usize];
        self.reader.read_exact(&mut data).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                KvError::BulkLengthMismatch
            } else {
                KvError::Io(err)
            }
        })?;

        // Whatever sits between the payload and the next newline must be a
        // lone carriage return; extra bytes mean the declared length was short.
        let mut trailer = Vec::new();
        let read = self.reader.read_until(b'\n', &mut trailer)?;
        if read == 0 || trailer.last() != Some(&b'\n') {
            return Err(KvError::InvalidFrame);
        }
        if trailer.len() > 2 {
            return Err(KvError::BulkLengthMismatch);
        }
        if trailer != b"\r\n" {
            return Err(KvError::InvalidFrame);
        }

        Ok(Bytes::from(data))
    }

    /// Read a boolean body: the literal `true` or `false` before `\r\n`.
    fn read_bool(&mut self) -> Result<bool> {
        let literal = self.read_until_cr()?;
        let value = match literal.as_slice() {
            b"true" => true,
            b"false" => false,
            _ => return Err(KvError::InvalidBoolean),
        };
        self.expect_newline()?;
        Ok(value)
    }

    /// Read an integer body: a signed ASCII decimal before `\r\n`.
    fn read_int(&mut self) -> Result<i64> {
        let digits = self.read_until_cr()?;
        let value = bytes_to_int(&digits)?;
        self.expect_newline()?;
        Ok(value)
    }

    /// Read bytes up to and including the next `\r`, returned without it.
    fn read_until_cr(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\r', &mut buf)?;
        if read == 0 || buf.last() != Some(&b'\r') {
            return Err(KvError::InvalidFrame);
        }
        buf.pop();
        Ok(buf)
    }

    /// Consume exactly one `\n` byte.
    fn expect_newline(&mut self) -> Result<()> {
        match self.read_marker_byte()? {
            Some(b'\n') => Ok(()),
            _ => Err(KvError::InvalidFrame),
        }
    }

    /// Read a single byte, or `None` on clean end-of-stream.
    fn read_marker_byte(&mut self) -> Result<Option<u8>> {
        let buffered = self.reader.fill_buf()?;
        match buffered.first().copied() {
            Some(byte) => {
                self.reader.consume(1);
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

/// Validate the array header line and return the declared element count.
fn parse_array_header(line: &[u8]) -> Result<i64> {
    if line.first() != Some(&ARRAY_MARKER) {
        return Err(KvError::CommandNotArray);
    }

    let count = bytes_to_int(&line[1..])?;
    if count <= 0 {
        return Err(KvError::IncorrectDataLength);
    }

    Ok(count)
}
