//! Protocol Module
//!
//! A constrained subset of the RESP wire protocol: line-oriented,
//! length-prefixed, one command per round trip.
//!
//! ## Request Format
//! ```text
//! *<argCountIncludingName>\r\n
//! $<len>\r\n<commandName>\r\n
//! (<argTag><argBody>\r\n){0,2}
//! ```
//!
//! ### Argument encodings
//! - `$<len>\r\n<bytes>\r\n`  bulk string (binary safe)
//! - `:<decimal>\r\n`         integer (sent as ASCII decimal text)
//! - `#<true|false>\r\n`      boolean (literal words)
//!
//! ## Response Format
//! - `+OK\r\n` / `+PONG\r\n`     status
//! - `-ERR <message>\r\n`        error
//! - `$-1\r\n`                   null (GET miss)
//! - `:<decimal>\r\n`, `#true\r\n`/`#false\r\n`, `$<len>\r\n<bytes>\r\n`
//!   stored value by type

mod codec;
mod command;
mod reader;
mod response;
mod value;

pub use codec::{bytes_to_int, decode_bool, decode_int, encode_int};
pub use command::{Command, CommandKind};
pub use reader::{FrameReader, MAX_COMMAND_ARGS};
pub use response::Response;
pub use value::{TypedValue, ValueTag};

/// Marker byte for array headers
pub const ARRAY_MARKER: u8 = b'*';

/// Marker byte for bulk strings
pub const BULK_MARKER: u8 = b'$';

/// Marker byte for integers
pub const INT_MARKER: u8 = b':';

/// Marker byte for booleans
pub const BOOL_MARKER: u8 = b'#';

/// Marker byte for simple strings (responses only)
pub const SIMPLE_MARKER: u8 = b'+';

/// Marker byte for errors (responses only)
pub const ERROR_MARKER: u8 = b'-';

/// Line terminator used throughout the protocol
pub const CRLF: &[u8] = b"\r\n";
