//! Response definitions
//!
//! Typed responses and their wire serialization.

use crate::error::KvError;

use super::{TypedValue, CRLF, ERROR_MARKER, SIMPLE_MARKER};

/// The null marker sent for a GET miss (RESP null bulk string)
pub const NULL_RESPONSE: &[u8] = b"$-1\r\n";

/// A response to send to the client
#[derive(Debug)]
pub enum Response {
    /// `+OK\r\n`
    Ok,
    /// `+PONG\r\n`
    Pong,
    /// `$-1\r\n` — key absent; a normal outcome, not an error
    Null,
    /// The stored value in its typed wire encoding
    Value(TypedValue),
    /// `-ERR <message>\r\n`
    Error(KvError),
}

impl Response {
    /// Serialize the response into its wire bytes
    pub fn to_wire(&self) -> Vec<u8> {
        match self {
            Response::Ok => simple("OK"),
            Response::Pong => simple("PONG"),
            Response::Null => NULL_RESPONSE.to_vec(),
            Response::Value(value) => value.to_wire(),
            Response::Error(err) => {
                let mut out = vec![ERROR_MARKER];
                out.extend_from_slice(b"ERR ");
                out.extend_from_slice(err.to_string().as_bytes());
                out.extend_from_slice(CRLF);
                out
            }
        }
    }
}

fn simple(status: &str) -> Vec<u8> {
    let mut out = vec![SIMPLE_MARKER];
    out.extend_from_slice(status.as_bytes());
    out.extend_from_slice(CRLF);
    out
}
