//! Error types for respkv
//!
//! Provides a unified error type for all operations. The display string of
//! every client-visible variant is exactly the message sent on the wire
//! (wrapped as `-ERR <message>\r\n` by the response encoder).

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for respkv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Protocol / framing errors
    // -------------------------------------------------------------------------
    #[error("command must be a RESP array")]
    CommandNotArray,

    #[error("data length must be non-negative non-zero integer")]
    IncorrectDataLength,

    #[error("bulk string length is not correct")]
    BulkLengthMismatch,

    #[error("there must be dollar sign before data length")]
    MissingBulkMarker,

    #[error("invalid RESP")]
    InvalidFrame,

    #[error("unsupported data type. Supported types: integer, boolean, bulk string")]
    UnsupportedType,

    // -------------------------------------------------------------------------
    // Value errors
    // -------------------------------------------------------------------------
    #[error("invalid integer value")]
    InvalidInteger,

    #[error("invalid boolean value")]
    InvalidBoolean,

    // -------------------------------------------------------------------------
    // Semantic errors
    // -------------------------------------------------------------------------
    #[error("unsupported command. Supported commands: SET, GET, DELETE, PING")]
    UnsupportedCommand,

    #[error("SET command requires 2 args: key and value")]
    SetArity,

    #[error("GET command requires 1 arg: key")]
    GetArity,

    #[error("DELETE command requires 1 arg: key")]
    DeleteArity,

    #[error("key datatype must be bulk string")]
    KeyNotBulkString,

    /// Reported once when a connection handler panics; that connection is
    /// then closed.
    #[error("unexpected error on server side occurred")]
    ServerFault,

    // -------------------------------------------------------------------------
    // Transport conditions (never written to the client as-is)
    // -------------------------------------------------------------------------
    /// Clean end-of-stream at a frame boundary: the client disconnected.
    #[error("connection closed by peer")]
    ConnectionClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KvError {
    /// Whether the error is answerable on the wire, leaving the connection
    /// open for further commands.
    pub fn is_protocol_error(&self) -> bool {
        !matches!(self, KvError::ConnectionClosed | KvError::Io(_))
    }
}
