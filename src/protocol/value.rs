//! Typed value definitions
//!
//! Values carry their wire tag plus a fixed internal encoding: integers are
//! an 8-byte little-endian two's-complement buffer, booleans a single byte
//! (`0x01` true, `0x00` false), bulk strings their raw bytes.

use bytes::Bytes;

use super::{decode_bool, decode_int, encode_int, BOOL_MARKER, BULK_MARKER, INT_MARKER};

/// The scalar types a stored value can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTag {
    Integer,
    Boolean,
    BulkString,
}

impl ValueTag {
    /// The wire marker byte for this tag
    pub fn marker(self) -> u8 {
        match self {
            ValueTag::Integer => INT_MARKER,
            ValueTag::Boolean => BOOL_MARKER,
            ValueTag::BulkString => BULK_MARKER,
        }
    }

    /// Look up a tag by its wire marker byte
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            INT_MARKER => Some(ValueTag::Integer),
            BOOL_MARKER => Some(ValueTag::Boolean),
            BULK_MARKER => Some(ValueTag::BulkString),
            _ => None,
        }
    }
}

/// A tagged value in its internal encoding
///
/// Constructors are the only way to build one, so the buffer length always
/// matches the tag's encoding rule (8 bytes / 1 byte / raw length).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    tag: ValueTag,
    data: Bytes,
}

impl TypedValue {
    pub fn integer(value: i64) -> Self {
        Self {
            tag: ValueTag::Integer,
            data: Bytes::copy_from_slice(&encode_int(value)),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            tag: ValueTag::Boolean,
            data: Bytes::from(vec![u8::from(value)]),
        }
    }

    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Self {
            tag: ValueTag::BulkString,
            data: data.into(),
        }
    }

    pub fn tag(&self) -> ValueTag {
        self.tag
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Serialize the value in its response wire form
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self.tag {
            ValueTag::Integer => {
                out.push(INT_MARKER);
                out.extend_from_slice(decode_int(&self.data).as_bytes());
            }
            ValueTag::Boolean => {
                out.push(BOOL_MARKER);
                out.extend_from_slice(decode_bool(&self.data).as_bytes());
            }
            ValueTag::BulkString => {
                out.push(BULK_MARKER);
                out.extend_from_slice(self.data.len().to_string().as_bytes());
                out.extend_from_slice(super::CRLF);
                out.extend_from_slice(&self.data);
            }
        }
        out.extend_from_slice(super::CRLF);
        out
    }
}
