//! Response serialization tests

use respkv::protocol::{Response, TypedValue};
use respkv::KvError;

#[test]
fn test_status_responses() {
    assert_eq!(b"+OK\r\n".to_vec(), Response::Ok.to_wire());
    assert_eq!(b"+PONG\r\n".to_vec(), Response::Pong.to_wire());
}

#[test]
fn test_null_response_literal() {
    assert_eq!(b"$-1\r\n".to_vec(), Response::Null.to_wire());
}

#[test]
fn test_bulk_value_response() {
    let response = Response::Value(TypedValue::bulk(&b"bar"[..]));
    assert_eq!(b"$3\r\nbar\r\n".to_vec(), response.to_wire());
}

#[test]
fn test_integer_value_response_round_trips_decimal() {
    assert_eq!(
        b":153\r\n".to_vec(),
        Response::Value(TypedValue::integer(153)).to_wire()
    );
    assert_eq!(
        b":-153\r\n".to_vec(),
        Response::Value(TypedValue::integer(-153)).to_wire()
    );
}

#[test]
fn test_boolean_value_response() {
    assert_eq!(
        b"#true\r\n".to_vec(),
        Response::Value(TypedValue::boolean(true)).to_wire()
    );
    assert_eq!(
        b"#false\r\n".to_vec(),
        Response::Value(TypedValue::boolean(false)).to_wire()
    );
}

#[test]
fn test_error_responses_carry_exact_messages() {
    assert_eq!(
        b"-ERR command must be a RESP array\r\n".to_vec(),
        Response::Error(KvError::CommandNotArray).to_wire()
    );
    assert_eq!(
        b"-ERR unsupported command. Supported commands: SET, GET, DELETE, PING\r\n".to_vec(),
        Response::Error(KvError::UnsupportedCommand).to_wire()
    );
    assert_eq!(
        b"-ERR key datatype must be bulk string\r\n".to_vec(),
        Response::Error(KvError::KeyNotBulkString).to_wire()
    );
}

#[test]
fn test_binary_safe_bulk_response() {
    let payload: Vec<u8> = vec![0x00, 0x01, 0xFF, 0xFE, 0x80];
    let mut expected = b"$5\r\n".to_vec();
    expected.extend_from_slice(&payload);
    expected.extend_from_slice(b"\r\n");

    assert_eq!(expected, Response::Value(TypedValue::bulk(payload)).to_wire());
}
