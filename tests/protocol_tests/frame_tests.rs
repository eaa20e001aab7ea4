//! Frame reader tests over complete command frames

use std::io::Cursor;

use respkv::protocol::{encode_int, FrameReader, ValueTag};
use respkv::KvError;

fn frame_reader(input: &str) -> FrameReader<Cursor<Vec<u8>>> {
    FrameReader::new(Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn test_parse_set_frame() {
    let mut reader = frame_reader("*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n");
    let (name, args) = reader.read_command().unwrap();

    assert_eq!("SET", name);
    assert_eq!(2, args.len());
    assert_eq!(ValueTag::BulkString, args[0].tag());
    assert_eq!(b"foo".as_slice(), args[0].data().as_ref());
    assert_eq!(b"bar".as_slice(), args[1].data().as_ref());
}

#[test]
fn test_parse_get_frame() {
    let mut reader = frame_reader("*2\r\n$3\r\nGET\r\n$3\r\nfoo\r\n");
    let (name, args) = reader.read_command().unwrap();

    assert_eq!("GET", name);
    assert_eq!(1, args.len());
    assert_eq!(b"foo".as_slice(), args[0].data().as_ref());
}

#[test]
fn test_parse_ping_without_args() {
    let mut reader = frame_reader("*1\r\n$4\r\nPING\r\n");
    let (name, args) = reader.read_command().unwrap();

    assert_eq!("PING", name);
    assert!(args.is_empty());
}

#[test]
fn test_parse_typed_args() {
    let mut reader = frame_reader("*3\r\n$3\r\nSET\r\n$1\r\nn\r\n:1024\r\n");
    let (_, args) = reader.read_command().unwrap();

    assert_eq!(ValueTag::Integer, args[1].tag());
    assert_eq!(encode_int(1024).as_slice(), args[1].data().as_ref());

    let mut reader = frame_reader("*3\r\n$3\r\nSET\r\n$1\r\nb\r\n#false\r\n");
    let (_, args) = reader.read_command().unwrap();

    assert_eq!(ValueTag::Boolean, args[1].tag());
    assert_eq!(&[0x00], args[1].data().as_ref());
}

#[test]
fn test_parse_two_frames_back_to_back() {
    let mut reader = frame_reader("*1\r\n$4\r\nPING\r\n*2\r\n$3\r\nGET\r\n$1\r\nk\r\n");

    let (first, _) = reader.read_command().unwrap();
    let (second, args) = reader.read_command().unwrap();

    assert_eq!("PING", first);
    assert_eq!("GET", second);
    assert_eq!(1, args.len());
}

#[test]
fn test_empty_stream_is_transport_closed() {
    assert!(matches!(
        frame_reader("").read_command(),
        Err(KvError::ConnectionClosed)
    ));
}

#[test]
fn test_missing_array_marker() {
    assert!(matches!(
        frame_reader("2\r\n$3\r\nGET\r\n").read_command(),
        Err(KvError::CommandNotArray)
    ));
}

#[test]
fn test_non_numeric_array_count() {
    assert!(matches!(
        frame_reader("*asdf\r\n").read_command(),
        Err(KvError::InvalidInteger)
    ));
}

#[test]
fn test_non_positive_array_count() {
    assert!(matches!(
        frame_reader("*0\r\n").read_command(),
        Err(KvError::IncorrectDataLength)
    ));
    assert!(matches!(
        frame_reader("*-2\r\n").read_command(),
        Err(KvError::IncorrectDataLength)
    ));
}

#[test]
fn test_name_must_be_bulk_string() {
    assert!(matches!(
        frame_reader("*1\r\n:4\r\n").read_command(),
        Err(KvError::MissingBulkMarker)
    ));
}

#[test]
fn test_missing_trailing_terminator() {
    assert!(matches!(
        frame_reader("*2\r\n$3\r\nGET\r\n$3\r\nfoo").read_command(),
        Err(KvError::InvalidFrame)
    ));
}

#[test]
fn test_declared_length_shorter_than_data() {
    assert!(matches!(
        frame_reader("*2\r\n$3\r\nGET\r\n$3\r\nfoobar\r\n").read_command(),
        Err(KvError::BulkLengthMismatch)
    ));
}

#[test]
fn test_lone_newline_is_not_a_terminator() {
    assert!(matches!(
        frame_reader("*2\n$3\r\nGET\r\n").read_command(),
        Err(KvError::InvalidFrame)
    ));
}

#[test]
fn test_unsupported_argument_tag() {
    assert!(matches!(
        frame_reader("*2\r\n$3\r\nGET\r\n&23\r\n").read_command(),
        Err(KvError::UnsupportedType)
    ));
}

#[test]
fn test_invalid_boolean_literal() {
    assert!(matches!(
        frame_reader("*3\r\n$3\r\nSET\r\n$1\r\nb\r\n#yes\r\n").read_command(),
        Err(KvError::InvalidBoolean)
    ));
}

#[test]
fn test_invalid_integer_literal() {
    assert!(matches!(
        frame_reader("*3\r\n$3\r\nSET\r\n$1\r\nn\r\n:4e2\r\n").read_command(),
        Err(KvError::InvalidInteger)
    ));
}
