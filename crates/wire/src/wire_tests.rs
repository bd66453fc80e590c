// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Wire format tests: length-prefix framing and JSON encoding.

use oac_core::{DomainEvent, InstructionIndex};

use super::*;

#[test]
fn encode_returns_json_without_length_prefix() {
    let command = RemoteCommand::Start { job_index: 0 };
    let encoded = encode(&command).expect("encode failed");

    let json_str = std::str::from_utf8(&encoded).expect("should be valid UTF-8");
    assert!(json_str.starts_with('{'), "should be a JSON object: {json_str}");
}

#[test]
fn decode_recovers_the_original_value() {
    let command = RemoteCommand::SetBreakpoint { job_index: 3, index: InstructionIndex::new(7) };
    let encoded = encode(&command).expect("encode failed");
    let decoded: RemoteCommand = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, command);
}

#[tokio::test]
async fn read_write_message_roundtrip() {
    let original = b"hello world";

    let mut buffer = Vec::new();
    write_message(&mut buffer, original).await.expect("write failed");
    assert_eq!(buffer.len(), 4 + original.len());

    let mut cursor = std::io::Cursor::new(buffer);
    let read_back = read_message(&mut cursor).await.expect("read failed");
    assert_eq!(read_back, original);
}

#[tokio::test]
async fn write_message_adds_length_prefix() {
    let data = b"test data";

    let mut buffer = Vec::new();
    write_message(&mut buffer, data).await.expect("write failed");

    let len = u32::from_be_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]) as usize;
    assert_eq!(len, data.len());
    assert_eq!(&buffer[4..], data);
}

#[tokio::test]
async fn read_message_on_empty_stream_reports_connection_closed() {
    let mut cursor = std::io::Cursor::new(Vec::<u8>::new());
    let err = read_message(&mut cursor).await.unwrap_err();
    assert!(matches!(err, ProtocolError::ConnectionClosed));
}

#[tokio::test]
async fn command_event_roundtrip_through_framing() {
    let command = RemoteCommand::Step { job_index: 1 };
    let mut buffer = Vec::new();
    write_command(&mut buffer, &command, DEFAULT_TIMEOUT).await.expect("write failed");

    let mut cursor = std::io::Cursor::new(buffer);
    let decoded = read_command(&mut cursor, DEFAULT_TIMEOUT).await.expect("read failed");
    assert_eq!(decoded, command);

    let event = RemoteEvent::Domain {
        event: DomainEvent::JobStateChanged { state: oac_core::JobState::Running },
    };
    let mut buffer = Vec::new();
    write_event(&mut buffer, &event, DEFAULT_TIMEOUT).await.expect("write failed");

    let mut cursor = std::io::Cursor::new(buffer);
    let decoded = read_event(&mut cursor, DEFAULT_TIMEOUT).await.expect("read failed");
    assert_eq!(decoded, event);
}
