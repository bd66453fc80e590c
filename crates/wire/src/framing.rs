// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Length-prefixed JSON framing: a 4-byte big-endian size prefix followed
//! by a JSON payload, read/written with `tokio`'s async IO traits.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::command::RemoteCommand;
use crate::event::RemoteEvent;

/// Largest payload this protocol will frame; guards against a corrupt or
/// hostile length prefix causing an unbounded allocation.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

/// Default round-trip timeout for a single command/event exchange.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },

    #[error("connection closed")]
    ConnectionClosed,

    #[error("timed out waiting for a reply")]
    Timeout,
}

/// Encodes `msg` to JSON bytes, without the length prefix. Pair with
/// [`write_message`] for the on-wire framing.
pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    let json = serde_json::to_vec(msg)?;
    if json.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: json.len(), max: MAX_MESSAGE_SIZE });
    }
    Ok(json)
}

/// Decodes a JSON payload previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads one length-prefixed frame from `reader`.
pub async fn read_message<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
) -> Result<Vec<u8>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed);
        }
        Err(e) => return Err(ProtocolError::Io(e)),
    }
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: len, max: MAX_MESSAGE_SIZE });
    }

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    Ok(buf)
}

/// Writes one length-prefixed frame to `writer`.
pub async fn write_message<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    data: &[u8],
) -> Result<(), ProtocolError> {
    let len = data.len();
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: len, max: MAX_MESSAGE_SIZE });
    }
    writer.write_all(&(len as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads and decodes one [`RemoteCommand`], bounded by `timeout`.
pub async fn read_command<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
    timeout: std::time::Duration,
) -> Result<RemoteCommand, ProtocolError> {
    let bytes =
        tokio::time::timeout(timeout, read_message(reader)).await.map_err(|_| ProtocolError::Timeout)??;
    decode(&bytes)
}

/// Reads and decodes one [`RemoteEvent`], bounded by `timeout`.
pub async fn read_event<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
    timeout: std::time::Duration,
) -> Result<RemoteEvent, ProtocolError> {
    let bytes =
        tokio::time::timeout(timeout, read_message(reader)).await.map_err(|_| ProtocolError::Timeout)??;
    decode(&bytes)
}

/// Encodes and writes one [`RemoteCommand`], bounded by `timeout`.
pub async fn write_command<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    command: &RemoteCommand,
    timeout: std::time::Duration,
) -> Result<(), ProtocolError> {
    let data = encode(command)?;
    tokio::time::timeout(timeout, write_message(writer, &data)).await.map_err(|_| ProtocolError::Timeout)?
}

/// Encodes and writes one [`RemoteEvent`], bounded by `timeout`.
pub async fn write_event<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    event: &RemoteEvent,
    timeout: std::time::Duration,
) -> Result<(), ProtocolError> {
    let data = encode(event)?;
    tokio::time::timeout(timeout, write_message(writer, &data)).await.map_err(|_| ProtocolError::Timeout)?
}
