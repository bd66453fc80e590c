// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oac-wire: wire protocol for the remote domain runner.
//!
//! A deployment may run a procedure in a separate process or on a remote
//! host; `RemoteDomainRunner` (`oac-runtime::remote`) talks to the remote
//! job manager over this protocol instead of calling an in-process
//! `EngineJob` directly. Frames are a 4-byte big-endian length prefix
//! followed by a JSON payload — the same framing this codebase's other
//! IPC surfaces use.
//!
//! This is the stub sufficient to satisfy the remote job manager
//! collaborator contract — not a full wire protocol implementation.

mod command;
mod event;
mod framing;

pub use command::RemoteCommand;
pub use event::{JobInfoSnapshot, RemoteEvent};
pub use framing::{
    decode, encode, read_command, read_event, write_command, write_event, ProtocolError,
    DEFAULT_TIMEOUT, MAX_MESSAGE_SIZE,
};

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
