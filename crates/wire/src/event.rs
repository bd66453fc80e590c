// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Frames sent from a remote job manager back to a `RemoteDomainRunner`.

use oac_core::{AnyValue, DomainEvent};
use serde::{Deserialize, Serialize};

/// Mirrors [`oac_engine::JobInfo`] across the wire (that type itself has
/// no serde derives — it is purely an in-process handoff type).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobInfoSnapshot {
    pub instruction_count: u32,
    pub instruction_types: Vec<String>,
    pub variable_names: Vec<String>,
    pub procedure_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RemoteEvent {
    /// One domain event, forwarded verbatim from the remote job's
    /// observer.
    Domain { event: DomainEvent },

    /// Reply to `RemoteCommand::GetJobInfo`.
    JobInfo { snapshot: JobInfoSnapshot },

    /// Whether a command transition was accepted, mirroring the
    /// `bool` returns on `EngineJob`.
    CommandAck { accepted: bool },

    /// The remote engine thread is blocked in `get_user_value` and needs
    /// an answer relayed back as `RemoteCommand::AnswerUserValue`.
    UserValueRequested { request_id: u64, description: String, current: AnyValue },

    /// The remote engine thread is blocked in `get_user_choice`.
    UserChoiceRequested { request_id: u64, options: Vec<String>, metadata: AnyValue },
}
