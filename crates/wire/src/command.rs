// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Commands sent from a `RemoteDomainRunner` to a remote job manager.
//!
//! One variant per `EngineJob` method; `job_index` identifies
//! which job on the remote side the command targets, matching the
//! `(manager, job_index)` addressing a remote job uses to identify
//! itself.

use oac_core::InstructionIndex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RemoteCommand {
    Start { job_index: u32 },
    Halt { job_index: u32 },
    Pause { job_index: u32 },
    Step { job_index: u32 },
    Reset { job_index: u32 },
    SetBreakpoint { job_index: u32, index: InstructionIndex },
    RemoveBreakpoint { job_index: u32, index: InstructionIndex },
    GetJobInfo { job_index: u32 },
    /// Answers an outstanding user-value or user-choice prompt raised by
    /// a `RemoteEvent::UserValueRequested` / `UserChoiceRequested`.
    AnswerUserValue { job_index: u32, request_id: u64, value: oac_core::AnyValue, processed: bool },
    AnswerUserChoice { job_index: u32, request_id: u64, index: i32 },
}
