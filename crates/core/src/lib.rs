// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oac-core: data model shared by the oac-tree job execution subsystem.
//!
//! Houses the types every other crate in this workspace builds on: the
//! domain event union, job/runner state vocabularies, the flow
//! controller's waiting mode, `AnyValue`, ids, log records, and errors.
//! None of this crate talks to threads or the automation engine — see
//! `oac-engine` for that.

pub mod macros;

pub mod any_value;
pub mod error;
pub mod event;
pub mod execution_status;
pub mod id;
pub mod job_state;
pub mod log;
pub mod waiting_mode;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use any_value::AnyValue;
pub use error::{RuntimeError, WorkspaceError};
pub use event::{DomainEvent, DomainEventKind};
pub use execution_status::{BreakpointStatus, ExecutionStatus, InstructionState};
pub use id::{InstructionIndex, JobId, VariableIndex};
pub use job_state::{map_engine_to_runner_status, JobState, RunnerStatus};
pub use log::{LogRecord, LogSeverity};
pub use waiting_mode::WaitingMode;
