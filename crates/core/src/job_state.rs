// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Engine-facing job state and its UI-facing mirror, plus the one-way
//! mapping between the two vocabularies.

use serde::{Deserialize, Serialize};

/// State reported by the automation engine, mirrored verbatim into the UI.
///
/// Names are authoritative — they are part of the engine's wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Initial,
    Paused,
    Stepping,
    Running,
    Succeeded,
    Failed,
    Halted,
}

impl JobState {
    /// `Busy` ≡ {Paused, Stepping, Running}.
    pub fn is_busy(self) -> bool {
        matches!(self, JobState::Paused | JobState::Stepping | JobState::Running)
    }

    /// `Finished` ≡ {Succeeded, Failed, Halted}.
    pub fn is_finished(self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed | JobState::Halted)
    }
}

crate::simple_display! {
    JobState {
        Initial => "initial",
        Paused => "paused",
        Stepping => "stepping",
        Running => "running",
        Succeeded => "succeeded",
        Failed => "failed",
        Halted => "halted",
    }
}

/// UI-facing status mirrored onto a job item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerStatus {
    Idle,
    Running,
    Paused,
    Stepping,
    Canceling,
    Stopped,
    Completed,
}

impl RunnerStatus {
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            RunnerStatus::Running | RunnerStatus::Paused | RunnerStatus::Stepping | RunnerStatus::Canceling
        )
    }

    pub fn is_finished(self) -> bool {
        matches!(self, RunnerStatus::Stopped | RunnerStatus::Completed)
    }
}

crate::simple_display! {
    RunnerStatus {
        Idle => "idle",
        Running => "running",
        Paused => "paused",
        Stepping => "stepping",
        Canceling => "canceling",
        Stopped => "stopped",
        Completed => "completed",
    }
}

/// The single, total mapping from engine job state to UI runner status.
///
/// This is the only translation between the two vocabularies;
/// nothing else in the codebase should match on [`JobState`] to decide a
/// user-visible status.
pub fn map_engine_to_runner_status(state: JobState) -> RunnerStatus {
    match state {
        JobState::Initial => RunnerStatus::Idle,
        JobState::Paused => RunnerStatus::Paused,
        JobState::Stepping => RunnerStatus::Stepping,
        JobState::Running => RunnerStatus::Running,
        JobState::Succeeded => RunnerStatus::Completed,
        JobState::Failed => RunnerStatus::Stopped,
        JobState::Halted => RunnerStatus::Stopped,
    }
}

#[cfg(test)]
#[path = "job_state_tests.rs"]
mod tests;
