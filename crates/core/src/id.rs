// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Identifiers for jobs and the indices the expanded procedure assigns to
//! instructions and variables.

use serde::{Deserialize, Serialize};

crate::define_index! {
    /// Stable index of an instruction within a job's expanded procedure.
    ///
    /// Assigned once by the expanded-procedure builder when a job is set up;
    /// never reused or reassigned for the lifetime of the job.
    pub struct InstructionIndex
}

crate::define_index! {
    /// Stable index of a variable within a job's workspace.
    pub struct VariableIndex
}

/// Unique identifier of a submitted job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Generates a fresh, opaque job id.
    pub fn generate() -> Self {
        Self(nanoid::nanoid!(12))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
