// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Collaborator traits at the boundary between `oac-engine` and whatever
//! automation engine drives a job. `oac-sim` is the
//! in-workspace reference implementation; a real oac-tree binding would
//! implement the same traits.

use oac_core::{AnyValue, InstructionIndex, InstructionState, JobState, LogSeverity, VariableIndex, WorkspaceError};

/// Snapshot of a job's static shape, returned by [`EngineJob::job_info`].
#[derive(Debug, Clone, PartialEq)]
pub struct JobInfo {
    pub instruction_count: u32,
    /// Type name of each instruction, indexed by `InstructionIndex::get()`
    /// (e.g. `"Wait"`, `"Sequence"`) — what the expanded procedure
    /// projects onto `InstructionItem::type_name`.
    pub instruction_types: Vec<String>,
    pub variable_names: Vec<String>,
    pub procedure_name: String,
    /// Parent of each instruction, indexed by `InstructionIndex::get()`
    /// (`None` for a root). Lets `oac-runtime` derive an
    /// `AncestorsActiveFilter` from the engine's instruction graph
    /// without the engine exposing its tree type directly.
    pub parents: Vec<Option<InstructionIndex>>,
}

/// The engine-side handle a [`crate::service::JobService`] drives.
/// Deliberately trait-object friendly (no generics) so `oac-runtime` can
/// hand back either a local, in-process job or a remote-job proxy behind
/// the same `Arc<dyn EngineJob>` — a trait, not an inheritance
/// hierarchy.
pub trait EngineJob: Send + Sync {
    fn start(&self) -> bool;
    fn halt(&self) -> bool;
    fn pause(&self) -> bool;
    fn step(&self) -> bool;
    fn reset(&self) -> bool;
    fn set_breakpoint(&self, index: InstructionIndex) -> bool;
    fn remove_breakpoint(&self, index: InstructionIndex) -> bool;
    fn job_info(&self) -> JobInfo;
    fn is_finished(&self) -> bool;
}

/// Our rendering of `sup::oac_tree::IJobInfoIO`: the callback surface an
/// engine thread drives, one method call per domain occurrence. Every
/// method is called from the engine thread and must return quickly;
/// implementations (see [`crate::observer::JobObserver`]) only enqueue.
pub trait EngineObserver: Send + Sync {
    fn instruction_state_updated(&self, index: InstructionIndex, state: InstructionState);
    fn variable_updated(&self, index: VariableIndex, value: AnyValue, connected: bool);
    fn job_state_updated(&self, state: JobState);
    fn put_value(&self, value: AnyValue, description: &str);
    fn get_user_value(&self, id: u64, value: &mut AnyValue, description: &str) -> bool;
    fn get_user_choice(&self, id: u64, options: &[String], metadata: &AnyValue) -> i32;
    fn message(&self, text: &str);
    fn log(&self, severity: LogSeverity, text: &str);
    fn next_instructions_updated(&self, indices: &[InstructionIndex]);
    fn procedure_ticked(&self);

    /// Releases any outstanding `get_user_value`/`get_user_choice` call
    /// with a "not-processed" reply. An `EngineJob` calls this from its
    /// `halt` so a job stopped mid-prompt doesn't leave its worker thread
    /// parked forever. Default no-op for implementations that never
    /// block on a request/reply bridge.
    fn cancel_pending_requests(&self) {}
}

/// A `(name, value, connected)` notification from a workspace variable.
pub type VarUpdateFn = Box<dyn FnMut(&str, &AnyValue, bool) + Send>;

/// Drops a workspace variable-update subscription when dropped, mirroring
/// `GetCallbackGuard`.
pub struct CallbackGuard {
    unregister: Option<Box<dyn FnOnce() + Send>>,
}

impl CallbackGuard {
    pub fn new(unregister: Box<dyn FnOnce() + Send>) -> Self {
        Self { unregister: Some(unregister) }
    }
}

impl Drop for CallbackGuard {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

/// Our rendering of the workspace collaborator consumed by the
/// synchronizer. A concrete automation engine's workspace
/// (e.g. `oac-sim`'s `SimWorkspace`) implements this.
pub trait DomainWorkspace: Send + Sync {
    fn register_callback(&self, cb: VarUpdateFn) -> CallbackGuard;
    fn is_successfully_setup(&self) -> bool;
    fn set_value(&self, name: &str, value: AnyValue) -> Result<(), WorkspaceError>;
}

#[cfg(test)]
#[path = "contracts_tests.rs"]
mod tests;
