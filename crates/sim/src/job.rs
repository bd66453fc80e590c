// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `SimJob`: runs an [`Instruction`] tree on a dedicated thread,
//! reporting through the supplied [`EngineObserver`] and pacing itself
//! against a [`FlowController`].

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::JoinHandle;

use oac_core::{AnyValue, ExecutionStatus, InstructionIndex, InstructionState, JobState};
use oac_engine::{EngineJob, EngineObserver, FlowController, JobInfo};
use parking_lot::Mutex;

use crate::instruction::Instruction;
use crate::workspace::SimWorkspace;

struct Run {
    handle: Option<JoinHandle<()>>,
}

/// The in-process reference engine job. `start`/`pause`/`step`/`reset`
/// return promptly; the actual transition happens on the worker thread,
/// matching the "commands return promptly, transitions are async"
/// contract.
pub struct SimJob {
    self_weak: Weak<SimJob>,
    procedure: Vec<(InstructionIndex, Instruction)>,
    parents: Vec<Option<InstructionIndex>>,
    procedure_name: String,
    workspace: Arc<SimWorkspace>,
    observer: Arc<dyn EngineObserver>,
    flow: Arc<FlowController>,
    breakpoints: Mutex<HashSet<InstructionIndex>>,
    run: Mutex<Run>,
    halt_requested: AtomicBool,
    finished: AtomicBool,
}

impl SimJob {
    pub fn new(
        procedure_name: impl Into<String>,
        root: Instruction,
        workspace: Arc<SimWorkspace>,
        observer: Arc<dyn EngineObserver>,
        flow: Arc<FlowController>,
    ) -> Arc<Self> {
        let procedure_name = procedure_name.into();
        let (procedure, parents) = root.flatten_with_parents();
        Arc::new_cyclic(|weak| Self {
            self_weak: weak.clone(),
            procedure,
            parents,
            procedure_name,
            workspace,
            observer,
            flow,
            breakpoints: Mutex::new(HashSet::new()),
            run: Mutex::new(Run { handle: None }),
            halt_requested: AtomicBool::new(false),
            finished: AtomicBool::new(false),
        })
    }

    fn run_to_completion(self: &Arc<Self>) {
        self.observer.job_state_updated(JobState::Running);

        for (index, instruction) in self.procedure.clone() {
            if self.halt_requested.swap(false, Ordering::SeqCst) {
                self.observer.job_state_updated(JobState::Halted);
                return;
            }
            if instruction.is_sequence() {
                continue;
            }

            let breakpoint_set = self.breakpoints.lock().contains(&index);
            self.observer.instruction_state_updated(
                index,
                InstructionState::new(ExecutionStatus::Running, breakpoint_set),
            );
            self.observer.next_instructions_updated(&[index]);

            // A breakpoint forces the flow into step mode before the gate is
            // checked, so the engine thread itself blocks here rather than
            // racing the UI thread's reaction to `BreakpointHit`.
            if breakpoint_set {
                self.flow.set_waiting_mode(oac_core::WaitingMode::WaitForRelease);
            }
            let waiting = matches!(self.flow.waiting_mode(), oac_core::WaitingMode::WaitForRelease);
            if waiting {
                self.observer.job_state_updated(JobState::Paused);
            }

            self.flow.wait_if_necessary();
            if self.halt_requested.swap(false, Ordering::SeqCst) {
                self.observer.job_state_updated(JobState::Halted);
                return;
            }
            if waiting {
                self.observer.job_state_updated(JobState::Running);
            }

            let status = self.execute_one(&instruction);
            self.observer.instruction_state_updated(
                index,
                InstructionState::new(status, breakpoint_set),
            );
            self.observer.procedure_ticked();

            // `execute_one` checks the same flag mid-`Wait` (see below) so a
            // halt lands promptly instead of only being noticed at the next
            // instruction boundary.
            if self.halt_requested.swap(false, Ordering::SeqCst) {
                self.observer.job_state_updated(JobState::Halted);
                return;
            }

            if status == ExecutionStatus::Failure {
                self.observer.job_state_updated(JobState::Failed);
                return;
            }
        }

        self.finished.store(true, Ordering::SeqCst);
        self.observer.job_state_updated(JobState::Succeeded);
    }

    fn execute_one(&self, instruction: &Instruction) -> ExecutionStatus {
        match instruction {
            Instruction::Sequence(_) => ExecutionStatus::Success,
            Instruction::Wait(duration) => {
                // Chunked so a halt mid-wait is noticed promptly instead of
                // only after the full duration elapses. `load`
                // only peeks the flag; `run_to_completion` still consumes it.
                const SLICE: std::time::Duration = std::time::Duration::from_millis(10);
                let mut remaining = *duration;
                while remaining > std::time::Duration::ZERO {
                    if self.halt_requested.load(Ordering::SeqCst) {
                        break;
                    }
                    let slice = remaining.min(SLICE);
                    std::thread::sleep(slice);
                    remaining -= slice;
                }
                ExecutionStatus::Success
            }
            Instruction::Message(text) => {
                self.observer.message(text);
                ExecutionStatus::Success
            }
            Instruction::Copy { from, to } => {
                let from_name = format!("var{}", from.get());
                let to_name = format!("var{}", to.get());
                match self.workspace.get(&from_name) {
                    Some(value) => {
                        self.workspace.set_from_engine(&to_name, value.clone());
                        self.observer.variable_updated(*to, value, true);
                        ExecutionStatus::Success
                    }
                    None => {
                        self.observer.log(
                            oac_core::LogSeverity::Error,
                            &format!("copy source {from_name} is unset"),
                        );
                        ExecutionStatus::Failure
                    }
                }
            }
            Instruction::Input { target } => {
                let mut value = AnyValue::Empty;
                let target_name = format!("var{}", target.get());
                let processed = self.observer.get_user_value(target.get() as u64, &mut value, &target_name);
                if processed {
                    self.workspace.set_from_engine(&target_name, value.clone());
                    self.observer.variable_updated(*target, value, true);
                    ExecutionStatus::Success
                } else {
                    ExecutionStatus::Failure
                }
            }
        }
    }
}

impl EngineJob for SimJob {
    fn start(&self) -> bool {
        let Some(this) = self.self_weak.upgrade() else {
            return false;
        };
        let mut guard = self.run.lock();
        if guard.handle.is_some() {
            return false;
        }
        self.halt_requested.store(false, Ordering::SeqCst);
        self.finished.store(false, Ordering::SeqCst);
        self.flow.reset();

        guard.handle = Some(std::thread::spawn(move || this.run_to_completion()));
        true
    }

    fn halt(&self) -> bool {
        self.halt_requested.store(true, Ordering::SeqCst);
        self.flow.interrupt();
        self.observer.cancel_pending_requests();
        true
    }

    fn pause(&self) -> bool {
        self.flow.set_waiting_mode(oac_core::WaitingMode::WaitForRelease);
        true
    }

    fn step(&self) -> bool {
        self.flow.step_request();
        true
    }

    fn reset(&self) -> bool {
        let mut guard = self.run.lock();
        if let Some(handle) = guard.handle.take() {
            let _ = handle.join();
        }
        drop(guard);

        self.halt_requested.store(false, Ordering::SeqCst);
        self.finished.store(false, Ordering::SeqCst);
        self.flow.reset();
        self.observer.job_state_updated(JobState::Initial);
        true
    }

    fn set_breakpoint(&self, index: InstructionIndex) -> bool {
        self.breakpoints.lock().insert(index);
        true
    }

    fn remove_breakpoint(&self, index: InstructionIndex) -> bool {
        self.breakpoints.lock().remove(&index);
        true
    }

    fn job_info(&self) -> JobInfo {
        JobInfo {
            instruction_count: self.procedure.len() as u32,
            instruction_types: self.procedure.iter().map(|(_, instruction)| instruction.type_name().to_string()).collect(),
            variable_names: self.workspace.variable_names(),
            procedure_name: self.procedure_name.clone(),
            parents: self.parents.clone(),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
