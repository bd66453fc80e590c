// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job handler: owns one [`JobItem`]'s expanded
//! procedure and [`JobLog`], drives its [`DomainRunner`], and routes
//! every domain event onto the item. One handler per live job.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use oac_core::{
    map_engine_to_runner_status, BreakpointStatus, InstructionIndex, RuntimeError,
};
use oac_runtime::{ancestors_active_filter, DomainRunner};
use parking_lot::Mutex;

use crate::index_map::IndexItemMap;
use crate::items::{InstructionItem, JobItem, VariableItem};
use crate::job_log::JobLog;

/// Drives one job's [`DomainRunner`] and keeps its [`JobItem`] and
/// [`JobLog`] in sync with the events it reports.
///
/// Setup, on construction and on every
/// [`Self::regenerate`]: build the expanded procedure from the runner's
/// [`oac_engine::JobInfo`], register the six dispatcher callbacks, install
/// the ancestors-active filter, and reapply any breakpoints the previous
/// expanded procedure carried.
pub struct JobHandler {
    item: Arc<Mutex<JobItem>>,
    runner: Arc<dyn DomainRunner>,
    log: Arc<Mutex<JobLog>>,
}

impl JobHandler {
    pub fn new(item: Arc<Mutex<JobItem>>, runner: Arc<dyn DomainRunner>, log: Arc<Mutex<JobLog>>) -> Self {
        let handler = Self { item, runner, log };
        handler.wire_dispatcher();
        handler.generate();
        handler
    }

    pub fn item(&self) -> Arc<Mutex<JobItem>> {
        self.item.clone()
    }

    pub fn runner(&self) -> &Arc<dyn DomainRunner> {
        &self.runner
    }

    pub fn log(&self) -> Arc<Mutex<JobLog>> {
        self.log.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.runner.is_busy()
    }

    pub fn is_finished(&self) -> bool {
        self.runner.is_finished()
    }

    /// Rebuilds the expanded procedure from the runner's current
    /// `JobInfo`, preserving any breakpoints already armed on matching
    /// indices and reapplying them to the engine.
    /// Called once at setup and again whenever a job's procedure is
    /// replaced (e.g. a file-based job reloaded from disk).
    pub fn regenerate(&self) {
        self.generate();
    }

    fn generate(&self) {
        let info = self.runner.job_info();

        let previous_breakpoints: HashMap<InstructionIndex, BreakpointStatus> = {
            let item = self.item.lock();
            item.expanded.iter().map(|(index, instruction)| (index, instruction.breakpoint_status)).collect()
        };

        let mut children_by_parent: HashMap<InstructionIndex, Vec<InstructionIndex>> = HashMap::new();
        for (position, parent) in info.parents.iter().enumerate() {
            if let Some(parent) = parent {
                let index = InstructionIndex::new(position as u32);
                children_by_parent.entry(*parent).or_default().push(index);
            }
        }

        let mut expanded = IndexItemMap::new();
        for position in 0..info.instruction_count {
            let index = InstructionIndex::new(position);
            let type_name = info.instruction_types.get(position as usize).map(String::as_str).unwrap_or("Instruction");
            let mut instruction = InstructionItem::new(index, type_name);
            instruction.children = children_by_parent.remove(&index).unwrap_or_default();
            if let Some(status) = previous_breakpoints.get(&index) {
                instruction.breakpoint_status = *status;
            }
            expanded.insert(index, instruction);
        }

        let variables: Vec<VariableItem> = info.variable_names.iter().map(|name| VariableItem::new(name.as_str())).collect();

        {
            let mut item = self.item.lock();
            item.expanded = expanded;
            item.variables = variables;
            item.current_active_breakpoint = None;
        }

        self.runner.set_instruction_active_filter(ancestors_active_filter(info.parents));

        let armed: Vec<InstructionIndex> = {
            let item = self.item.lock();
            item.expanded
                .iter()
                .filter(|(_, instruction)| instruction.breakpoint_status == BreakpointStatus::Set)
                .map(|(index, _)| index)
                .collect()
        };
        for index in armed {
            self.runner.set_breakpoint(index);
        }
    }

    fn wire_dispatcher(&self) {
        let mut dispatcher = self.runner.dispatcher().lock();

        let item = self.item.clone();
        dispatcher.set_instruction_state_updated(Box::new(move |index, execution_status, breakpoint_set| {
            let mut item = item.lock();
            match item.expanded.get_mut(index) {
                Some(instruction) => {
                    instruction.execution_status = execution_status;
                    instruction.breakpoint_status = match (instruction.breakpoint_status, breakpoint_set) {
                        (_, true) => BreakpointStatus::Set,
                        (BreakpointStatus::Set, false) => BreakpointStatus::Unset,
                        (status, false) => status,
                    };
                }
                None => tracing::warn!(?index, "instruction state update for unknown index, dropped"),
            }
        }));

        let item = self.item.clone();
        dispatcher.set_variable_updated(Box::new(move |index, value, connected| {
            let mut item = item.lock();
            match item.variables.get_mut(index.get() as usize) {
                Some(variable) => {
                    if connected && !value.is_empty() {
                        variable.value = value;
                    }
                    variable.available = connected;
                }
                None => tracing::warn!(?index, "variable update for unknown index, dropped"),
            }
        }));

        let item = self.item.clone();
        dispatcher.set_job_state_changed(Box::new(move |state| {
            let mut item = item.lock();
            item.status = map_engine_to_runner_status(state);
            if state.is_finished() {
                item.current_active_breakpoint = None;
            }
        }));

        let log = self.log.clone();
        dispatcher.set_log(Box::new(move |severity, message| {
            log.lock().append(severity, message);
        }));

        // Highlighting the active branch is a graph-view concern (out of
        // scope here); the filter already collapsed this to the minimal
        // ancestor chain, so the handler has nothing further to record.
        dispatcher.set_active_instruction_changed(Box::new(move |_indices| {}));

        let item = self.item.clone();
        dispatcher.set_breakpoint_hit(Box::new(move |index| {
            item.lock().current_active_breakpoint = Some(index);
        }));
    }

    pub fn start(&self) -> bool {
        self.log.lock().clear();
        self.runner.start()
    }

    pub fn pause(&self) -> bool {
        self.runner.pause()
    }

    pub fn step(&self) -> bool {
        self.runner.step()
    }

    pub fn stop(&self) -> bool {
        self.item.lock().current_active_breakpoint = None;
        self.runner.stop()
    }

    pub fn reset(&self) -> bool {
        self.log.lock().clear();
        self.item.lock().current_active_breakpoint = None;
        self.runner.reset()
    }

    pub fn set_tick_timeout(&self, timeout: Duration) {
        self.runner.set_tick_timeout(timeout);
    }

    /// Arms or disarms a breakpoint in response to a UI toggle request.
    /// Rejected while the job is busy (testable property 6): breakpoints
    /// may only change while the engine is idle or finished.
    pub fn on_toggle_breakpoint_request(&self, index: InstructionIndex) -> Result<(), RuntimeError> {
        if self.item.lock().status.is_busy() {
            return Err(RuntimeError::BreakpointToggleRejected);
        }

        let currently_set = {
            let item = self.item.lock();
            item.expanded.get(index).is_some_and(|instruction| instruction.breakpoint_status == BreakpointStatus::Set)
        };

        let accepted = if currently_set { self.runner.remove_breakpoint(index) } else { self.runner.set_breakpoint(index) };

        if accepted {
            if let Some(instruction) = self.item.lock().expanded.get_mut(index) {
                instruction.breakpoint_status = if currently_set { BreakpointStatus::Unset } else { BreakpointStatus::Set };
            }
        }

        Ok(())
    }

    /// Services outstanding user prompts and drains the event queue into
    /// the dispatcher callbacks above. Called once per UI-domain wakeup.
    pub fn service_turn(&self) {
        self.runner.service_turn();
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
