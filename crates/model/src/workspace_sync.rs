// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Workspace synchronizer: the bidirectional bridge
//! between a domain workspace and a job item's variable list.
//!
//! Reuses the same queue-plus-wakeup contract as the event pipeline rather than a
//! bespoke channel: a domain-side update arrives on whatever thread the
//! workspace calls its callback from, is pushed onto an [`EventQueue`],
//! and is drained onto the matching [`crate::items::VariableItem`] on the
//! next UI-domain wakeup. UI-side edits go the other way, straight to
//! [`DomainWorkspace::set_value`] — the domain workspace owns its own
//! thread-safety for writes, unlike the read path, so no queue is needed
//! there.

use std::collections::HashMap;
use std::sync::Arc;

use oac_core::{AnyValue, DomainEvent, VariableIndex, WorkspaceError};
use oac_engine::{CallbackGuard, DomainWorkspace, EventQueue, WakeFn};
use parking_lot::Mutex;

use crate::items::JobItem;

/// Bridges one job's domain workspace to its [`JobItem`]'s variable list.
///
/// Invariant: the GUI and domain workspaces must already
/// agree on variable names — `name_to_index` is captured once, from the
/// `JobItem`'s variables at construction time, and never grows. A domain
/// update for a name outside that set is logged and dropped, the same
/// policy the job handler uses for an unknown instruction index.
pub struct WorkspaceSynchronizer {
    item: Arc<Mutex<JobItem>>,
    workspace: Arc<dyn DomainWorkspace>,
    queue: Arc<EventQueue>,
    name_to_index: HashMap<String, VariableIndex>,
    guard: Mutex<Option<CallbackGuard>>,
    started: Mutex<bool>,
}

impl WorkspaceSynchronizer {
    /// Builds a synchronizer for `item`'s current variable set. Does not
    /// subscribe yet — call [`Self::start`] once the domain workspace is
    /// ready to be monitored.
    pub fn new(item: Arc<Mutex<JobItem>>, workspace: Arc<dyn DomainWorkspace>, wake: Option<WakeFn>) -> Self {
        let queue = Arc::new(match wake {
            Some(wake) => EventQueue::with_wake(wake),
            None => EventQueue::new(),
        });
        let name_to_index = {
            let item = item.lock();
            item.variables
                .iter()
                .enumerate()
                .map(|(position, variable)| (variable.name.clone(), VariableIndex::new(position as u32)))
                .collect()
        };
        Self { item, workspace, queue, name_to_index, guard: Mutex::new(None), started: Mutex::new(false) }
    }

    /// Subscribes to the domain workspace's variable-update channel.
    /// Idempotent: calling this again first drops the previous
    /// subscription.
    pub fn start(&self) {
        let queue = self.queue.clone();
        let name_to_index = self.name_to_index.clone();
        let guard = self.workspace.register_callback(Box::new(move |name, value, connected| {
            match name_to_index.get(name) {
                Some(&index) => {
                    queue.push(DomainEvent::VariableUpdated { index, value: value.clone(), connected });
                }
                None => tracing::warn!(name, "workspace update for unknown variable, dropped"),
            }
        }));
        *self.guard.lock() = Some(guard);
        *self.started.lock() = true;
    }

    /// Drains pending domain-side updates onto the job item's variables.
    /// Called once per UI-domain wakeup, the same contract as
    /// [`crate::handler::JobHandler::service_turn`].
    pub fn service_turn(&self) {
        loop {
            let event = self.queue.pop();
            let DomainEvent::VariableUpdated { index, value, connected } = event else {
                break;
            };
            let mut item = self.item.lock();
            match item.variables.get_mut(index.get() as usize) {
                Some(variable) => {
                    variable.value = value;
                    variable.available = connected;
                }
                None => tracing::warn!(?index, "variable update for unknown index, dropped"),
            }
        }
    }

    /// Propagates a UI-side edit of `name` to the domain workspace. Fails
    /// fast with [`WorkspaceError::SetupIncomplete`] if synchronization
    /// has not started or the domain workspace has not finished its own
    /// setup yet — never queues the write for
    /// later.
    pub fn set_from_ui(&self, name: &str, value: AnyValue) -> Result<(), WorkspaceError> {
        if !*self.started.lock() || !self.workspace.is_successfully_setup() {
            return Err(WorkspaceError::SetupIncomplete);
        }
        self.workspace.set_value(name, value)
    }

    /// Drops the subscription and marks every variable unavailable, e.g.
    /// when the job is removed or the workspace connection is lost.
    pub fn shutdown(&self) {
        *self.guard.lock() = None;
        *self.started.lock() = false;
        let mut item = self.item.lock();
        for variable in &mut item.variables {
            variable.available = false;
        }
    }
}

#[cfg(test)]
#[path = "workspace_sync_tests.rs"]
mod tests;
