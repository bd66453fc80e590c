// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `SimWorkspace`: a name-indexed variable store implementing
//! [`DomainWorkspace`], the workspace collaborator consumed by
//! `oac-model`'s synchronizer.

use std::collections::HashMap;
use std::sync::Arc;

use oac_core::{AnyValue, WorkspaceError};
use oac_engine::{CallbackGuard, DomainWorkspace, VarUpdateFn};
use parking_lot::Mutex;

struct Subscriber {
    id: u64,
    callback: VarUpdateFn,
}

struct Inner {
    values: HashMap<String, AnyValue>,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: u64,
    setup: bool,
}

/// In-memory workspace backing `oac-sim`'s jobs. `is_successfully_setup`
/// starts false, matching the contract that the collaborator performs
/// its own setup once the synchronizer subscribes.
///
/// The inner state lives behind an `Arc` so [`CallbackGuard`]s returned
/// by `register_callback` can unregister themselves without borrowing
/// back into `SimWorkspace` itself.
pub struct SimWorkspace {
    inner: Arc<Mutex<Inner>>,
}

impl SimWorkspace {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                values: HashMap::new(),
                subscribers: Vec::new(),
                next_subscriber_id: 0,
                setup: false,
            })),
        }
    }

    pub fn with_values(values: impl IntoIterator<Item = (String, AnyValue)>) -> Self {
        let workspace = Self::new();
        workspace.inner.lock().values.extend(values);
        workspace
    }

    pub fn get(&self, name: &str) -> Option<AnyValue> {
        self.inner.lock().values.get(name).cloned()
    }

    /// Names in `var0, var1, ...` order. `Copy`/`Input` instructions
    /// address a variable by formatting its `VariableIndex` into this
    /// same naming scheme, so the order here must line up positionally —
    /// a plain `HashMap` key iteration would not.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.lock().values.keys().cloned().collect();
        names.sort_by_key(|name| name.strip_prefix("var").and_then(|suffix| suffix.parse::<u32>().ok()));
        names
    }

    /// Writes `value` under `name` from the engine side and notifies
    /// subscribers with `connected = true`. Used internally by
    /// [`crate::job::SimJob`]'s `Copy`/`Input` instructions.
    pub fn set_from_engine(&self, name: &str, value: AnyValue) {
        let mut guard = self.inner.lock();
        guard.values.insert(name.to_string(), value.clone());
        for subscriber in &mut guard.subscribers {
            (subscriber.callback)(name, &value, true);
        }
    }
}

impl Default for SimWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainWorkspace for SimWorkspace {
    fn register_callback(&self, cb: VarUpdateFn) -> CallbackGuard {
        let mut guard = self.inner.lock();
        let id = guard.next_subscriber_id;
        guard.next_subscriber_id += 1;
        guard.subscribers.push(Subscriber { id, callback: cb });
        guard.setup = true;

        let inner = self.inner.clone();
        CallbackGuard::new(Box::new(move || {
            inner.lock().subscribers.retain(|s| s.id != id);
        }))
    }

    fn is_successfully_setup(&self) -> bool {
        self.inner.lock().setup
    }

    fn set_value(&self, name: &str, value: AnyValue) -> Result<(), WorkspaceError> {
        let mut guard = self.inner.lock();
        if !guard.values.contains_key(name) {
            return Err(WorkspaceError::UnknownVariable(name.to_string()));
        }
        guard.values.insert(name.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
