// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Error taxonomy.
//!
//! `EngineError`/`TransportError` are not distinct Rust types here: the
//! engine thread never throws across the observer boundary — failures
//! always arrive as a `Log{Error, ..}` event followed by a
//! `JobStateChanged{Failed}`. Only precondition violations raised
//! synchronously from a UI-domain entry point get a `RuntimeError`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("job not initialized")]
    JobNotInitialized,

    #[error("workspace/item mismatch: {0}")]
    WorkspaceItemMismatch(String),

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("no source procedure to regenerate from")]
    NoSourceProcedure,

    #[error("handler is busy, stop the job before removing it")]
    HandlerBusy,

    #[error("breakpoint toggle rejected while job is running")]
    BreakpointToggleRejected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("domain workspace setup incomplete")]
    SetupIncomplete,
}
