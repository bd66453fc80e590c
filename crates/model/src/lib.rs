// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oac-model: UI-domain item types plus the components that keep them in
//! sync with a running job.
//!
//! [`items`] holds the job/instruction/variable item tree;
//! [`job_log`] and [`index_map`] are the small structures a handler owns
//! exclusively; [`ui_loop`] is the concrete `schedule_on_ui` primitive;
//! [`handler`] is the job handler, [`manager`] is the job manager, and
//! [`workspace_sync`] is the workspace synchronizer.

pub mod handler;
pub mod index_map;
pub mod items;
pub mod job_log;
pub mod manager;
pub mod ui_loop;
pub mod workspace_sync;

pub use handler::JobHandler;
pub use index_map::IndexItemMap;
pub use items::{InstructionItem, JobItem, ProcedureSource, VariableItem};
pub use job_log::JobLog;
pub use manager::JobManager;
pub use ui_loop::{UiScheduler, UiSchedulerHandle};
pub use workspace_sync::WorkspaceSynchronizer;
