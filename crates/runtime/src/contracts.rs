// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Domain runner contract.
//!
//! A trait object boundary rather than a class hierarchy with local and
//! remote subclasses: a remote runner genuinely needs a different
//! transport, and swapping at runtime without a tagged enum is the more
//! natural Rust shape.

use std::time::Duration;

use oac_core::{InstructionIndex, JobState};
use oac_engine::{ActiveInstructionFilter, EventDispatcher, JobInfo, JobObserver, UserChoiceDialog, UserValueDialog};
use parking_lot::Mutex;

/// Façade a job handler drives in place of talking to an
/// `EngineJob` directly. One instance per job.
pub trait DomainRunner: Send + Sync {
    fn start(&self) -> bool;
    fn stop(&self) -> bool;
    fn pause(&self) -> bool;
    fn step(&self) -> bool;
    fn reset(&self) -> bool;
    fn set_breakpoint(&self, index: InstructionIndex) -> bool;
    fn remove_breakpoint(&self, index: InstructionIndex) -> bool;

    /// The engine-facing observer handle, exposed as a `job_info_io()`
    /// delegate. Job handlers do not normally need this
    /// directly — dispatcher registration and service ticks go through
    /// [`Self::dispatcher`] and [`Self::service_turn`] instead.
    fn job_info_io(&self) -> std::sync::Arc<JobObserver>;

    fn job_state(&self) -> JobState;
    fn wait_for_finished(&self);
    fn wait_for_state(&self, state: JobState, timeout: Duration) -> bool;

    fn is_finished(&self) -> bool {
        self.job_state().is_finished()
    }

    /// Busy ≡ {Paused, Stepping, Running}.
    fn is_busy(&self) -> bool {
        self.job_state().is_busy()
    }

    fn set_tick_timeout(&self, timeout: Duration);
    fn event_count(&self) -> usize;
    fn job_info(&self) -> JobInfo;

    /// The dispatcher a job handler registers its six event callbacks
    /// on.
    fn dispatcher(&self) -> &Mutex<EventDispatcher>;

    /// Services outstanding user prompts and drains the event queue into
    /// the dispatcher. Called once per UI-domain wakeup.
    fn service_turn(&self);

    fn set_user_value_dialog(&self, dialog: UserValueDialog);
    fn set_user_choice_dialog(&self, dialog: UserChoiceDialog);
    fn set_instruction_active_filter(&self, filter: ActiveInstructionFilter);
}
