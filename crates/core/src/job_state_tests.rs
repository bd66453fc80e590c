// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use super::*;
use yare::parameterized;

#[parameterized(
    paused = { JobState::Paused, true, false },
    stepping = { JobState::Stepping, true, false },
    running = { JobState::Running, true, false },
    succeeded = { JobState::Succeeded, false, true },
    failed = { JobState::Failed, false, true },
    halted = { JobState::Halted, false, true },
    initial = { JobState::Initial, false, false },
)]
fn busy_finished_partition(state: JobState, busy: bool, finished: bool) {
    assert_eq!(state.is_busy(), busy);
    assert_eq!(state.is_finished(), finished);
    // property 5: busy and finished are never simultaneously true
    assert!(!(state.is_busy() && state.is_finished()));
}

#[parameterized(
    initial = { JobState::Initial, RunnerStatus::Idle },
    paused = { JobState::Paused, RunnerStatus::Paused },
    stepping = { JobState::Stepping, RunnerStatus::Stepping },
    running = { JobState::Running, RunnerStatus::Running },
    succeeded = { JobState::Succeeded, RunnerStatus::Completed },
    failed = { JobState::Failed, RunnerStatus::Stopped },
    halted = { JobState::Halted, RunnerStatus::Stopped },
)]
fn mapping_is_total_and_stable(engine: JobState, expected: RunnerStatus) {
    assert_eq!(map_engine_to_runner_status(engine), expected);
}
