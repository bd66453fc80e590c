// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oac-engine: the thread-safe bridge between a multi-threaded
//! automation engine and a single-threaded UI domain.
//!
//! [`queue::EventQueue`] and [`dispatcher::EventDispatcher`] form the
//! typed event pipeline; [`flow_controller::FlowController`] paces
//! engine ticks; [`request_reply::RequestReplyBridge`] backs blocking UI
//! prompts; [`observer::JobObserver`] implements the engine's
//! notification contract; [`service::JobService`] wires the queue,
//! dispatcher, and observer into one UI-domain entry point.
//! [`contracts`] defines the `EngineJob`/`EngineObserver` traits a
//! concrete automation engine (see `oac-sim`) implements.

pub mod contracts;
pub mod dispatcher;
pub mod flow_controller;
pub mod observer;
pub mod queue;
pub mod request_reply;
pub mod service;

pub use contracts::{CallbackGuard, DomainWorkspace, EngineJob, EngineObserver, JobInfo, VarUpdateFn};
pub use dispatcher::EventDispatcher;
pub use flow_controller::FlowController;
pub use observer::{ActiveInstructionFilter, JobObserver, UserChoiceDialog, UserValueDialog};
pub use queue::{EventQueue, WakeFn};
pub use request_reply::RequestReplyBridge;
pub use service::JobService;
