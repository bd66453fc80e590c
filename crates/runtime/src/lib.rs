// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oac-runtime: the domain runner — the façade a job handler drives
//! instead of talking to an `EngineJob` directly.
//!
//! [`DomainRunner`] is a trait, not a base class:
//! [`local::LocalDomainRunner`] wraps an in-process
//! `EngineJob` (e.g. `oac-sim`'s `SimJob`), [`remote::RemoteDomainRunner`]
//! proxies one over a [`remote::RemoteJobManagerClient`] transport built
//! on [`oac_wire`]'s command/event vocabulary. Both are handed to
//! `oac-model`'s job handler behind `Arc<dyn DomainRunner>`.

pub mod contracts;
pub mod filter;
pub mod local;
pub mod remote;

pub use contracts::DomainRunner;
pub use filter::ancestors_active_filter;
pub use local::LocalDomainRunner;
pub use remote::{RemoteConnectError, RemoteDomainRunner, RemoteJobManagerClient};
