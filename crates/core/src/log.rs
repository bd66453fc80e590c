// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job log records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
}

crate::simple_display! {
    LogSeverity {
        Info => "info",
        Warning => "warning",
        Error => "error",
    }
}

/// One append-only entry in a job's log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: LogSeverity,
    pub message: String,
    /// Milliseconds since the job log was created. Not a wall-clock
    /// timestamp — the enclosing job log stamps this at `append` time.
    pub timestamp_ms: u64,
}

impl LogRecord {
    pub fn new(severity: LogSeverity, message: impl Into<String>, timestamp_ms: u64) -> Self {
        Self { severity, message: message.into(), timestamp_ms }
    }
}
