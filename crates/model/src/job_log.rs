// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Job log: an append-only, clearable, memory-only
//! sequence owned exclusively by a [`crate::handler::JobHandler`].

use std::time::Instant;

use oac_core::{LogRecord, LogSeverity};

/// Timestamps are milliseconds since the log was created, not wall
/// clock — cheap, monotonic, and sufficient for the ordering the UI
/// displays entries in.
pub struct JobLog {
    created: Instant,
    entries: Vec<LogRecord>,
}

impl JobLog {
    pub fn new() -> Self {
        Self { created: Instant::now(), entries: Vec::new() }
    }

    pub fn append(&mut self, severity: LogSeverity, message: impl Into<String>) {
        let timestamp_ms = self.created.elapsed().as_millis() as u64;
        self.entries.push(LogRecord::new(severity, message, timestamp_ms));
    }

    pub fn entries(&self) -> &[LogRecord] {
        &self.entries
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|entry| entry.severity == LogSeverity::Error)
    }

    /// Discards every entry. Called when a job (re)starts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for JobLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "job_log_tests.rs"]
mod tests;
