// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Output formatting shared by the command handlers.

use clap::ValueEnum;
use oac_core::{LogRecord, LogSeverity};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print one job-log entry. Text mode colors by severity; JSON mode
/// emits one object per line (JSON Lines) so a `run --output json`
/// session can be streamed through `jq` while the job is still going.
pub fn print_log_entry(format: OutputFormat, entry: &LogRecord) {
    match format {
        OutputFormat::Text => {
            let prefix = match entry.severity {
                LogSeverity::Info => crate::color::muted("info"),
                LogSeverity::Warning => crate::color::header("warn"),
                LogSeverity::Error => crate::color::error("error"),
            };
            println!("[{:>6}ms] {prefix}: {}", entry.timestamp_ms, entry.message);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(entry).unwrap_or_default());
        }
    }
}

/// Render a value as pretty JSON or via `text_fn`, the same
/// format-branch shape every command handler uses.
pub fn format_or_json<T: Serialize>(format: OutputFormat, data: &T, text_fn: impl FnOnce()) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => text_fn(),
    }
    Ok(())
}
