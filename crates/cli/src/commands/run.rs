// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `oac run`: submit a demo procedure file, drive it to completion from
//! this terminal, and print its event/log stream as it goes.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use oac_core::{AnyValue, InstructionIndex, RunnerStatus};
use oac_engine::EngineJob;
use oac_model::{JobManager, ProcedureSource, UiScheduler};
use oac_sim::{parse_demo_procedure, SimJob, SimWorkspace};

use crate::exit_error::ExitError;
use crate::output::{print_log_entry, OutputFormat};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn handle(path: &Path, format: OutputFormat, tick_timeout_ms: u64, breakpoints: &[u32]) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading procedure file {}", path.display()))?;
    let demo = parse_demo_procedure(&source).with_context(|| format!("parsing {}", path.display()))?;

    let display_name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "job".to_string());

    let scheduler = UiScheduler::new();
    let manager = JobManager::new(scheduler.handle());
    let workspace = Arc::new(SimWorkspace::with_values(demo.workspace.clone()));
    let root = demo.root;
    let proc_name = display_name.clone();

    let handler = manager.submit_local(display_name.clone(), ProcedureSource::File(path.to_path_buf()), {
        let workspace = workspace.clone();
        move |observer, flow| SimJob::new(proc_name, root, workspace, observer, flow) as Arc<dyn EngineJob>
    });

    handler.runner().set_user_value_dialog(Box::new(|_id, description, current| {
        prompt_for_value(description, current)
    }));

    if tick_timeout_ms > 0 {
        handler.set_tick_timeout(Duration::from_millis(tick_timeout_ms));
    }
    for index in breakpoints {
        handler
            .on_toggle_breakpoint_request(InstructionIndex::new(*index))
            .map_err(|e| ExitError::new(2, format!("arming breakpoint {index}: {e}")))?;
    }

    println!("{} {}", crate::color::header("submitted"), display_name);
    handler.start();

    let mut printed = 0usize;
    let mut last_breakpoint = None;
    loop {
        scheduler.drain();
        {
            let log = handler.log();
            let log = log.lock();
            for entry in log.entries().iter().skip(printed) {
                print_log_entry(format, entry);
            }
            printed = log.entries().len();
        }

        let active_breakpoint = handler.item().lock().current_active_breakpoint;
        if let Some(index) = active_breakpoint {
            if active_breakpoint != last_breakpoint {
                println!("{} at instruction {index}", crate::color::header("breakpoint hit"));
                handler.step();
            }
        }
        last_breakpoint = active_breakpoint;

        if handler.is_finished() && !handler.is_busy() {
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    let item = handler.item();
    let item = item.lock();
    println!("\n{} {:?}", crate::color::header("final status"), item.status);
    for variable in &item.variables {
        println!("  {} = {}", variable.name, variable.value);
    }

    let had_error = handler.log().lock().has_errors();
    if had_error || item.status == RunnerStatus::Stopped {
        return Err(ExitError::new(1, "job finished with errors").into());
    }
    Ok(())
}

/// A line-oriented stand-in for a real GUI's input dialog: reads one
/// line from stdin, parsed against the variable's current type so a
/// demo `.xml` file doesn't need to spell out a value's wire format.
fn prompt_for_value(description: &str, current: &AnyValue) -> AnyValue {
    print!("{} ({description}) > ", crate::color::muted("input requested"));
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return current.clone();
    }
    let line = line.trim();

    match current {
        AnyValue::Bool(_) => AnyValue::Bool(line == "true" || line == "1"),
        AnyValue::Int64(_) => line.parse().map(AnyValue::Int64).unwrap_or_else(|_| current.clone()),
        AnyValue::UInt64(_) => line.parse().map(AnyValue::UInt64).unwrap_or_else(|_| current.clone()),
        AnyValue::Float64(_) => line.parse().map(AnyValue::Float64).unwrap_or_else(|_| current.clone()),
        _ => AnyValue::String(line.to_string()),
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
