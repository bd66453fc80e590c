// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `oac list`: recursively scan a directory for `.xml`-named demo
//! procedure files and report what each one declares, without running
//! anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use oac_sim::parse_demo_procedure;
use serde::Serialize;

use crate::output::{format_or_json, OutputFormat};

#[derive(Debug, Serialize)]
struct ProcedureSummary {
    path: String,
    variable_count: usize,
    instruction_count: usize,
    parse_error: Option<String>,
}

pub fn handle(root: &Path, format: OutputFormat) -> Result<()> {
    let files = find_procedure_files(root).with_context(|| format!("scanning {}", root.display()))?;
    let summaries: Vec<ProcedureSummary> = files.iter().map(|path| summarize(path)).collect();

    format_or_json(format, &summaries, || {
        if summaries.is_empty() {
            println!("No procedure files found under {}", root.display());
            return;
        }
        for summary in &summaries {
            match &summary.parse_error {
                None => println!(
                    "{}  ({} variables, {} instructions)",
                    crate::color::header(&summary.path),
                    summary.variable_count,
                    summary.instruction_count
                ),
                Some(err) => println!("{}  {}", crate::color::error(&summary.path), crate::color::muted(err)),
            }
        }
    })
}

fn summarize(path: &Path) -> ProcedureSummary {
    let display = path.display().to_string();
    match std::fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|source| {
        parse_demo_procedure(&source).map_err(anyhow::Error::from)
    }) {
        Ok(demo) => ProcedureSummary {
            path: display,
            variable_count: demo.workspace.len(),
            instruction_count: demo.root.flatten().len(),
            parse_error: None,
        },
        Err(err) => ProcedureSummary { path: display, variable_count: 0, instruction_count: 0, parse_error: Some(err.to_string()) },
    }
}

/// `.xml`-suffixed files directly in `root`, or under it if `root` is a
/// directory — one level of recursion, matching the demo's "point at a
/// directory of procedures" use case rather than a general file walker.
fn find_procedure_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    collect_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "xml") {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
