// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `AncestorsActiveFilter`: collapses the instruction-state
//! notification volume on deep trees by reporting, for each instruction
//! that just changed state, the chain of itself plus all of its
//! ancestors — the minimal path the UI needs to highlight the active
//! branch of the expanded procedure, rather than every leaf in
//! isolation.

use std::collections::BTreeSet;

use oac_core::InstructionIndex;
use oac_engine::ActiveInstructionFilter;

/// Builds an [`ActiveInstructionFilter`] from the engine's instruction
/// graph, given as a parent-of-each-index table (`JobInfo::parents`,
/// `None` for a root). A runner installs this via
/// `DomainRunner::set_instruction_active_filter` once a job's
/// `JobInfo` is available.
pub fn ancestors_active_filter(parents: Vec<Option<InstructionIndex>>) -> ActiveInstructionFilter {
    Box::new(move |indices: &[InstructionIndex]| {
        let mut seen = BTreeSet::new();
        for &leaf in indices {
            let mut current = Some(leaf);
            while let Some(index) = current {
                if !seen.insert(index) {
                    // this index and everything above it are already in
                    // the set from a previous leaf in this batch.
                    break;
                }
                current = parents.get(index.get() as usize).copied().flatten();
            }
        }
        seen.into_iter().collect()
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
