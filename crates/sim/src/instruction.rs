// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! Instruction tree executed by [`crate::job::SimJob`].
//!
//! Does not parse oac-tree XML — procedures are assembled
//! programmatically via [`SequenceBuilder`].

use std::time::Duration;

use oac_core::{InstructionIndex, VariableIndex};

/// One node in the instruction tree. `Sequence` is the only composite;
/// everything else is a leaf.
#[derive(Debug, Clone)]
pub enum Instruction {
    Sequence(Vec<Instruction>),
    Wait(Duration),
    Message(String),
    Copy { from: VariableIndex, to: VariableIndex },
    Input { target: VariableIndex },
}

impl Instruction {
    /// Flattens the tree into execution order, depth-first, assigning
    /// each leaf (and each `Sequence` node itself) the next
    /// [`InstructionIndex`]. Returns the flattened program alongside the
    /// root's index.
    pub fn flatten(&self) -> Vec<(InstructionIndex, Instruction)> {
        self.flatten_with_parents().0
    }

    /// Same traversal as [`Self::flatten`], additionally returning each
    /// instruction's parent index (`None` for the root), in index order.
    /// `oac-runtime`'s `AncestorsActiveFilter` walks this to
    /// decide which instructions share an ancestor with an active leaf.
    pub fn flatten_with_parents(&self) -> (Vec<(InstructionIndex, Instruction)>, Vec<Option<InstructionIndex>>) {
        let mut out = Vec::new();
        let mut parents = Vec::new();
        let mut next = 0u32;
        Self::flatten_into(self, &mut next, &mut out, &mut parents, None);
        (out, parents)
    }

    fn flatten_into(
        node: &Instruction,
        next: &mut u32,
        out: &mut Vec<(InstructionIndex, Instruction)>,
        parents: &mut Vec<Option<InstructionIndex>>,
        parent: Option<InstructionIndex>,
    ) {
        let index = InstructionIndex::new(*next);
        *next += 1;
        parents.push(parent);
        match node {
            Instruction::Sequence(children) => {
                out.push((index, Instruction::Sequence(Vec::new())));
                for child in children {
                    Self::flatten_into(child, next, out, parents, Some(index));
                }
            }
            leaf => out.push((index, leaf.clone())),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Instruction::Sequence(_))
    }

    /// The instruction's type name, projected onto
    /// `InstructionItem::type_name` by the expanded-procedure builder.
    pub fn type_name(&self) -> &'static str {
        match self {
            Instruction::Sequence(_) => "Sequence",
            Instruction::Wait(_) => "Wait",
            Instruction::Message(_) => "Message",
            Instruction::Copy { .. } => "Copy",
            Instruction::Input { .. } => "Input",
        }
    }
}

/// Builds a flat `Sequence` procedure without hand-assigning indices.
#[derive(Debug, Default, Clone)]
pub struct SequenceBuilder {
    children: Vec<Instruction>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait(mut self, duration: Duration) -> Self {
        self.children.push(Instruction::Wait(duration));
        self
    }

    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.children.push(Instruction::Message(text.into()));
        self
    }

    pub fn copy(mut self, from: VariableIndex, to: VariableIndex) -> Self {
        self.children.push(Instruction::Copy { from, to });
        self
    }

    pub fn input(mut self, target: VariableIndex) -> Self {
        self.children.push(Instruction::Input { target });
        self
    }

    pub fn build(self) -> Instruction {
        Instruction::Sequence(self.children)
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
