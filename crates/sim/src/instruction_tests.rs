// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use super::*;
use oac_core::VariableIndex;
use std::time::Duration;

#[test]
fn flatten_assigns_indices_depth_first() {
    let program = SequenceBuilder::new()
        .message("hello")
        .wait(Duration::from_millis(1))
        .build();

    let flat = program.flatten();
    assert_eq!(flat.len(), 3);
    assert_eq!(flat[0].0.get(), 0);
    assert!(flat[0].1.is_sequence());
    assert_eq!(flat[1].0.get(), 1);
    assert_eq!(flat[2].0.get(), 2);
}

#[test]
fn nested_sequences_flatten_in_order() {
    let inner = Instruction::Sequence(vec![Instruction::Message("inner".to_string())]);
    let program = Instruction::Sequence(vec![
        Instruction::Message("outer-first".to_string()),
        inner,
        Instruction::Message("outer-last".to_string()),
    ]);

    let flat = program.flatten();
    // root sequence, outer-first, inner sequence, inner message, outer-last
    assert_eq!(flat.len(), 5);
    assert_eq!(flat[0].0.get(), 0);
    assert_eq!(flat[2].0.get(), 2);
    assert!(flat[2].1.is_sequence());
}

#[test]
fn copy_and_input_carry_variable_indices() {
    let from = VariableIndex::new(0);
    let to = VariableIndex::new(1);
    let program = SequenceBuilder::new().copy(from, to).input(to).build();
    let flat = program.flatten();
    match &flat[1].1 {
        Instruction::Copy { from: f, to: t } => {
            assert_eq!(*f, from);
            assert_eq!(*t, to);
        }
        other => panic!("expected Copy, got {other:?}"),
    }
}
