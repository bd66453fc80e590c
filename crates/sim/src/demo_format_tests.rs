// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use std::time::Duration;

use oac_core::{AnyValue, VariableIndex};

use super::*;

#[test]
fn parses_the_module_doc_example() {
    let source = r#"
        (workspace
          (var0 uint 42)
          (var1 uint 0))
        (procedure
          (sequence
            (wait 50)
            (message "copying var0 into var1")
            (copy var0 var1)))
    "#;

    let parsed = parse_demo_procedure(source).expect("valid source parses");
    assert_eq!(parsed.workspace, vec![
        ("var0".to_string(), AnyValue::UInt64(42)),
        ("var1".to_string(), AnyValue::UInt64(0)),
    ]);

    let Instruction::Sequence(children) = parsed.root else {
        panic!("expected a sequence root");
    };
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], Instruction::Wait(d) if d == Duration::from_millis(50)));
    assert!(matches!(&children[1], Instruction::Message(text) if text == "copying var0 into var1"));
    assert!(matches!(
        children[2],
        Instruction::Copy { from, to } if from == VariableIndex::new(0) && to == VariableIndex::new(1)
    ));
}

#[test]
fn supports_bool_int_and_empty_value_kinds() {
    let source = r#"
        (workspace
          (var0 bool true)
          (var1 int -7)
          (var2 empty ()))
        (procedure (sequence (input var2)))
    "#;
    let parsed = parse_demo_procedure(source).expect("valid source parses");
    assert_eq!(parsed.workspace[0].1, AnyValue::Bool(true));
    assert_eq!(parsed.workspace[1].1, AnyValue::Int64(-7));
    assert_eq!(parsed.workspace[2].1, AnyValue::Empty);
}

#[test]
fn rejects_a_workspace_entry_whose_name_does_not_match_its_position() {
    let source = r#"
        (workspace
          (counter uint 0))
        (procedure (sequence (message "hi")))
    "#;
    let err = parse_demo_procedure(source).unwrap_err();
    assert_eq!(err, DemoFormatError::VariableNamingConvention("counter".to_string(), 0));
}

#[test]
fn rejects_an_instruction_referencing_an_undeclared_variable() {
    let source = r#"
        (workspace (var0 uint 0))
        (procedure (sequence (copy var0 var1)))
    "#;
    let err = parse_demo_procedure(source).unwrap_err();
    assert_eq!(err, DemoFormatError::UndeclaredVariable("var1".to_string()));
}

#[test]
fn rejects_missing_workspace_or_procedure_blocks() {
    assert_eq!(
        parse_demo_procedure("(procedure (sequence (message \"hi\")))").unwrap_err(),
        DemoFormatError::MissingWorkspaceBlock
    );
    assert_eq!(
        parse_demo_procedure("(workspace (var0 uint 0))").unwrap_err(),
        DemoFormatError::MissingProcedureBlock
    );
}

#[test]
fn rejects_unbalanced_parens() {
    assert_eq!(
        parse_demo_procedure("(workspace (var0 uint 0)").unwrap_err(),
        DemoFormatError::UnexpectedEof
    );
    assert_eq!(
        parse_demo_procedure("(workspace (var0 uint 0)))").unwrap_err(),
        DemoFormatError::UnmatchedCloseParen
    );
}

#[test]
fn skips_semicolon_comments() {
    let source = r#"
        ; a demo procedure
        (workspace (var0 uint 1)) ; one counter
        (procedure (sequence (message "hi")))
    "#;
    let parsed = parse_demo_procedure(source).expect("comments do not break parsing");
    assert_eq!(parsed.workspace, vec![("var0".to_string(), AnyValue::UInt64(1))]);
}
