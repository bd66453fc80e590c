// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! A tiny, internal s-expression-like procedure format, `.xml`-suffixed
//! only by convention so the demo CLI can point at a
//! directory of "procedures" the way a real oac-tree deployment would —
//! this is emphatically not the real oac-tree XML grammar.
//!
//! ```text
//! (workspace
//!   (var0 uint 42)
//!   (var1 uint 0))
//! (procedure
//!   (sequence
//!     (wait 50)
//!     (message "copying var0 into var1")
//!     (copy var0 var1)))
//! ```

use std::time::Duration;

use oac_core::{AnyValue, VariableIndex};
use thiserror::Error;

use crate::instruction::Instruction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DemoFormatError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unmatched ')'")]
    UnmatchedCloseParen,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("expected a '(workspace ...)' block first")]
    MissingWorkspaceBlock,
    #[error("expected a '(procedure ...)' block")]
    MissingProcedureBlock,
    #[error("unknown instruction form: {0}")]
    UnknownInstruction(String),
    #[error("unknown value type: {0}")]
    UnknownValueType(String),
    #[error("malformed '{0}' form")]
    Malformed(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("variable referenced before it was declared in the workspace block: {0}")]
    UndeclaredVariable(String),
    #[error("workspace entry '{0}' must be named 'var{1}' to match its declaration position")]
    VariableNamingConvention(String, usize),
}

#[derive(Debug, Clone, PartialEq)]
enum Sexpr {
    Atom(String),
    Str(String),
    List(Vec<Sexpr>),
}

fn tokenize(input: &str) -> Result<Vec<Sexpr>, DemoFormatError> {
    let mut chars = input.chars().peekable();
    let mut stack: Vec<Vec<Sexpr>> = vec![Vec::new()];

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            ';' => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '(' => {
                chars.next();
                stack.push(Vec::new());
            }
            ')' => {
                chars.next();
                let finished = stack.pop().ok_or(DemoFormatError::UnmatchedCloseParen)?;
                let top = stack.last_mut().ok_or(DemoFormatError::UnmatchedCloseParen)?;
                top.push(Sexpr::List(finished));
            }
            '"' => {
                chars.next();
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => text.push(escaped),
                            None => return Err(DemoFormatError::UnterminatedString),
                        },
                        Some(c) => text.push(c),
                        None => return Err(DemoFormatError::UnterminatedString),
                    }
                }
                stack.last_mut().expect("root frame always present").push(Sexpr::Str(text));
            }
            _ => {
                let mut atom = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    atom.push(c);
                    chars.next();
                }
                stack.last_mut().expect("root frame always present").push(Sexpr::Atom(atom));
            }
        }
    }

    if stack.len() != 1 {
        return Err(DemoFormatError::UnexpectedEof);
    }
    Ok(stack.pop().expect("checked len == 1"))
}

/// A parsed demo procedure: initial workspace contents plus the
/// instruction tree to run against it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoProcedure {
    pub workspace: Vec<(String, AnyValue)>,
    pub root: Instruction,
}

/// Parses the tiny demo format described in this module's docs.
pub fn parse_demo_procedure(source: &str) -> Result<DemoProcedure, DemoFormatError> {
    let top_level = tokenize(source)?;

    let workspace_block = top_level
        .iter()
        .find_map(|form| as_tagged_list(form, "workspace"))
        .ok_or(DemoFormatError::MissingWorkspaceBlock)?;
    let procedure_block = top_level
        .iter()
        .find_map(|form| as_tagged_list(form, "procedure"))
        .ok_or(DemoFormatError::MissingProcedureBlock)?;

    let workspace = parse_workspace(workspace_block)?;
    let names: Vec<&str> = workspace.iter().map(|(name, _)| name.as_str()).collect();

    let root_form = procedure_block.first().ok_or(DemoFormatError::Malformed("procedure"))?;
    let root = parse_instruction(root_form, &names)?;

    Ok(DemoProcedure { workspace, root })
}

fn as_tagged_list<'a>(form: &'a Sexpr, tag: &str) -> Option<&'a [Sexpr]> {
    match form {
        Sexpr::List(items) => match items.first() {
            Some(Sexpr::Atom(head)) if head == tag => Some(&items[1..]),
            _ => None,
        },
        _ => None,
    }
}

/// `SimJob` derives a `Copy`/`Input` instruction's workspace key from its
/// `VariableIndex` alone (`format!("var{index}")`), not from whatever
/// name a caller used when building the workspace — so a declaration
/// order must line up with that naming scheme or instructions would
/// silently address the wrong slot. Enforced here rather than left as a
/// trap for procedure authors.
fn parse_workspace(entries: &[Sexpr]) -> Result<Vec<(String, AnyValue)>, DemoFormatError> {
    let workspace: Vec<(String, AnyValue)> = entries.iter().map(parse_workspace_entry).collect::<Result<_, _>>()?;
    for (position, (name, _)) in workspace.iter().enumerate() {
        let expected = format!("var{position}");
        if *name != expected {
            return Err(DemoFormatError::VariableNamingConvention(name.clone(), position));
        }
    }
    Ok(workspace)
}

fn parse_workspace_entry(entry: &Sexpr) -> Result<(String, AnyValue), DemoFormatError> {
    let Sexpr::List(fields) = entry else {
        return Err(DemoFormatError::Malformed("workspace entry"));
    };
    let [Sexpr::Atom(name), Sexpr::Atom(kind), value] = fields.as_slice() else {
        return Err(DemoFormatError::Malformed("workspace entry"));
    };
    let value = parse_value(kind, value)?;
    Ok((name.clone(), value))
}

fn parse_value(kind: &str, value: &Sexpr) -> Result<AnyValue, DemoFormatError> {
    match (kind, value) {
        ("uint", Sexpr::Atom(text)) => {
            text.parse::<u64>().map(AnyValue::UInt64).map_err(|_| DemoFormatError::InvalidNumber(text.clone()))
        }
        ("int", Sexpr::Atom(text)) => {
            text.parse::<i64>().map(AnyValue::Int64).map_err(|_| DemoFormatError::InvalidNumber(text.clone()))
        }
        ("bool", Sexpr::Atom(text)) => Ok(AnyValue::Bool(text == "true")),
        ("string", Sexpr::Str(text)) => Ok(AnyValue::String(text.clone())),
        ("empty", _) => Ok(AnyValue::Empty),
        (other, _) => Err(DemoFormatError::UnknownValueType(other.to_string())),
    }
}

fn var_index(names: &[&str], name: &str) -> Result<VariableIndex, DemoFormatError> {
    names
        .iter()
        .position(|candidate| *candidate == name)
        .map(|position| VariableIndex::new(position as u32))
        .ok_or_else(|| DemoFormatError::UndeclaredVariable(name.to_string()))
}

fn parse_instruction(form: &Sexpr, names: &[&str]) -> Result<Instruction, DemoFormatError> {
    let Sexpr::List(items) = form else {
        return Err(DemoFormatError::Malformed("instruction"));
    };
    let Some(Sexpr::Atom(head)) = items.first() else {
        return Err(DemoFormatError::Malformed("instruction"));
    };
    let rest = &items[1..];

    match head.as_str() {
        "sequence" => {
            let children = rest.iter().map(|child| parse_instruction(child, names)).collect::<Result<_, _>>()?;
            Ok(Instruction::Sequence(children))
        }
        "wait" => match rest {
            [Sexpr::Atom(ms)] => {
                let ms: u64 = ms.parse().map_err(|_| DemoFormatError::InvalidNumber(ms.clone()))?;
                Ok(Instruction::Wait(Duration::from_millis(ms)))
            }
            _ => Err(DemoFormatError::Malformed("wait")),
        },
        "message" => match rest {
            [Sexpr::Str(text)] => Ok(Instruction::Message(text.clone())),
            _ => Err(DemoFormatError::Malformed("message")),
        },
        "copy" => match rest {
            [Sexpr::Atom(from), Sexpr::Atom(to)] => {
                Ok(Instruction::Copy { from: var_index(names, from)?, to: var_index(names, to)? })
            }
            _ => Err(DemoFormatError::Malformed("copy")),
        },
        "input" => match rest {
            [Sexpr::Atom(target)] => Ok(Instruction::Input { target: var_index(names, target)? }),
            _ => Err(DemoFormatError::Malformed("input")),
        },
        other => Err(DemoFormatError::UnknownInstruction(other.to_string())),
    }
}

#[cfg(test)]
#[path = "demo_format_tests.rs"]
mod tests;
