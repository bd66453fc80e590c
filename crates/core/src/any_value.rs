// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `AnyValue` — the dynamically-typed, value-semantic payload carried by
//! workspace variables and instruction arguments.
//!
//! Mirrors the role of `sup::dto::AnyValue` in the real oac-tree: a small
//! recursive value type, cheap to clone and safe to copy across threads
//! inside a [`crate::event::DomainEvent`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AnyValue {
    Empty,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
    Struct(Vec<(String, AnyValue)>),
    Array(Vec<AnyValue>),
}

impl AnyValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, AnyValue::Empty)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnyValue::Int64(v) => Some(*v),
            AnyValue::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AnyValue::UInt64(v) => Some(*v),
            AnyValue::Int64(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Looks up a field by name on a `Struct` variant.
    pub fn field(&self, name: &str) -> Option<&AnyValue> {
        match self {
            AnyValue::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Bool(value)
    }
}

impl From<i64> for AnyValue {
    fn from(value: i64) -> Self {
        AnyValue::Int64(value)
    }
}

impl From<u64> for AnyValue {
    fn from(value: u64) -> Self {
        AnyValue::UInt64(value)
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::String(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::String(value)
    }
}

impl std::fmt::Display for AnyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyValue::Empty => write!(f, "<empty>"),
            AnyValue::Bool(v) => write!(f, "{v}"),
            AnyValue::Int64(v) => write!(f, "{v}"),
            AnyValue::UInt64(v) => write!(f, "{v}"),
            AnyValue::Float64(v) => write!(f, "{v}"),
            AnyValue::String(v) => write!(f, "{v}"),
            AnyValue::Struct(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
            AnyValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
#[path = "any_value_tests.rs"]
mod tests;
