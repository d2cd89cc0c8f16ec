//! IR data structures.
//!
//! The in-memory program form the report engine walks:
//!
//! ```text
//! Module
//! └── Functions
//!     └── BasicBlocks
//!         └── Instructions
//! ```
//!
//! The engine itself only ever borrows these structures; it never creates
//! or mutates IR.

pub mod block;
pub mod function;
pub mod instruction;
pub mod module;
pub mod types;

pub use block::BasicBlock;
pub use function::{Function, Param};
pub use instruction::{Instruction, IntPredicate, Opcode};
pub use module::Module;
pub use types::Type;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value usable as an instruction operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Named local (e.g., %x) - an instruction result or a parameter
    Local(String),

    /// Unnamed SSA temporary (e.g., %3)
    Temp(u32),

    /// Constant integer
    ConstInt { value: i64, ty: Type },

    /// Constant boolean
    ConstBool(bool),

    /// Null pointer
    Null,

    /// Undefined value
    Undef,

    /// Global symbol reference (e.g., @main)
    Global(String),

    /// Basic block label (branch targets)
    Block(String),
}

impl Value {
    pub fn const_i32(value: i32) -> Self {
        Value::ConstInt {
            value: value as i64,
            ty: Type::Int(32),
        }
    }

    pub fn const_i64(value: i64) -> Self {
        Value::ConstInt {
            value,
            ty: Type::Int(64),
        }
    }

    pub fn local(name: impl Into<String>) -> Self {
        Value::Local(name.into())
    }

    pub fn global(name: impl Into<String>) -> Self {
        Value::Global(name.into())
    }

    pub fn block(name: impl Into<String>) -> Self {
        Value::Block(name.into())
    }

    /// The display name of a named value, if it carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Local(name) | Value::Global(name) | Value::Block(name) => Some(name),
            _ => None,
        }
    }

    /// Render without a leading type annotation. Used where the enclosing
    /// context already states the type (e.g. `ret i32 42`).
    pub fn bare(&self) -> String {
        match self {
            Value::ConstInt { value, .. } => value.to_string(),
            Value::ConstBool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Local(name) => write!(f, "%{}", name),
            Value::Temp(id) => write!(f, "%{}", id),
            Value::ConstInt { value, ty } => write!(f, "{} {}", ty, value),
            Value::ConstBool(b) => write!(f, "i1 {}", b),
            Value::Null => write!(f, "ptr null"),
            Value::Undef => write!(f, "undef"),
            Value::Global(name) => write!(f, "@{}", name),
            Value::Block(name) => write!(f, "%{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::local("sum").to_string(), "%sum");
        assert_eq!(Value::Temp(7).to_string(), "%7");
        assert_eq!(Value::const_i32(42).to_string(), "i32 42");
        assert_eq!(Value::ConstBool(true).to_string(), "i1 true");
        assert_eq!(Value::Null.to_string(), "ptr null");
        assert_eq!(Value::global("printf").to_string(), "@printf");
    }

    #[test]
    fn test_value_name() {
        assert_eq!(Value::local("x").name(), Some("x"));
        assert_eq!(Value::Temp(0).name(), None);
        assert_eq!(Value::const_i64(1).name(), None);
    }
}
