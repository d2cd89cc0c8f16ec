//! IR type system.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Void type
    Void,

    /// Integer type with bit width (e.g., i1, i8, i32, i64)
    Int(u32),

    /// Floating point type with bit width (32 or 64)
    Float(u32),

    /// Pointer type (opaque, no pointee)
    Ptr,

    /// Array type [N x T]
    Array(usize, Box<Type>),

    /// Struct type { T1, T2, ... }
    Struct(Vec<Type>),

    /// Named struct with no body; has no computable size
    Opaque(String),

    /// Function type
    Function {
        ret: Box<Type>,
        params: Vec<Type>,
        varargs: bool,
    },
}

impl Type {
    /// Check if this type has a size the data layout can compute.
    /// Void, opaque structs, and bare function types are unsized.
    pub fn is_sized(&self) -> bool {
        match self {
            Type::Void | Type::Opaque(_) | Type::Function { .. } => false,
            Type::Int(_) | Type::Float(_) | Type::Ptr => true,
            Type::Array(_, elem) => elem.is_sized(),
            Type::Struct(fields) => fields.iter().all(|f| f.is_sized()),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int(bits) => write!(f, "i{}", bits),
            Type::Float(32) => write!(f, "float"),
            Type::Float(64) => write!(f, "double"),
            Type::Float(bits) => write!(f, "f{}", bits),
            Type::Ptr => write!(f, "ptr"),
            Type::Array(n, elem) => write!(f, "[{} x {}]", n, elem),
            Type::Struct(fields) => {
                write!(f, "{{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, " }}")
            }
            Type::Opaque(name) => write!(f, "%{}", name),
            Type::Function {
                ret,
                params,
                varargs,
            } => {
                write!(f, "{} (", ret)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                if *varargs {
                    if !params.is_empty() {
                        write!(f, ", ")?;
                    }
                    write!(f, "...")?;
                }
                write!(f, ")")
            }
        }
    }
}
