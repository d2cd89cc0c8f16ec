//! Data layout: target sizing and alignment rules.
//!
//! The report engine never derives target rules itself; the host hands it a
//! [`DataLayout`] and the engine only asks it for allocation sizes and
//! alignments. Stack-allocation fragments are the sole consumer.

use crate::ir::Type;
use serde::{Deserialize, Serialize};

/// Target data layout.
///
/// # Common Configurations
///
/// | Config | ptr_bytes | Use Case |
/// |--------|-----------|----------|
/// | LP64   | 8         | 64-bit hosts (default) |
/// | ILP32  | 4         | 32-bit hosts |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayout {
    /// Pointer size in bytes
    pub ptr_bytes: u32,

    /// Maximum natural alignment in bytes
    pub max_align: u32,
}

impl Default for DataLayout {
    /// Default configuration: 64-bit pointers
    fn default() -> Self {
        Self::LP64
    }
}

impl DataLayout {
    /// 64-bit layout: 8-byte pointers
    pub const LP64: Self = Self {
        ptr_bytes: 8,
        max_align: 16,
    };

    /// 32-bit layout: 4-byte pointers
    pub const ILP32: Self = Self {
        ptr_bytes: 4,
        max_align: 8,
    };

    /// Get a preset layout by name (`"lp64"` or `"ilp32"`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lp64" | "64" => Some(Self::LP64),
            "ilp32" | "32" => Some(Self::ILP32),
            _ => None,
        }
    }

    /// Allocation size of a type in bytes, including struct padding.
    /// `None` for unsized types (void, opaque structs, bare function types)
    /// and for sizes that overflow `u64`.
    pub fn alloc_size_of(&self, ty: &Type) -> Option<u64> {
        match ty {
            Type::Void | Type::Opaque(_) | Type::Function { .. } => None,
            Type::Int(bits) | Type::Float(bits) => Some(((*bits as u64) + 7) / 8),
            Type::Ptr => Some(self.ptr_bytes as u64),
            Type::Array(n, elem) => {
                let elem_size = self.alloc_size_of(elem)?;
                (*n as u64).checked_mul(elem_size)
            }
            Type::Struct(fields) => {
                let mut size = 0u64;
                let mut struct_align = 1u64;
                for field in fields {
                    let field_align = self.align_of(field)? as u64;
                    struct_align = struct_align.max(field_align);
                    size = round_up(size, field_align)?.checked_add(self.alloc_size_of(field)?)?;
                }
                round_up(size, struct_align)
            }
        }
    }

    /// Natural alignment of a type in bytes, clamped to `max_align`.
    pub fn align_of(&self, ty: &Type) -> Option<u32> {
        let align = match ty {
            Type::Void | Type::Opaque(_) | Type::Function { .. } => return None,
            Type::Int(bits) | Type::Float(bits) => {
                (((*bits as u64) + 7) / 8).next_power_of_two() as u32
            }
            Type::Ptr => self.ptr_bytes,
            Type::Array(_, elem) => self.align_of(elem)?,
            Type::Struct(fields) => {
                let mut align = 1;
                for field in fields {
                    align = align.max(self.align_of(field)?);
                }
                align
            }
        };
        Some(align.min(self.max_align))
    }
}

fn round_up(value: u64, align: u64) -> Option<u64> {
    debug_assert!(align.is_power_of_two());
    Some(value.checked_add(align - 1)? & !(align - 1))
}
