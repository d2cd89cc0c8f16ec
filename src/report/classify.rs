//! Instruction classification.
//!
//! Maps each instruction to exactly one [`InstKind`] from structural shape
//! alone. The checks run in a fixed precedence order and the first match
//! wins; anything matching nothing lands in [`InstKind::Unknown`], so
//! classification is total and never fails.

use crate::ir::{Instruction, IntPredicate, Opcode, Type, Value};

/// Call shape: statically known callee or computed target.
#[derive(Debug, Clone, PartialEq)]
pub enum CallKind<'a> {
    Direct { callee: &'a str, args: &'a [Value] },
    Indirect { target: &'a Value },
}

/// Branch shape.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchKind<'a> {
    Conditional {
        cond: &'a Value,
        true_target: &'a str,
        false_target: &'a str,
    },
    Unconditional { target: &'a str },
}

/// Return shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnKind<'a> {
    Value { value: &'a Value, ty: &'a Type },
    Void,
}

/// The classified shape of one instruction. Borrows from the instruction
/// for the duration of one report fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum InstKind<'a> {
    BinaryArithmetic {
        opcode: Opcode,
        lhs: &'a Value,
        rhs: &'a Value,
    },
    StackAllocation {
        allocated_ty: &'a Type,
        align: u32,
    },
    Load {
        addr: &'a Value,
        ty: &'a Type,
        align: u32,
    },
    Store {
        value: &'a Value,
        addr: &'a Value,
        align: u32,
    },
    Call(CallKind<'a>),
    Branch(BranchKind<'a>),
    Return(ReturnKind<'a>),
    Compare {
        /// `Some` for integer comparisons, `None` for other comparison kinds
        predicate: Option<IntPredicate>,
        lhs: &'a Value,
        rhs: &'a Value,
    },
    Cast {
        opcode: Opcode,
        src_ty: &'a Type,
        dest_ty: &'a Type,
        src: &'a Value,
    },
    GenericOperator {
        opcode: Opcode,
        operands: &'a [Value],
    },
    Unknown {
        opcode: Opcode,
    },
}

impl InstKind<'_> {
    /// Kind name for logging and tests.
    pub fn name(&self) -> &'static str {
        match self {
            InstKind::BinaryArithmetic { .. } => "binary-arithmetic",
            InstKind::StackAllocation { .. } => "stack-allocation",
            InstKind::Load { .. } => "load",
            InstKind::Store { .. } => "store",
            InstKind::Call(_) => "call",
            InstKind::Branch(_) => "branch",
            InstKind::Return(_) => "return",
            InstKind::Compare { .. } => "compare",
            InstKind::Cast { .. } => "cast",
            InstKind::GenericOperator { .. } => "generic-operator",
            InstKind::Unknown { .. } => "unknown",
        }
    }
}

/// Classify one instruction. Pure, borrow-only, total.
pub fn classify(inst: &Instruction) -> InstKind<'_> {
    // 1. Binary arithmetic: arithmetic opcode with exactly two operands.
    if inst.opcode.is_arithmetic() {
        if let [lhs, rhs] = inst.operands.as_slice() {
            return InstKind::BinaryArithmetic {
                opcode: inst.opcode,
                lhs,
                rhs,
            };
        }
    }

    // 2. Stack allocation: alloca carrying its allocated type.
    if inst.opcode == Opcode::Alloca {
        if let Some(allocated_ty) = &inst.allocated_ty {
            return InstKind::StackAllocation {
                allocated_ty,
                align: inst.align.unwrap_or(1),
            };
        }
    }

    // 3. Load: single address operand.
    if inst.opcode == Opcode::Load {
        if let [addr] = inst.operands.as_slice() {
            return InstKind::Load {
                addr,
                ty: &inst.ty,
                align: inst.align.unwrap_or(1),
            };
        }
    }

    // 4. Store: value then address.
    if inst.opcode == Opcode::Store {
        if let [value, addr] = inst.operands.as_slice() {
            return InstKind::Store {
                value,
                addr,
                align: inst.align.unwrap_or(1),
            };
        }
    }

    // 5. Call: direct when the target is a global symbol.
    if inst.opcode == Opcode::Call {
        if let Some(target) = &inst.callee {
            return InstKind::Call(match target {
                Value::Global(callee) => CallKind::Direct {
                    callee: callee.as_str(),
                    args: inst.operands.as_slice(),
                },
                other => CallKind::Indirect { target: other },
            });
        }
    }

    // 6. Branch: one block target, or condition plus two block targets.
    if inst.opcode == Opcode::Br {
        match inst.operands.as_slice() {
            [Value::Block(target)] => {
                return InstKind::Branch(BranchKind::Unconditional {
                    target: target.as_str(),
                });
            }
            [cond, Value::Block(t), Value::Block(e)] => {
                return InstKind::Branch(BranchKind::Conditional {
                    cond,
                    true_target: t.as_str(),
                    false_target: e.as_str(),
                });
            }
            _ => {}
        }
    }

    // 7. Return: void or value-carrying.
    if inst.opcode == Opcode::Ret {
        return InstKind::Return(match inst.operands.first() {
            Some(value) => ReturnKind::Value {
                value,
                ty: &inst.ty,
            },
            None => ReturnKind::Void,
        });
    }

    // 8. Compare: two operands; integer compares carry a predicate.
    if inst.opcode.is_compare() {
        if let [lhs, rhs] = inst.operands.as_slice() {
            return InstKind::Compare {
                predicate: inst.predicate,
                lhs,
                rhs,
            };
        }
    }

    // 9. Cast: cast opcode with a source operand and a source type. Extra
    // operands do not disqualify it; cast is tested before the generic
    // operator bucket.
    if inst.opcode.is_cast() {
        if let (Some(src), Some(src_ty)) = (inst.operands.first(), inst.src_ty.as_ref()) {
            return InstKind::Cast {
                opcode: inst.opcode,
                src_ty,
                dest_ty: &inst.ty,
                src,
            };
        }
    }

    // 10. Generic operator: anything left that still consumes operands.
    if !inst.operands.is_empty() {
        return InstKind::GenericOperator {
            opcode: inst.opcode,
            operands: inst.operands.as_slice(),
        };
    }

    // 11. Fallback.
    InstKind::Unknown {
        opcode: inst.opcode,
    }
}
