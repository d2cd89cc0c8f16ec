//! IR instructions.
//!
//! An [`Instruction`] is a flat opcode-plus-operands record. Kind-specific
//! payloads (allocated type, alignment, comparison predicate, call target)
//! live in optional fields rather than per-opcode structs so the report
//! engine can classify purely from structural shape.

use super::{Type, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // Arithmetic
    Add,
    Sub,
    Mul,
    UDiv,
    SDiv,
    URem,
    SRem,
    And,
    Or,
    Xor,
    Shl,
    LShr,
    AShr,

    // Memory
    Alloca,
    Load,
    Store,

    // Control
    Call,
    Br,
    Ret,

    // Compare
    ICmp,
    FCmp,

    // Casts
    Trunc,
    ZExt,
    SExt,
    PtrToInt,
    IntToPtr,
    BitCast,

    // Other operators
    GetElementPtr,
    Select,
    Phi,
    FNeg,
    Freeze,

    // Non-operator instructions
    Unreachable,
    Fence,
}

impl Opcode {
    /// Lower-case mnemonic, as it appears in printed IR.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::UDiv => "udiv",
            Opcode::SDiv => "sdiv",
            Opcode::URem => "urem",
            Opcode::SRem => "srem",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Shl => "shl",
            Opcode::LShr => "lshr",
            Opcode::AShr => "ashr",
            Opcode::Alloca => "alloca",
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::Call => "call",
            Opcode::Br => "br",
            Opcode::Ret => "ret",
            Opcode::ICmp => "icmp",
            Opcode::FCmp => "fcmp",
            Opcode::Trunc => "trunc",
            Opcode::ZExt => "zext",
            Opcode::SExt => "sext",
            Opcode::PtrToInt => "ptrtoint",
            Opcode::IntToPtr => "inttoptr",
            Opcode::BitCast => "bitcast",
            Opcode::GetElementPtr => "getelementptr",
            Opcode::Select => "select",
            Opcode::Phi => "phi",
            Opcode::FNeg => "fneg",
            Opcode::Freeze => "freeze",
            Opcode::Unreachable => "unreachable",
            Opcode::Fence => "fence",
        }
    }

    /// Is this a binary arithmetic/logical opcode?
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::UDiv
                | Opcode::SDiv
                | Opcode::URem
                | Opcode::SRem
                | Opcode::And
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Shl
                | Opcode::LShr
                | Opcode::AShr
        )
    }

    /// Is this a cast opcode?
    pub fn is_cast(self) -> bool {
        matches!(
            self,
            Opcode::Trunc
                | Opcode::ZExt
                | Opcode::SExt
                | Opcode::PtrToInt
                | Opcode::IntToPtr
                | Opcode::BitCast
        )
    }

    /// Is this a comparison opcode?
    pub fn is_compare(self) -> bool {
        matches!(self, Opcode::ICmp | Opcode::FCmp)
    }

    /// Is this a block terminator?
    pub fn is_terminator(self) -> bool {
        matches!(self, Opcode::Br | Opcode::Ret | Opcode::Unreachable)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer comparison predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntPredicate {
    Eq,
    Ne,
    Sgt,
    Sge,
    Slt,
    Sle,
    Ugt,
    Uge,
    Ult,
    Ule,
}

impl IntPredicate {
    /// Short mnemonic, as printed inside an icmp.
    pub fn name(self) -> &'static str {
        match self {
            IntPredicate::Eq => "eq",
            IntPredicate::Ne => "ne",
            IntPredicate::Sgt => "sgt",
            IntPredicate::Sge => "sge",
            IntPredicate::Slt => "slt",
            IntPredicate::Sle => "sle",
            IntPredicate::Ugt => "ugt",
            IntPredicate::Uge => "uge",
            IntPredicate::Ult => "ult",
            IntPredicate::Ule => "ule",
        }
    }

    /// Human-readable description for the report. Predicates outside the
    /// named signed set collapse to "Other".
    pub fn describe(self) -> &'static str {
        match self {
            IntPredicate::Eq => "Equal (==)",
            IntPredicate::Ne => "Not Equal (!=)",
            IntPredicate::Sgt => "Signed Greater Than (>)",
            IntPredicate::Sge => "Signed Greater or Equal (>=)",
            IntPredicate::Slt => "Signed Less Than (<)",
            IntPredicate::Sle => "Signed Less or Equal (<=)",
            _ => "Other",
        }
    }
}

/// A single IR instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation tag
    pub opcode: Opcode,
    /// Result binding (a `Local` or `Temp`), if the instruction produces one
    pub result: Option<Value>,
    /// Result type (`Void` when there is no result)
    pub ty: Type,
    /// Ordered operand list
    pub operands: Vec<Value>,
    /// Alignment in bytes (alloca/load/store)
    pub align: Option<u32>,
    /// Allocated type (alloca)
    pub allocated_ty: Option<Type>,
    /// Source type (casts)
    pub src_ty: Option<Type>,
    /// Comparison predicate (icmp)
    pub predicate: Option<IntPredicate>,
    /// Call target: `Global` for a direct call, any computed value otherwise
    pub callee: Option<Value>,
}

impl Instruction {
    /// Create a bare instruction with no result and no operands.
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            result: None,
            ty: Type::Void,
            operands: Vec::new(),
            align: None,
            allocated_ty: None,
            src_ty: None,
            predicate: None,
            callee: None,
        }
    }

    /// Set the result binding and type.
    pub fn result(mut self, result: Value, ty: Type) -> Self {
        self.result = Some(result);
        self.ty = ty;
        self
    }

    /// Append an operand.
    pub fn operand(mut self, value: Value) -> Self {
        self.operands.push(value);
        self
    }

    // Convenience constructors for the common shapes. Tests and host glue
    // build IR through these.

    pub fn binary(opcode: Opcode, result: Value, ty: Type, lhs: Value, rhs: Value) -> Self {
        Self::new(opcode).result(result, ty).operand(lhs).operand(rhs)
    }

    pub fn alloca(result: Value, allocated_ty: Type, align: u32) -> Self {
        let mut inst = Self::new(Opcode::Alloca).result(result, Type::Ptr);
        inst.allocated_ty = Some(allocated_ty);
        inst.align = Some(align);
        inst
    }

    pub fn load(result: Value, ty: Type, addr: Value, align: u32) -> Self {
        let mut inst = Self::new(Opcode::Load).result(result, ty).operand(addr);
        inst.align = Some(align);
        inst
    }

    pub fn store(value: Value, addr: Value, align: u32) -> Self {
        let mut inst = Self::new(Opcode::Store).operand(value).operand(addr);
        inst.align = Some(align);
        inst
    }

    /// Direct or indirect call; a `Global` target makes it direct.
    pub fn call(result: Option<(Value, Type)>, target: Value, args: Vec<Value>) -> Self {
        let mut inst = Self::new(Opcode::Call);
        if let Some((res, ty)) = result {
            inst = inst.result(res, ty);
        }
        inst.operands = args;
        inst.callee = Some(target);
        inst
    }

    pub fn br(target: impl Into<String>) -> Self {
        Self::new(Opcode::Br).operand(Value::block(target))
    }

    pub fn cond_br(
        cond: Value,
        true_target: impl Into<String>,
        false_target: impl Into<String>,
    ) -> Self {
        Self::new(Opcode::Br)
            .operand(cond)
            .operand(Value::block(true_target))
            .operand(Value::block(false_target))
    }

    pub fn ret(value: Value, ty: Type) -> Self {
        let mut inst = Self::new(Opcode::Ret).operand(value);
        inst.ty = ty;
        inst
    }

    pub fn ret_void() -> Self {
        Self::new(Opcode::Ret)
    }

    pub fn icmp(result: Value, pred: IntPredicate, lhs: Value, rhs: Value) -> Self {
        let mut inst = Self::new(Opcode::ICmp)
            .result(result, Type::Int(1))
            .operand(lhs)
            .operand(rhs);
        inst.predicate = Some(pred);
        inst
    }

    pub fn fcmp(result: Value, lhs: Value, rhs: Value) -> Self {
        Self::new(Opcode::FCmp)
            .result(result, Type::Int(1))
            .operand(lhs)
            .operand(rhs)
    }

    pub fn cast(opcode: Opcode, result: Value, src: Value, src_ty: Type, dest_ty: Type) -> Self {
        debug_assert!(opcode.is_cast());
        let mut inst = Self::new(opcode).result(result, dest_ty).operand(src);
        inst.src_ty = Some(src_ty);
        inst
    }

    /// Does this instruction terminate its block?
    pub fn is_terminator(&self) -> bool {
        self.opcode.is_terminator()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(result) = &self.result {
            write!(f, "{} = ", result)?;
        }
        match self.opcode {
            Opcode::Alloca => {
                match &self.allocated_ty {
                    Some(ty) => write!(f, "alloca {}", ty)?,
                    None => write!(f, "alloca")?,
                }
                if let Some(align) = self.align {
                    write!(f, ", align {}", align)?;
                }
                Ok(())
            }
            Opcode::Load => {
                write!(f, "load {}", self.ty)?;
                for op in &self.operands {
                    write!(f, ", {}", op)?;
                }
                if let Some(align) = self.align {
                    write!(f, ", align {}", align)?;
                }
                Ok(())
            }
            Opcode::Store => {
                write!(f, "store ")?;
                for (i, op) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", op)?;
                }
                if let Some(align) = self.align {
                    write!(f, ", align {}", align)?;
                }
                Ok(())
            }
            Opcode::Call => {
                let target = self.callee.as_ref().map(|c| c.to_string()).unwrap_or_default();
                write!(f, "call {} {}(", self.ty, target)?;
                for (i, arg) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Opcode::Br => match self.operands.as_slice() {
                [target] => write!(f, "br label {}", target),
                [cond, t, e] => write!(f, "br {}, label {}, label {}", cond, t, e),
                _ => write!(f, "br <malformed>"),
            },
            Opcode::Ret => match self.operands.first() {
                Some(value) => write!(f, "ret {} {}", self.ty, value.bare()),
                None => write!(f, "ret void"),
            },
            op @ (Opcode::ICmp | Opcode::FCmp) => {
                write!(f, "{}", op)?;
                if let Some(pred) = self.predicate {
                    write!(f, " {}", pred.name())?;
                }
                for (i, operand) in self.operands.iter().enumerate() {
                    write!(f, "{}{}", if i == 0 { " " } else { ", " }, operand)?;
                }
                Ok(())
            }
            op if op.is_cast() => {
                let src = self.operands.first().cloned().unwrap_or(Value::Undef);
                write!(f, "{} {} to {}", op, src, self.ty)
            }
            op => {
                write!(f, "{}", op)?;
                for (i, operand) in self.operands.iter().enumerate() {
                    write!(f, "{}{}", if i == 0 { " " } else { ", " }, operand)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_binary() {
        let inst = Instruction::binary(
            Opcode::Add,
            Value::local("sum"),
            Type::Int(32),
            Value::local("a"),
            Value::local("b"),
        );
        assert_eq!(inst.to_string(), "%sum = add %a, %b");
    }

    #[test]
    fn test_display_memory() {
        let alloca = Instruction::alloca(Value::local("slot"), Type::Int(32), 4);
        assert_eq!(alloca.to_string(), "%slot = alloca i32, align 4");

        let load = Instruction::load(Value::Temp(1), Type::Int(32), Value::local("slot"), 4);
        assert_eq!(load.to_string(), "%1 = load i32, %slot, align 4");

        let store = Instruction::store(Value::const_i32(5), Value::local("slot"), 4);
        assert_eq!(store.to_string(), "store i32 5, %slot, align 4");
    }

    #[test]
    fn test_display_control() {
        assert_eq!(Instruction::br("exit").to_string(), "br label %exit");
        assert_eq!(
            Instruction::cond_br(Value::local("c"), "then", "else").to_string(),
            "br %c, label %then, label %else"
        );
        assert_eq!(Instruction::ret_void().to_string(), "ret void");
        assert_eq!(
            Instruction::ret(Value::const_i32(42), Type::Int(32)).to_string(),
            "ret i32 42"
        );
    }

    #[test]
    fn test_display_call_and_cast() {
        let call = Instruction::call(
            Some((Value::Temp(0), Type::Int(32))),
            Value::global("f"),
            vec![Value::const_i32(1)],
        );
        assert_eq!(call.to_string(), "%0 = call i32 @f(i32 1)");

        let cast = Instruction::cast(
            Opcode::SExt,
            Value::Temp(2),
            Value::local("x"),
            Type::Int(32),
            Type::Int(64),
        );
        assert_eq!(cast.to_string(), "%2 = sext %x to i64");
        assert_eq!(cast.src_ty, Some(Type::Int(32)));
        assert_eq!(cast.allocated_ty, None);
    }

    #[test]
    fn test_terminators() {
        assert!(Instruction::ret_void().is_terminator());
        assert!(Instruction::br("bb").is_terminator());
        assert!(!Instruction::alloca(Value::Temp(0), Type::Int(8), 1).is_terminator());
    }
}
