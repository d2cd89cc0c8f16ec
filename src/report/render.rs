//! Report rendering.
//!
//! One deterministic text template per instruction kind, plus the section
//! framing (module banner, function sections, block gutters, separators).
//! Given the same module and data layout the output is byte-for-byte
//! reproducible.

use super::classify::{BranchKind, CallKind, InstKind, ReturnKind};
use super::sink::ReportSink;
use super::ReportError;
use crate::ir::{Function, Instruction, Module, Value};
use crate::target::DataLayout;

const RULE: &str =
    "══════════════════════════════════════════════════════════════════════════════";
const BLOCK_RULE: &str = "─────────────────────────────────────────────────────";

/// Renders classified instructions and section framing into a sink.
pub struct Renderer<'a> {
    module: &'a Module,
    layout: &'a DataLayout,
}

impl<'a> Renderer<'a> {
    pub fn new(module: &'a Module, layout: &'a DataLayout) -> Self {
        Self { module, layout }
    }

    pub fn module_header(&self, sink: &mut dyn ReportSink) {
        sink.append("\n");
        sink.append("╔══════════════════════════════════════════════════════════════════════════════╗\n");
        sink.append("║                               IR MODULE REPORT                               ║\n");
        sink.append("╚══════════════════════════════════════════════════════════════════════════════╝\n");
        sink.append(&format!("Module: {}\n", self.module.name()));
        sink.append(RULE);
        sink.append("\n\n");
    }

    pub fn module_footer(&self, sink: &mut dyn ReportSink) {
        sink.append("Report Complete\n");
        sink.append(RULE);
        sink.append("\n\n");
    }

    /// Compact fragment for an external declaration.
    pub fn declaration(&self, func: &Function, sink: &mut dyn ReportSink) {
        sink.append(&format!(
            "External Function Declaration: {}()\n",
            func.name()
        ));
        sink.append(&format!("   ↳ Return Type: {}\n", func.ret_ty()));
        sink.append(&format!("   ↳ Parameters: {}\n", func.params().len()));
        for param in func.params() {
            sink.append(&format!(
                "     • {} : {}\n",
                param.display_name(),
                param.ty
            ));
        }
        sink.append("\n");
    }

    /// Header fragment for a function definition.
    pub fn definition_header(&self, func: &Function, sink: &mut dyn ReportSink) {
        sink.append(&format!("Function Definition: {}()\n", func.name()));
        sink.append(&format!("   ↳ Return Type: {}\n", func.ret_ty()));
        sink.append(&format!("   ↳ Parameters: {}\n", func.params().len()));
        sink.append(&format!("   ↳ Basic Blocks: {}\n", func.blocks().len()));
        if !func.params().is_empty() {
            sink.append("   ↳ Function Arguments:\n");
            for param in func.params() {
                sink.append(&format!(
                    "     • {} : {}\n",
                    param.display_name(),
                    param.ty
                ));
            }
        }
        sink.append("\n");
    }

    /// Block header with its 1-based index within the function.
    pub fn block_header(
        &self,
        index: usize,
        name: &str,
        num_insts: usize,
        sink: &mut dyn ReportSink,
    ) {
        sink.append(&format!("   ┌─ Basic Block #{}: {}\n", index, name));
        sink.append(&format!("   │  Instructions: {}\n", num_insts));
        sink.append("   │\n");
    }

    /// Closing separator after a block; the final block of a function gets
    /// a different glyph than interior blocks.
    pub fn block_close(&self, is_last: bool, sink: &mut dyn ReportSink) {
        if is_last {
            sink.append(&format!("   └─{}\n", BLOCK_RULE));
        } else {
            sink.append(&format!("   ├─{}\n", BLOCK_RULE));
        }
    }

    pub fn function_close(&self, sink: &mut dyn ReportSink) {
        sink.append(&format!("\n{}\n\n", RULE));
    }

    /// One instruction: header line plus the kind-specific detail fragment.
    pub fn instruction(
        &self,
        func: &Function,
        index: usize,
        inst: &Instruction,
        kind: &InstKind<'_>,
        sink: &mut dyn ReportSink,
    ) -> Result<(), ReportError> {
        sink.append(&format!("   │  [{}] {}\n", index, inst));
        self.detail(func, kind, sink)?;
        sink.append("   │\n");
        Ok(())
    }

    fn detail(
        &self,
        func: &Function,
        kind: &InstKind<'_>,
        sink: &mut dyn ReportSink,
    ) -> Result<(), ReportError> {
        match kind {
            InstKind::BinaryArithmetic { opcode, lhs, rhs } => {
                head(sink, &format!("Binary Operation: {}", opcode));
                field(sink, &format!("Operand 1: {}", lhs));
                field(sink, &format!("Operand 2: {}", rhs));
            }
            InstKind::StackAllocation { allocated_ty, align } => {
                // The single fatal path: a type the layout cannot size.
                let size = self.layout.alloc_size_of(allocated_ty).ok_or_else(|| {
                    ReportError::UnsizedAlloc {
                        ty: allocated_ty.to_string(),
                    }
                })?;
                head(sink, "Stack Allocation (alloca)");
                field(sink, &format!("Type: {}", allocated_ty));
                field(sink, &format!("Size: {} bytes", size));
                field(sink, &format!("Alignment: {} bytes", align));
            }
            InstKind::Load { addr, ty, align } => {
                head(sink, "Load from Memory");
                field(sink, &format!("Source: {}", addr));
                field(sink, &format!("Type: {}", ty));
                field(sink, &format!("Alignment: {} bytes", align));
            }
            InstKind::Store { value, addr, align } => {
                head(sink, "Store to Memory");
                field(sink, &format!("Value: {}", value));
                field(sink, &format!("Destination: {}", addr));
                field(sink, &format!("Alignment: {} bytes", align));
            }
            InstKind::Call(CallKind::Direct { callee, args }) => {
                head(sink, &format!("Function Call: {}()", callee));
                field(sink, &format!("Arguments: {}", args.len()));
                for (i, arg) in args.iter().enumerate() {
                    field(sink, &format!("Arg {}: {}", i + 1, arg));
                }
                field(sink, "Target Function Signature:");
                if let Some(target) = self.module.get_function(callee) {
                    for param in target.params() {
                        field(
                            sink,
                            &format!("  • {} : {}", param.display_name(), param.ty),
                        );
                    }
                }
            }
            InstKind::Call(CallKind::Indirect { target }) => {
                head(sink, "Indirect Function Call");
                field(sink, &format!("Target: {}", target));
            }
            InstKind::Branch(BranchKind::Conditional {
                cond,
                true_target,
                false_target,
            }) => {
                head(sink, "Conditional Branch");
                field(sink, &format!("Condition: {}", cond));
                field(sink, &format!("True Block: {}", true_target));
                field(sink, &format!("False Block: {}", false_target));
            }
            InstKind::Branch(BranchKind::Unconditional { target }) => {
                head(sink, "Unconditional Branch");
                field(sink, &format!("Target: {}", target));
            }
            InstKind::Return(ReturnKind::Value { value, ty }) => {
                head(sink, "Return Statement");
                field(sink, &format!("Type: {}", ty));
                self.return_value(func, value, sink);
            }
            InstKind::Return(ReturnKind::Void) => {
                head(sink, "Return Statement (void)");
            }
            InstKind::Compare { predicate, lhs, rhs } => {
                head(sink, "Comparison Instruction");
                if let Some(predicate) = predicate {
                    field(sink, "Type: Integer Comparison");
                    field(sink, &format!("Predicate: {}", predicate.describe()));
                }
                field(sink, &format!("Left Operand: {}", lhs));
                field(sink, &format!("Right Operand: {}", rhs));
            }
            InstKind::Cast {
                opcode,
                src_ty,
                dest_ty,
                src,
            } => {
                head(sink, &format!("Cast Operation: {}", opcode));
                field(sink, &format!("From: {}", src_ty));
                field(sink, &format!("To: {}", dest_ty));
                field(sink, &format!("Source: {}", src));
            }
            InstKind::GenericOperator { opcode, operands } => {
                head(sink, &format!("Other Operator: {}", opcode));
                field(sink, &format!("Operands: {}", operands.len()));
                for (i, operand) in operands.iter().enumerate() {
                    field(sink, &format!("Op[{}]: {}", i, operand));
                }
            }
            InstKind::Unknown { opcode } => {
                head(sink, "Unknown Instruction Type");
                field(sink, &format!("Opcode: {}", opcode));
            }
        }
        Ok(())
    }

    /// Returned-value lines: named value, or the unnamed-temporary
    /// placeholder with a source-instruction or literal-constant note.
    fn return_value(&self, func: &Function, value: &Value, sink: &mut dyn ReportSink) {
        if let Some(name) = value.name() {
            field(sink, &format!("Value: {}", name));
            return;
        }
        field(sink, "Value: (unnamed temporary)");
        if let Some(source) = func.defining_inst(value) {
            field(sink, &format!("Source: {}", source));
        } else if let Value::ConstInt { value, .. } = value {
            field(sink, &format!("Constant: {}", value));
        }
    }
}

fn head(sink: &mut dyn ReportSink, text: &str) {
    sink.append(&format!("   │      {}\n", text));
}

fn field(sink: &mut dyn ReportSink, text: &str) {
    sink.append(&format!("   │         {}\n", text));
}
