//! Function representation.

use super::{BasicBlock, Instruction, Type, Value};
use serde::{Deserialize, Serialize};

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: Option<String>,
    pub ty: Type,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: Type) -> Self {
        Self { name: None, ty }
    }

    /// Name to display, with the unnamed placeholder applied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    name: String,
    ret_ty: Type,
    params: Vec<Param>,
    blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        ret_ty: Type,
        params: Vec<Param>,
        blocks: Vec<BasicBlock>,
    ) -> Self {
        Self {
            name: name.into(),
            ret_ty,
            params,
            blocks,
        }
    }

    /// An external declaration: signature only, no body.
    pub fn declaration(name: impl Into<String>, ret_ty: Type, params: Vec<Param>) -> Self {
        Self::new(name, ret_ty, params, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ret_ty(&self) -> &Type {
        &self.ret_ty
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    pub fn add_block(&mut self, block: BasicBlock) {
        self.blocks.push(block);
    }

    /// Check if function is a declaration (no body)
    pub fn is_declaration(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find the instruction whose result binds the given value, if the
    /// value is a local or temporary defined in this function.
    pub fn defining_inst(&self, value: &Value) -> Option<&Instruction> {
        if !matches!(value, Value::Local(_) | Value::Temp(_)) {
            return None;
        }
        self.blocks
            .iter()
            .flat_map(|b| b.instructions().iter())
            .find(|i| i.result.as_ref() == Some(value))
    }
}
