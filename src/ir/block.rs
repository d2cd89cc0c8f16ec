//! Basic block representation.

use super::Instruction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    name: Option<String>,
    instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            instructions: Vec::new(),
        }
    }

    /// A block with no label.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            instructions: Vec::new(),
        }
    }

    /// Label to display, with the unnamed placeholder applied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    /// Check if this block ends in a terminator
    pub fn is_terminated(&self) -> bool {
        self.instructions
            .last()
            .map(|i| i.is_terminator())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Instruction;

    #[test]
    fn test_display_name() {
        assert_eq!(BasicBlock::new("entry").display_name(), "entry");
        assert_eq!(BasicBlock::unnamed().display_name(), "unnamed");
    }

    #[test]
    fn test_terminated() {
        let mut block = BasicBlock::new("entry");
        assert!(!block.is_terminated());
        block.push(Instruction::ret_void());
        assert!(block.is_terminated());
    }
}
