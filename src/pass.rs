//! Host-optimizer integration.
//!
//! The report engine plugs into a host pipeline as a module pass: the host
//! invokes it once per module with an analysis-manager handle, and the pass
//! answers with which analyses it preserved. The inspect pass is read-only
//! and always preserves everything.

use crate::ir::Module;
use crate::report::{report_module, ReportSink, StderrSink};
use crate::target::DataLayout;
use anyhow::Result;
use std::collections::HashSet;

/// A pass's answer about analysis invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreservedAnalyses {
    /// Nothing was invalidated.
    All,
    /// Everything must be recomputed.
    None,
}

impl PreservedAnalyses {
    pub fn are_all_preserved(self) -> bool {
        matches!(self, PreservedAnalyses::All)
    }
}

/// The analysis-manager handle the host threads through its passes.
///
/// Tracks which named analyses currently hold valid results and drops them
/// when a pass reports that it preserved nothing.
#[derive(Debug, Default)]
pub struct ModuleAnalysisManager {
    valid: HashSet<&'static str>,
}

impl ModuleAnalysisManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an analysis result as available.
    pub fn register(&mut self, name: &'static str) {
        self.valid.insert(name);
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.valid.contains(name)
    }

    /// Apply a pass's preservation answer.
    pub fn invalidate(&mut self, preserved: PreservedAnalyses) {
        if !preserved.are_all_preserved() {
            self.valid.clear();
        }
    }
}

/// A pass run once per module.
pub trait ModulePass {
    /// Name of the pass for debugging.
    fn name(&self) -> &'static str;

    /// Run the pass. Returns which analyses survived it.
    fn run(&mut self, module: &Module, am: &mut ModuleAnalysisManager)
        -> Result<PreservedAnalyses>;
}

/// Ordered pass list; stops at the first failing pass.
#[derive(Default)]
pub struct ModulePassManager {
    passes: Vec<Box<dyn ModulePass>>,
}

impl ModulePassManager {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn add_pass(&mut self, pass: Box<dyn ModulePass>) {
        self.passes.push(pass);
    }

    /// Run every pass in registration order.
    pub fn run(&mut self, module: &Module, am: &mut ModuleAnalysisManager) -> Result<()> {
        for pass in &mut self.passes {
            log::debug!("running pass '{}' on module '{}'", pass.name(), module.name());
            let preserved = pass.run(module, am)?;
            am.invalidate(preserved);
        }
        Ok(())
    }
}

/// The module inspection pass: writes the diagnostic report and preserves
/// all analyses.
pub struct InspectPass {
    layout: DataLayout,
    sink: Box<dyn ReportSink>,
}

impl InspectPass {
    /// Report to the process diagnostic stream with the default layout.
    pub fn new() -> Self {
        Self {
            layout: DataLayout::default(),
            sink: Box::new(StderrSink),
        }
    }

    /// Report with a host-supplied layout and sink.
    pub fn with_sink(layout: DataLayout, sink: Box<dyn ReportSink>) -> Self {
        Self { layout, sink }
    }
}

impl Default for InspectPass {
    fn default() -> Self {
        Self::new()
    }
}

impl ModulePass for InspectPass {
    fn name(&self) -> &'static str {
        "module-inspect"
    }

    fn run(
        &mut self,
        module: &Module,
        _am: &mut ModuleAnalysisManager,
    ) -> Result<PreservedAnalyses> {
        report_module(module, &self.layout, self.sink.as_mut())?;
        Ok(PreservedAnalyses::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BasicBlock, Function, Instruction, Type};
    use crate::report::StringSink;

    struct ClobberPass;

    impl ModulePass for ClobberPass {
        fn name(&self) -> &'static str {
            "clobber"
        }

        fn run(
            &mut self,
            _module: &Module,
            _am: &mut ModuleAnalysisManager,
        ) -> Result<PreservedAnalyses> {
            Ok(PreservedAnalyses::None)
        }
    }

    fn tiny_module() -> Module {
        let mut entry = BasicBlock::new("entry");
        entry.push(Instruction::ret_void());
        let mut module = Module::new("m");
        module.add_function(Function::new("main", Type::Void, vec![], vec![entry]));
        module
    }

    #[test]
    fn test_inspect_pass_preserves_all() {
        let mut am = ModuleAnalysisManager::new();
        am.register("dominators");

        let mut pass = InspectPass::with_sink(DataLayout::LP64, Box::new(StringSink::new()));
        let preserved = pass.run(&tiny_module(), &mut am).unwrap();

        assert!(preserved.are_all_preserved());
        am.invalidate(preserved);
        assert!(am.is_valid("dominators"));
    }

    #[test]
    fn test_manager_invalidates_on_none() {
        let mut am = ModuleAnalysisManager::new();
        am.register("dominators");

        let mut pm = ModulePassManager::new();
        pm.add_pass(Box::new(ClobberPass));
        pm.run(&tiny_module(), &mut am).unwrap();

        assert!(!am.is_valid("dominators"));
    }

    #[test]
    fn test_manager_runs_inspect_pass() {
        let mut am = ModuleAnalysisManager::new();
        let mut pm = ModulePassManager::new();
        pm.add_pass(Box::new(InspectPass::with_sink(
            DataLayout::LP64,
            Box::new(StringSink::new()),
        )));
        pm.run(&tiny_module(), &mut am).unwrap();
    }
}
