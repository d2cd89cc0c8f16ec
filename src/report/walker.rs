//! Module traversal.
//!
//! Depth-first, read-only walk of module → function → block → instruction,
//! preserving the module's own ordering at every level. For each
//! instruction the walker asks the classifier for a kind and hands it to
//! the renderer; it emits nothing itself beyond driving the section calls.

use super::classify::classify;
use super::render::Renderer;
use super::sink::ReportSink;
use super::ReportError;
use crate::ir::Module;
use crate::target::DataLayout;

pub struct Walker<'a> {
    module: &'a Module,
    renderer: Renderer<'a>,
}

impl<'a> Walker<'a> {
    pub fn new(module: &'a Module, layout: &'a DataLayout) -> Self {
        Self {
            module,
            renderer: Renderer::new(module, layout),
        }
    }

    /// One full traversal. The only failure is a stack allocation the data
    /// layout cannot size, which aborts the rest of the module's report.
    pub fn walk(&self, sink: &mut dyn ReportSink) -> Result<(), ReportError> {
        self.renderer.module_header(sink);

        for func in self.module.functions() {
            if func.is_declaration() {
                log::debug!("reporting declaration {}", func.name());
                self.renderer.declaration(func, sink);
                continue;
            }

            log::debug!(
                "reporting definition {} ({} blocks)",
                func.name(),
                func.blocks().len()
            );
            self.renderer.definition_header(func, sink);

            let num_blocks = func.blocks().len();
            for (block_idx, block) in func.blocks().iter().enumerate() {
                self.renderer.block_header(
                    block_idx + 1,
                    block.display_name(),
                    block.instructions().len(),
                    sink,
                );
                for (inst_idx, inst) in block.instructions().iter().enumerate() {
                    let kind = classify(inst);
                    self.renderer
                        .instruction(func, inst_idx + 1, inst, &kind, sink)?;
                }
                self.renderer.block_close(block_idx + 1 == num_blocks, sink);
            }

            self.renderer.function_close(sink);
        }

        self.renderer.module_footer(sink);
        Ok(())
    }
}
