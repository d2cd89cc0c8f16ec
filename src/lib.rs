//! IR module inspection reports
//!
//! This crate walks an in-memory IR module and produces a structured,
//! human-readable diagnostic report describing every function, basic
//! block, and instruction. It is a read-only analysis: it never alters the
//! program and always reports that all analyses are preserved.

pub mod ir;
pub mod pass;
pub mod report;
pub mod target;

pub use report::report_module;

use anyhow::{Context, Result};

/// Produce the full report for a module as a string.
pub fn inspect_module(module: &ir::Module, layout: &target::DataLayout) -> Result<String> {
    let mut sink = report::StringSink::new();

    report_module(module, layout, &mut sink)
        .with_context(|| format!("failed to report module '{}'", module.name()))?;

    Ok(sink.into_string())
}
