//! The module report engine.
//!
//! Walks an IR module and writes a structured diagnostic report describing
//! every function, basic block, and instruction to an injected sink. The
//! walk is read-only: it never creates, mutates, or retains IR.

pub mod classify;
pub mod render;
pub mod sink;
pub mod walker;

pub use classify::{classify, BranchKind, CallKind, InstKind, ReturnKind};
pub use sink::{ReportSink, StderrSink, StringSink, WriteSink};
pub use walker::Walker;

use crate::ir::Module;
use crate::target::DataLayout;
use thiserror::Error;

/// Fatal report conditions.
///
/// Unrecognized instruction shapes and missing names are never errors;
/// the only fatal condition is malformed IR the data layout cannot size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("stack allocation of type `{ty}` has no computable size under the active data layout")]
    UnsizedAlloc { ty: String },
}

/// Produce the full report for one module into the given sink.
///
/// Runs exactly one traversal; on error the report is truncated at the
/// offending instruction and the error propagates to the caller.
pub fn report_module(
    module: &Module,
    layout: &DataLayout,
    sink: &mut dyn ReportSink,
) -> Result<(), ReportError> {
    Walker::new(module, layout).walk(sink)
}
