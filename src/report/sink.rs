//! Output sinks for report text.
//!
//! The engine writes through an injected [`ReportSink`] instead of a
//! process-global stream, so reports can be captured in tests without a
//! live host environment.

use std::io::Write;

/// An append-only text sink.
///
/// Emission order across nested fragments is the only contract; sinks must
/// not reorder or interleave.
pub trait ReportSink {
    fn append(&mut self, text: &str);
}

/// Sink backed by an owned string buffer.
#[derive(Debug, Default)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl ReportSink for StringSink {
    fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Sink backed by any `io::Write` stream.
///
/// Write errors are swallowed: the report goes to a diagnostic stream and a
/// broken stream must not fail the analysis itself.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn append(&mut self, text: &str) {
        let _ = self.writer.write_all(text.as_bytes());
    }
}

/// Sink writing to the process diagnostic stream (stderr).
#[derive(Debug, Default)]
pub struct StderrSink;

impl ReportSink for StderrSink {
    fn append(&mut self, text: &str) {
        eprint!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_appends_in_order() {
        let mut sink = StringSink::new();
        sink.append("a");
        sink.append("b\n");
        sink.append("c");
        assert_eq!(sink.as_str(), "ab\nc");
    }

    #[test]
    fn test_write_sink() {
        let mut sink = WriteSink::new(Vec::new());
        sink.append("hello ");
        sink.append("world");
        assert_eq!(sink.into_inner(), b"hello world");
    }
}
