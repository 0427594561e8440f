//! Read/write capabilities the conversion pipeline is driven through.
//!
//! The pipeline never talks to a clipboard directly. The binary plugs in the
//! system clipboard; tests and stdin mode use [`MemoryClipboard`].

use crate::error::ConvertError;

/// Where the curl command comes from.
pub trait SourceText {
    fn read_source(&mut self) -> Result<String, ConvertError>;
}

/// Where the converted command goes.
pub trait ResultSink {
    fn write_result(&mut self, text: &str) -> Result<(), ConvertError>;
}

/// In-memory clipboard holding a single text value.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: String,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            writes: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of `write_result` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SourceText for MemoryClipboard {
    fn read_source(&mut self) -> Result<String, ConvertError> {
        Ok(self.content.clone())
    }
}

impl ResultSink for MemoryClipboard {
    fn write_result(&mut self, text: &str) -> Result<(), ConvertError> {
        self.content = text.to_string();
        self.writes += 1;
        Ok(())
    }
}

/// Sink that discards the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn write_result(&mut self, _text: &str) -> Result<(), ConvertError> {
        Ok(())
    }
}
