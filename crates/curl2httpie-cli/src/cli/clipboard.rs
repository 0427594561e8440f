//! System clipboard and stdin adapters for the conversion pipeline.

use curl2httpie_core::io::{ResultSink, SourceText};
use curl2httpie_core::ConvertError;
use std::io::{self, Read};

/// The desktop clipboard, via `arboard`.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clipboard", &"<system clipboard>")
            .finish()
    }
}

impl SystemClipboard {
    pub fn open() -> Result<Self, ConvertError> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ConvertError::ClipboardUnavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl SourceText for SystemClipboard {
    fn read_source(&mut self) -> Result<String, ConvertError> {
        self.clipboard
            .get_text()
            .map_err(|e| ConvertError::ClipboardRead(e.to_string()))
    }
}

impl ResultSink for SystemClipboard {
    fn write_result(&mut self, text: &str) -> Result<(), ConvertError> {
        tracing::debug!("writing {} characters to system clipboard", text.len());
        self.clipboard
            .set_text(text)
            .map_err(|e| ConvertError::ClipboardWrite(e.to_string()))
    }
}

/// Reads the whole of standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl SourceText for StdinSource {
    fn read_source(&mut self) -> Result<String, ConvertError> {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    }
}
