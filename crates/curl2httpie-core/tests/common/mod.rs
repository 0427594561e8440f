//! Shared helpers for driving the pipeline through an in-memory clipboard.

use curl2httpie_core::io::MemoryClipboard;
use curl2httpie_core::{run_clipboard, Conversion, ConvertError, ConvertOptions};

pub struct Outcome {
    pub result: Result<Conversion, ConvertError>,
    pub clipboard: MemoryClipboard,
    pub stdout: String,
}

/// Put `text` on a fresh clipboard and run one conversion over it.
pub fn convert_clipboard(text: &str) -> Outcome {
    let mut clipboard = MemoryClipboard::new(text);
    let mut out = Vec::new();
    let result = run_clipboard(&mut clipboard, &mut out, ConvertOptions::default());
    Outcome {
        result,
        clipboard,
        stdout: String::from_utf8(out).expect("summary is utf-8"),
    }
}

/// Converted text for a command that is expected to succeed.
pub fn converted(text: &str) -> String {
    let outcome = convert_clipboard(text);
    outcome.result.expect("conversion succeeds").converted
}
