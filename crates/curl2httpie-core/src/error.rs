//! Errors raised by the conversion pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source text does not start with `curl `.
    #[error("Clipboard content does not appear to be a curl command")]
    NotCurl,
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    #[error("failed to read clipboard: {0}")]
    ClipboardRead(String),
    #[error("failed to write clipboard: {0}")]
    ClipboardWrite(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
