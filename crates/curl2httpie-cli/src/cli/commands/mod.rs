//! CLI command handlers.

mod completions;
mod convert;
mod man;

pub use completions::run_completions;
pub use convert::run_convert;
#[cfg(test)]
pub use convert::{resolve_settings, Settings};
pub use man::run_man;
