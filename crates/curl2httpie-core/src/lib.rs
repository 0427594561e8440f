//! Convert curl command lines to HTTPie syntax.
//!
//! [`parser::parse`] turns curl text into a [`RequestModel`] and
//! [`render::render`] turns that model into an `http ...` command line.
//! [`convert::run`] wires both to the read/write capabilities in [`io`].

pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod render;
pub mod request;

pub use convert::{convert, run, run_clipboard, Conversion, ConvertOptions};
pub use error::ConvertError;
pub use parser::parse;
pub use render::{render, render_with};
pub use request::{HeaderList, RequestData, RequestModel};
