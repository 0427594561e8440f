//! One-shot conversion: read a curl command, render it for HTTPie, write it back.

use std::io::Write;

use crate::error::ConvertError;
use crate::io::{ResultSink, SourceText};
use crate::parser::{self, SOURCE_COMMAND};
use crate::render::{self, TARGET_COMMAND};
use crate::request::RequestModel;

/// Knobs for [`run`].
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions<'a> {
    /// Program name the rendered command starts with.
    pub program: &'a str,
    /// Write only the converted command to `out` instead of the full summary.
    pub quiet: bool,
}

impl Default for ConvertOptions<'_> {
    fn default() -> Self {
        Self {
            program: TARGET_COMMAND,
            quiet: false,
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub original: String,
    pub converted: String,
    pub request: RequestModel,
}

/// True if `text` starts with `curl ` once trimmed, ignoring case.
pub fn looks_like_curl(text: &str) -> bool {
    text.trim()
        .to_lowercase()
        .starts_with(&format!("{} ", SOURCE_COMMAND))
}

/// Check, parse and render one curl command.
pub fn convert(text: &str, program: &str) -> Result<Conversion, ConvertError> {
    if !looks_like_curl(text) {
        return Err(ConvertError::NotCurl);
    }
    let request = parser::parse(text);
    let converted = render::render_with(&request, program);
    Ok(Conversion {
        original: text.to_string(),
        converted,
        request,
    })
}

/// Read from `source`, convert, write to `sink` and print a summary to `out`.
///
/// Nothing reaches `sink` unless the conversion succeeded.
pub fn run<S, K, W>(
    source: &mut S,
    sink: &mut K,
    out: &mut W,
    options: ConvertOptions<'_>,
) -> Result<Conversion, ConvertError>
where
    S: SourceText + ?Sized,
    K: ResultSink + ?Sized,
    W: Write + ?Sized,
{
    let text = source.read_source()?;
    finish(text, sink, out, options)
}

/// [`run`] for a single clipboard that is both the source and the sink.
pub fn run_clipboard<C, W>(
    clipboard: &mut C,
    out: &mut W,
    options: ConvertOptions<'_>,
) -> Result<Conversion, ConvertError>
where
    C: SourceText + ResultSink + ?Sized,
    W: Write + ?Sized,
{
    let text = clipboard.read_source()?;
    finish(text, clipboard, out, options)
}

fn finish<K, W>(
    text: String,
    sink: &mut K,
    out: &mut W,
    options: ConvertOptions<'_>,
) -> Result<Conversion, ConvertError>
where
    K: ResultSink + ?Sized,
    W: Write + ?Sized,
{
    tracing::debug!(bytes = text.len(), "read source text");

    let conversion = convert(&text, options.program)?;
    sink.write_result(&conversion.converted)?;
    tracing::info!(
        method = %conversion.request.method,
        converted = %conversion.converted,
        "converted curl command"
    );

    if options.quiet {
        writeln!(out, "{}", conversion.converted)?;
    } else {
        print_summary(out, &conversion)?;
    }
    Ok(conversion)
}

fn print_summary<W: Write + ?Sized>(out: &mut W, conversion: &Conversion) -> std::io::Result<()> {
    writeln!(out, "Successfully converted curl command to HTTPie syntax!")?;
    writeln!(out)?;
    writeln!(out, "Original curl command:")?;
    writeln!(out, "{}", conversion.original)?;
    writeln!(out)?;
    writeln!(out, "Converted HTTPie command:")?;
    writeln!(out, "{}", conversion.converted)?;
    out.flush()
}
