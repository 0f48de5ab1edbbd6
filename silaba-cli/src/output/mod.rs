//! Output formatting module

use crate::commands::OutputFormat;
use crate::config::OutputConfig;
use anyhow::Result;
use silaba_core::Syllabification;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the syllabification of a single word
    fn format_word(&mut self, result: &Syllabification) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Syllables of `result` as configured for display
pub(crate) fn render_syllables(result: &Syllabification, config: &OutputConfig) -> String {
    if config.mark_stress {
        result.stress_marked(&config.separator)
    } else {
        result.hyphenated(&config.separator)
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, config.clone())),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, config.clone())),
    }
}
