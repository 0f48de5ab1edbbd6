//! Plain text output formatter

use super::{render_syllables, OutputFormatter};
use crate::config::OutputConfig;
use anyhow::Result;
use silaba_core::Syllabification;
use std::io::Write;

/// Plain text formatter - one word per line: word, syllables, stressed index
pub struct TextFormatter<W: Write> {
    writer: W,
    config: OutputConfig,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self { writer, config }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, result: &Syllabification) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}",
            result.word,
            render_syllables(result, &self.config),
            result.stressed
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
