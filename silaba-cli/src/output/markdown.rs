//! Markdown output formatter

use super::{render_syllables, OutputFormatter};
use crate::config::OutputConfig;
use anyhow::Result;
use silaba_core::Syllabification;
use std::io::Write;

/// Markdown formatter - outputs words as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    config: OutputConfig,
    word_count: usize,
    syllable_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self {
            writer,
            config,
            word_count: 0,
            syllable_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, result: &Syllabification) -> Result<()> {
        self.word_count += 1;
        self.syllable_count += result.syllable_count();
        writeln!(
            self.writer,
            "{}. **{}**: {} (stress: *{}*)",
            self.word_count,
            result.word,
            render_syllables(result, &self.config),
            result.stressed_syllable()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, syllables: {}*",
            self.word_count, self.syllable_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silaba_core::syllabize;

    #[test]
    fn test_markdown_list() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, OutputConfig::default());
            formatter
                .format_word(&syllabize("ejemplo").unwrap())
                .unwrap();
            formatter.format_word(&syllabize("sol").unwrap()).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("1. **ejemplo**: e-jem-plo (stress: *jem*)"));
        assert!(output.contains("2. **sol**: sol (stress: *sol*)"));
        assert!(output.contains("---"));
        assert!(output.contains("*Total words: 2, syllables: 4*"));
    }
}
