//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use silaba_core::{StressSource, Syllabification};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordData {
    /// The word as read
    pub word: String,
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Index of the stressed syllable
    pub stressed: usize,
    /// Whether a written accent or the default rule placed the stress
    pub stress_source: StressSource,
}

impl From<&Syllabification> for WordData {
    fn from(result: &Syllabification) -> Self {
        Self {
            word: result.word.clone(),
            syllables: result.syllables.clone(),
            stressed: result.stressed,
            stress_source: result.stress_source,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, result: &Syllabification) -> Result<()> {
        self.words.push(WordData::from(result));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silaba_core::syllabize;

    #[test]
    fn test_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_word(&syllabize("camión").unwrap())
                .unwrap();
            formatter
                .format_word(&syllabize("caracol").unwrap())
                .unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<WordData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].syllables, vec!["ca", "mión"]);
        assert_eq!(parsed[0].stress_source, StressSource::Written);
        assert_eq!(parsed[1].stressed, 2);
        assert_eq!(parsed[1].stress_source, StressSource::Default);
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }

    #[test]
    fn test_stress_source_field_name() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_word(&syllabize("sol").unwrap()).unwrap();
            formatter.finish().unwrap();
        }
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"stress_source\":\"default\""));
    }
}
