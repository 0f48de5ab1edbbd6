//! Syllabization driver
//!
//! Runs onset → nucleus → coda once per syllable until the cursor reaches
//! the end of the word, then places the stress.

use crate::classifier::{CharacterClassifier, SpanishClassifier};
use crate::error::{Result, SyllabizeError};
use crate::scanner::Scanner;
use crate::types::{StressSource, Syllabification};
use crate::word::Word;

/// Main entry point for syllabization
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Syllabizer<C: CharacterClassifier = SpanishClassifier> {
    classifier: C,
}

impl Syllabizer {
    /// Create a syllabizer with the Spanish classifier
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: CharacterClassifier> Syllabizer<C> {
    /// Create a syllabizer with a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Get the classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Split `text` into syllables and find the stressed one
    ///
    /// # Errors
    ///
    /// Returns [`SyllabizeError::InvalidInput`] if `text` is empty or
    /// contains whitespace.
    pub fn syllabize(&self, text: &str) -> Result<Syllabification> {
        validate(text)?;

        let word = Word::new(text);
        let scanner = Scanner::new(&word, &self.classifier);

        let mut boundaries = Vec::new();
        let mut written_stress = None;
        let mut pos = 0;

        while pos < word.len() {
            boundaries.push(pos);
            let start = pos;

            let onset_end = scanner.onset(pos);
            let nucleus = scanner.nucleus(onset_end);
            pos = scanner.coda(nucleus.end);

            // Letters no scanner accepts (ä, ë, ...) still move the cursor
            if pos == start {
                pos += 1;
            }

            if nucleus.stressed {
                written_stress = Some(boundaries.len() - 1);
            }

            log::trace!(
                "syllable {} of {:?}: onset..{} nucleus..{} coda..{}",
                boundaries.len() - 1,
                text,
                onset_end,
                nucleus.end,
                pos
            );
        }
        boundaries.push(word.len());

        let syllables: Vec<String> = boundaries
            .windows(2)
            .map(|pair| word.slice(pair[0], pair[1]))
            .collect();

        let (stressed, stress_source) = match written_stress {
            Some(index) => (index, StressSource::Written),
            None => {
                let index = self.default_stress(&word, syllables.len());
                log::debug!("no written accent in {text:?}, default stress on syllable {index}");
                (index, StressSource::Default)
            }
        };

        Ok(Syllabification {
            word: text.to_string(),
            syllables,
            boundaries,
            stressed,
            stress_source,
        })
    }

    /// Stress index from the llana/aguda rule
    fn default_stress(&self, word: &Word, syllable_count: usize) -> usize {
        if syllable_count < 2 {
            return 0;
        }

        let is_vowel = |ch: Option<char>| ch.is_some_and(|ch| self.classifier.is_vowel(ch));
        let llana = match word.last() {
            Some('y') => true,
            Some('n' | 's') => is_vowel(word.before_last()),
            last => is_vowel(last),
        };

        if llana {
            syllable_count - 2
        } else {
            syllable_count - 1
        }
    }
}

/// Check that `text` is a single non-empty word
fn validate(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(SyllabizeError::invalid_input("empty word"));
    }
    if text.chars().any(char::is_whitespace) {
        return Err(SyllabizeError::invalid_input(format!(
            "{text:?} contains whitespace"
        )));
    }
    Ok(())
}

// Convenience functions

/// Syllabize a word with the Spanish classifier
pub fn syllabize(text: &str) -> Result<Syllabification> {
    Syllabizer::new().syllabize(text)
}

/// Syllabize several words, one result per word
pub fn syllabize_all<'a, I>(words: I) -> Vec<Result<Syllabification>>
where
    I: IntoIterator<Item = &'a str>,
{
    let syllabizer = Syllabizer::new();
    words
        .into_iter()
        .map(|word| syllabizer.syllabize(word))
        .collect()
}
