//! Per-syllable scanners
//!
//! One syllable is read in three phases. Each phase takes the position the
//! previous one stopped at and returns how far it advanced:
//!
//! - [`Scanner::onset`]: leading consonants, plus the silent `u` of `qu`/`gu`
//! - [`Scanner::nucleus`]: the vowel group and any written accent in it
//! - [`Scanner::coda`]: trailing consonants up to the next syllable's onset
//!
//! There is no backtracking; the lookahead never exceeds three characters.

mod coda;
mod nucleus;
mod onset;

pub use nucleus::NucleusScan;

use crate::classifier::CharacterClassifier;
use crate::types::CharClass;
use crate::word::Word;

/// Syllable scanner over one word
#[derive(Debug)]
pub struct Scanner<'a, C: CharacterClassifier> {
    word: &'a Word,
    classifier: &'a C,
}

impl<'a, C: CharacterClassifier> Scanner<'a, C> {
    /// Create a scanner for `word`
    pub fn new(word: &'a Word, classifier: &'a C) -> Self {
        Self { word, classifier }
    }

    #[inline]
    fn class_at(&self, pos: usize) -> Option<CharClass> {
        self.word.at(pos).map(|ch| self.classifier.classify(ch))
    }

    #[inline]
    fn is_consonant(&self, ch: char) -> bool {
        self.classifier.is_consonant(ch)
    }

    #[inline]
    fn is_vowel_at(&self, pos: usize) -> bool {
        self.class_at(pos).is_some_and(CharClass::is_vowel)
    }
}
