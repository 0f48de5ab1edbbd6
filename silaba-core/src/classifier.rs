//! Character classification for syllabization

use crate::tables;
use crate::types::{CharClass, VowelClass};
use crate::word::fold_case;

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character (case-insensitive)
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character is a vowel of any kind
    fn is_vowel(&self, ch: char) -> bool {
        self.classify(ch).is_vowel()
    }

    /// Check if character is a consonant
    fn is_consonant(&self, ch: char) -> bool {
        self.classify(ch).is_consonant()
    }

    /// Get the open/closed group of a vowel
    fn vowel_class(&self, ch: char) -> Option<VowelClass> {
        match self.classify(ch) {
            CharClass::Vowel(class) => Some(class),
            CharClass::Diaeresis | CharClass::Consonant => None,
        }
    }
}

/// Table-driven classifier for the Spanish alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishClassifier;

impl SpanishClassifier {
    /// Create a classifier
    pub fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for SpanishClassifier {
    fn classify(&self, ch: char) -> CharClass {
        let ch = fold_case(ch);
        if tables::contains(tables::OPEN_PLAIN, ch) {
            CharClass::Vowel(VowelClass::OpenPlain)
        } else if tables::contains(tables::OPEN_ACCENTED, ch) {
            CharClass::Vowel(VowelClass::OpenAccented)
        } else if tables::contains(tables::CLOSED_PLAIN, ch) {
            CharClass::Vowel(VowelClass::ClosedPlain)
        } else if tables::contains(tables::CLOSED_ACCENTED, ch) {
            CharClass::Vowel(VowelClass::ClosedAccented)
        } else if tables::contains(tables::DIAERESIS, ch) {
            CharClass::Diaeresis
        } else {
            CharClass::Consonant
        }
    }
}
