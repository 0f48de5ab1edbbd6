//! Core types for syllabization

use core::fmt;

/// Vowel groups that decide diphthong, triphthong and hiatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    /// á, é, ó (and the grave forms à, è, ò)
    OpenAccented,
    /// a, e, o
    OpenPlain,
    /// í, ú (and the grave forms ì, ù)
    ClosedAccented,
    /// i, u
    ClosedPlain,
}

impl VowelClass {
    /// Open vowels (a/e/o family)
    pub fn is_open(self) -> bool {
        matches!(self, VowelClass::OpenAccented | VowelClass::OpenPlain)
    }

    /// Closed vowels (i/u family)
    pub fn is_closed(self) -> bool {
        !self.is_open()
    }

    /// Vowels bearing a written accent
    pub fn is_accented(self) -> bool {
        matches!(self, VowelClass::OpenAccented | VowelClass::ClosedAccented)
    }
}

/// Character classification for the syllable scanners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A vowel from one of the open/closed groups
    Vowel(VowelClass),
    /// A vowel with diaeresis (ä, ë, ï, ö, ü)
    ///
    /// Never a consonant, but outside the open/closed groups. The scanners
    /// give `ü` its own treatment after `g`.
    Diaeresis,
    /// Everything else, including `y`, `h`, digits and punctuation
    Consonant,
}

impl CharClass {
    /// Vowels of any kind
    pub fn is_vowel(self) -> bool {
        !self.is_consonant()
    }

    /// Consonants (the default class)
    pub fn is_consonant(self) -> bool {
        matches!(self, CharClass::Consonant)
    }
}

/// Which rule placed the stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StressSource {
    /// A written accent found by a nucleus scan
    Written,
    /// The llana/aguda default rule
    Default,
}

impl fmt::Display for StressSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressSource::Written => write!(f, "written"),
            StressSource::Default => write!(f, "default"),
        }
    }
}

/// Syllables and stress of a single word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllabification {
    /// The word as given
    pub word: String,
    /// Syllables in order; their concatenation is `word`
    pub syllables: Vec<String>,
    /// Character offsets of syllable starts, closed by the word length
    pub boundaries: Vec<usize>,
    /// Index of the stressed syllable
    pub stressed: usize,
    /// Rule that placed the stress
    pub stress_source: StressSource,
}

impl Syllabification {
    /// Number of syllables
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Single-syllable word
    pub fn is_monosyllabic(&self) -> bool {
        self.syllables.len() < 2
    }

    /// The stressed syllable
    ///
    /// # Panics
    ///
    /// Panics if `stressed` is not a valid index into `syllables`. Values
    /// returned by the syllabizer always are; a hand-built or deserialized
    /// value may not be.
    pub fn stressed_syllable(&self) -> &str {
        &self.syllables[self.stressed]
    }

    /// Syllables joined by `separator`
    pub fn hyphenated(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }

    /// Syllables joined by `separator`, stressed syllable in uppercase
    pub fn stress_marked(&self, separator: &str) -> String {
        self.syllables
            .iter()
            .enumerate()
            .map(|(idx, syllable)| {
                if idx == self.stressed {
                    syllable.to_uppercase()
                } else {
                    syllable.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Syllabification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hyphenated("-"))
    }
}
