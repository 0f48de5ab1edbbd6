//! Nucleus phase
//!
//! Reads up to three vowel-like characters (first, optional `h`, second,
//! optional third) and decides whether they form one nucleus:
//!
//! - open + open is a hiatus: the nucleus ends after the first vowel
//! - closed + open is a rising diphthong, open + closed a falling one
//! - two different closed vowels form a diphthong (`iu`, `ui`)
//! - closed + open + closed is a triphthong
//!
//! An `h` between two vowels is transparent, but is left to the next
//! syllable when the vowels split.

use super::Scanner;
use crate::classifier::CharacterClassifier;
use crate::types::{CharClass, VowelClass};

/// Outcome of a nucleus scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NucleusScan {
    /// Position just past the nucleus
    pub end: usize,
    /// A consumed vowel bears a written accent
    pub stressed: bool,
}

impl NucleusScan {
    fn new(end: usize, stressed: bool) -> Self {
        Self { end, stressed }
    }
}

impl<C: CharacterClassifier> Scanner<'_, C> {
    /// Find the end of the nucleus starting at `start`
    ///
    /// Only accents on vowels this nucleus consumes are reported; a vowel
    /// left for the next syllable reports its own accent there.
    pub fn nucleus(&self, start: usize) -> NucleusScan {
        let word = self.word;
        let mut pos = start;
        let mut stressed = false;

        if word.is_at_end(pos) {
            return NucleusScan::new(pos, false);
        }

        // y before a vowel is a glide
        if word.is_char(pos, 'y') {
            pos += 1;
        }

        // Anything outside the vowel groups behaves as an open first vowel
        let mut first_closed = false;
        if let Some(ch) = word.at(pos) {
            match self.classifier.classify(ch) {
                CharClass::Vowel(VowelClass::OpenAccented) => {
                    stressed = true;
                    pos += 1;
                }
                CharClass::Vowel(VowelClass::OpenPlain) => pos += 1,
                CharClass::Vowel(VowelClass::ClosedAccented) => {
                    return NucleusScan::new(pos + 1, true);
                }
                CharClass::Diaeresis if ch == 'ü' => {
                    return NucleusScan::new(pos + 1, true);
                }
                CharClass::Vowel(VowelClass::ClosedPlain) => {
                    first_closed = true;
                    pos += 1;
                }
                CharClass::Diaeresis | CharClass::Consonant => {}
            }
        }

        let aitch = word.is_char(pos, 'h');
        if aitch {
            pos += 1;
        }
        // Where the nucleus ends if the second vowel starts a new syllable
        let split_at = if aitch { pos - 1 } else { pos };

        if let Some(ch) = word.at(pos) {
            match self.classifier.classify(ch) {
                CharClass::Vowel(class) if class.is_open() => {
                    if !first_closed {
                        return NucleusScan::new(split_at, stressed);
                    }
                    stressed |= class.is_accented();
                    pos += 1;
                }
                CharClass::Vowel(VowelClass::ClosedAccented) => {
                    if first_closed {
                        return NucleusScan::new(pos + 1, true);
                    }
                    return NucleusScan::new(split_at, stressed);
                }
                CharClass::Vowel(VowelClass::ClosedPlain) => {
                    return self.closed_second(pos, split_at, stressed);
                }
                CharClass::Diaeresis if ch == 'ü' => {
                    return self.closed_second(pos, split_at, stressed);
                }
                CharClass::Vowel(_) | CharClass::Diaeresis | CharClass::Consonant => {}
            }
        }

        // Triphthong completion
        if word
            .at(pos)
            .is_some_and(|ch| self.classifier.vowel_class(ch) == Some(VowelClass::ClosedPlain))
        {
            pos += 1;
        }

        NucleusScan::new(pos, stressed)
    }

    /// Plain closed vowel (or `ü`) in second position at `pos`
    fn closed_second(&self, pos: usize, split_at: usize, stressed: bool) -> NucleusScan {
        // Followed by a vowel, it opens the next nucleus instead
        if self.is_vowel_at(pos + 1) {
            return NucleusScan::new(split_at, stressed);
        }

        // Doubled letters (chiita) are not one nucleus
        if pos > 0 && self.word.at(pos) == self.word.at(pos - 1) {
            return NucleusScan::new(pos, stressed);
        }

        NucleusScan::new(pos + 1, stressed)
    }
}
