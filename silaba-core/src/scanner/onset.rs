//! Onset phase

use super::Scanner;
use crate::classifier::CharacterClassifier;
use crate::tables;

impl<C: CharacterClassifier> Scanner<'_, C> {
    /// Find the end of the onset starting at `start`
    ///
    /// Returns the position of the first nucleus candidate. A `y` always
    /// stops the scan so that it can open the nucleus.
    pub fn onset(&self, start: usize) -> usize {
        let word = self.word;
        let mut pos = start;
        let mut last_consonant = None;

        while let Some(ch) = word.at(pos) {
            if ch == 'y' || !self.is_consonant(ch) {
                break;
            }
            last_consonant = Some(ch);
            pos += 1;
        }

        // The silent u of qu/gu/gü needs a letter after it
        if pos + 1 >= word.len() {
            return pos;
        }

        match (last_consonant, word.at(pos), word.peek(pos, 1)) {
            (Some('q'), Some('u'), _) => pos + 1,
            (Some('g'), Some('u'), Some(next))
                if tables::contains(tables::GU_FRONT_VOWELS, next) =>
            {
                pos + 1
            }
            (Some('g'), Some('ü'), _) => pos + 1,
            _ => pos,
        }
    }
}
