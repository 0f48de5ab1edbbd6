//! Coda phase
//!
//! Splits the consonants between two nuclei. Word-final consonants always
//! stay in the last syllable.

use super::Scanner;
use crate::classifier::CharacterClassifier;
use crate::tables::{self, BEFORE_L_GROUP, BEFORE_R_GROUP, FOREIGN_GROUP};

impl<C: CharacterClassifier> Scanner<'_, C> {
    /// Find the end of the syllable whose nucleus ends at `start`
    pub fn coda(&self, start: usize) -> usize {
        let word = self.word;
        let pos = start;

        let c1 = match word.at(pos) {
            Some(ch) if self.is_consonant(ch) => ch,
            _ => return pos,
        };
        let Some(c2) = word.peek(pos, 1) else {
            return pos + 1;
        };
        if !self.is_consonant(c2) {
            return pos;
        }

        match word.peek(pos, 2) {
            Some(c3) if !self.is_consonant(c3) => Self::split_pair(pos, c1, c2),
            Some(c3) => self.split_run(pos, c1, c2, c3),
            // Two consonants end the word
            None if c2 == 'y' => pos,
            None => pos + 2,
        }
    }

    /// Two consonants followed by a vowel
    fn split_pair(pos: usize, c1: char, c2: char) -> usize {
        match (c1, c2) {
            ('l', 'l') | ('c', 'h') | ('r', 'r') => pos,
            // consonant + h begins a syllable, except sh and rh
            (first, 'h') if first != 's' && first != 'r' => pos,
            (first, 'y') if tables::contains(FOREIGN_GROUP, first) => pos,
            (_, 'y') => pos + 1,
            (first, 'l') if tables::contains(BEFORE_L_GROUP, first) => pos,
            (first, 'r') if tables::contains(BEFORE_R_GROUP, first) => pos,
            _ => pos + 1,
        }
    }

    /// Three consonants in a row
    fn split_run(&self, pos: usize, c1: char, c2: char, c3: char) -> usize {
        if c2 == 'y' {
            if tables::contains(FOREIGN_GROUP, c1) {
                return pos;
            }
            // y as the final vowel of the word
            if pos + 3 == self.word.len() && c3 != 'y' {
                return pos + 3;
            }
            return pos + 1;
        }

        if tables::is_consonant_pair(c2, c3) {
            return pos + 1;
        }

        // l, r and y join the consonant before them; so does the h of ch
        if c3 == 'l' || c3 == 'r' || c3 == 'y' || (c2 == 'c' && c3 == 'h') {
            pos + 1
        } else {
            pos + 2
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::SpanishClassifier;
    use crate::scanner::Scanner;
    use crate::word::Word;

    fn coda(text: &str, start: usize) -> usize {
        let word = Word::new(text);
        Scanner::new(&word, &SpanishClassifier).coda(start)
    }

    #[test]
    fn test_no_consonant() {
        assert_eq!(coda("aéreo", 1), 1);
        assert_eq!(coda("casa", 4), 4);
    }

    #[test]
    fn test_final_consonant_stays() {
        assert_eq!(coda("caracol", 6), 7);
        assert_eq!(coda("camion", 5), 6);
    }

    #[test]
    fn test_single_consonant_before_vowel() {
        assert_eq!(coda("ejemplo", 1), 1);
        assert_eq!(coda("caracol", 2), 2);
    }

    #[test]
    fn test_indivisible_digraphs() {
        assert_eq!(coda("calle", 2), 2);
        assert_eq!(coda("coche", 2), 2);
        assert_eq!(coda("carro", 2), 2);
    }

    #[test]
    fn test_consonant_plus_h() {
        // anhelo: n + h begins the next syllable
        assert_eq!(coda("anhelo", 1), 1);
        // deshacer: s + h splits between them
        assert_eq!(coda("deshacer", 2), 3);
    }

    #[test]
    fn test_consonant_plus_y() {
        assert_eq!(coda("inyectar", 1), 1);
        assert_eq!(coda("abyecto", 1), 2);
    }

    #[test]
    fn test_inseparable_onset_clusters() {
        assert_eq!(coda("atlas", 1), 1);
        assert_eq!(coda("madre", 2), 2);
        assert_eq!(coda("hablar", 2), 2);
        // no dl cluster
        assert_eq!(coda("adlátere", 1), 2);
    }

    #[test]
    fn test_split_between_two_consonants() {
        assert_eq!(coda("murciélago", 2), 3);
        assert_eq!(coda("acción", 1), 2);
    }

    #[test]
    fn test_three_consonants() {
        assert_eq!(coda("ejemplo", 3), 4);
        assert_eq!(coda("instante", 1), 3);
        assert_eq!(coda("abstracto", 1), 3);
        assert_eq!(coda("siempre", 3), 4);
    }

    #[test]
    fn test_consonant_pair_after_consonant() {
        // ns + pt: the pair begins the next syllable
        assert_eq!(coda("sumptuoso", 2), 3);
    }

    #[test]
    fn test_two_final_consonants() {
        assert_eq!(coda("bíceps", 4), 6);
        assert_eq!(coda("flash", 3), 5);
    }

    #[test]
    fn test_pair_after_consonant_starts_syllable() {
        // g + tz: the pair goes to the next syllable
        assert_eq!(coda("nòégtz", 3), 4);
        assert_eq!(coda("nòégts", 3), 4);
        // g + tl is no pair; l joins the t
        assert_eq!(coda("egtla", 1), 2);
        // g + tm splits after the second consonant
        assert_eq!(coda("egtma", 1), 3);
    }

    #[test]
    fn test_final_y_after_consonant() {
        assert_eq!(coda("pony", 2), 2);
        // three consonants to the end with y in the middle
        assert_eq!(coda("ryt", 0), 0);
        assert_eq!(coda("byy", 0), 1);
        assert_eq!(coda("byt", 0), 3);
        assert_eq!(coda("apyt", 1), 4);
        // not at the end: y starts the next syllable
        assert_eq!(coda("abyta", 1), 2);
    }
}
