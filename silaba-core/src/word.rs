//! Indexed view over a single word
//!
//! The scanners address characters by position and look at most three
//! characters ahead, so the word is decoded into chars once. Every rule
//! lookup reads the case-folded copy; the original characters are only used
//! to cut the syllables out.

/// A word decoded for O(1) positional access
#[derive(Debug, Clone)]
pub struct Word {
    /// Characters as given
    chars: Vec<char>,
    /// Lowercase copy, same length as `chars`
    folded: Vec<char>,
}

impl Word {
    /// Decode a word
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let folded = chars.iter().map(|&ch| fold_case(ch)).collect();
        Self { chars, folded }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the word has no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if `pos` is at or past the end of the word
    pub fn is_at_end(&self, pos: usize) -> bool {
        pos >= self.len()
    }

    /// Case-folded character at `pos`
    pub fn at(&self, pos: usize) -> Option<char> {
        self.folded.get(pos).copied()
    }

    /// Check if the case-folded character at `pos` is `target`
    pub fn is_char(&self, pos: usize, target: char) -> bool {
        self.at(pos) == Some(target)
    }

    /// Look ahead `n` positions from `pos` (0 = `pos` itself)
    pub fn peek(&self, pos: usize, n: usize) -> Option<char> {
        self.at(pos + n)
    }

    /// Last case-folded character
    pub fn last(&self) -> Option<char> {
        self.folded.last().copied()
    }

    /// Case-folded character before the last one
    pub fn before_last(&self) -> Option<char> {
        self.len().checked_sub(2).and_then(|pos| self.at(pos))
    }

    /// Original characters in `start..end`
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

/// Lowercase a single character
///
/// Characters whose lowercase form expands to several chars are left as
/// they are, so positions in the folded copy line up with the original.
pub(crate) fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_basic() {
        let word = Word::new("Camión");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
        assert_eq!(word.at(0), Some('c'));
        assert_eq!(word.at(4), Some('ó'));
        assert_eq!(word.at(6), None);
        assert!(word.is_at_end(6));
        assert!(!word.is_at_end(5));
    }

    #[test]
    fn test_peek_and_is_char() {
        let word = Word::new("queso");
        assert!(word.is_char(1, 'u'));
        assert_eq!(word.peek(1, 0), Some('u'));
        assert_eq!(word.peek(1, 2), Some('s'));
        assert_eq!(word.peek(3, 2), None);
    }

    #[test]
    fn test_last_letters() {
        let word = Word::new("CaracoL");
        assert_eq!(word.last(), Some('l'));
        assert_eq!(word.before_last(), Some('o'));

        let single = Word::new("y");
        assert_eq!(single.last(), Some('y'));
        assert_eq!(single.before_last(), None);
    }

    #[test]
    fn test_slice_keeps_original_case() {
        let word = Word::new("MurCiélago");
        assert_eq!(word.slice(0, 3), "Mur");
        assert_eq!(word.slice(3, 6), "Cié");
    }

    #[test]
    fn test_fold_case_keeps_length() {
        // 'İ' lowercases to two chars
        assert_eq!(fold_case('İ'), 'İ');
        assert_eq!(fold_case('Á'), 'á');
        assert_eq!(fold_case('Ü'), 'ü');
        assert_eq!(Word::new("İa").len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_slice_past_end() {
        let _ = Word::new("casa").slice(2, 5);
    }

    #[test]
    fn test_empty_word() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.last(), None);
        assert!(word.is_at_end(0));
    }
}
