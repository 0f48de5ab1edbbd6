//! Word list parsing
//!
//! A word list holds one word per line. Lines are trimmed; blank lines and
//! comment lines are skipped. Lines are never split further.

/// Extract the words of a word list
pub fn parse_word_list<'a>(text: &'a str, comment_prefix: &str) -> Vec<&'a str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.is_empty() || !line.starts_with(comment_prefix))
        .collect()
}
