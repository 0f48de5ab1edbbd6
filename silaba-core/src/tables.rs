//! Letter-group tables for Spanish syllabization
//!
//! All tables are immutable and allocation-free during lookup. Every entry
//! is lowercase; callers fold case first.

/// a, e, o
pub const OPEN_PLAIN: &[char] = &['a', 'e', 'o'];

/// Open vowels with a written accent
pub const OPEN_ACCENTED: &[char] = &['á', 'à', 'é', 'è', 'ó', 'ò'];

/// i, u
pub const CLOSED_PLAIN: &[char] = &['i', 'u'];

/// Closed vowels with a written accent
pub const CLOSED_ACCENTED: &[char] = &['í', 'ì', 'ú', 'ù'];

/// Vowels with diaeresis
pub const DIAERESIS: &[char] = &['ä', 'ë', 'ï', 'ö', 'ü'];

/// Vowels after which the `u` of `gu` is silent
pub const GU_FRONT_VOWELS: &[char] = &['e', 'é', 'i', 'í'];

/// Consonants forming an inseparable onset with a following `l`
pub const BEFORE_L_GROUP: &[char] = &['b', 'v', 'c', 'k', 'f', 'g', 'p', 't'];

/// Consonants forming an inseparable onset with a following `r`
pub const BEFORE_R_GROUP: &[char] = &['b', 'v', 'c', 'd', 'k', 'f', 'g', 'p', 't'];

/// Consonants that stay with a following consonantal `y`
pub const FOREIGN_GROUP: &[char] = &['s', 'l', 'r', 'n', 'c'];

/// Pairs that begin a syllable when preceded by another consonant
pub const CONSONANT_PAIRS: &[[char; 2]] = &[
    ['p', 't'],
    ['c', 't'],
    ['c', 'n'],
    ['p', 's'],
    ['m', 'n'],
    ['g', 'n'],
    ['f', 't'],
    ['p', 'n'],
    ['c', 'z'],
    ['t', 'z'],
    ['t', 's'],
];

/// Check membership of `ch` in a letter group
#[inline]
pub fn contains(group: &[char], ch: char) -> bool {
    group.contains(&ch)
}

/// Check if `first` + `second` is one of [`CONSONANT_PAIRS`]
#[inline]
pub fn is_consonant_pair(first: char, second: char) -> bool {
    CONSONANT_PAIRS.contains(&[first, second])
}
