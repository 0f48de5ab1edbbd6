//! Spanish word syllabization and stress detection
//!
//! This crate splits a single Spanish word into its orthographic syllables
//! and finds the stressed one, following Spanish hyphenation and
//! accentuation rules.
//!
//! # Architecture
//!
//! Each syllable is read by three scanners in a fixed cycle, in a single
//! forward pass with at most three characters of lookahead:
//! - **Onset**: leading consonants, plus the silent `u` of `qu`/`gu`
//! - **Nucleus**: diphthongs, triphthongs, hiatus and written accents
//! - **Coda**: consonant-cluster splitting up to the next onset
//!
//! When no syllable carries a written accent, the llana/aguda default rule
//! places the stress.
//!
//! # Example
//!
//! ```rust
//! use silaba_core::{syllabize, StressSource};
//!
//! let result = syllabize("murciélago").unwrap();
//! assert_eq!(result.syllables, vec!["mur", "cié", "la", "go"]);
//! assert_eq!(result.stressed, 1);
//! assert_eq!(result.stress_source, StressSource::Written);
//!
//! let result = syllabize("caracol").unwrap();
//! assert_eq!(result.to_string(), "ca-ra-col");
//! assert_eq!(result.stressed_syllable(), "col");
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod error;
pub mod scanner;
pub mod syllabizer;
pub(crate) mod tables;
pub mod types;
pub mod word;

pub use classifier::{CharacterClassifier, SpanishClassifier};
pub use error::{Result, SyllabizeError};
pub use syllabizer::{syllabize, syllabize_all, Syllabizer};
pub use types::{CharClass, StressSource, Syllabification, VowelClass};
pub use word::Word;
