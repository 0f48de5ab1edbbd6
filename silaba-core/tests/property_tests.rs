//! Property-based tests for syllabization invariants

use proptest::prelude::*;
use silaba_core::{syllabize, StressSource};

const ACCENTED: &[char] = &['á', 'é', 'í', 'ó', 'ú'];

/// Words over the Spanish alphabet, including the letters with special rules
fn spanish_word() -> impl Strategy<Value = String> {
    "[a-zñáéíóúüäëïöA-ZÁÉÍÓÚ]{1,16}"
}

/// Words whose only stress markers are written accents
fn accent_marked_word() -> impl Strategy<Value = String> {
    "[a-zñáéíóú]{1,16}"
}

proptest! {
    #[test]
    fn prop_syllables_partition_the_word(word in spanish_word()) {
        let result = syllabize(&word).unwrap();
        prop_assert_eq!(result.syllables.concat(), word.clone());
        prop_assert!(result.syllables.iter().all(|syllable| !syllable.is_empty()));
    }

    #[test]
    fn prop_boundaries_are_strictly_increasing(word in spanish_word()) {
        let result = syllabize(&word).unwrap();
        prop_assert_eq!(result.boundaries.first().copied(), Some(0));
        prop_assert_eq!(result.boundaries.last().copied(), Some(word.chars().count()));
        prop_assert!(result.boundaries.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(result.boundaries.len(), result.syllables.len() + 1);
    }

    #[test]
    fn prop_stress_index_in_range(word in spanish_word()) {
        let result = syllabize(&word).unwrap();
        prop_assert!(result.stressed < result.syllables.len());
        if result.is_monosyllabic() {
            prop_assert_eq!(result.stressed, 0);
        }
    }

    #[test]
    fn prop_written_accent_places_stress(word in accent_marked_word()) {
        let result = syllabize(&word).unwrap();
        let has_accent = word.chars().any(|ch| ACCENTED.contains(&ch));

        if has_accent {
            prop_assert_eq!(result.stress_source, StressSource::Written);
            prop_assert!(result
                .stressed_syllable()
                .chars()
                .any(|ch| ACCENTED.contains(&ch)));
        } else {
            prop_assert_eq!(result.stress_source, StressSource::Default);
        }
    }

    #[test]
    fn prop_syllabize_is_pure(word in spanish_word()) {
        prop_assert_eq!(syllabize(&word).unwrap(), syllabize(&word).unwrap());
    }
}
