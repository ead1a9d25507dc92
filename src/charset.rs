//! Character type registry and classifier.
//!
//! One range table backs both matching (`classify`, `contains`) and
//! counting (`cardinality`), so a type is scored with exactly the
//! characters it matches.

use crate::types::{CharacterType, CodeRange};

const DIGIT_RANGES: &[CodeRange] = &[CodeRange::new('0', '9')];

const LOWERCASE_RANGES: &[CodeRange] = &[CodeRange::new('a', 'z')];

const UPPERCASE_RANGES: &[CodeRange] = &[CodeRange::new('A', 'Z')];

const PUNCTUATION_RANGES: &[CodeRange] = &[
    CodeRange::new(' ', '/'),
    CodeRange::new(':', '@'),
    CodeRange::new('[', '`'),
    CodeRange::new('{', '~'),
];

const EXTENDED_RANGES: &[CodeRange] = &[CodeRange::new('\u{80}', '\u{FF}')];

/// Every defined type with its ranges.
pub const REGISTRY: [(CharacterType, &[CodeRange]); 5] = [
    (CharacterType::DIGIT, DIGIT_RANGES),
    (CharacterType::LOWERCASE, LOWERCASE_RANGES),
    (CharacterType::UPPERCASE, UPPERCASE_RANGES),
    (CharacterType::PUNCTUATION, PUNCTUATION_RANGES),
    (CharacterType::EXTENDED, EXTENDED_RANGES),
];

/// Returns the ranges of a single character type.
///
/// Combined flags (e.g. `DIGIT | UPPERCASE`) are not a registered type
/// and yield an empty slice.
pub fn ranges_for(kind: CharacterType) -> &'static [CodeRange] {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == kind)
        .map(|(_, ranges)| *ranges)
        .unwrap_or(&[])
}

/// Number of characters representable by a single character type.
pub fn cardinality(kind: CharacterType) -> u32 {
    ranges_for(kind).iter().map(CodeRange::size).sum()
}

/// Returns every type whose ranges contain `c`.
///
/// An empty set means the character is unclassified.
pub fn classify(c: char) -> CharacterType {
    REGISTRY
        .iter()
        .filter(|(_, ranges)| ranges.iter().any(|range| range.contains(c)))
        .fold(CharacterType::empty(), |acc, (kind, _)| acc | *kind)
}

/// Checks whether any character of `password` classifies as `kind`.
pub fn contains(password: &str, kind: CharacterType) -> bool {
    password.chars().any(|c| classify(c).contains(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_ranges() {
        for kind in CharacterType::all().iter() {
            assert!(!ranges_for(kind).is_empty(), "{:?} has no ranges", kind);
        }
    }

    #[test]
    fn test_cardinality_per_type() {
        assert_eq!(cardinality(CharacterType::DIGIT), 10);
        assert_eq!(cardinality(CharacterType::LOWERCASE), 26);
        assert_eq!(cardinality(CharacterType::UPPERCASE), 26);
        assert_eq!(cardinality(CharacterType::PUNCTUATION), 33);
        assert_eq!(cardinality(CharacterType::EXTENDED), 128);
    }

    #[test]
    fn test_cardinality_combined_flags_is_zero() {
        assert_eq!(cardinality(CharacterType::DIGIT | CharacterType::UPPERCASE), 0);
    }

    #[test]
    fn test_classify_digit() {
        let kind = classify('5');
        assert!(kind.contains(CharacterType::DIGIT));
        assert!(!kind.intersects(
            CharacterType::LOWERCASE
                | CharacterType::UPPERCASE
                | CharacterType::PUNCTUATION
                | CharacterType::EXTENDED
        ));
    }

    #[test]
    fn test_classify_letters_and_punctuation() {
        assert_eq!(classify('q'), CharacterType::LOWERCASE);
        assert_eq!(classify('Q'), CharacterType::UPPERCASE);
        assert_eq!(classify(' '), CharacterType::PUNCTUATION);
        assert_eq!(classify('~'), CharacterType::PUNCTUATION);
        assert_eq!(classify('é'), CharacterType::EXTENDED);
    }

    #[test]
    fn test_classify_unclassified() {
        assert!(classify('\u{7F}').is_empty());
        assert!(classify('\n').is_empty());
        assert!(classify('€').is_empty());
        assert!(classify('🔑').is_empty());
    }

    #[test]
    fn test_classify_is_pure() {
        for c in ['a', 'Z', '0', '!', '\u{A9}', '\u{100}'] {
            assert_eq!(classify(c), classify(c));
        }
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        for code in 0u32..=0xFF {
            if let Some(c) = char::from_u32(code) {
                assert!(classify(c).iter().count() <= 1, "{:#x} has several types", code);
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(contains("abc1", CharacterType::DIGIT));
        assert!(!contains("abcd", CharacterType::DIGIT));
        assert!(contains("naïve", CharacterType::EXTENDED));
        assert!(!contains("", CharacterType::LOWERCASE));
        assert!(!contains("€€€", CharacterType::EXTENDED));
    }
}
