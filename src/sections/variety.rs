//! Character variety section - checks that every required type is present.

use super::{SectionResult, Violation};
use crate::charset::contains;
use crate::requirements::Requirements;

/// Checks if the password contains every required character type.
///
/// Stops at the first missing type.
///
/// # Returns
/// - `Some(Violation::MissingType(..))` with the first missing type
/// - `None` if all required types are present
pub fn character_variety_section(password: &str, requirements: &Requirements) -> SectionResult {
    missing_types(password, requirements).next()
}

/// Lazily yields a violation for every required type absent from `password`.
pub(crate) fn missing_types<'a>(
    password: &'a str,
    requirements: &Requirements,
) -> impl Iterator<Item = Violation> + 'a {
    requirements
        .required_types()
        .iter()
        .filter(move |&kind| !contains(password, kind))
        .map(Violation::MissingType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterType;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section("lowercase123!", &Requirements::default());
        assert_eq!(result, Some(Violation::MissingType(CharacterType::UPPERCASE)));
    }

    #[test]
    fn test_variety_section_missing_digit() {
        let result = character_variety_section("NoNumbers!", &Requirements::default());
        assert_eq!(result, Some(Violation::MissingType(CharacterType::DIGIT)));
        assert_eq!(result.map(|v| v.to_string()), Some("Missing: digit".to_string()));
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(character_variety_section("HasAll123!@#", &Requirements::default()), None);
    }

    #[test]
    fn test_variety_section_no_required_types() {
        let req = Requirements::new(CharacterType::empty(), 0, None).unwrap();
        assert_eq!(character_variety_section("", &req), None);
    }

    #[test]
    fn test_missing_types_collects_all() {
        let missing: Vec<Violation> = missing_types("abc", &Requirements::default()).collect();
        assert_eq!(
            missing,
            vec![
                Violation::MissingType(CharacterType::DIGIT),
                Violation::MissingType(CharacterType::UPPERCASE),
                Violation::MissingType(CharacterType::PUNCTUATION),
            ]
        );
    }

    #[test]
    fn test_variety_section_reports_first_missing_type() {
        let req = Requirements::default();
        for pwd in ["", "abc", "ABC", "aB1", "aB!", "Abcdef1!"] {
            assert_eq!(
                character_variety_section(pwd, &req),
                missing_types(pwd, &req).next(),
                "{pwd:?}"
            );
        }
    }
}
