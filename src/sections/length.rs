//! Length section - checks password length bounds.

use super::{SectionResult, Violation};
use crate::requirements::Requirements;

/// Checks if the password length is within the required bounds.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(violation)` if password is too short or too long
/// - `None` if password length is within bounds
pub fn length_section(password: &str, requirements: &Requirements) -> SectionResult {
    let len = password.chars().count();
    if len < requirements.min_length() {
        return Some(Violation::TooShort {
            min: requirements.min_length(),
        });
    }
    match requirements.max_length() {
        Some(max) if len > max => Some(Violation::TooLong { max }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterType;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("abc", &Requirements::default());
        assert_eq!(result, Some(Violation::TooShort { min: 6 }));
        assert_eq!(
            result.map(|v| v.to_string()),
            Some("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("123456", &Requirements::default()), None);
    }

    #[test]
    fn test_length_section_unbounded() {
        let pwd = "x".repeat(10_000);
        assert_eq!(length_section(&pwd, &Requirements::default()), None);
    }

    #[test]
    fn test_length_section_too_long() {
        let req = Requirements::new(CharacterType::empty(), 2, Some(4)).unwrap();
        assert_eq!(length_section("abcde", &req), Some(Violation::TooLong { max: 4 }));
        assert_eq!(length_section("abcd", &req), None);
    }

    #[test]
    fn test_length_section_counts_chars() {
        let req = Requirements::new(CharacterType::empty(), 0, Some(4)).unwrap();
        // four characters, eight bytes
        assert_eq!(length_section("éééé", &req), None);
    }
}
