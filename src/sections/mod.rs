//! Password validation sections
//!
//! Each section checks one aspect of a password against the requirements.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;
pub(crate) use variety::missing_types;

use crate::types::CharacterType;

/// A requirement the password fails to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort { min: usize },
    TooLong { max: usize },
    MissingType(CharacterType),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { min } => write!(f, "Password must be at least {} characters", min),
            Self::TooLong { max } => write!(f, "Password must be at most {} characters", max),
            Self::MissingType(kind) => write!(f, "Missing: {}", kind),
        }
    }
}

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;
