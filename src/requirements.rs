//! Password requirements: required character types and length bounds.
//!
//! Requirements are validated once at construction and are read-only
//! afterwards. They are passed explicitly to validation and generation.

use crate::types::CharacterType;
use thiserror::Error;

/// Environment variable holding the required types (`digit,upper,...`).
pub const REQUIRED_TYPES_VAR: &str = "PASSY_REQUIRED_TYPES";
/// Environment variable holding the minimum length.
pub const MIN_LENGTH_VAR: &str = "PASSY_MIN_LENGTH";
/// Environment variable holding the maximum length (`unbounded` or empty for none).
pub const MAX_LENGTH_VAR: &str = "PASSY_MAX_LENGTH";

pub const DEFAULT_MIN_LENGTH: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementsError {
    #[error("Minimum length {min} exceeds maximum length {max}")]
    LengthBounds { min: usize, max: usize },
    #[error("Maximum length {max} cannot fit {required} required character types")]
    Unsatisfiable { max: usize, required: usize },
    #[error("Unknown character type bits {0:#010b}")]
    UnknownTypes(u8),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVariable { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    required_types: CharacterType,
    min_length: usize,
    max_length: Option<usize>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            required_types: CharacterType::STANDARD,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: None,
        }
    }
}

impl Requirements {
    /// Builds validated requirements. `max_length: None` means unbounded.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `min_length` is greater than `max_length`
    /// - `max_length` is smaller than the number of required types
    /// - `required_types` carries bits outside the defined types
    pub fn new(
        required_types: CharacterType,
        min_length: usize,
        max_length: Option<usize>,
    ) -> Result<Self, RequirementsError> {
        let unknown = required_types.bits() & !CharacterType::all().bits();
        if unknown != 0 {
            #[cfg(feature = "tracing")]
            tracing::error!("Requirements rejected: unknown type bits {:#b}", unknown);
            return Err(RequirementsError::UnknownTypes(unknown));
        }

        if let Some(max) = max_length {
            if min_length > max {
                #[cfg(feature = "tracing")]
                tracing::error!("Requirements rejected: min {} > max {}", min_length, max);
                return Err(RequirementsError::LengthBounds { min: min_length, max });
            }

            let required = required_types.iter().count();
            if max < required {
                #[cfg(feature = "tracing")]
                tracing::error!("Requirements rejected: max {} < {} required types", max, required);
                return Err(RequirementsError::Unsatisfiable { max, required });
            }
        }

        Ok(Self {
            required_types,
            min_length,
            max_length,
        })
    }

    /// Builds requirements from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PASSY_REQUIRED_TYPES`: comma or pipe separated type names,
    ///   empty for no required type (default: digit, lowercase, uppercase, punctuation)
    /// - `PASSY_MIN_LENGTH`: minimum length (default: 6)
    /// - `PASSY_MAX_LENGTH`: maximum length, `unbounded` or empty for none (default: none)
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the resulting
    /// bounds are rejected by [`Requirements::new`].
    pub fn from_env() -> Result<Self, RequirementsError> {
        let defaults = Self::default();

        let required_types = match std::env::var(REQUIRED_TYPES_VAR) {
            Ok(value) => parse_types(&value)?,
            Err(_) => defaults.required_types,
        };

        let min_length = match std::env::var(MIN_LENGTH_VAR) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| invalid(MIN_LENGTH_VAR, &value))?,
            Err(_) => defaults.min_length,
        };

        let max_length = match std::env::var(MAX_LENGTH_VAR) {
            Ok(value) => parse_max_length(&value)?,
            Err(_) => defaults.max_length,
        };

        Self::new(required_types, min_length, max_length)
    }

    pub fn required_types(&self) -> CharacterType {
        self.required_types
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// `None` when unbounded.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Number of distinct required types.
    pub fn required_count(&self) -> usize {
        self.required_types.iter().count()
    }
}

fn invalid(name: &'static str, value: &str) -> RequirementsError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Ignoring configuration: invalid {}", name);
    RequirementsError::InvalidVariable {
        name,
        value: value.to_string(),
    }
}

fn parse_types(value: &str) -> Result<CharacterType, RequirementsError> {
    value
        .split([',', '|'])
        .filter(|name| !name.trim().is_empty())
        .try_fold(CharacterType::empty(), |acc, name| {
            CharacterType::parse_name(name)
                .map(|kind| acc | kind)
                .ok_or_else(|| invalid(REQUIRED_TYPES_VAR, value))
        })
}

fn parse_max_length(value: &str) -> Result<Option<usize>, RequirementsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "unbounded" | "inf" | "infinity" => Ok(None),
        number => number
            .parse()
            .map(Some)
            .map_err(|_| invalid(MAX_LENGTH_VAR, value)),
    }
}
