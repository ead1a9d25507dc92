//! Random password generation satisfying [`Requirements`].

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::ranges_for;
use crate::requirements::Requirements;
use crate::types::CharacterType;

/// Length used when no usable target length is given.
pub const DEFAULT_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Length {length} cannot fit {required} required character types")]
    TargetTooShort { length: usize, required: usize },
}

/// Generates a password using the thread-local generator.
///
/// `rand::rng()` is seeded from the operating system and is suitable for
/// secrets. Use [`generate_with_rng`] to plug in another source.
///
/// # Errors
///
/// Returns [`GenerationError::TargetTooShort`] when the effective length
/// is smaller than the number of required types.
pub fn generate(
    target: Option<usize>,
    requirements: &Requirements,
) -> Result<SecretString, GenerationError> {
    generate_with_rng(&mut rand::rng(), target, requirements)
}

/// Generates a password drawing randomness from `rng`.
///
/// Every required type appears at least once; remaining positions are
/// filled with types drawn uniformly from the required set (or the
/// standard set when nothing is required), then the positions are shuffled.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    target: Option<usize>,
    requirements: &Requirements,
) -> Result<SecretString, GenerationError> {
    let length = effective_length(target, requirements);
    let required = requirements.required_count();
    if length < required {
        #[cfg(feature = "tracing")]
        tracing::error!("Generation FAILED: length {} < {} required types", length, required);
        return Err(GenerationError::TargetTooShort { length, required });
    }

    let mut slots: Vec<CharacterType> = requirements.required_types().iter().collect();

    let pool: Vec<CharacterType> = if slots.is_empty() {
        CharacterType::STANDARD.iter().collect()
    } else {
        slots.clone()
    };
    while slots.len() < length {
        slots.push(pool[rng.random_range(0..pool.len())]);
    }

    slots.shuffle(rng);

    let password: String = slots
        .into_iter()
        .map(|kind| random_char(rng, kind))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", length);

    Ok(SecretString::new(password.into()))
}

/// Resolves the number of characters to generate.
///
/// The target is raised to the minimum length and capped at the maximum.
/// A missing or zero target falls back to [`DEFAULT_LENGTH`].
pub fn effective_length(target: Option<usize>, requirements: &Requirements) -> usize {
    let length = match target {
        Some(n) => n.max(requirements.min_length()),
        None => DEFAULT_LENGTH.max(requirements.min_length()),
    };
    let length = if length == 0 { DEFAULT_LENGTH } else { length };

    match requirements.max_length() {
        Some(max) => length.min(max),
        None => length,
    }
}

/// Picks a range of `kind` at random, then a character within it.
///
/// `kind` must be a single registered type; `Requirements` only holds those.
fn random_char<R: Rng>(rng: &mut R, kind: CharacterType) -> char {
    let ranges = ranges_for(kind);
    let range = ranges[rng.random_range(0..ranges.len())];
    rng.random_range(range.min..=range.max)
}
