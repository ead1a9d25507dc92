//! Password strength analysis and generation library
//!
//! This library estimates password strength from the character types a
//! password uses and its length, validates passwords against configurable
//! requirements, and generates random passwords meeting those requirements.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`Requirements::from_env`]:
//!
//! - `PASSY_REQUIRED_TYPES`: required character types (default: `digit,lowercase,uppercase,punctuation`)
//! - `PASSY_MIN_LENGTH`: minimum length (default: `6`)
//! - `PASSY_MAX_LENGTH`: maximum length (default: unbounded)
//!
//! # Example
//!
//! ```rust
//! use pwd_passy::{Requirements, StrengthTier, analyze, generate, valid};
//! use secrecy::SecretString;
//!
//! let requirements = Requirements::default();
//!
//! let password = SecretString::new("Abcdef1!".to_string().into());
//! assert!(valid(&password, &requirements));
//! println!("Strength: {:?}", analyze(&password));
//!
//! let generated = generate(Some(16), &requirements).expect("16 fits four required types");
//! assert!(valid(&generated, &requirements));
//! assert!(analyze(&generated) >= StrengthTier::High);
//! ```

// Internal modules
mod charset;
mod command;
mod evaluator;
mod generator;
mod requirements;
mod sections;
mod types;
mod validator;

// Public API
pub use charset::{cardinality, classify, contains, ranges_for};
pub use command::{Command, Response};
pub use evaluator::{analyze, character_score, evaluate, score};
pub use generator::{DEFAULT_LENGTH, GenerationError, effective_length, generate, generate_with_rng};
pub use requirements::{Requirements, RequirementsError};
pub use sections::Violation;
pub use types::{CharacterType, CodeRange, Evaluation, StrengthTier, THRESHOLDS, Thresholds};
pub use validator::{check, valid};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
