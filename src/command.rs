//! Tagged operations for UI bindings.
//!
//! A binding layer maps its events (input change, "generate" click...)
//! to a [`Command`] and renders the matching [`Response`]. After a
//! `Generate`, the binding writes the password into its field and must
//! trigger its own change notification so the strength display refreshes.

use secrecy::SecretString;

use crate::evaluator::{analyze, evaluate};
use crate::generator::{GenerationError, generate};
use crate::requirements::Requirements;
use crate::types::{Evaluation, StrengthTier};
use crate::validator::valid;

#[derive(Debug)]
pub enum Command<'a> {
    Analyze(&'a SecretString),
    Validate(&'a SecretString),
    Evaluate(&'a SecretString),
    Generate(Option<usize>),
}

#[derive(Debug)]
pub enum Response {
    Strength(StrengthTier),
    Valid(bool),
    Evaluation(Evaluation),
    Password(SecretString),
}

impl Command<'_> {
    /// Runs the command against `requirements`.
    ///
    /// Only `Generate` can fail.
    pub fn execute(self, requirements: &Requirements) -> Result<Response, GenerationError> {
        let response = match self {
            Command::Analyze(password) => Response::Strength(analyze(password)),
            Command::Validate(password) => Response::Valid(valid(password, requirements)),
            Command::Evaluate(password) => Response::Evaluation(evaluate(password, requirements)),
            Command::Generate(length) => Response::Password(generate(length, requirements)?),
        };
        Ok(response)
    }
}
