//! Password strength evaluator - guessing-time scoring.
//!
//! The score approximates how many days a brute-force attacker needs:
//! the summed cardinality of the character types present, raised to the
//! password length, at a million guesses per second.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{cardinality, contains};
use crate::requirements::Requirements;
use crate::types::{CharacterType, Evaluation, StrengthTier, THRESHOLDS};
use crate::validator::is_valid;

const GUESSES_PER_SECOND: f64 = 1_000_000.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sum of the cardinalities of every character type present in `password`.
pub fn character_score(password: &str) -> u32 {
    CharacterType::all()
        .iter()
        .filter(|&kind| contains(password, kind))
        .map(cardinality)
        .sum()
}

/// Estimated guessing time in days.
///
/// Computed in floating point: large passwords saturate to infinity
/// instead of wrapping. An empty password scores 0.
pub fn score(password: &str) -> f64 {
    let len = password.chars().count();
    if len == 0 {
        return 0.0;
    }

    let raw = f64::from(character_score(password)).powf(len as f64);
    raw / GUESSES_PER_SECOND / SECONDS_PER_DAY
}

/// Analyzes password strength.
///
/// Independent of any requirements: every defined character type is scanned.
pub fn analyze(password: &SecretString) -> StrengthTier {
    THRESHOLDS.tier(score(password.expose_secret()))
}

/// Evaluates strength and validity in one pass, as needed on every input change.
pub fn evaluate(password: &SecretString, requirements: &Requirements) -> Evaluation {
    let pwd = password.expose_secret();
    let score = score(pwd);

    Evaluation {
        tier: THRESHOLDS.tier(score),
        score,
        valid: is_valid(pwd, requirements),
    }
}

/// Async version that sends the evaluation via channel.
///
/// Waits a short debounce delay first; if `token` is cancelled meanwhile
/// (e.g. a newer keystroke arrived), nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    requirements: &Requirements,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate(password, requirements);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
