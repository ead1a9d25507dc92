//! Password validation against [`Requirements`].

use secrecy::{ExposeSecret, SecretString};

use crate::requirements::Requirements;
use crate::sections::{Violation, character_variety_section, length_section, missing_types};

/// Checks a password against the requirements.
///
/// Never fails: an unmet requirement simply yields `false`.
pub fn valid(password: &SecretString, requirements: &Requirements) -> bool {
    is_valid(password.expose_secret(), requirements)
}

/// Lists every requirement the password fails to meet, length first.
///
/// An empty list means the password is valid.
pub fn check(password: &SecretString, requirements: &Requirements) -> Vec<Violation> {
    let pwd = password.expose_secret();
    let mut violations = Vec::new();
    violations.extend(length_section(pwd, requirements));
    violations.extend(missing_types(pwd, requirements));
    violations
}

pub(crate) fn is_valid(password: &str, requirements: &Requirements) -> bool {
    // Orchestrator: stop at the first failing section
    let sections: [fn(&str, &Requirements) -> Option<Violation>; 2] =
        [length_section, character_variety_section];

    sections
        .iter()
        .all(|section_fn| section_fn(password, requirements).is_none())
}
