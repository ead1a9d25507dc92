//! Core value types shared by analysis, validation and generation.

use bitflags::bitflags;

bitflags! {
    /// Character type flags.
    ///
    /// A single character usually carries one flag, while a set of
    /// requirements combines several with `|`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharacterType: u8 {
        /// ASCII digits `0-9`.
        const DIGIT       = 0b0000_0001;
        /// ASCII lowercase letters `a-z`.
        const LOWERCASE   = 0b0000_0010;
        /// ASCII uppercase letters `A-Z`.
        const UPPERCASE   = 0b0000_0100;
        /// Printable ASCII punctuation, space included.
        const PUNCTUATION = 0b0000_1000;
        /// Latin-1 supplement, `0x80-0xFF`.
        const EXTENDED    = 0b0001_0000;
    }
}

impl CharacterType {
    /// Default set used by requirements and as the generation fallback.
    pub const STANDARD: Self = Self::DIGIT
        .union(Self::LOWERCASE)
        .union(Self::UPPERCASE)
        .union(Self::PUNCTUATION);

    /// Looks up a single type by its lowercase name (`"digit"`, `"punctuation"`...).
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "digit" | "digits" => Some(Self::DIGIT),
            "lowercase" | "lower" => Some(Self::LOWERCASE),
            "uppercase" | "upper" => Some(Self::UPPERCASE),
            "punctuation" | "punct" => Some(Self::PUNCTUATION),
            "extended" => Some(Self::EXTENDED),
            _ => None,
        }
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Inclusive range of character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub min: char,
    pub max: char,
}

impl CodeRange {
    pub const fn new(min: char, max: char) -> Self {
        Self { min, max }
    }

    /// Number of characters in the range, both bounds included.
    pub const fn size(&self) -> u32 {
        self.max as u32 - self.min as u32 + 1
    }

    pub const fn contains(&self, c: char) -> bool {
        self.min as u32 <= c as u32 && c as u32 <= self.max as u32
    }
}

/// Discrete strength verdict, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Low,
    Medium,
    High,
    Extreme,
}

/// Guessing-time cutoffs, expressed in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    medium: f64,
    high: f64,
    extreme: f64,
}

/// Process-wide thresholds: one year, a year of years, a year to the fifth.
pub const THRESHOLDS: Thresholds = Thresholds {
    medium: 365.0,
    high: 365.0 * 365.0,
    extreme: 365.0 * 365.0 * 365.0 * 365.0 * 365.0,
};

impl Thresholds {
    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn extreme(&self) -> f64 {
        self.extreme
    }

    /// Maps a score (days) to its tier.
    pub fn tier(&self, score: f64) -> StrengthTier {
        if score >= self.extreme {
            StrengthTier::Extreme
        } else if score >= self.high {
            StrengthTier::High
        } else if score >= self.medium {
            StrengthTier::Medium
        } else {
            StrengthTier::Low
        }
    }
}

/// Outcome of a single input-change evaluation: strength plus validity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub tier: StrengthTier,
    pub score: f64,
    pub valid: bool,
}
