//! Optional feature modules and operator decisions.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The optional feature modules a generated project may keep or drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Camera capture (vision-camera, image picker, compressor).
    Camera,
    /// Chat UI (chat screen, chat header, toasts, document pickers).
    Chat,
}

impl Feature {
    /// Every known feature, in prompt order.
    pub const ALL: [Feature; 2] = [Feature::Camera, Feature::Chat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camera" => Ok(Self::Camera),
            "chat" => Ok(Self::Chat),
            other => Err(DomainError::UnknownFeature { name: other.into() }),
        }
    }
}

// ── Answers ───────────────────────────────────────────────────────────────────

/// One line of operator input, normalised.
///
/// `"y"`/`"yes"` (any casing, surrounding whitespace ignored) is affirmative;
/// everything else — including empty and ambiguous input — is negative.
/// There is no retry loop; the conservative default is "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn from_line(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Self::Yes,
            _ => Self::No,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// A feature paired with the operator's choice for this run.
///
/// Created once per feature per run, consumed immediately; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDecision {
    pub feature: Feature,
    pub keep: bool,
}

impl FeatureDecision {
    pub fn new(feature: Feature, keep: bool) -> Self {
        Self { feature, keep }
    }

    pub fn from_answer(feature: Feature, answer: Answer) -> Self {
        Self {
            feature,
            keep: answer.is_yes(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
