//! Domain-layer errors.
//!
//! All errors are:
//! - Cloneable (cheap to pass through reports)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An edit rule's regex failed to compile.
    #[error("edit rule '{rule}' has an invalid pattern: {reason}")]
    InvalidPattern { rule: &'static str, reason: String },

    /// The operator named a feature rnforge does not know.
    #[error("unknown feature '{name}'")]
    UnknownFeature { name: String },

    /// The operator named a platform selection rnforge does not know.
    #[error("unknown platform '{name}'")]
    UnknownPlatform { name: String },

    /// The app name derived for the iOS target is unusable.
    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    /// The dependency manifest is not shaped like a package.json object.
    #[error("manifest is not a JSON object: {reason}")]
    MalformedManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPattern { rule, .. } => vec![
                format!("The built-in rule '{rule}' is broken"),
                "This is a bug in rnforge, please report it".into(),
            ],
            Self::UnknownFeature { name } => vec![
                format!("'{name}' is not an optional feature module"),
                "Known features: camera, chat".into(),
            ],
            Self::UnknownPlatform { name } => vec![
                format!("'{name}' is not a platform selection"),
                "Known platforms: android, ios, all".into(),
            ],
            Self::InvalidAppName { name, reason } => vec![
                format!("Derived app name '{name}' is invalid: {reason}"),
                "Pass the iOS target name explicitly with --app-name".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "package.json could not be interpreted as an object".into(),
                "Check the file for syntax errors".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPattern { .. } => ErrorCategory::Internal,
            Self::UnknownFeature { .. } => ErrorCategory::NotFound,
            Self::UnknownPlatform { .. } => ErrorCategory::NotFound,
            Self::InvalidAppName { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_feature_lists_known_ones() {
        let err = DomainError::UnknownFeature {
            name: "bluetooth".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("camera")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_pattern_is_internal() {
        let err = DomainError::InvalidPattern {
            rule: "x",
            reason: "y".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
