//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The asset pipeline's source raster does not exist. Fatal: without it
    /// no partial output is meaningful.
    #[error("Missing source image: {path}")]
    SourceAssetMissing { path: PathBuf },

    /// The external resize command failed for one variant; the remaining
    /// pipeline steps are abandoned.
    #[error("Resize to {pixels}px failed for {dest}: {reason}")]
    ResizeFailed {
        dest: PathBuf,
        pixels: u32,
        reason: String,
    },

    /// No usable image-resize tool on this machine.
    #[error("No image-resize tool found: {reason}")]
    ResizerUnavailable { reason: String },

    /// Reading one line of operator input failed.
    #[error("Failed to read operator input: {reason}")]
    InputError { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SourceAssetMissing { path } => vec![
                format!("Expected the source image at: {}", path.display()),
                "Add the image, or point at another one with --source".into(),
            ],
            Self::ResizeFailed { .. } => vec![
                "The external resize command returned a failure".into(),
                "Check the source image is a readable raster file".into(),
            ],
            Self::ResizerUnavailable { .. } => vec![
                "Install sips (macOS) or ImageMagick (`magick`/`convert`)".into(),
                "Or select a tool explicitly in the rnforge config".into(),
            ],
            Self::InputError { .. } => vec![
                "Standard input closed before the prompt was answered".into(),
                "Pass the decision as a flag to run non-interactively".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::SourceAssetMissing { .. } => ErrorCategory::NotFound,
            Self::ResizeFailed { .. } => ErrorCategory::Internal,
            Self::ResizerUnavailable { .. } => ErrorCategory::NotFound,
            Self::InputError { .. } => ErrorCategory::Internal,
        }
    }
}
