//! The generated project a run operates on.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Root directory plus the iOS target name derived from it.
///
/// The iOS tree nests platform files under `ios/<AppName>/…`, so most patch
/// paths cannot be fully static — they are resolved through this context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    app_name: String,
}

impl ProjectContext {
    /// Build a context with an explicit app name.
    pub fn new(root: impl Into<PathBuf>, app_name: impl Into<String>) -> Result<Self, DomainError> {
        let app_name = app_name.into();
        validate_app_name(&app_name)?;
        Ok(Self {
            root: root.into(),
            app_name,
        })
    }

    /// Derive the app name from the project directory's basename, the way the
    /// template's own tooling names the iOS target.
    pub fn discover(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        let app_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| DomainError::InvalidAppName {
                name: root.display().to_string(),
                reason: "cannot derive an app name from this path".into(),
            })?;
        validate_app_name(&app_name)?;
        Ok(Self { root, app_name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Resolve a project-relative path against the root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// `ios/<AppName>/Info.plist`
    pub fn info_plist(&self) -> PathBuf {
        self.root
            .join("ios")
            .join(&self.app_name)
            .join("Info.plist")
    }

    /// `ios/<AppName>/Images.xcassets`
    pub fn xcassets(&self) -> PathBuf {
        self.root
            .join("ios")
            .join(&self.app_name)
            .join("Images.xcassets")
    }

    /// `ios/<AppName>/LaunchScreen.storyboard`
    pub fn launch_storyboard(&self) -> PathBuf {
        self.root
            .join("ios")
            .join(&self.app_name)
            .join("LaunchScreen.storyboard")
    }

    /// `android/app/src/main/res`
    pub fn android_res(&self) -> PathBuf {
        self.root.join("android/app/src/main/res")
    }
}

fn validate_app_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
