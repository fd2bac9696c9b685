//! Feature catalog.
//!
//! Each optional feature is described exactly once by a [`FeatureModule`]:
//! the prompt shown to the operator, the folders deleted on removal, the
//! named edit rules for install/removal, and the npm packages to prune.
//! The orchestrator consumes these tables; nothing else knows what a
//! feature touches.

mod camera;
mod chat;

use crate::domain::{
    edit::FileEdit,
    error::DomainError,
    feature::Feature,
    project::ProjectContext,
};

/// Everything rnforge knows about one optional feature.
#[derive(Debug, Clone)]
pub struct FeatureModule {
    pub feature: Feature,
    /// Prompt shown when no CLI override was given.
    pub prompt: &'static str,
    /// Project-relative folders deleted when the feature is dropped.
    pub folders: &'static [&'static str],
    /// npm packages pruned from package.json when the feature is dropped.
    pub packages: &'static [&'static str],
    /// Edits applied when the feature is kept.
    pub install_edits: Vec<FileEdit>,
    /// Ordered cleanup edits applied when the feature is dropped.
    pub removal_edits: Vec<FileEdit>,
}

/// Build the module definition for `feature` against `project`.
///
/// Construction compiles the rule patterns; an error here is a bug in the
/// built-in tables, surfaced instead of panicking.
pub fn module_for(
    feature: Feature,
    project: &ProjectContext,
) -> Result<FeatureModule, DomainError> {
    match feature {
        Feature::Camera => camera::module(project),
        Feature::Chat => chat::module(project),
    }
}
