//! Core domain layer for rnforge.
//!
//! This module contains pure business logic with ZERO I/O:
//! edit rules are `&str -> String`, the catalog is static tables, manifest
//! pruning operates on parsed values. Filesystem, stdin, and subprocess
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: domain objects are Clone + PartialEq

pub mod assets;
pub mod catalog;
pub mod edit;
pub mod error;
pub mod feature;
pub mod manifest;
pub mod project;

// Re-exports for convenience
pub use assets::{
    AssetCatalog, CatalogImage, CatalogInfo, MipmapImage, MipmapManifest, PlatformSelection,
};
pub use catalog::{FeatureModule, module_for};
pub use edit::{EditAction, EditRule, FileEdit, FileEditResult, RuleOutcome};
pub use error::{DomainError, ErrorCategory};
pub use feature::{Answer, Feature, FeatureDecision};
pub use project::ProjectContext;
