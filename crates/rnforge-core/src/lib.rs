//! rnforge core — hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for rnforge, the
//! post-init feature pruning and asset generation tool for React Native
//! templates, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          rnforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (SetupService, AssetService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, LineInput, ImageResizer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rnforge-adapters (Infrastructure)    │
//! │ (LocalFilesystem, StdinPrompt, Shell…)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EditRule, FeatureModule, IconSpec)    │
//! │         No I/O, no subprocesses         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rnforge_core::{
//!     application::SetupService,
//!     domain::{Feature, ProjectContext},
//! };
//!
//! # fn adapters() -> (Box<dyn rnforge_core::application::ports::Filesystem>,
//! #                   Box<dyn rnforge_core::application::ports::LineInput>) { unimplemented!() }
//! let (filesystem, input) = adapters();
//! let project = ProjectContext::discover("./AwesomeProject").unwrap();
//! let service = SetupService::new(filesystem, input);
//! service.run_feature(&project, Feature::Camera, None).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssetService, FeatureReport, IconReport, SetupService, SplashReport,
        ports::{Filesystem, ImageResizer, LineInput},
    };
    pub use crate::domain::{
        Answer, AssetCatalog, Feature, FeatureDecision, FeatureModule, MipmapManifest,
        PlatformSelection, ProjectContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
