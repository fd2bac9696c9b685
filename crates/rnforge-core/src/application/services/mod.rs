//! Application services — the use-case orchestrators.

pub mod asset_service;
pub mod setup_service;

pub use asset_service::{AssetService, IconReport, SplashReport};
pub use setup_service::{FeatureReport, SetupService};
