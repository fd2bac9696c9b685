//! Application layer: services and ports.
//!
//! Services orchestrate the domain against the outside world, which they
//! only ever touch through the ports in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AssetService, FeatureReport, IconReport, SetupService, SplashReport};
