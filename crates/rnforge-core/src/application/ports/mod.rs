//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rnforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: file operations
//!   - `LineInput`: one blocking line of operator input per call
//!   - `ImageResizer`: external image-resize invocations
//!
//! - **Driving (Input) Ports**: called by the CLI, implemented by the
//!   application services

pub mod output;

pub use output::{Filesystem, ImageResizer, LineInput};
