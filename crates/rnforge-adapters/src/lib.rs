//! Infrastructure adapters for rnforge.
//!
//! This crate implements the ports defined in
//! `rnforge_core::application::ports`. It contains all external dependencies
//! and I/O operations: the real filesystem, stdin prompts, and the external
//! image-resize subprocess.

pub mod filesystem;
pub mod prompt;
pub mod resizer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{ScriptedPrompt, StdinPrompt};
pub use resizer::{RecordingResizer, ResizeTool, ShellResizer};
