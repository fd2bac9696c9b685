//! Image-resize adapters.

pub mod recording;
pub mod shell;

pub use recording::{RecordingResizer, ResizeCall};
pub use shell::{ResizeTool, ShellResizer};
