//! External image-resize adapter.
//!
//! One blocking subprocess per variant, exactly the way the template's own
//! scripts shelled out: `sips -z <h> <w> <src> --out <dest>` on macOS, with
//! ImageMagick (`magick` / `convert`) as the portable fallback.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use rnforge_core::{
    application::{ApplicationError, ports::ImageResizer},
    error::ForgeResult,
};

/// Which external tool performs the resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTool {
    /// macOS `sips`.
    Sips,
    /// ImageMagick 7 (`magick`).
    Magick,
    /// ImageMagick 6 (`convert`).
    Convert,
}

impl ResizeTool {
    fn program(&self) -> &'static str {
        match self {
            Self::Sips => "sips",
            Self::Magick => "magick",
            Self::Convert => "convert",
        }
    }
}

/// Resizes through a discovered (or explicitly chosen) external tool.
#[derive(Debug, Clone, Copy)]
pub struct ShellResizer {
    tool: ResizeTool,
}

impl ShellResizer {
    /// Use a specific tool without probing the PATH.
    pub fn with_tool(tool: ResizeTool) -> Self {
        Self { tool }
    }

    /// Probe the PATH for a usable tool, preferring `sips` (what the
    /// template's scripts used), then ImageMagick.
    pub fn discover() -> ForgeResult<Self> {
        for tool in [ResizeTool::Sips, ResizeTool::Magick, ResizeTool::Convert] {
            if which::which(tool.program()).is_ok() {
                debug!(tool = tool.program(), "resize tool selected");
                return Ok(Self { tool });
            }
        }
        Err(ApplicationError::ResizerUnavailable {
            reason: "none of sips, magick, convert found in PATH".into(),
        }
        .into())
    }

    pub fn tool(&self) -> ResizeTool {
        self.tool
    }

    fn command(&self, source: &Path, dest: &Path, pixels: u32) -> Command {
        let mut cmd = Command::new(self.tool.program());
        match self.tool {
            ResizeTool::Sips => {
                cmd.arg("-z")
                    .arg(pixels.to_string())
                    .arg(pixels.to_string())
                    .arg(source)
                    .arg("--out")
                    .arg(dest);
            }
            ResizeTool::Magick | ResizeTool::Convert => {
                // `!` forces the exact square geometry, matching sips -z.
                cmd.arg(source)
                    .arg("-resize")
                    .arg(format!("{pixels}x{pixels}!"))
                    .arg(dest);
            }
        }
        cmd
    }
}

impl ImageResizer for ShellResizer {
    fn resize(&self, source: &Path, dest: &Path, pixels: u32) -> ForgeResult<()> {
        let output = self
            .command(source, dest, pixels)
            .output()
            .map_err(|e| ApplicationError::ResizeFailed {
                dest: dest.to_path_buf(),
                pixels,
                reason: format!("failed to spawn {}: {e}", self.tool.program()),
            })?;

        if output.status.success() {
            debug!(dest = %dest.display(), pixels, "resized");
            Ok(())
        } else {
            Err(ApplicationError::ResizeFailed {
                dest: dest.to_path_buf(),
                pixels,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }
            .into())
        }
    }
}
