//! Recording resizer for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rnforge_core::{
    application::ports::{Filesystem, ImageResizer},
    error::ForgeResult,
};

use crate::filesystem::MemoryFilesystem;

/// One recorded resize invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCall {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub pixels: u32,
}

/// Records every invocation and, when backed by a [`MemoryFilesystem`],
/// materialises a placeholder raster at the destination so tests can assert
/// on the files a run produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingResizer {
    calls: Arc<Mutex<Vec<ResizeCall>>>,
    backing: Option<MemoryFilesystem>,
    /// Destinations that should fail, for abort-path tests.
    fail_on: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingResizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a `png:<pixels>` placeholder into `filesystem` on every resize.
    pub fn backed_by(filesystem: MemoryFilesystem) -> Self {
        Self {
            backing: Some(filesystem),
            ..Self::default()
        }
    }

    /// Make the resize for `dest` fail (testing helper).
    pub fn fail_on(&self, dest: impl Into<PathBuf>) {
        self.fail_on.lock().unwrap().push(dest.into());
    }

    /// All invocations so far (testing helper).
    pub fn calls(&self) -> Vec<ResizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageResizer for RecordingResizer {
    fn resize(&self, source: &Path, dest: &Path, pixels: u32) -> ForgeResult<()> {
        if self.fail_on.lock().unwrap().iter().any(|p| p == dest) {
            return Err(
                rnforge_core::application::ApplicationError::ResizeFailed {
                    dest: dest.to_path_buf(),
                    pixels,
                    reason: "scripted failure".into(),
                }
                .into(),
            );
        }

        self.calls.lock().unwrap().push(ResizeCall {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            pixels,
        });

        if let Some(fs) = &self.backing {
            fs.write_file(dest, &format!("png:{pixels}"))?;
        }
        Ok(())
    }
}
