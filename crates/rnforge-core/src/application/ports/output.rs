//! Driven ports: what the services need from the outside world.

use std::path::Path;

use crate::error::ForgeResult;

/// File operations the services perform.
///
/// `exists` is a plain boolean because the warn-and-continue policy checks
/// presence before touching a patch target; every other operation returns a
/// structured error.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;
    fn exists(&self, path: &Path) -> bool;
    /// Recursive delete. Implementations treat a missing directory as
    /// success so cleanup stays idempotent.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// One blocking line of operator input per call.
///
/// Injected rather than read from a global stdin handle so tests can script
/// the conversation. The prompt is written before blocking.
#[cfg_attr(test, mockall::automock)]
pub trait LineInput {
    fn ask(&self, prompt: &str) -> ForgeResult<String>;
}

/// A blocking external image-resize invocation: `source` scaled to a
/// `pixels`-square raster at `dest`. No timeout, no retry; a failure aborts
/// the calling pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait ImageResizer {
    fn resize(&self, source: &Path, dest: &Path, pixels: u32) -> ForgeResult<()>;
}
