//! Command handlers.
//!
//! Each submodule translates CLI arguments into core types, calls the
//! application services, and renders the result. No business logic lives
//! here.

pub mod appicon;
pub mod completions;
pub mod config;
pub mod setup;
pub mod splash;

use std::path::Path;

use rnforge_adapters::{ResizeTool, ShellResizer};
use rnforge_core::domain::{PlatformSelection, ProjectContext};

use crate::{
    cli::Platform,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
};

/// Resolve the project directory into a [`ProjectContext`].
///
/// The directory is canonicalised so that `.` (the default) still yields a
/// usable basename for iOS app-name derivation.
pub(crate) fn resolve_project(
    dir: &Path,
    app_name: Option<&str>,
    config: &AppConfig,
) -> CliResult<ProjectContext> {
    if !dir.is_dir() {
        return Err(CliError::ProjectDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    let root = dir
        .canonicalize()
        .with_cli_context(|| format!("failed to resolve '{}'", dir.display()))?;

    let name_override = app_name
        .map(str::to_owned)
        .or_else(|| config.project.app_name.clone());

    let project = match name_override {
        Some(name) => ProjectContext::new(root, name),
        None => ProjectContext::discover(root),
    }
    .map_err(|e| CliError::Core(e.into()))?;

    Ok(project)
}

/// Flag wins; otherwise the config default.
pub(crate) fn platform_selection(
    flag: Option<Platform>,
    config: &AppConfig,
) -> CliResult<PlatformSelection> {
    match flag {
        Some(platform) => Ok(platform.into()),
        None => config
            .assets
            .platforms
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("assets.platforms: {e}"),
                source: None,
            }),
    }
}

/// Build the external resizer the config asks for.
pub(crate) fn build_resizer(config: &AppConfig) -> CliResult<ShellResizer> {
    match config.resize.tool.as_str() {
        "auto" => ShellResizer::discover().map_err(CliError::Core),
        "sips" => Ok(ShellResizer::with_tool(ResizeTool::Sips)),
        "magick" => Ok(ShellResizer::with_tool(ResizeTool::Magick)),
        "convert" => Ok(ShellResizer::with_tool(ResizeTool::Convert)),
        other => Err(CliError::ConfigError {
            message: format!("Unknown resize tool: '{other}'"),
            source: None,
        }),
    }
}
