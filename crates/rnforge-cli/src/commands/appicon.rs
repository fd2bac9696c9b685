//! Implementation of the `rnforge appicon` command.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument};

use rnforge_adapters::LocalFilesystem;
use rnforge_core::application::AssetService;

use crate::{
    cli::{AppiconArgs, GlobalArgs},
    commands::{build_resizer, platform_selection, resolve_project},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `rnforge appicon` command.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: AppiconArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = resolve_project(&args.dir, args.app_name.as_deref(), &config)?;
    let platforms = platform_selection(args.platform, &config)?;
    let source = args
        .source
        .unwrap_or_else(|| project.resolve(&config.assets.icon_source));

    debug!(source = %source.display(), %platforms, "App icon generation starting");

    let resizer = build_resizer(&config)?;
    let service = AssetService::new(Box::new(LocalFilesystem::new()), Box::new(resizer));

    let spinner = spinner(&global, "Generating app icons...");
    let result = service.generate_icons(&project, &source, platforms);
    spinner.finish_and_clear();
    let report = result?;

    info!(files = report.files_written, "App icons generated");
    output.success(&format!(
        "Generated {} file(s) for {}",
        report.files_written, platforms
    ))?;
    if let Some(android) = &report.android {
        output.print(&format!(
            "  android: {} densities (ic_launcher + ic_launcher_round)",
            android.images.len()
        ))?;
    }
    if let Some(ios) = &report.ios {
        output.print(&format!(
            "  ios:     {} AppIcon variants + Contents.json",
            ios.images.len()
        ))?;
    }

    Ok(())
}

/// A spinner for the blocking resize loop; disabled in quiet mode.
pub(crate) fn spinner(global: &GlobalArgs, message: &'static str) -> ProgressBar {
    if global.quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner().with_message(message);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
