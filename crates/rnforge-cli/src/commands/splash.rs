//! Implementation of the `rnforge splash` command.

use tracing::{debug, info, instrument};

use rnforge_adapters::{LocalFilesystem, StdinPrompt};
use rnforge_core::{
    application::{AssetService, ports::LineInput as _},
    domain::Answer,
};

use crate::{
    cli::{GlobalArgs, SplashArgs},
    commands::{appicon::spinner, build_resizer, platform_selection, resolve_project},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `rnforge splash` command.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: SplashArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = resolve_project(&args.dir, args.app_name.as_deref(), &config)?;
    let platforms = platform_selection(args.platform, &config)?;
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| project.resolve(&config.assets.splash_source));

    // One blocking prompt unless a flag already decided.
    let fullscreen = match args.fullscreen_override() {
        Some(fullscreen) => fullscreen,
        None => {
            let line = StdinPrompt::new().ask("Do you want a full screen splash (Y/N)? ")?;
            Answer::from_line(&line).is_yes()
        }
    };

    debug!(source = %source.display(), %platforms, fullscreen, "Splash generation starting");

    let resizer = build_resizer(&config)?;
    let service = AssetService::new(Box::new(LocalFilesystem::new()), Box::new(resizer));

    let progress = spinner(&global, "Generating splash assets...");
    let result = service.generate_splash(&project, &source, platforms, fullscreen);
    progress.finish_and_clear();
    let report = result?;

    info!(files = report.files_written, "Splash generated");
    output.success(&format!(
        "Generated {} splash file(s) ({})",
        report.files_written,
        if report.fullscreen {
            "fullscreen"
        } else {
            "windowed"
        }
    ))?;
    if report.styles_updated {
        output.print("  android: styles.xml updated")?;
    }
    if report.storyboard_updated {
        output.print("  ios:     LaunchScreen.storyboard updated")?;
    }
    if report.warnings > 0 {
        output.warning(&format!(
            "{} step(s) skipped, see log for details",
            report.warnings
        ))?;
    }

    Ok(())
}
