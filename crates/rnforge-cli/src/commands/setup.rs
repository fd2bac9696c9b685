//! Implementation of the `rnforge setup` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectContext`, run the
//! core setup service once per feature, and display results. No patching
//! logic lives here.

use tracing::{debug, info, instrument};

use rnforge_adapters::{LocalFilesystem, StdinPrompt};
use rnforge_core::{
    application::{FeatureReport, SetupService},
    domain::Feature,
};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    commands::resolve_project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `rnforge setup` command.
///
/// Dispatch sequence:
/// 1. Resolve the project directory and iOS app name
/// 2. Build the setup service on the real adapters
/// 3. Run every feature in prompt order, honouring `--camera`/`--chat`
/// 4. Render one summary line per feature
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = resolve_project(&args.dir, args.app_name.as_deref(), &config)?;

    debug!(
        root = %project.root().display(),
        app_name = project.app_name(),
        "Project resolved"
    );

    let service = SetupService::new(Box::new(LocalFilesystem::new()), Box::new(StdinPrompt::new()));

    output.header(&format!("Setting up '{}'...", project.app_name()))?;

    for feature in Feature::ALL {
        let override_keep = match feature {
            Feature::Camera => args.camera,
            Feature::Chat => args.chat,
        }
        .map(|decision| decision.keep());

        info!(%feature, ?override_keep, "Feature run started");
        let report = service.run_feature(&project, feature, override_keep)?;
        render_report(&report, &output)?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  yarn install")?;
        output.print("  # Start building!")?;
    }

    Ok(())
}

fn render_report(report: &FeatureReport, output: &OutputManager) -> CliResult<()> {
    if report.kept {
        output.success(&format!(
            "{}: kept ({} file(s) updated)",
            report.feature, report.files_changed
        ))?;
    } else {
        output.success(&format!(
            "{}: removed ({} folder(s), {} file(s), {} package(s))",
            report.feature, report.folders_removed, report.files_changed, report.packages_removed
        ))?;
    }
    if report.warnings > 0 {
        output.warning(&format!(
            "{}: {} step(s) skipped, see log for details",
            report.feature, report.warnings
        ))?;
    }
    Ok(())
}
