//! Setup service — feature orchestration.
//!
//! For each feature the service obtains one decision (scripted override or
//! one blocking prompt), then runs either the install edits or the ordered
//! cleanup sequence. Every cleanup step is independent and best-effort:
//! a missing file or absent anchor is a warning, never an abort, so an
//! already-decided cleanup completes as far as it can. There is no rollback;
//! partial progress is the intended behaviour for a one-shot init tool.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, LineInput},
    domain::{
        Answer, Feature, FeatureDecision, FeatureModule, FileEdit, ProjectContext, catalog,
        manifest,
    },
    error::ForgeResult,
};

/// What one feature run did, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureReport {
    pub feature: Feature,
    pub kept: bool,
    /// Files whose content actually changed.
    pub files_changed: usize,
    pub folders_removed: usize,
    pub packages_removed: usize,
    /// Missing files, absent anchors, unreadable targets.
    pub warnings: usize,
}

impl FeatureReport {
    fn new(feature: Feature, kept: bool) -> Self {
        Self {
            feature,
            kept,
            files_changed: 0,
            folders_removed: 0,
            packages_removed: 0,
            warnings: 0,
        }
    }
}

/// Orchestrates feature install/cleanup against one project.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    input: Box<dyn LineInput>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, input: Box<dyn LineInput>) -> Self {
        Self { filesystem, input }
    }

    /// Run one feature end-to-end.
    ///
    /// `override_keep` skips the prompt (non-interactive runs); otherwise one
    /// line is consumed from the injected input.
    #[instrument(skip_all, fields(feature = %feature))]
    pub fn run_feature(
        &self,
        project: &ProjectContext,
        feature: Feature,
        override_keep: Option<bool>,
    ) -> ForgeResult<FeatureReport> {
        let module = catalog::module_for(feature, project)?;

        let decision = match override_keep {
            Some(keep) => FeatureDecision::new(feature, keep),
            None => {
                let line = self.input.ask(module.prompt)?;
                FeatureDecision::from_answer(feature, Answer::from_line(&line))
            }
        };

        if decision.keep {
            info!("Keeping {feature}");
            self.install(project, &module)
        } else {
            info!("{feature} disabled, cleaning up");
            self.cleanup(project, &module)
        }
    }

    // ── install path ──────────────────────────────────────────────────────

    fn install(
        &self,
        project: &ProjectContext,
        module: &FeatureModule,
    ) -> ForgeResult<FeatureReport> {
        let mut report = FeatureReport::new(module.feature, true);
        for edit in &module.install_edits {
            self.apply_edit(project, edit, &mut report);
        }
        Ok(report)
    }

    // ── cleanup path ──────────────────────────────────────────────────────

    /// Ordered cleanup: folders, then file edits, then the manifest. Each
    /// step runs regardless of what the previous ones managed.
    fn cleanup(
        &self,
        project: &ProjectContext,
        module: &FeatureModule,
    ) -> ForgeResult<FeatureReport> {
        let mut report = FeatureReport::new(module.feature, false);

        for folder in module.folders {
            let path = project.resolve(folder);
            if !self.filesystem.exists(&path) {
                debug!(folder, "already absent");
                continue;
            }
            match self.filesystem.remove_dir_all(&path) {
                Ok(()) => {
                    info!(folder, "removed");
                    report.folders_removed += 1;
                }
                Err(e) => {
                    warn!(folder, error = %e, "failed to remove, continuing");
                    report.warnings += 1;
                }
            }
        }

        for edit in &module.removal_edits {
            self.apply_edit(project, edit, &mut report);
        }

        self.prune_manifest(project, module, &mut report);

        Ok(report)
    }

    /// Run one file's rules with the warn-and-continue policy. A write only
    /// happens when the text actually changed.
    fn apply_edit(&self, project: &ProjectContext, edit: &FileEdit, report: &mut FeatureReport) {
        let path = project.resolve(&edit.path);
        if !self.filesystem.exists(&path) {
            warn!(file = edit.label, path = %path.display(), "not found, skipping");
            report.warnings += 1;
            return;
        }

        let original = match self.filesystem.read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = edit.label, error = %e, "unreadable, skipping");
                report.warnings += 1;
                return;
            }
        };

        let result = edit.apply(&original);
        for rule in &result.missed {
            warn!(file = edit.label, rule, "no match, skipped");
            report.warnings += 1;
        }

        if !result.changed(&original) {
            debug!(file = edit.label, "unchanged");
            return;
        }

        match self.filesystem.write_file(&path, &result.text) {
            Ok(()) => {
                info!(file = edit.label, rules = result.applied, "patched");
                report.files_changed += 1;
            }
            Err(e) => {
                warn!(file = edit.label, error = %e, "write failed, continuing");
                report.warnings += 1;
            }
        }
    }

    /// Drop the feature's packages from package.json. Rewrites only when at
    /// least one entry was deleted; a missing or malformed manifest is a
    /// warning, not a failure.
    fn prune_manifest(
        &self,
        project: &ProjectContext,
        module: &FeatureModule,
        report: &mut FeatureReport,
    ) {
        let path = project.resolve("package.json");
        if !self.filesystem.exists(&path) {
            warn!("package.json not found, skipping dependency cleanup");
            report.warnings += 1;
            return;
        }

        let text = match self.filesystem.read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "package.json unreadable, skipping");
                report.warnings += 1;
                return;
            }
        };

        let mut doc = match manifest::parse(&text) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "package.json malformed, skipping");
                report.warnings += 1;
                return;
            }
        };

        let removed = manifest::prune_packages(&mut doc, module.packages);
        if removed == 0 {
            debug!("no matching packages in manifest");
            return;
        }

        match self.filesystem.write_file(&path, &manifest::to_pretty(&doc)) {
            Ok(()) => {
                info!(removed, "package.json updated");
                report.packages_removed = removed;
                report.files_changed += 1;
            }
            Err(e) => {
                warn!(error = %e, "failed to write package.json");
                report.warnings += 1;
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockLineInput};
    use std::path::Path;

    fn project() -> ProjectContext {
        ProjectContext::discover("/p/AwesomeProject").unwrap()
    }

    #[test]
    fn affirmative_camera_never_touches_folders() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path: &Path| path.ends_with("Info.plist"))
            .return_const(true);
        fs.expect_read_to_string()
            .withf(|path: &Path| path.ends_with("Info.plist"))
            .returning(|_| Ok("<key>UIAppFonts</key>\n".into()));
        fs.expect_write_file()
            .withf(|path: &Path, content: &str| {
                path.ends_with("Info.plist") && content.contains("NSCameraUsageDescription")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        // No remove_dir_all expectation: deleting anything would panic.

        let mut input = MockLineInput::new();
        input.expect_ask().times(1).returning(|_| Ok("y".into()));

        let service = SetupService::new(Box::new(fs), Box::new(input));
        let report = service
            .run_feature(&project(), Feature::Camera, None)
            .unwrap();

        assert!(report.kept);
        assert_eq!(report.files_changed, 1);
        assert_eq!(report.folders_removed, 0);
    }

    #[test]
    fn missing_anchor_warns_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("<dict>\n</dict>\n".into()));
        fs.expect_write_file().times(0);

        let service = SetupService::new(Box::new(fs), Box::new(MockLineInput::new()));
        let report = service
            .run_feature(&project(), Feature::Camera, Some(true))
            .unwrap();

        assert_eq!(report.files_changed, 0);
        assert_eq!(report.warnings, 1);
    }

    #[test]
    fn override_skips_the_prompt() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let mut input = MockLineInput::new();
        input.expect_ask().times(0);

        let service = SetupService::new(Box::new(fs), Box::new(input));
        let report = service
            .run_feature(&project(), Feature::Chat, Some(false))
            .unwrap();

        assert!(!report.kept);
        // Every target absent: all edits warn, nothing changes.
        assert_eq!(report.files_changed, 0);
    }

    #[test]
    fn ambiguous_answer_means_cleanup() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let mut input = MockLineInput::new();
        input
            .expect_ask()
            .times(1)
            .returning(|_| Ok("maybe?".into()));

        let service = SetupService::new(Box::new(fs), Box::new(input));
        let report = service
            .run_feature(&project(), Feature::Camera, None)
            .unwrap();
        assert!(!report.kept);
    }

    #[test]
    fn folder_removal_failure_does_not_stop_later_steps() {
        let mut fs = MockFilesystem::new();
        // Folders exist…
        fs.expect_exists().return_const(true);
        // …but removal blows up for each of them.
        fs.expect_remove_dir_all().returning(|path| {
            Err(crate::application::ApplicationError::FilesystemError {
                path: path.into(),
                reason: "permission denied".into(),
            }
            .into())
        });
        // The later steps still run: barrels are read (and left unchanged),
        // package.json is read and pruned.
        fs.expect_read_to_string().returning(|path| {
            if path.ends_with("package.json") {
                Ok(r#"{"dependencies":{"react-native-vision-camera":"^4.0.0"}}"#.into())
            } else {
                Ok("export {};\n".into())
            }
        });
        fs.expect_write_file()
            .withf(|path: &Path, content: &str| {
                path.ends_with("package.json") && !content.contains("vision-camera")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SetupService::new(Box::new(fs), Box::new(MockLineInput::new()));
        let report = service
            .run_feature(&project(), Feature::Camera, Some(false))
            .unwrap();

        assert_eq!(report.folders_removed, 0);
        assert_eq!(report.packages_removed, 1);
        assert!(report.warnings >= 4); // 4 failed folder deletes
    }
}
