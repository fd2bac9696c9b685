//! Asset service — app-icon and splash generation.
//!
//! One blocking resize invocation per variant, strictly sequential. The
//! per-platform manifests are built from the variants actually produced in
//! the run, never from the static tables, so a partial run is reflected
//! truthfully. A missing source image is fatal before any writes; a resize
//! failure propagates and abandons the remaining steps of that invocation.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ImageResizer},
    },
    domain::{
        ProjectContext,
        assets::{
            ANDROID_ICON_MANIFEST, ANDROID_ICON_SPECS, ANDROID_LAUNCHER, ANDROID_LAUNCHER_ROUND,
            AssetCatalog, CatalogImage, IOS_APPICON_SET, IOS_ICON_SPECS, IOS_SPLASH_SCALES,
            IOS_SPLASH_SET, MipmapImage, MipmapManifest, PlatformSelection,
            SPLASH_BACKGROUND_XML, SPLASH_DRAWABLE, SPLASH_DRAWABLE_PIXELS, SPLASH_LAYER_LIST,
            storyboard_edit, styles_edit,
        },
    },
    error::ForgeResult,
};

/// What an icon run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconReport {
    pub android: Option<MipmapManifest>,
    pub ios: Option<AssetCatalog>,
    pub files_written: usize,
}

/// What a splash run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplashReport {
    pub fullscreen: bool,
    pub files_written: usize,
    pub styles_updated: bool,
    pub storyboard_updated: bool,
    pub ios: Option<AssetCatalog>,
    pub warnings: usize,
}

/// Generates platform raster assets and their manifests.
pub struct AssetService {
    filesystem: Box<dyn Filesystem>,
    resizer: Box<dyn ImageResizer>,
}

impl AssetService {
    /// Create a new asset service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, resizer: Box<dyn ImageResizer>) -> Self {
        Self {
            filesystem,
            resizer,
        }
    }

    // ── app icons ─────────────────────────────────────────────────────────

    /// Generate launcher/app icons for the selected platforms.
    #[instrument(skip_all, fields(platforms = %platforms))]
    pub fn generate_icons(
        &self,
        project: &ProjectContext,
        source: &Path,
        platforms: PlatformSelection,
    ) -> ForgeResult<IconReport> {
        self.require_source(source)?;

        let mut report = IconReport::default();

        if platforms.android() {
            report.android = Some(self.android_icons(project, source, &mut report.files_written)?);
        }
        if platforms.ios() {
            report.ios = Some(self.ios_icons(project, source, &mut report.files_written)?);
        }

        info!(files = report.files_written, "icons generated");
        Ok(report)
    }

    /// Square + round launcher per density, then the mipmap manifest listing
    /// exactly the densities written.
    fn android_icons(
        &self,
        project: &ProjectContext,
        source: &Path,
        files_written: &mut usize,
    ) -> ForgeResult<MipmapManifest> {
        let res = project.android_res();
        let mut manifest = MipmapManifest::default();

        for spec in ANDROID_ICON_SPECS {
            let dir = res.join(spec.folder);
            self.filesystem.create_dir_all(&dir)?;

            let mut filenames = Vec::with_capacity(2);
            for name in [ANDROID_LAUNCHER, ANDROID_LAUNCHER_ROUND] {
                self.resizer.resize(source, &dir.join(name), spec.pixels)?;
                filenames.push(name.to_owned());
                *files_written += 1;
            }

            manifest.images.push(MipmapImage {
                density: spec.folder.to_owned(),
                pixels: spec.pixels,
                filenames,
            });
        }

        let manifest_path = res.join(ANDROID_ICON_MANIFEST);
        self.filesystem
            .write_file(&manifest_path, &pretty_json(&manifest))?;
        *files_written += 1;

        Ok(manifest)
    }

    /// The nine appiconset variants, then `Contents.json` listing exactly the
    /// variants written.
    fn ios_icons(
        &self,
        project: &ProjectContext,
        source: &Path,
        files_written: &mut usize,
    ) -> ForgeResult<AssetCatalog> {
        let set = project.xcassets().join(IOS_APPICON_SET);
        self.filesystem.create_dir_all(&set)?;

        let mut catalog = AssetCatalog::default();
        for spec in IOS_ICON_SPECS {
            let filename = spec.filename();
            self.resizer
                .resize(source, &set.join(&filename), spec.pixels)?;
            *files_written += 1;

            catalog.images.push(CatalogImage {
                idiom: spec.idiom.to_owned(),
                size: Some(spec.size.to_owned()),
                scale: spec.scale.to_owned(),
                filename,
            });
        }

        self.filesystem
            .write_file(&set.join("Contents.json"), &pretty_json(&catalog))?;
        *files_written += 1;

        Ok(catalog)
    }

    // ── splash ────────────────────────────────────────────────────────────

    /// Generate the splash drawable/imageset and patch the platform styling.
    #[instrument(skip_all, fields(platforms = %platforms, fullscreen))]
    pub fn generate_splash(
        &self,
        project: &ProjectContext,
        source: &Path,
        platforms: PlatformSelection,
        fullscreen: bool,
    ) -> ForgeResult<SplashReport> {
        self.require_source(source)?;

        let mut report = SplashReport {
            fullscreen,
            ..SplashReport::default()
        };

        if platforms.android() {
            self.android_splash(project, source, fullscreen, &mut report)?;
        }
        if platforms.ios() {
            self.ios_splash(project, source, &mut report)?;
        }

        info!(files = report.files_written, "splash generated");
        Ok(report)
    }

    fn android_splash(
        &self,
        project: &ProjectContext,
        source: &Path,
        fullscreen: bool,
        report: &mut SplashReport,
    ) -> ForgeResult<()> {
        let drawable_dir = project.android_res().join("drawable");
        self.filesystem.create_dir_all(&drawable_dir)?;

        self.resizer.resize(
            source,
            &drawable_dir.join(SPLASH_DRAWABLE),
            SPLASH_DRAWABLE_PIXELS,
        )?;
        report.files_written += 1;

        // The windowed variant layers the logo over a plain background.
        if !fullscreen {
            self.filesystem.write_file(
                &drawable_dir.join(SPLASH_BACKGROUND_XML),
                SPLASH_LAYER_LIST,
            )?;
            report.files_written += 1;
        }

        report.styles_updated = self.patch_file(project, styles_edit(fullscreen), report);
        Ok(())
    }

    fn ios_splash(
        &self,
        project: &ProjectContext,
        source: &Path,
        report: &mut SplashReport,
    ) -> ForgeResult<()> {
        let set = project.xcassets().join(IOS_SPLASH_SET);
        self.filesystem.create_dir_all(&set)?;

        let mut catalog = AssetCatalog::default();
        for (filename, pixels, scale) in IOS_SPLASH_SCALES {
            self.resizer.resize(source, &set.join(filename), *pixels)?;
            report.files_written += 1;
            catalog.images.push(CatalogImage {
                idiom: "universal".into(),
                size: None,
                scale: (*scale).to_owned(),
                filename: (*filename).to_owned(),
            });
        }

        self.filesystem
            .write_file(&set.join("Contents.json"), &pretty_json(&catalog))?;
        report.files_written += 1;

        let edit = storyboard_edit(project.app_name())?;
        report.storyboard_updated = self.patch_file(project, edit, report);
        report.ios = Some(catalog);
        Ok(())
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn require_source(&self, source: &Path) -> ForgeResult<()> {
        if self.filesystem.exists(source) {
            Ok(())
        } else {
            Err(ApplicationError::SourceAssetMissing {
                path: source.to_path_buf(),
            }
            .into())
        }
    }

    /// Style/storyboard patching follows the setup policy: missing file or
    /// anchor is a warning, not a pipeline failure.
    fn patch_file(
        &self,
        project: &ProjectContext,
        edit: crate::domain::FileEdit,
        report: &mut SplashReport,
    ) -> bool {
        let path = project.resolve(&edit.path);
        if !self.filesystem.exists(&path) {
            warn!(file = edit.label, path = %path.display(), "not found, skipping");
            report.warnings += 1;
            return false;
        }
        let original = match self.filesystem.read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = edit.label, error = %e, "unreadable, skipping");
                report.warnings += 1;
                return false;
            }
        };

        let result = edit.apply(&original);
        for rule in &result.missed {
            warn!(file = edit.label, rule, "no match, skipped");
            report.warnings += 1;
        }
        if !result.changed(&original) {
            return false;
        }

        match self.filesystem.write_file(&path, &result.text) {
            Ok(()) => {
                info!(file = edit.label, "patched");
                true
            }
            Err(e) => {
                warn!(file = edit.label, error = %e, "write failed");
                report.warnings += 1;
                false
            }
        }
    }
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

// ── tests ─────────────────────────────────────────────────────────────────────
