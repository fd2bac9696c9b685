//! Camera feature module: vision-camera capture, image picker, compressor.

use crate::domain::{
    edit::{EditRule, FileEdit},
    error::DomainError,
    feature::Feature,
    project::ProjectContext,
};

use super::FeatureModule;

const PROMPT: &str = "Do you want to install Camera now? \u{203a} (y/N) ";

const FOLDERS: &[&str] = &[
    "src/components/organisms/CameraView",
    "src/hooks/Camera",
    "src/hooks/ImageLibrary",
    "patches",
];

const PACKAGES: &[&str] = &[
    "react-native-compressor",
    "react-native-image-picker",
    "react-native-vision-camera",
];

/// The four permission key/string pairs the camera stack needs on iOS.
const PLIST_PERMISSIONS: &str = r#"
  <key>NSCameraUsageDescription</key>
  <string>$(PRODUCT_NAME) needs access to your Camera.</string>

  <!-- optionally, if you want to record audio: -->
  <key>NSMicrophoneUsageDescription</key>
  <string>$(PRODUCT_NAME) needs access to your Microphone.</string>
  <key>NSPhotoLibraryUsageDescription</key>
  <string>$(PRODUCT_NAME) needs access to your library.</string>
  <key>NSPhotoLibraryAddUsageDescription</key>
  <string>$(PRODUCT_NAME) needs access to write to your library.</string>
"#;

pub(super) fn module(project: &ProjectContext) -> Result<FeatureModule, DomainError> {
    let install_edits = vec![FileEdit::new(
        "Info.plist",
        format!("ios/{}/Info.plist", project.app_name()),
        vec![EditRule::insert_before(
            "inject camera permissions before UIAppFonts",
            "<key>UIAppFonts</key>",
            PLIST_PERMISSIONS,
            "<key>NSCameraUsageDescription</key>",
        )],
    )];

    let removal_edits = vec![
        FileEdit::new(
            "organisms barrel",
            "src/components/organisms/index.ts",
            vec![EditRule::strip(
                "strip CameraView export",
                r"(?m)^export\s*\{\s*default\s+as\s+CameraView\s*\}.*\r?\n?",
            )?],
        ),
        FileEdit::new(
            "hooks barrel",
            "src/hooks/index.ts",
            vec![
                EditRule::strip(
                    "strip useCameraPermission export",
                    r"(?m)^export\s*\{\s*useCameraPermission\s*\}.*\r?\n?",
                )?,
                EditRule::strip(
                    "strip useImagePickerPermission export",
                    r"(?m)^export\s*\{\s*useImagePickerPermission\s*\}.*\r?\n?",
                )?,
            ],
        ),
    ];

    Ok(FeatureModule {
        feature: Feature::Camera,
        prompt: PROMPT,
        folders: FOLDERS,
        packages: PACKAGES,
        install_edits,
        removal_edits,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
