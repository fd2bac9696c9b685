//! Static asset specification tables and generated-manifest shapes.
//!
//! These tables drive the asset pipeline: one resize invocation per entry,
//! then a manifest enumerating exactly what was produced in that run (built
//! from the produced variants, never from the static table, so partial runs
//! are reflected truthfully).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::edit::{EditRule, FileEdit};
use crate::domain::error::DomainError;

// ── Platform selection ────────────────────────────────────────────────────────

/// Which platform trees an asset run writes into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlatformSelection {
    Android,
    Ios,
    #[default]
    All,
}

impl PlatformSelection {
    pub fn android(&self) -> bool {
        matches!(self, Self::Android | Self::All)
    }

    pub fn ios(&self) -> bool {
        matches!(self, Self::Ios | Self::All)
    }
}

impl fmt::Display for PlatformSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::All => "all",
        })
    }
}

impl FromStr for PlatformSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "all" => Ok(Self::All),
            other => Err(DomainError::UnknownPlatform { name: other.into() }),
        }
    }
}

// ── Android launcher icons ────────────────────────────────────────────────────

/// One Android launcher-icon density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidIconSpec {
    /// Resource folder under `res/`, e.g. `mipmap-xhdpi`.
    pub folder: &'static str,
    /// Square pixel dimension.
    pub pixels: u32,
}

/// Launcher icon densities, smallest first.
pub static ANDROID_ICON_SPECS: &[AndroidIconSpec] = &[
    AndroidIconSpec { folder: "mipmap-mdpi", pixels: 48 },
    AndroidIconSpec { folder: "mipmap-hdpi", pixels: 72 },
    AndroidIconSpec { folder: "mipmap-xhdpi", pixels: 96 },
    AndroidIconSpec { folder: "mipmap-xxhdpi", pixels: 144 },
    AndroidIconSpec { folder: "mipmap-xxxhdpi", pixels: 192 },
];

/// Filenames written into every density folder.
pub const ANDROID_LAUNCHER: &str = "ic_launcher.png";
pub const ANDROID_LAUNCHER_ROUND: &str = "ic_launcher_round.png";

/// Manifest written next to the mipmap folders after generation.
pub const ANDROID_ICON_MANIFEST: &str = "mipmap-manifest.json";

/// One produced density, as recorded in [`MipmapManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MipmapImage {
    pub density: String,
    pub pixels: u32,
    pub filenames: Vec<String>,
}

/// Generated Android manifest: exactly the files written this run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MipmapManifest {
    pub images: Vec<MipmapImage>,
}

// ── iOS app icons ─────────────────────────────────────────────────────────────

/// One `AppIcon.appiconset` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosIconSpec {
    pub idiom: &'static str,
    /// Logical size, e.g. `40x40`.
    pub size: &'static str,
    /// Scale factor, e.g. `3x`.
    pub scale: &'static str,
    /// Rendered square pixel dimension.
    pub pixels: u32,
}

impl IosIconSpec {
    /// Output filename. Two specs can share a pixel dimension (40@3x and
    /// 60@2x are both 120px) and then share a file; the catalog lists both
    /// entries pointing at it, matching Xcode's tolerance for reused files.
    pub fn filename(&self) -> String {
        format!("icon-{}.png", self.pixels)
    }
}

/// iPhone + marketing icon set.
pub static IOS_ICON_SPECS: &[IosIconSpec] = &[
    IosIconSpec { idiom: "iphone", size: "20x20", scale: "2x", pixels: 40 },
    IosIconSpec { idiom: "iphone", size: "20x20", scale: "3x", pixels: 60 },
    IosIconSpec { idiom: "iphone", size: "29x29", scale: "2x", pixels: 58 },
    IosIconSpec { idiom: "iphone", size: "29x29", scale: "3x", pixels: 87 },
    IosIconSpec { idiom: "iphone", size: "40x40", scale: "2x", pixels: 80 },
    IosIconSpec { idiom: "iphone", size: "40x40", scale: "3x", pixels: 120 },
    IosIconSpec { idiom: "iphone", size: "60x60", scale: "2x", pixels: 120 },
    IosIconSpec { idiom: "iphone", size: "60x60", scale: "3x", pixels: 180 },
    IosIconSpec { idiom: "ios-marketing", size: "1024x1024", scale: "1x", pixels: 1024 },
];

/// Directory (under `Images.xcassets`) holding the generated app icons.
pub const IOS_APPICON_SET: &str = "AppIcon.appiconset";

/// One produced variant in an Xcode asset catalog `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    pub idiom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub scale: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub version: u32,
    pub author: String,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".into(),
        }
    }
}

/// Xcode asset catalog manifest: exactly the variants produced this run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub images: Vec<CatalogImage>,
    pub info: CatalogInfo,
}

// ── Splash ────────────────────────────────────────────────────────────────────

/// Pixel size of the Android splash drawable.
pub const SPLASH_DRAWABLE_PIXELS: u32 = 512;

pub const SPLASH_DRAWABLE: &str = "splash_logo.png";
pub const SPLASH_BACKGROUND_XML: &str = "splash_background.xml";

/// iOS splash imageset scales: (suffix, pixels, scale label).
pub static IOS_SPLASH_SCALES: &[(&str, u32, &str)] = &[
    ("splash.png", 512, "1x"),
    ("splash@2x.png", 1024, "2x"),
    ("splash@3x.png", 1536, "3x"),
];

/// Directory (under `Images.xcassets`) holding the generated splash logo.
pub const IOS_SPLASH_SET: &str = "SplashLogo.imageset";

/// The layer-list drawable used for the windowed (non-fullscreen) splash.
pub const SPLASH_LAYER_LIST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<layer-list xmlns:android="http://schemas.android.com/apk/res/android">
    <item android:drawable="@android:color/white" /> <!-- background color -->
    <item>
        <bitmap
            android:gravity="center"
            android:src="@drawable/splash_logo"/>
    </item>
</layer-list>
"#;

/// Anchor inside the template's `values/styles.xml`.
pub const STYLES_MARKER: &str = "<!-- Customize your theme here. -->";

/// Style item for the windowed splash.
pub const SPLASH_STYLE_WINDOWED: &str =
    r#"        <item name="android:windowBackground">@drawable/splash_background</item>"#;

/// Style items for the fullscreen splash.
pub const SPLASH_STYLE_FULLSCREEN: &str = r#"
        <item name="android:windowBackground">@drawable/splash_logo</item>
        <item name="android:windowFullscreen">true</item>
        <item name="android:statusBarColor">@android:color/transparent</item>
  "#;

/// Edit injecting the splash window-background style into `values/styles.xml`.
///
/// The guard covers both drawables, so re-runs (and runs after the other
/// variant) leave the file untouched.
pub fn styles_edit(fullscreen: bool) -> FileEdit {
    let content = if fullscreen {
        format!("{SPLASH_STYLE_FULLSCREEN}\n")
    } else {
        format!("{SPLASH_STYLE_WINDOWED}\n")
    };
    FileEdit::new(
        "styles.xml",
        "android/app/src/main/res/values/styles.xml",
        vec![EditRule::insert_after(
            "inject splash style after theme marker",
            STYLES_MARKER,
            content,
            "@drawable/splash",
        )],
    )
}

// ── iOS launch storyboard ─────────────────────────────────────────────────────

const STORYBOARD_SUBVIEWS: &str = r#"<subviews>
                <imageView clipsSubviews="YES" userInteractionEnabled="NO" contentMode="scaleAspectFit" image="SplashLogo" translatesAutoresizingMaskIntoConstraints="NO" id="spl-lg-1">
                    <rect key="frame" x="87" y="326" width="240" height="240"/>
                </imageView>
            </subviews>"#;

const STORYBOARD_CONSTRAINTS: &str = r#"<constraints>
                <constraint firstItem="spl-lg-1" firstAttribute="centerX" secondItem="Ze5-6b-2t3" secondAttribute="centerX" id="spl-cx-1"/>
                <constraint firstItem="spl-lg-1" firstAttribute="centerY" secondItem="Ze5-6b-2t3" secondAttribute="centerY" id="spl-cy-1"/>
            </constraints>"#;

/// Edit swapping the launch screen's subview and constraint regions for the
/// splash image wholesale. Non-greedy patterns keep the replacement to the
/// smallest enclosing region; replacing with identical content on a re-run
/// is a no-op.
pub fn storyboard_edit(app_name: &str) -> Result<FileEdit, DomainError> {
    Ok(FileEdit::new(
        "LaunchScreen.storyboard",
        format!("ios/{app_name}/LaunchScreen.storyboard"),
        vec![
            EditRule::replace(
                "replace launch-screen subviews",
                r"(?s)<subviews>.*?</subviews>",
                STORYBOARD_SUBVIEWS,
            )?,
            EditRule::replace(
                "replace launch-screen constraints",
                r"(?s)<constraints>.*?</constraints>",
                STORYBOARD_CONSTRAINTS,
            )?,
        ],
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_table_has_five_densities() {
        assert_eq!(ANDROID_ICON_SPECS.len(), 5);
        assert_eq!(ANDROID_ICON_SPECS[0].pixels, 48);
        assert_eq!(ANDROID_ICON_SPECS[4].folder, "mipmap-xxxhdpi");
    }

    #[test]
    fn ios_table_has_nine_entries_ending_in_marketing() {
        assert_eq!(IOS_ICON_SPECS.len(), 9);
        let marketing = IOS_ICON_SPECS.last().unwrap();
        assert_eq!(marketing.idiom, "ios-marketing");
        assert_eq!(marketing.pixels, 1024);
    }

    #[test]
    fn filename_collision_between_40_at_3x_and_60_at_2x_is_expected() {
        let names: Vec<String> = IOS_ICON_SPECS.iter().map(IosIconSpec::filename).collect();
        let unique: std::collections::BTreeSet<&String> = names.iter().collect();
        // 9 specs, 8 distinct files: icon-120.png is shared.
        assert_eq!(unique.len(), 8);
        assert_eq!(names.iter().filter(|n| *n == "icon-120.png").count(), 2);
    }

    #[test]
    fn asset_catalog_serializes_like_xcode() {
        let catalog = AssetCatalog {
            images: vec![CatalogImage {
                idiom: "iphone".into(),
                size: Some("20x20".into()),
                scale: "2x".into(),
                filename: "icon-40.png".into(),
            }],
            info: CatalogInfo::default(),
        };
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        assert!(json.contains("\"author\": \"xcode\""));
        assert!(json.contains("\"version\": 1"));
        assert!(json.contains("\"icon-40.png\""));
    }

    #[test]
    fn splash_scales_cover_1x_to_3x() {
        assert_eq!(IOS_SPLASH_SCALES.len(), 3);
        assert_eq!(IOS_SPLASH_SCALES[0].1, SPLASH_DRAWABLE_PIXELS);
    }

    #[test]
    fn platform_selection_parses_and_branches() {
        assert_eq!("android".parse::<PlatformSelection>().unwrap(), PlatformSelection::Android);
        assert_eq!("IOS".parse::<PlatformSelection>().unwrap(), PlatformSelection::Ios);
        assert!("windows".parse::<PlatformSelection>().is_err());

        assert!(PlatformSelection::All.android() && PlatformSelection::All.ios());
        assert!(PlatformSelection::Android.android() && !PlatformSelection::Android.ios());
        assert!(!PlatformSelection::Ios.android() && PlatformSelection::Ios.ios());
    }

    const STYLES: &str = "\
<resources>
    <style name=\"AppTheme\" parent=\"Theme.AppCompat.DayNight.NoActionBar\">
        <!-- Customize your theme here. -->
        <item name=\"android:editTextBackground\">@drawable/rn_edit_text_material</item>
    </style>
</resources>
";

    #[test]
    fn windowed_style_lands_after_the_marker() {
        let result = styles_edit(false).apply(STYLES);
        assert_eq!(result.applied, 1);
        let marker_at = result.text.find(STYLES_MARKER).unwrap();
        let item_at = result.text.find("@drawable/splash_background").unwrap();
        assert!(marker_at < item_at);
        assert!(!result.text.contains("windowFullscreen"));
    }

    #[test]
    fn fullscreen_style_injects_the_three_items() {
        let result = styles_edit(true).apply(STYLES);
        assert!(result.text.contains("@drawable/splash_logo"));
        assert!(result.text.contains("android:windowFullscreen"));
        assert!(result.text.contains("android:statusBarColor"));
    }

    #[test]
    fn styles_injection_skips_when_either_variant_is_present() {
        let windowed = styles_edit(false).apply(STYLES).text;
        let rerun = styles_edit(true).apply(&windowed);
        assert_eq!(rerun.applied, 0);
        assert_eq!(rerun.already_applied, 1);
        assert_eq!(rerun.text, windowed);
    }

    const STORYBOARD: &str = "\
<document>
    <view key=\"view\" id=\"Ze5-6b-2t3\">
        <subviews>
            <label text=\"AwesomeProject\" id=\"old-1\"/>
        </subviews>
        <constraints>
            <constraint firstItem=\"old-1\" id=\"old-c1\"/>
        </constraints>
    </view>
</document>
";

    #[test]
    fn storyboard_regions_are_replaced_wholesale() {
        let edit = storyboard_edit("AwesomeProject").unwrap();
        assert!(edit.path.ends_with("ios/AwesomeProject/LaunchScreen.storyboard"));

        let result = edit.apply(STORYBOARD);
        assert_eq!(result.applied, 2);
        assert!(result.text.contains("image=\"SplashLogo\""));
        assert!(!result.text.contains("old-1"));
        // The enclosing view element is untouched.
        assert!(result.text.contains("id=\"Ze5-6b-2t3\""));
    }

    #[test]
    fn storyboard_rewrite_is_idempotent() {
        let edit = storyboard_edit("AwesomeProject").unwrap();
        let once = edit.apply(STORYBOARD).text;
        let again = edit.apply(&once);
        assert!(!again.changed(&once));
    }
}
