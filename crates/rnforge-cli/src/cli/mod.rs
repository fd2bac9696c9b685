//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use rnforge_core::domain::PlatformSelection;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rnforge",
    bin_name = "rnforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Post-init tooling for React Native templates",
    long_about = "rnforge finishes a freshly generated React Native project: \
                  it asks which optional feature modules to keep, wires them \
                  in or strips them out, and generates app icons and splash \
                  assets.",
    after_help = "EXAMPLES:\n\
        \x20 rnforge setup ./AwesomeProject\n\
        \x20 rnforge setup --camera no --chat yes\n\
        \x20 rnforge appicon --platform android\n\
        \x20 rnforge splash --fullscreen\n\
        \x20 rnforge completions bash > /usr/share/bash-completion/completions/rnforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide and apply the optional feature modules.
    #[command(
        visible_alias = "s",
        about = "Keep or strip the optional feature modules",
        after_help = "EXAMPLES:\n\
            \x20 rnforge setup                 # prompts for each feature\n\
            \x20 rnforge setup --camera yes    # prompt only for the rest\n\
            \x20 rnforge setup --camera no --chat no"
    )]
    Setup(SetupArgs),

    /// Generate launcher/app icons from a source image.
    #[command(
        about = "Generate app icons",
        after_help = "EXAMPLES:\n\
            \x20 rnforge appicon\n\
            \x20 rnforge appicon --platform android\n\
            \x20 rnforge appicon --source ./branding/icon.png"
    )]
    Appicon(AppiconArgs),

    /// Generate the splash screen assets.
    #[command(
        about = "Generate splash assets",
        after_help = "EXAMPLES:\n\
            \x20 rnforge splash                # prompts for fullscreen\n\
            \x20 rnforge splash --fullscreen\n\
            \x20 rnforge splash --windowed --platform android"
    )]
    Splash(SplashArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rnforge completions bash > ~/.local/share/bash-completion/completions/rnforge\n\
            \x20 rnforge completions zsh  > ~/.zfunc/_rnforge\n\
            \x20 rnforge completions fish > ~/.config/fish/completions/rnforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the rnforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rnforge config get assets.platforms\n\
            \x20 rnforge config set assets.platforms android\n\
            \x20 rnforge config list"
    )]
    Config(ConfigCommands),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `rnforge setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Project directory (the generated app's root).
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,

    /// Decide the camera feature without prompting.
    #[arg(
        long = "camera",
        value_enum,
        value_name = "YES|NO",
        help = "Keep or drop camera support without prompting"
    )]
    pub camera: Option<Decision>,

    /// Decide the chat feature without prompting.
    #[arg(
        long = "chat",
        value_enum,
        value_name = "YES|NO",
        help = "Keep or drop the chat UI without prompting"
    )]
    pub chat: Option<Decision>,

    /// Override the iOS target name (default: directory basename).
    #[arg(long = "app-name", value_name = "NAME", help = "iOS target name")]
    pub app_name: Option<String>,
}

/// A pre-made yes/no decision passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Decision {
    #[value(alias = "y")]
    Yes,
    #[value(alias = "n")]
    No,
}

impl Decision {
    pub fn keep(self) -> bool {
        matches!(self, Self::Yes)
    }
}

// ── appicon ───────────────────────────────────────────────────────────────────

/// Arguments for `rnforge appicon`.
#[derive(Debug, Args)]
pub struct AppiconArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,

    /// Platform tree(s) to write into.
    #[arg(
        short = 'p',
        long = "platform",
        value_enum,
        value_name = "PLATFORM",
        help = "Platforms to generate for (default from config)"
    )]
    pub platform: Option<Platform>,

    /// Source image (default from config: src/assets/images/logo.png).
    #[arg(short = 's', long = "source", value_name = "FILE", help = "Source image")]
    pub source: Option<PathBuf>,

    /// Override the iOS target name (default: directory basename).
    #[arg(long = "app-name", value_name = "NAME", help = "iOS target name")]
    pub app_name: Option<String>,
}

// ── splash ────────────────────────────────────────────────────────────────────

/// Arguments for `rnforge splash`.
#[derive(Debug, Args)]
pub struct SplashArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,

    /// Platform tree(s) to write into.
    #[arg(
        short = 'p',
        long = "platform",
        value_enum,
        value_name = "PLATFORM",
        help = "Platforms to generate for (default from config)"
    )]
    pub platform: Option<Platform>,

    /// Source image (default from config: src/assets/branding/splash.png).
    #[arg(short = 's', long = "source", value_name = "FILE", help = "Source image")]
    pub source: Option<PathBuf>,

    /// Fullscreen splash, skipping the prompt.
    #[arg(long = "fullscreen", help = "Fullscreen splash (skip the prompt)")]
    pub fullscreen: bool,

    /// Windowed (layer-list) splash, skipping the prompt.
    #[arg(
        long = "windowed",
        conflicts_with = "fullscreen",
        help = "Windowed splash (skip the prompt)"
    )]
    pub windowed: bool,

    /// Override the iOS target name (default: directory basename).
    #[arg(long = "app-name", value_name = "NAME", help = "iOS target name")]
    pub app_name: Option<String>,
}

impl SplashArgs {
    /// `None` means: ask the operator.
    pub fn fullscreen_override(&self) -> Option<bool> {
        if self.fullscreen {
            Some(true)
        } else if self.windowed {
            Some(false)
        } else {
            None
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rnforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rnforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `assets.platforms`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Platform selection for the asset pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    All,
}

impl From<Platform> for PlatformSelection {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Android => PlatformSelection::Android,
            Platform::Ios => PlatformSelection::Ios,
            Platform::All => PlatformSelection::All,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
