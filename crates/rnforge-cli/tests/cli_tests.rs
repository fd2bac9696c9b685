//! Integration tests for the rnforge binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rnforge() -> Command {
    Command::cargo_bin("rnforge").unwrap()
}

/// Write a minimal generated project into `root/AwesomeProject`.
fn scaffold_fixture(root: &Path) -> PathBuf {
    let project = root.join("AwesomeProject");
    let write = |relative: &str, content: &str| {
        let path = project.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };

    write(
        "ios/AwesomeProject/Info.plist",
        "<dict>\n  <key>UIAppFonts</key>\n  <array/>\n</dict>\n",
    );
    write(
        "src/components/organisms/index.ts",
        "export {default as CameraView} from './CameraView/CameraView';\n\
         export {default as AppLogo} from './AppLogo/AppLogo';\n",
    );
    write(
        "src/components/organisms/CameraView/CameraView.tsx",
        "export default function CameraView() {}\n",
    );
    write(
        "src/hooks/index.ts",
        "export { useI18n } from './language/useI18n';\n\
         export { useCameraPermission } from './Camera/CameraPermissions';\n\
         export { useImagePickerPermission } from './ImageLibrary/ImageLibraryPermissions';\n",
    );
    write("src/hooks/Camera/CameraPermissions.tsx", "export {};\n");
    write(
        "src/hooks/ImageLibrary/ImageLibraryPermissions.tsx",
        "export {};\n",
    );
    write("patches/rn.patch", "--- a\n+++ b\n");

    write(
        "src/screens/index.ts",
        "export { default as ChatScreen } from './ChatScreen/ChatScreen';\n\
         export { default as Startup } from './Startup/Startup';\n",
    );
    write("src/screens/ChatScreen/ChatScreen.tsx", "export {};\n");
    write(
        "src/components/templates/index.ts",
        "export { default as SafeScreen } from './SafeScreen/SafeScreen';\n\
         export {\n  default as ChatHeader,\n  HeaderActionsProvider,\n} from './ChatHeader/ChatHeader';\n",
    );
    write(
        "src/components/templates/ChatHeader/ChatHeader.tsx",
        "export {};\n",
    );
    write(
        "src/navigation/paths.ts",
        "export const enum Paths {\n  ChatScreen = 'chatScreen',\n  Startup = 'startup',\n}\n",
    );
    write(
        "src/navigation/types.ts",
        "export type RootStackParamList = {\n  [Paths.ChatScreen]: undefined;\n  [Paths.Startup]: undefined;\n};\n",
    );
    write(
        "src/navigation/Application.tsx",
        "import { ChatScreen, Example, Startup } from '@/screens';\n\
         import { Toasts } from '@backpackapp-io/react-native-toast';\n\
         import { ChatHeader, HeaderActionsProvider } from '@/components/templates';\n\
         <SafeAreaProvider>\n\
           <HeaderActionsProvider>\n\
             <NavigationContainer theme={navigationTheme}>\n\
             </NavigationContainer>\n\
           </HeaderActionsProvider>\n\
           <Toasts defaultStyle={{}} />\n\
         </SafeAreaProvider>\n",
    );
    write(
        "package.json",
        r#"{
  "name": "AwesomeProject",
  "dependencies": {
    "react": "18.3.1",
    "react-native-vision-camera": "^4.6.4",
    "react-native-image-picker": "^7.2.3",
    "rn-emoji-keyboard": "^1.7.0"
  },
  "devDependencies": {
    "react-native-compressor": "^1.10.3"
  }
}"#,
    );

    project
}

// ── basic surface ─────────────────────────────────────────────────────────────

#[test]
fn help_flag_mentions_the_subcommands() {
    rnforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("appicon"))
        .stdout(predicate::str::contains("splash"));
}

#[test]
fn version_flag_matches_cargo() {
    rnforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn setup_help_documents_the_overrides() {
    rnforge()
        .args(["setup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--camera"))
        .stdout(predicate::str::contains("--chat"))
        .stdout(predicate::str::contains("--app-name"));
}

#[test]
fn no_args_shows_help_and_fails() {
    rnforge().assert().failure();
}

// ── setup ─────────────────────────────────────────────────────────────────────

#[test]
fn setup_rejects_a_missing_project_dir() {
    rnforge()
        .args(["setup", "/definitely/not/a/project", "--camera", "no", "--chat", "no"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn setup_with_flag_overrides_runs_non_interactively() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());

    rnforge()
        .current_dir(&project)
        .args(["setup", "--camera", "no", "--chat", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camera: removed"))
        .stdout(predicate::str::contains("chat: removed"));

    assert!(!project.join("src/hooks/Camera").exists());
    assert!(!project.join("patches").exists());
    assert!(!project.join("src/screens/ChatScreen").exists());

    let manifest = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(!manifest.contains("react-native-vision-camera"));
    assert!(!manifest.contains("react-native-compressor"));
    assert!(!manifest.contains("rn-emoji-keyboard"));
    assert!(manifest.contains("\"react\": \"18.3.1\""));
}

#[test]
fn setup_prompts_consume_one_line_per_feature() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());

    rnforge()
        .current_dir(&project)
        .arg("setup")
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to install Camera now?"))
        .stdout(predicate::str::contains("Do you want to include the Chat UI?"));

    // Camera kept: permissions injected, folders intact.
    let plist = fs::read_to_string(project.join("ios/AwesomeProject/Info.plist")).unwrap();
    assert!(plist.contains("NSCameraUsageDescription"));
    assert!(project.join("src/hooks/Camera").exists());

    // Chat dropped.
    assert!(!project.join("src/screens/ChatScreen").exists());
    let paths = fs::read_to_string(project.join("src/navigation/paths.ts")).unwrap();
    assert!(!paths.contains("ChatScreen"));
}

#[test]
fn setup_cleanup_is_idempotent_on_disk() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());
    let args = ["setup", "--camera", "no", "--chat", "no"];

    rnforge().current_dir(&project).args(args).assert().success();
    let manifest_once = fs::read_to_string(project.join("package.json")).unwrap();
    let hooks_once = fs::read_to_string(project.join("src/hooks/index.ts")).unwrap();

    rnforge().current_dir(&project).args(args).assert().success();
    assert_eq!(
        fs::read_to_string(project.join("package.json")).unwrap(),
        manifest_once
    );
    assert_eq!(
        fs::read_to_string(project.join("src/hooks/index.ts")).unwrap(),
        hooks_once
    );
}

#[test]
fn setup_warns_but_succeeds_without_package_json() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());
    fs::remove_file(project.join("package.json")).unwrap();

    rnforge()
        .current_dir(&project)
        .args(["setup", "--camera", "no", "--chat", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

// ── asset pipelines ───────────────────────────────────────────────────────────

#[test]
fn appicon_missing_source_is_fatal_with_exit_code_3() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());

    rnforge()
        .current_dir(&project)
        // Pin the tool so PATH probing cannot fail first on bare machines.
        .env("RNFORGE_RESIZE__TOOL", "convert")
        .args(["appicon", "--platform", "android"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Missing source image"));

    assert!(!project.join("android/app/src/main/res/mipmap-mdpi").exists());
}

#[test]
fn splash_missing_source_is_fatal() {
    let temp = TempDir::new().unwrap();
    let project = scaffold_fixture(temp.path());

    rnforge()
        .current_dir(&project)
        .env("RNFORGE_RESIZE__TOOL", "convert")
        .args(["splash", "--windowed", "--platform", "android"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Missing source image"));
}

// ── completions & config ──────────────────────────────────────────────────────

#[test]
fn completions_emit_a_bash_script() {
    rnforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rnforge"));
}

#[test]
fn config_get_reads_the_defaults() {
    rnforge()
        .args(["config", "get", "assets.platforms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all"));
}

#[test]
fn config_get_unknown_key_exits_with_config_code() {
    rnforge()
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
