//! Shared fixture: an in-memory copy of the freshly generated template,
//! reduced to the files the post-init tooling touches.

use rnforge_adapters::MemoryFilesystem;
use rnforge_core::domain::ProjectContext;

pub const ROOT: &str = "/work/AwesomeProject";

pub fn project() -> ProjectContext {
    ProjectContext::discover(ROOT).unwrap()
}

fn at(relative: &str) -> String {
    format!("{ROOT}/{relative}")
}

pub const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
  <key>CFBundleDisplayName</key>
  <string>AwesomeProject</string>
  <key>UIAppFonts</key>
  <array>
    <string>MaterialIcons.ttf</string>
  </array>
  <key>UIViewControllerBasedStatusBarAppearance</key>
  <false/>
</dict>
</plist>
"#;

pub const ORGANISMS_BARREL: &str = "\
export {default as AppLogo} from './AppLogo/AppLogo';
export {default as CameraView} from './CameraView/CameraView';
";

pub const HOOKS_BARREL: &str = "\
export * from './domain';
export { useI18n } from './language/useI18n';
export { useCameraPermission } from './Camera/CameraPermissions';
export { useImagePickerPermission } from './ImageLibrary/ImageLibraryPermissions';
";

pub const SCREENS_BARREL: &str = "\
export { default as ChatScreen } from './ChatScreen/ChatScreen';
export { default as Example } from './Example/Example';
export { default as Startup } from './Startup/Startup';
";

pub const TEMPLATES_BARREL: &str = "\
export { default as SafeScreen } from './SafeScreen/SafeScreen';
export {
  default as ChatHeader,
  HeaderActionsProvider,
  useHeaderActions,
  useSetHeaderActions,
} from './ChatHeader/ChatHeader';
";

pub const PATHS: &str = "\
export const enum Paths {
  ChatScreen = 'chatScreen',
  Example = 'example',
  Startup = 'startup',
}
";

pub const NAV_TYPES: &str = "\
import type { Paths } from '@/navigation/paths';

export type RootStackParamList = {
  [Paths.ChatScreen]: undefined;
  [Paths.Example]: undefined;
  [Paths.Startup]: undefined;
};
";

pub const APPLICATION: &str = r"import type { RootStackParamList } from '@/navigation/types';

import { NavigationContainer } from '@react-navigation/native';
import { createStackNavigator } from '@react-navigation/stack';
import { SafeAreaProvider } from 'react-native-safe-area-context';

import { Paths } from '@/navigation/paths';
import { useTheme } from '@/theme';

import { ChatScreen, Example, Startup } from '@/screens';
import { Toasts } from '@backpackapp-io/react-native-toast';
import { ChatHeader, HeaderActionsProvider } from '@/components/templates';

const Stack = createStackNavigator<RootStackParamList>();

function ApplicationNavigator() {
  const { navigationTheme, variant } = useTheme();

  return (
    <SafeAreaProvider>
      <HeaderActionsProvider>
        <NavigationContainer theme={navigationTheme}>
          <Stack.Navigator
            key={variant}
            initialRouteName={Paths.ChatScreen}
            screenOptions={{ headerShown: false }}
          >
            <Stack.Screen component={Startup} name={Paths.Startup} />
            <Stack.Screen component={Example} name={Paths.Example} />
            <Stack.Screen
              component={ChatScreen}
              name={Paths.ChatScreen}
              options={{
                headerShown: true,
                header(props) {
                  return <ChatHeader {...props} />;
                },
              }}
            />
          </Stack.Navigator>
        </NavigationContainer>
      </HeaderActionsProvider>
      <Toasts
        defaultStyle={{
          view: {
            backgroundColor: variant === 'dark' ? '#212331' : '#f7f7f7',
          },
        }}
      />
    </SafeAreaProvider>
  );
}

export default ApplicationNavigator;
";

pub const PACKAGE_JSON: &str = r#"{
  "name": "AwesomeProject",
  "version": "0.0.1",
  "dependencies": {
    "@backpackapp-io/react-native-toast": "^0.13.0",
    "@freakycoder/react-native-bounceable": "^1.0.3",
    "@react-native-documents/picker": "^10.1.1",
    "@react-native-documents/viewer": "^1.3.1",
    "@shopify/flash-list": "^1.7.2",
    "react": "18.3.1",
    "react-native": "0.77.0",
    "react-native-compressor": "^1.10.3",
    "react-native-image-picker": "^7.2.3",
    "react-native-image-viewing": "^0.2.2",
    "react-native-vision-camera": "^4.6.4",
    "rn-emoji-keyboard": "^1.7.0"
  },
  "devDependencies": {
    "@babel/core": "^7.25.2",
    "typescript": "5.0.4"
  }
}"#;

pub const STYLES_XML: &str = r#"<resources>
    <!-- Base application theme. -->
    <style name="AppTheme" parent="Theme.AppCompat.DayNight.NoActionBar">
        <!-- Customize your theme here. -->
        <item name="android:editTextBackground">@drawable/rn_edit_text_material</item>
    </style>
</resources>
"#;

pub const STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0">
    <scenes>
        <scene sceneID="EHf-IW-A2E">
            <objects>
                <viewController id="01J-lp-oVM" sceneMemberID="viewController">
                    <view key="view" contentMode="scaleToFill" id="Ze5-6b-2t3">
                        <rect key="frame" x="0.0" y="0.0" width="414" height="896"/>
                        <subviews>
                            <label text="AwesomeProject" id="GJd-Yh-RWb"/>
                        </subviews>
                        <constraints>
                            <constraint firstItem="GJd-Yh-RWb" firstAttribute="centerX" id="old-cx"/>
                        </constraints>
                    </view>
                </viewController>
            </objects>
        </scene>
    </scenes>
</document>
"#;

/// Seed the full template; individual tests overwrite or drop pieces.
pub fn seed_template(fs: &MemoryFilesystem) {
    fs.seed(at("ios/AwesomeProject/Info.plist"), INFO_PLIST);
    fs.seed(at("ios/AwesomeProject/LaunchScreen.storyboard"), STORYBOARD);

    fs.seed(at("src/components/organisms/index.ts"), ORGANISMS_BARREL);
    fs.seed(
        at("src/components/organisms/CameraView/CameraView.tsx"),
        "export default function CameraView() {}\n",
    );
    fs.seed(at("src/hooks/index.ts"), HOOKS_BARREL);
    fs.seed(
        at("src/hooks/Camera/CameraPermissions.tsx"),
        "export const useCameraPermission = () => {};\n",
    );
    fs.seed(
        at("src/hooks/ImageLibrary/ImageLibraryPermissions.tsx"),
        "export const useImagePickerPermission = () => {};\n",
    );
    fs.seed(
        at("patches/react-native-compressor+1.10.3.patch"),
        "--- a\n+++ b\n",
    );

    fs.seed(at("src/screens/index.ts"), SCREENS_BARREL);
    fs.seed(
        at("src/screens/ChatScreen/ChatScreen.tsx"),
        "export default function ChatScreen() {}\n",
    );
    fs.seed(at("src/components/templates/index.ts"), TEMPLATES_BARREL);
    fs.seed(
        at("src/components/templates/ChatHeader/ChatHeader.tsx"),
        "export default function ChatHeader() {}\n",
    );
    fs.seed(at("src/navigation/paths.ts"), PATHS);
    fs.seed(at("src/navigation/types.ts"), NAV_TYPES);
    fs.seed(at("src/navigation/Application.tsx"), APPLICATION);

    fs.seed(at("package.json"), PACKAGE_JSON);
    fs.seed(at("android/app/src/main/res/values/styles.xml"), STYLES_XML);

    fs.seed(
        at("src/assets/images/logo.png"),
        "png:source-logo",
    );
    fs.seed(at("src/assets/branding/splash.png"), "png:source-splash");
}

/// Project-root-relative path helper for assertions.
pub fn abs(relative: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(at(relative))
}
