//! Chat feature module: chat screen, chat header, toasts, document pickers.
//!
//! Unlike camera, chat ships wired into the template, so keeping it needs no
//! edits; dropping it unwinds the wiring: barrel exports, the `Paths` route
//! entry (enum- or object-style), the `RootStackParamList` entry, and the
//! provider-wrapped navigator subtree in the composition root.

use crate::domain::{
    edit::{EditRule, FileEdit},
    error::DomainError,
    feature::Feature,
    project::ProjectContext,
};

use super::FeatureModule;

const PROMPT: &str = "Do you want to include the Chat UI? \u{203a} (y/N) ";

const FOLDERS: &[&str] = &[
    "src/screens/ChatScreen",
    "src/components/templates/ChatHeader",
];

const PACKAGES: &[&str] = &[
    "@backpackapp-io/react-native-toast",
    "@freakycoder/react-native-bounceable",
    "@react-native-documents/picker",
    "@react-native-documents/viewer",
    "@shopify/flash-list",
    "react-native-image-viewing",
    "rn-emoji-keyboard",
];

/// Minimal two-screen navigator that stands in for the chat-wrapped subtree.
const FALLBACK_NAVIGATOR: &str = r"<NavigationContainer theme={navigationTheme}>
        <Stack.Navigator
          key={variant}
          initialRouteName={Paths.Startup}
          screenOptions={{ headerShown: false }}
        >
          <Stack.Screen component={Startup} name={Paths.Startup} />
          <Stack.Screen component={Example} name={Paths.Example} />
        </Stack.Navigator>
      </NavigationContainer>";

pub(super) fn module(_project: &ProjectContext) -> Result<FeatureModule, DomainError> {
    let removal_edits = vec![
        FileEdit::new(
            "screens barrel",
            "src/screens/index.ts",
            vec![EditRule::strip(
                "strip ChatScreen export",
                r"(?s)export\s*\{[^}]*\bChatScreen\b[^}]*\}\s*from\s*'[^']*';\r?\n?",
            )?],
        ),
        FileEdit::new(
            "templates barrel",
            "src/components/templates/index.ts",
            vec![EditRule::strip(
                "strip ChatHeader export block",
                r"(?s)export\s*\{[^}]*\bChatHeader\b[^}]*\}\s*from\s*'\./ChatHeader/ChatHeader';\r?\n?",
            )?],
        ),
        FileEdit::new(
            "route table",
            "src/navigation/paths.ts",
            vec![EditRule::strip(
                "strip ChatScreen route entry",
                r"(?m)^\s*ChatScreen\s*[:=]\s*'[^']*',?\s*\r?\n",
            )?],
        ),
        FileEdit::new(
            "route types",
            "src/navigation/types.ts",
            vec![EditRule::strip(
                "strip ChatScreen param-list entry",
                r"(?m)^\s*\[Paths\.ChatScreen\]:\s*[^;\r\n]*;?\s*\r?\n",
            )?],
        ),
        FileEdit::new(
            "composition root",
            "src/navigation/Application.tsx",
            vec![
                EditRule::replace(
                    "drop ChatScreen from screens import",
                    r"(?m)^(import\s*\{\s*)ChatScreen,\s*",
                    "$1",
                )?,
                EditRule::strip(
                    "strip toast import",
                    r"(?m)^import\s*\{\s*Toasts\s*\}\s*from\s*'@backpackapp-io/react-native-toast';\r?\n",
                )?,
                EditRule::strip(
                    "strip chat header import",
                    r"(?m)^import\s*\{[^}]*ChatHeader[^}]*\}\s*from\s*'@/components/templates';\r?\n",
                )?,
                EditRule::replace(
                    "replace provider-wrapped navigator with fallback",
                    r"(?s)<HeaderActionsProvider>.*?</HeaderActionsProvider>",
                    FALLBACK_NAVIGATOR,
                )?,
                EditRule::strip("strip toast element", r"(?s)\s*<Toasts\b.*?/>")?,
            ],
        ),
    ];

    Ok(FeatureModule {
        feature: Feature::Chat,
        prompt: PROMPT,
        folders: FOLDERS,
        packages: PACKAGES,
        install_edits: Vec::new(),
        removal_edits,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> FeatureModule {
        module(&ProjectContext::discover("/w/AwesomeProject").unwrap()).unwrap()
    }

    #[test]
    fn templates_barrel_loses_multi_line_chat_header_block() {
        let barrel = "\
export { default as SafeScreen } from './SafeScreen/SafeScreen';
export {
  default as ChatHeader,
  HeaderActionsProvider,
  useHeaderActions,
  useSetHeaderActions,
} from './ChatHeader/ChatHeader';
";
        let result = built().removal_edits[1].apply(barrel);
        assert_eq!(result.applied, 1);
        assert_eq!(
            result.text,
            "export { default as SafeScreen } from './SafeScreen/SafeScreen';\n"
        );
    }

    #[test]
    fn route_enum_entry_is_removed_even_when_sole_entry() {
        let paths = "\
export const enum Paths {
  ChatScreen = 'chatScreen',
}
";
        let result = built().removal_edits[2].apply(paths);
        assert_eq!(result.applied, 1);
        assert_eq!(result.text, "export const enum Paths {\n}\n");
    }

    #[test]
    fn object_style_route_entry_is_also_removed() {
        let paths = "\
export const Paths = {
  ChatScreen: 'chatScreen',
  Startup: 'startup',
};
";
        let result = built().removal_edits[2].apply(paths);
        assert_eq!(result.applied, 1);
        assert!(!result.text.contains("ChatScreen"));
        assert!(result.text.contains("Startup: 'startup',"));
    }

    #[test]
    fn param_list_entry_is_removed() {
        let types = "\
export type RootStackParamList = {
  [Paths.ChatScreen]: undefined;
  [Paths.Startup]: undefined;
};
";
        let result = built().removal_edits[3].apply(types);
        assert_eq!(result.applied, 1);
        assert!(!result.text.contains("ChatScreen"));
        assert!(result.text.contains("[Paths.Startup]: undefined;"));
    }

    const APPLICATION: &str = r"import { NavigationContainer } from '@react-navigation/native';
import { ChatScreen, Example, Startup } from '@/screens';
import { Toasts } from '@backpackapp-io/react-native-toast';
import { ChatHeader, HeaderActionsProvider } from '@/components/templates';

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
            <Stack.Screen component={ChatScreen} name={Paths.ChatScreen} />
          </Stack.Navigator>
        </NavigationContainer>
      </HeaderActionsProvider>
      <Toasts
        defaultStyle={{
          view: { backgroundColor: '#212331' },
        }}
      />
    </SafeAreaProvider>
  );
}
";

    #[test]
    fn composition_root_is_rewritten_to_the_fallback_subtree() {
        let result = built().removal_edits[4].apply(APPLICATION);
        assert_eq!(result.applied, 5);
        let text = &result.text;

        assert!(!text.contains("ChatScreen"));
        assert!(!text.contains("ChatHeader"));
        assert!(!text.contains("HeaderActionsProvider"));
        assert!(!text.contains("Toasts"));

        assert!(text.contains("import { Example, Startup } from '@/screens';"));
        assert!(text.contains("initialRouteName={Paths.Startup}"));
        assert!(text.contains("<Stack.Screen component={Example} name={Paths.Example} />"));
        // Siblings outside the replaced region survive.
        assert!(text.contains("<SafeAreaProvider>"));
        assert!(text.contains("</SafeAreaProvider>"));
    }

    #[test]
    fn composition_root_rewrite_is_idempotent() {
        let edit = &built().removal_edits[4];
        let once = edit.apply(APPLICATION).text;
        let again = edit.apply(&once);
        assert_eq!(again.applied, 0);
        assert_eq!(again.text, once);
    }

    #[test]
    fn chat_has_no_install_edits() {
        assert!(built().install_edits.is_empty());
    }
}
