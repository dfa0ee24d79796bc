//! Keyboard shortcut table and key-to-command mapping.

use crate::ui::UiState;
use scribble_core::{Command, Modifiers, ToolKind};

/// What a shortcut does once matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    Tool(ToolKind),
    /// Step the stroke width by this many units.
    Width(i8),
    Clear,
}

impl ShortcutAction {
    /// Command for this action given the current toolbar state.
    pub fn command(self, ui: &UiState) -> Command {
        match self {
            ShortcutAction::Undo => Command::Undo,
            ShortcutAction::Redo => Command::Redo,
            ShortcutAction::Tool(tool) => Command::SelectTool { tool },
            ShortcutAction::Width(step) => Command::SelectWidth {
                width: ui.width + f64::from(step),
            },
            ShortcutAction::Clear => Command::Clear,
        }
    }
}

/// A key binding. `key` is a DOM `KeyboardEvent.key` value, matched
/// case-insensitively; Ctrl and Cmd are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub command_key: bool,
    pub shift: bool,
    pub action: ShortcutAction,
}

impl Shortcut {
    const fn plain(key: &'static str, action: ShortcutAction) -> Self {
        Self {
            key,
            command_key: false,
            shift: false,
            action,
        }
    }

    const fn command(key: &'static str, shift: bool, action: ShortcutAction) -> Self {
        Self {
            key,
            command_key: true,
            shift,
            action,
        }
    }

    /// Whether a key press with `modifiers` triggers this shortcut.
    /// Alt never matches.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        !modifiers.alt
            && modifiers.command() == self.command_key
            && modifiers.shift == self.shift
            && key.eq_ignore_ascii_case(self.key)
    }
}

const SHORTCUTS: &[Shortcut] = &[
    Shortcut::command("z", false, ShortcutAction::Undo),
    Shortcut::command("z", true, ShortcutAction::Redo),
    Shortcut::command("y", false, ShortcutAction::Redo),
    Shortcut::plain("p", ShortcutAction::Tool(ToolKind::Pencil)),
    Shortcut::plain("e", ShortcutAction::Tool(ToolKind::Eraser)),
    Shortcut::plain("[", ShortcutAction::Width(-1)),
    Shortcut::plain("]", ShortcutAction::Width(1)),
    Shortcut::plain("Delete", ShortcutAction::Clear),
];

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> &'static [Shortcut] {
        SHORTCUTS
    }

    /// Command bound to a key press, if any.
    pub fn command_for_key(key: &str, modifiers: Modifiers, ui: &UiState) -> Option<Command> {
        Self::all()
            .iter()
            .find(|shortcut| shortcut.matches(key, modifiers))
            .map(|shortcut| shortcut.action.command(ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribble_core::Session;

    fn ui() -> UiState {
        UiState::from_session(&Session::default())
    }

    fn modifiers_for(shortcut: &Shortcut) -> Modifiers {
        Modifiers {
            ctrl: shortcut.command_key,
            shift: shortcut.shift,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn test_every_registered_shortcut_resolves() {
        let ui = ui();
        for shortcut in ShortcutRegistry::all() {
            let modifiers = modifiers_for(shortcut);
            assert_eq!(
                ShortcutRegistry::command_for_key(shortcut.key, modifiers, &ui),
                Some(shortcut.action.command(&ui)),
                "{:?}",
                shortcut
            );
            let upper = shortcut.key.to_ascii_uppercase();
            assert!(ShortcutRegistry::command_for_key(&upper, modifiers, &ui).is_some());
        }
    }

    #[test]
    fn test_bindings_are_unambiguous() {
        let all = ShortcutRegistry::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(
                    !(a.key.eq_ignore_ascii_case(b.key)
                        && a.command_key == b.command_key
                        && a.shift == b.shift),
                    "{:?} and {:?} collide",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_undo_redo_keys() {
        let ui = ui();
        assert_eq!(
            ShortcutRegistry::command_for_key("z", Modifiers::CTRL, &ui),
            Some(Command::Undo)
        );
        assert_eq!(
            ShortcutRegistry::command_for_key("Z", Modifiers::CTRL_SHIFT, &ui),
            Some(Command::Redo)
        );
        assert_eq!(
            ShortcutRegistry::command_for_key("y", Modifiers::CTRL, &ui),
            Some(Command::Redo)
        );
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            ShortcutRegistry::command_for_key("z", cmd, &ui),
            Some(Command::Undo)
        );
    }

    #[test]
    fn test_tool_and_width_keys() {
        let ui = ui();
        assert_eq!(
            ShortcutRegistry::command_for_key("e", Modifiers::NONE, &ui),
            Some(Command::SelectTool {
                tool: ToolKind::Eraser
            })
        );
        assert_eq!(
            ShortcutRegistry::command_for_key("]", Modifiers::NONE, &ui),
            Some(Command::SelectWidth { width: 6.0 })
        );
        assert_eq!(
            ShortcutRegistry::command_for_key("[", Modifiers::NONE, &ui),
            Some(Command::SelectWidth { width: 4.0 })
        );
        assert_eq!(
            ShortcutRegistry::command_for_key("Delete", Modifiers::NONE, &ui),
            Some(Command::Clear)
        );
    }

    #[test]
    fn test_unbound_keys() {
        let ui = ui();
        assert_eq!(ShortcutRegistry::command_for_key("q", Modifiers::NONE, &ui), None);
        assert_eq!(ShortcutRegistry::command_for_key("p", Modifiers::CTRL, &ui), None);
        assert_eq!(ShortcutRegistry::command_for_key("z", Modifiers::NONE, &ui), None);
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutRegistry::command_for_key("Delete", shift, &ui), None);
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutRegistry::command_for_key("e", alt, &ui), None);
    }
}
