// Input handling module for keyboard commands and key parsing
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents a parsed key spec from the manifest keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKey {
    /// Simple single character key
    Simple(char),
    /// Control + character combination
    Ctrl(char),
}

impl ActionKey {
    /// Parse a key string from manifest configuration
    ///
    /// Supports formats:
    /// - Single char: "l", "s", "?"
    /// - Ctrl combination: "ctrl+l", "Ctrl+L", "CTRL+L" (case insensitive)
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() {
            return Err("Key cannot be empty".to_string());
        }

        // Check for ctrl+ prefix (case insensitive)
        if let Some(stripped) = s.to_lowercase().strip_prefix("ctrl+") {
            if stripped.chars().count() != 1 {
                return Err(format!(
                    "Invalid Ctrl combination '{}': expected single character after 'ctrl+'",
                    s
                ));
            }
            let ch = stripped.chars().next().unwrap();
            if !ch.is_ascii_alphanumeric() {
                return Err(format!(
                    "Invalid Ctrl combination '{}': character must be alphanumeric",
                    s
                ));
            }
            Ok(ActionKey::Ctrl(ch.to_ascii_lowercase()))
        } else if s.chars().count() == 1 {
            let ch = s.chars().next().unwrap();
            Ok(ActionKey::Simple(ch))
        } else {
            Err(format!(
                "Invalid key format '{}': expected single character or 'ctrl+X'",
                s
            ))
        }
    }

    /// Check if a KeyEvent matches this ActionKey
    pub fn matches(&self, key: &KeyEvent) -> bool {
        match self {
            ActionKey::Simple(ch) => {
                matches!(key.code, KeyCode::Char(c) if c == *ch)
                    && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
            }
            ActionKey::Ctrl(ch) => {
                matches!(key.code, KeyCode::Char(c) if c.to_ascii_lowercase() == *ch)
                    && key.modifiers.contains(KeyModifiers::CONTROL)
            }
        }
    }

    /// Format the key for display in the status bar and help overlay
    pub fn display(&self) -> String {
        match self {
            ActionKey::Simple(ch) => ch.to_string(),
            ActionKey::Ctrl(ch) => format!("Ctrl+{}", ch.to_ascii_uppercase()),
        }
    }
}

/// A chrome-level user intent, bindable through the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Quit,
    Back,
    Select,
    NextImage,
    PrevImage,
    MoveDown,
    MoveUp,
    MoveTop,
    MoveBottom,
    Search,
    Slideshow,
    Help,
}

impl NavCommand {
    /// All bindable command names, as they appear in the manifest
    pub fn names() -> &'static [&'static str] {
        &[
            "quit", "back", "select", "next", "prev", "down", "up", "top", "bottom", "search",
            "slideshow", "help",
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(NavCommand::Quit),
            "back" => Some(NavCommand::Back),
            "select" => Some(NavCommand::Select),
            "next" => Some(NavCommand::NextImage),
            "prev" => Some(NavCommand::PrevImage),
            "down" => Some(NavCommand::MoveDown),
            "up" => Some(NavCommand::MoveUp),
            "top" => Some(NavCommand::MoveTop),
            "bottom" => Some(NavCommand::MoveBottom),
            "search" => Some(NavCommand::Search),
            "slideshow" => Some(NavCommand::Slideshow),
            "help" => Some(NavCommand::Help),
            _ => None,
        }
    }
}

/// Character-key bindings for chrome commands.
///
/// Arrow keys, Enter, Escape and Backspace are structural and handled
/// directly by the app; everything here can be rebound from the manifest.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(ActionKey, NavCommand)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: vec![
                (ActionKey::Simple('q'), NavCommand::Quit),
                (ActionKey::Simple('h'), NavCommand::Back),
                (ActionKey::Simple('l'), NavCommand::Select),
                (ActionKey::Simple('n'), NavCommand::NextImage),
                (ActionKey::Simple('p'), NavCommand::PrevImage),
                (ActionKey::Simple('j'), NavCommand::MoveDown),
                (ActionKey::Simple('k'), NavCommand::MoveUp),
                (ActionKey::Simple('g'), NavCommand::MoveTop),
                (ActionKey::Simple('G'), NavCommand::MoveBottom),
                (ActionKey::Simple('/'), NavCommand::Search),
                (ActionKey::Simple('s'), NavCommand::Slideshow),
                (ActionKey::Simple('?'), NavCommand::Help),
            ],
        }
    }
}

impl KeyMap {
    /// Build the default map with per-command overrides from the manifest.
    ///
    /// An override replaces the default key for that command; the validator
    /// has already checked command names and key formats, but malformed
    /// input still comes back as an error rather than a panic.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self, String> {
        let mut map = Self::default();

        for (name, key_spec) in overrides {
            let command = NavCommand::from_name(name)
                .ok_or_else(|| format!("Unknown command: {}", name))?;
            let key = ActionKey::parse(key_spec)?;

            for binding in &mut map.bindings {
                if binding.1 == command {
                    binding.0 = key;
                }
            }
        }

        Ok(map)
    }

    /// Resolve a key event to its bound command, if any
    pub fn command_for(&self, key: &KeyEvent) -> Option<NavCommand> {
        self.bindings
            .iter()
            .find(|(action_key, _)| action_key.matches(key))
            .map(|(_, command)| *command)
    }

    /// The display string for a command's bound key, for help/status text
    pub fn key_for(&self, command: NavCommand) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == command)
            .map(|(key, _)| key.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(ActionKey::parse("l").unwrap(), ActionKey::Simple('l'));
        assert_eq!(ActionKey::parse("?").unwrap(), ActionKey::Simple('?'));
        assert_eq!(ActionKey::parse("1").unwrap(), ActionKey::Simple('1'));
    }

    #[test]
    fn test_parse_ctrl() {
        assert_eq!(ActionKey::parse("ctrl+l").unwrap(), ActionKey::Ctrl('l'));
        assert_eq!(ActionKey::parse("Ctrl+L").unwrap(), ActionKey::Ctrl('l'));
        assert_eq!(ActionKey::parse("CTRL+N").unwrap(), ActionKey::Ctrl('n'));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ActionKey::parse("").is_err());
        assert!(ActionKey::parse("ctrl+").is_err());
        assert!(ActionKey::parse("ctrl+ll").is_err());
        assert!(ActionKey::parse("invalid").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ActionKey::Simple('s').display(), "s");
        assert_eq!(ActionKey::Ctrl('n').display(), "Ctrl+N");
    }

    #[test]
    fn test_matches() {
        let simple_key = ActionKey::Simple('n');
        let ctrl_key = ActionKey::Ctrl('n');

        let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(simple_key.matches(&event));
        assert!(!ctrl_key.matches(&event));

        let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(!simple_key.matches(&event));
        assert!(ctrl_key.matches(&event));
    }

    #[test]
    fn test_shifted_char_matches_simple() {
        // 'G' arrives as Char('G') with SHIFT set; the binding must still fire.
        let key = ActionKey::Simple('G');
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(key.matches(&event));
    }

    #[test]
    fn test_command_names_round_trip() {
        for name in NavCommand::names() {
            assert!(NavCommand::from_name(name).is_some(), "missing: {}", name);
        }
        assert!(NavCommand::from_name("teleport").is_none());
    }

    #[test]
    fn test_default_keymap_lookup() {
        let map = KeyMap::default();

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map.command_for(&event), Some(NavCommand::Quit));

        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map.command_for(&event), None);
    }

    #[test]
    fn test_keymap_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("next".to_string(), "ctrl+n".to_string());

        let map = KeyMap::with_overrides(&overrides).unwrap();

        // Old default no longer bound to next
        let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(map.command_for(&event), None);

        let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(map.command_for(&event), Some(NavCommand::NextImage));
        assert_eq!(map.key_for(NavCommand::NextImage), Some("Ctrl+N".to_string()));
    }

    #[test]
    fn test_keymap_rejects_unknown_command() {
        let mut overrides = HashMap::new();
        overrides.insert("warp".to_string(), "w".to_string());

        assert!(KeyMap::with_overrides(&overrides).is_err());
    }
}
