// Action definitions

use std::fmt;

/// Represents all bindable actions, in the order they are listed in config files
/// and on the rebinding screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Menu
    Back,
    Accept,

    // Gameplay
    Jump,
}

impl Action {
    /// Every action in declaration order
    pub const ALL: [Action; 7] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Back,
        Action::Accept,
        Action::Jump,
    ];

    /// Name used in config files and hint text
    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
            Action::Back => "Back",
            Action::Accept => "Accept",
            Action::Jump => "Jump",
        }
    }

    /// Look up an action by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Action> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }

    /// Position of this action in [`Action::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Up);
    }

    #[test]
    fn test_all_in_declaration_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
        assert_eq!(Action::ALL.first(), Some(&Action::Up));
        assert_eq!(Action::ALL.last(), Some(&Action::Jump));
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(Action::from_name("up"), Some(Action::Up));
        assert_eq!(Action::from_name("ACCEPT"), Some(Action::Accept));
        assert_eq!(Action::from_name("bAcK"), Some(Action::Back));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Action::from_name("Fly"), None);
        assert_eq!(Action::from_name(""), None);
    }

    #[test]
    fn test_display_matches_name() {
        for action in Action::ALL {
            assert_eq!(action.to_string(), action.name());
            assert_eq!(Action::from_name(&action.to_string()), Some(action));
        }
    }
}
