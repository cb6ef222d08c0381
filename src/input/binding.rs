// Physical controls that can be bound to an action

use super::keys::{key_from_name, key_name};
use std::fmt;
use winit::keyboard::KeyCode;

/// Label shown for an action or slot with nothing bound
pub const EMPTY_LABEL: &str = "<EMPTY>";

/// The mouse buttons a binding can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Side1,
    Side2,
}

impl MouseButton {
    /// Number of tracked mouse buttons
    pub const COUNT: usize = 5;

    /// Order in which simultaneous presses are resolved during rebinding
    pub const PRIORITY: [MouseButton; MouseButton::COUNT] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Side1,
        MouseButton::Side2,
    ];

    /// Slot of this button in a snapshot's button array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Config-file token for this button
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "LeftMouse",
            MouseButton::Middle => "MiddleMouse",
            MouseButton::Right => "RightMouse",
            MouseButton::Side1 => "Side1Mouse",
            MouseButton::Side2 => "Side2Mouse",
        }
    }

    /// Map a winit button onto a tracked button. Back/Forward become the side buttons.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton as W;
        match button {
            W::Left => Some(MouseButton::Left),
            W::Middle => Some(MouseButton::Middle),
            W::Right => Some(MouseButton::Right),
            W::Back => Some(MouseButton::Side1),
            W::Forward => Some(MouseButton::Side2),
            W::Other(_) => None,
        }
    }
}

/// One physical control: a keyboard key, a mouse button, or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
    #[default]
    Unbound,
}

impl Binding {
    /// Create a keyboard binding
    pub fn key(code: KeyCode) -> Self {
        Self::Key(code)
    }

    /// Create a mouse button binding
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// If this binding refers to a physical control
    pub fn is_bound(&self) -> bool {
        !matches!(self, Binding::Unbound)
    }

    /// The bound key, if this is a keyboard binding
    pub fn key_code(&self) -> Option<KeyCode> {
        match self {
            Binding::Key(code) => Some(*code),
            _ => None,
        }
    }

    /// Resolve a config token. Mouse tokens are tried first, then key names.
    /// Anything else yields [`Binding::Unbound`].
    pub fn parse(token: &str) -> Self {
        let mouse = [
            MouseButton::Left,
            MouseButton::Middle,
            MouseButton::Right,
            MouseButton::Side1,
            MouseButton::Side2,
        ]
        .into_iter()
        .find(|button| button.name().eq_ignore_ascii_case(token));

        if let Some(button) = mouse {
            return Binding::Mouse(button);
        }

        key_from_name(token).map_or(Binding::Unbound, Binding::Key)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Key(code) => match key_name(*code) {
                Some(name) => f.write_str(name),
                None => write!(f, "{code:?}"),
            },
            Binding::Mouse(button) => f.write_str(button.name()),
            Binding::Unbound => f.write_str(EMPTY_LABEL),
        }
    }
}

impl From<KeyCode> for Binding {
    fn from(code: KeyCode) -> Self {
        Binding::Key(code)
    }
}

impl From<MouseButton> for Binding {
    fn from(button: MouseButton) -> Self {
        Binding::Mouse(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_keyboard_creation() {
        let binding = Binding::key(KeyCode::KeyA);
        assert_eq!(binding, Binding::Key(KeyCode::KeyA));
        assert!(binding.is_bound());
        assert_eq!(binding.key_code(), Some(KeyCode::KeyA));
    }

    #[test]
    fn test_binding_mouse_creation() {
        let binding = Binding::mouse(MouseButton::Left);
        assert_eq!(binding, Binding::Mouse(MouseButton::Left));
        assert!(binding.is_bound());
        assert_eq!(binding.key_code(), None);
    }

    #[test]
    fn test_unbound_default() {
        let binding = Binding::default();
        assert!(!binding.is_bound());
        assert_eq!(binding.to_string(), EMPTY_LABEL);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Binding::key(KeyCode::KeyW).to_string(), "W");
        assert_eq!(Binding::key(KeyCode::ArrowUp).to_string(), "Up");
        assert_eq!(Binding::mouse(MouseButton::Left).to_string(), "LeftMouse");
        assert_eq!(Binding::mouse(MouseButton::Right).to_string(), "RightMouse");
        assert_eq!(Binding::mouse(MouseButton::Middle).to_string(), "MiddleMouse");
        assert_eq!(Binding::mouse(MouseButton::Side1).to_string(), "Side1Mouse");
        assert_eq!(Binding::mouse(MouseButton::Side2).to_string(), "Side2Mouse");
    }

    #[test]
    fn test_unnamed_key_falls_back_to_variant_name() {
        assert_eq!(Binding::key(KeyCode::F24).to_string(), "F24");
    }

    #[test]
    fn test_parse_mouse_tokens() {
        assert_eq!(Binding::parse("LEFTMOUSE"), Binding::mouse(MouseButton::Left));
        assert_eq!(Binding::parse("middlemouse"), Binding::mouse(MouseButton::Middle));
        assert_eq!(Binding::parse("RightMouse"), Binding::mouse(MouseButton::Right));
        assert_eq!(Binding::parse("SIDE1MOUSE"), Binding::mouse(MouseButton::Side1));
        assert_eq!(Binding::parse("SIDE2MOUSE"), Binding::mouse(MouseButton::Side2));
    }

    #[test]
    fn test_parse_key_tokens() {
        assert_eq!(Binding::parse("W"), Binding::key(KeyCode::KeyW));
        assert_eq!(Binding::parse("ESCAPE"), Binding::key(KeyCode::Escape));
    }

    #[test]
    fn test_parse_unknown_token_is_unbound() {
        assert_eq!(Binding::parse("FOO"), Binding::Unbound);
        assert_eq!(Binding::parse(""), Binding::Unbound);
    }

    #[test]
    fn test_display_parses_back() {
        let bindings = [
            Binding::key(KeyCode::Enter),
            Binding::key(KeyCode::Digit3),
            Binding::mouse(MouseButton::Side2),
        ];
        for binding in bindings {
            assert_eq!(Binding::parse(&binding.to_string()), binding);
        }
    }

    #[test]
    fn test_mouse_priority_order() {
        assert_eq!(
            MouseButton::PRIORITY,
            [
                MouseButton::Left,
                MouseButton::Right,
                MouseButton::Middle,
                MouseButton::Side1,
                MouseButton::Side2,
            ]
        );
    }

    #[test]
    fn test_from_winit_buttons() {
        use winit::event::MouseButton as W;
        assert_eq!(MouseButton::from_winit(W::Left), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_winit(W::Back), Some(MouseButton::Side1));
        assert_eq!(MouseButton::from_winit(W::Forward), Some(MouseButton::Side2));
        assert_eq!(MouseButton::from_winit(W::Other(9)), None);
    }
}
