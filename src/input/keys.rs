// Keyboard key names used in config files and hint text

use winit::keyboard::KeyCode;

/// Every key winit reports and its config-file name.
///
/// Common keys follow the classic desktop layout naming (`Up`, `Enter`, `D1`, `OemComma`)
/// so that hand-written config files stay short; the rest use their winit variant
/// name. The winit variant name (`ArrowUp`, `KeyW`, ...) is also accepted when parsing.
const KEY_TABLE: &[(KeyCode, &str)] = &[
    // Letters
    (KeyCode::KeyA, "A"),
    (KeyCode::KeyB, "B"),
    (KeyCode::KeyC, "C"),
    (KeyCode::KeyD, "D"),
    (KeyCode::KeyE, "E"),
    (KeyCode::KeyF, "F"),
    (KeyCode::KeyG, "G"),
    (KeyCode::KeyH, "H"),
    (KeyCode::KeyI, "I"),
    (KeyCode::KeyJ, "J"),
    (KeyCode::KeyK, "K"),
    (KeyCode::KeyL, "L"),
    (KeyCode::KeyM, "M"),
    (KeyCode::KeyN, "N"),
    (KeyCode::KeyO, "O"),
    (KeyCode::KeyP, "P"),
    (KeyCode::KeyQ, "Q"),
    (KeyCode::KeyR, "R"),
    (KeyCode::KeyS, "S"),
    (KeyCode::KeyT, "T"),
    (KeyCode::KeyU, "U"),
    (KeyCode::KeyV, "V"),
    (KeyCode::KeyW, "W"),
    (KeyCode::KeyX, "X"),
    (KeyCode::KeyY, "Y"),
    (KeyCode::KeyZ, "Z"),
    // Digit row
    (KeyCode::Digit0, "D0"),
    (KeyCode::Digit1, "D1"),
    (KeyCode::Digit2, "D2"),
    (KeyCode::Digit3, "D3"),
    (KeyCode::Digit4, "D4"),
    (KeyCode::Digit5, "D5"),
    (KeyCode::Digit6, "D6"),
    (KeyCode::Digit7, "D7"),
    (KeyCode::Digit8, "D8"),
    (KeyCode::Digit9, "D9"),
    // Arrows
    (KeyCode::ArrowUp, "Up"),
    (KeyCode::ArrowDown, "Down"),
    (KeyCode::ArrowLeft, "Left"),
    (KeyCode::ArrowRight, "Right"),
    // Control keys
    (KeyCode::Escape, "Escape"),
    (KeyCode::Enter, "Enter"),
    (KeyCode::Space, "Space"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::Backspace, "Backspace"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::Insert, "Insert"),
    (KeyCode::Home, "Home"),
    (KeyCode::End, "End"),
    (KeyCode::PageUp, "PageUp"),
    (KeyCode::PageDown, "PageDown"),
    (KeyCode::CapsLock, "CapsLock"),
    (KeyCode::NumLock, "NumLock"),
    (KeyCode::ScrollLock, "Scroll"),
    (KeyCode::PrintScreen, "PrintScreen"),
    (KeyCode::Pause, "Pause"),
    // Modifiers
    (KeyCode::ShiftLeft, "LeftShift"),
    (KeyCode::ShiftRight, "RightShift"),
    (KeyCode::ControlLeft, "LeftControl"),
    (KeyCode::ControlRight, "RightControl"),
    (KeyCode::AltLeft, "LeftAlt"),
    (KeyCode::AltRight, "RightAlt"),
    (KeyCode::SuperLeft, "LeftWindows"),
    (KeyCode::SuperRight, "RightWindows"),
    // Punctuation
    (KeyCode::Comma, "OemComma"),
    (KeyCode::Period, "OemPeriod"),
    (KeyCode::Minus, "OemMinus"),
    (KeyCode::Equal, "OemPlus"),
    (KeyCode::Slash, "OemQuestion"),
    (KeyCode::Semicolon, "OemSemicolon"),
    (KeyCode::Quote, "OemQuotes"),
    (KeyCode::BracketLeft, "OemOpenBrackets"),
    (KeyCode::BracketRight, "OemCloseBrackets"),
    (KeyCode::Backslash, "OemPipe"),
    (KeyCode::Backquote, "OemTilde"),
    // Function keys
    (KeyCode::F1, "F1"),
    (KeyCode::F2, "F2"),
    (KeyCode::F3, "F3"),
    (KeyCode::F4, "F4"),
    (KeyCode::F5, "F5"),
    (KeyCode::F6, "F6"),
    (KeyCode::F7, "F7"),
    (KeyCode::F8, "F8"),
    (KeyCode::F9, "F9"),
    (KeyCode::F10, "F10"),
    (KeyCode::F11, "F11"),
    (KeyCode::F12, "F12"),
    (KeyCode::F13, "F13"),
    (KeyCode::F14, "F14"),
    (KeyCode::F15, "F15"),
    (KeyCode::F16, "F16"),
    (KeyCode::F17, "F17"),
    (KeyCode::F18, "F18"),
    (KeyCode::F19, "F19"),
    (KeyCode::F20, "F20"),
    (KeyCode::F21, "F21"),
    (KeyCode::F22, "F22"),
    (KeyCode::F23, "F23"),
    (KeyCode::F24, "F24"),
    (KeyCode::F25, "F25"),
    (KeyCode::F26, "F26"),
    (KeyCode::F27, "F27"),
    (KeyCode::F28, "F28"),
    (KeyCode::F29, "F29"),
    (KeyCode::F30, "F30"),
    (KeyCode::F31, "F31"),
    (KeyCode::F32, "F32"),
    (KeyCode::F33, "F33"),
    (KeyCode::F34, "F34"),
    (KeyCode::F35, "F35"),
    // Numpad
    (KeyCode::Numpad0, "NumPad0"),
    (KeyCode::Numpad1, "NumPad1"),
    (KeyCode::Numpad2, "NumPad2"),
    (KeyCode::Numpad3, "NumPad3"),
    (KeyCode::Numpad4, "NumPad4"),
    (KeyCode::Numpad5, "NumPad5"),
    (KeyCode::Numpad6, "NumPad6"),
    (KeyCode::Numpad7, "NumPad7"),
    (KeyCode::Numpad8, "NumPad8"),
    (KeyCode::Numpad9, "NumPad9"),
    (KeyCode::NumpadAdd, "Add"),
    (KeyCode::NumpadSubtract, "Subtract"),
    (KeyCode::NumpadMultiply, "Multiply"),
    (KeyCode::NumpadDivide, "Divide"),
    (KeyCode::NumpadDecimal, "Decimal"),
    (KeyCode::NumpadEnter, "NumPadEnter"),
    (KeyCode::NumpadBackspace, "NumpadBackspace"),
    (KeyCode::NumpadClear, "NumpadClear"),
    (KeyCode::NumpadClearEntry, "NumpadClearEntry"),
    (KeyCode::NumpadComma, "NumpadComma"),
    (KeyCode::NumpadEqual, "NumpadEqual"),
    (KeyCode::NumpadHash, "NumpadHash"),
    (KeyCode::NumpadMemoryAdd, "NumpadMemoryAdd"),
    (KeyCode::NumpadMemoryClear, "NumpadMemoryClear"),
    (KeyCode::NumpadMemoryRecall, "NumpadMemoryRecall"),
    (KeyCode::NumpadMemoryStore, "NumpadMemoryStore"),
    (KeyCode::NumpadMemorySubtract, "NumpadMemorySubtract"),
    (KeyCode::NumpadParenLeft, "NumpadParenLeft"),
    (KeyCode::NumpadParenRight, "NumpadParenRight"),
    (KeyCode::NumpadStar, "NumpadStar"),
    // International layouts
    (KeyCode::IntlBackslash, "IntlBackslash"),
    (KeyCode::IntlRo, "IntlRo"),
    (KeyCode::IntlYen, "IntlYen"),
    (KeyCode::Convert, "Convert"),
    (KeyCode::NonConvert, "NonConvert"),
    (KeyCode::KanaMode, "KanaMode"),
    (KeyCode::Hiragana, "Hiragana"),
    (KeyCode::Katakana, "Katakana"),
    (KeyCode::Lang1, "Lang1"),
    (KeyCode::Lang2, "Lang2"),
    (KeyCode::Lang3, "Lang3"),
    (KeyCode::Lang4, "Lang4"),
    (KeyCode::Lang5, "Lang5"),
    // System
    (KeyCode::ContextMenu, "ContextMenu"),
    (KeyCode::Help, "Help"),
    (KeyCode::Fn, "Fn"),
    (KeyCode::FnLock, "FnLock"),
    (KeyCode::Meta, "Meta"),
    (KeyCode::Hyper, "Hyper"),
    (KeyCode::Turbo, "Turbo"),
    (KeyCode::Power, "Power"),
    (KeyCode::Sleep, "Sleep"),
    (KeyCode::WakeUp, "WakeUp"),
    (KeyCode::Eject, "Eject"),
    // Browser and media
    (KeyCode::BrowserBack, "BrowserBack"),
    (KeyCode::BrowserFavorites, "BrowserFavorites"),
    (KeyCode::BrowserForward, "BrowserForward"),
    (KeyCode::BrowserHome, "BrowserHome"),
    (KeyCode::BrowserRefresh, "BrowserRefresh"),
    (KeyCode::BrowserSearch, "BrowserSearch"),
    (KeyCode::BrowserStop, "BrowserStop"),
    (KeyCode::LaunchApp1, "LaunchApp1"),
    (KeyCode::LaunchApp2, "LaunchApp2"),
    (KeyCode::LaunchMail, "LaunchMail"),
    (KeyCode::MediaPlayPause, "MediaPlayPause"),
    (KeyCode::MediaSelect, "MediaSelect"),
    (KeyCode::MediaStop, "MediaStop"),
    (KeyCode::MediaTrackNext, "MediaTrackNext"),
    (KeyCode::MediaTrackPrevious, "MediaTrackPrevious"),
    (KeyCode::AudioVolumeDown, "AudioVolumeDown"),
    (KeyCode::AudioVolumeMute, "AudioVolumeMute"),
    (KeyCode::AudioVolumeUp, "AudioVolumeUp"),
    // Editing
    (KeyCode::Abort, "Abort"),
    (KeyCode::Resume, "Resume"),
    (KeyCode::Suspend, "Suspend"),
    (KeyCode::Again, "Again"),
    (KeyCode::Copy, "Copy"),
    (KeyCode::Cut, "Cut"),
    (KeyCode::Find, "Find"),
    (KeyCode::Open, "Open"),
    (KeyCode::Paste, "Paste"),
    (KeyCode::Props, "Props"),
    (KeyCode::Select, "Select"),
    (KeyCode::Undo, "Undo"),
];

/// Config-file name of a key, if it is nameable
pub fn key_name(code: KeyCode) -> Option<&'static str> {
    KEY_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

/// Resolve a key from its config-file name or winit variant name, ignoring ASCII case
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    if name.is_empty() {
        return None;
    }

    KEY_TABLE
        .iter()
        .find(|(code, table_name)| {
            table_name.eq_ignore_ascii_case(name) || format!("{code:?}").eq_ignore_ascii_case(name)
        })
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_name_lookup() {
        assert_eq!(key_name(KeyCode::KeyW), Some("W"));
        assert_eq!(key_name(KeyCode::ArrowUp), Some("Up"));
        assert_eq!(key_name(KeyCode::Escape), Some("Escape"));
        assert_eq!(key_name(KeyCode::Enter), Some("Enter"));
    }

    #[test]
    fn test_uncommon_keys_are_named() {
        assert_eq!(key_name(KeyCode::F13), Some("F13"));
        assert_eq!(key_name(KeyCode::F35), Some("F35"));
        assert_eq!(key_name(KeyCode::NumpadEqual), Some("NumpadEqual"));
        assert_eq!(key_name(KeyCode::IntlBackslash), Some("IntlBackslash"));
        assert_eq!(key_name(KeyCode::ContextMenu), Some("ContextMenu"));
        assert_eq!(key_name(KeyCode::MediaPlayPause), Some("MediaPlayPause"));
    }

    #[test]
    fn test_key_from_name_ignores_case() {
        assert_eq!(key_from_name("escape"), Some(KeyCode::Escape));
        assert_eq!(key_from_name("ENTER"), Some(KeyCode::Enter));
        assert_eq!(key_from_name("w"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("up"), Some(KeyCode::ArrowUp));
    }

    #[test]
    fn test_key_from_winit_variant_name() {
        assert_eq!(key_from_name("KeyW"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("ARROWLEFT"), Some(KeyCode::ArrowLeft));
        assert_eq!(key_from_name("shiftleft"), Some(KeyCode::ShiftLeft));
    }

    #[test]
    fn test_key_from_unknown_name() {
        assert_eq!(key_from_name("Foo"), None);
        assert_eq!(key_from_name(""), None);
    }

    #[test]
    fn test_no_duplicate_names_or_codes() {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for (code, name) in KEY_TABLE {
            assert!(names.insert(name.to_ascii_uppercase()), "Duplicate key name {name}");
            assert!(codes.insert(*code), "Duplicate key code {code:?}");
        }
    }

    #[test]
    fn test_names_resolve_back_to_codes() {
        for (code, name) in KEY_TABLE {
            assert_eq!(key_from_name(name), Some(*code));
            assert_eq!(key_from_name(&format!("{code:?}")), Some(*code));
        }
    }
}
