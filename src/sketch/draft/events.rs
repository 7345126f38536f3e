//! Input events consumed by the draft machine.

use bevy::prelude::*;

/// A discrete input event.
///
/// Only the first five variants drive transitions; `OtherKey` exists so that
/// every key press can be forwarded without the caller filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    /// Pointer click at a canvas position
    Click(Vec2),
    /// Pointer moved to a canvas position
    Move(Vec2),
    Escape,
    Enter,
    Backspace,
    OtherKey(String),
}

impl DraftEvent {
    /// Map a key name as reported by a UI toolkit to an event
    #[allow(dead_code)]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => DraftEvent::Escape,
            "Enter" | "Return" => DraftEvent::Enter,
            "Backspace" => DraftEvent::Backspace,
            other => DraftEvent::OtherKey(other.to_string()),
        }
    }

    /// Map a Bevy key code to an event
    pub fn from_key_code(key: KeyCode) -> Self {
        match key {
            KeyCode::Escape => DraftEvent::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => DraftEvent::Enter,
            KeyCode::Backspace => DraftEvent::Backspace,
            other => DraftEvent::OtherKey(format!("{other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_map_to_control_events() {
        assert_eq!(DraftEvent::from_key_name("Escape"), DraftEvent::Escape);
        assert_eq!(DraftEvent::from_key_name("Esc"), DraftEvent::Escape);
        assert_eq!(DraftEvent::from_key_name("Enter"), DraftEvent::Enter);
        assert_eq!(DraftEvent::from_key_name("Return"), DraftEvent::Enter);
        assert_eq!(DraftEvent::from_key_name("Backspace"), DraftEvent::Backspace);
    }

    #[test]
    fn test_unknown_key_name_is_other_key() {
        assert_eq!(
            DraftEvent::from_key_name("Tab"),
            DraftEvent::OtherKey("Tab".to_string())
        );
        // Key names are case sensitive
        assert_eq!(
            DraftEvent::from_key_name("enter"),
            DraftEvent::OtherKey("enter".to_string())
        );
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(DraftEvent::from_key_code(KeyCode::NumpadEnter), DraftEvent::Enter);
        assert_eq!(DraftEvent::from_key_code(KeyCode::Backspace), DraftEvent::Backspace);
        assert!(matches!(
            DraftEvent::from_key_code(KeyCode::KeyA),
            DraftEvent::OtherKey(_)
        ));
    }
}
