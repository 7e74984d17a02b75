use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Input events the screens react to
///
/// Raw SDL2 events are translated into this enum before they reach any
/// screen. This keeps screen logic independent of SDL2's event layout and
/// lets tests script input without an SDL context.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The user closed the window
    Quit,
    KeyDown(Keycode),
    MouseDown { button: MouseButton, x: i32, y: i32 },
    MouseMove { x: i32, y: i32 },
}

impl InputEvent {
    /// Translates an SDL2 event, dropping the kinds no screen uses
    pub fn from_sdl(event: Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => Some(InputEvent::KeyDown(key)),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => Some(InputEvent::MouseDown {
                button: mouse_btn,
                x,
                y,
            }),
            Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove { x, y }),
            _ => None,
        }
    }

    /// True for a key press of `key`
    pub fn is_key(&self, key: Keycode) -> bool {
        matches!(self, InputEvent::KeyDown(k) if *k == key)
    }

    /// True for a press of the left mouse button
    pub fn is_left_click(&self) -> bool {
        matches!(
            self,
            InputEvent::MouseDown {
                button: MouseButton::Left,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_translation() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(InputEvent::from_sdl(event), Some(InputEvent::Quit));
    }

    #[test]
    fn test_key_helpers() {
        let escape = InputEvent::KeyDown(Keycode::Escape);
        assert!(escape.is_key(Keycode::Escape));
        assert!(!escape.is_key(Keycode::Return));
        assert!(!escape.is_left_click());
    }

    #[test]
    fn test_left_click_helper() {
        let left = InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 10,
            y: 20,
        };
        let right = InputEvent::MouseDown {
            button: MouseButton::Right,
            x: 10,
            y: 20,
        };
        assert!(left.is_left_click());
        assert!(!right.is_left_click());
        assert!(!InputEvent::MouseMove { x: 10, y: 20 }.is_left_click());
    }
}
