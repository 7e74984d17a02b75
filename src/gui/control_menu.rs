//! Controls help screen

use super::{Label, Menu, Screen, Transition};
use crate::config::DisplayConfig;
use crate::input::InputEvent;
use crate::platform::Point;
use sdl2::keyboard::Keycode;

const HELP_LINES: [&str; 9] = [
    "Esc -      Go back / Cancel run",
    "Enter -      Run algorithm",
    "R -      Random barriers",
    "C -      Clear grid",
    "Left click -      Add start/target/barrier",
    "Right click -      Remove start/target/barrier",
    "Q -      Generate Maze (Recursive Division)",
    "W -      Generate Maze (Randomized DFS)",
    "E -      Generate Maze (Aldous Border, not recommended..)",
];

pub struct ControlMenu {
    menu: Menu,
}

impl ControlMenu {
    pub fn new(display: DisplayConfig) -> Self {
        let mut menu = Menu::new(display);
        let color = menu.style().text_color;

        // One line every tenth of the screen, starting at 5%
        for (i, line) in HELP_LINES.iter().enumerate() {
            let y = menu.row(0.05 + 0.1 * i as f32);
            menu.add_label(Label::new(line, 22, color, (100, y)));
        }

        ControlMenu { menu }
    }
}

impl Screen for ControlMenu {
    fn name(&self) -> &'static str {
        "controls"
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn react(&mut self, event: &InputEvent, _pointer: Point) -> Transition {
        if event.is_key(Keycode::Escape) {
            Transition::Stop
        } else {
            Transition::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Resolution;
    use sdl2::mouse::MouseButton;

    #[test]
    fn test_widgets() {
        let menu = ControlMenu::new(Resolution::Hd.display());
        assert_eq!(menu.menu().labels().len(), 9);
        assert!(menu.menu().buttons().is_empty());
        assert_eq!(menu.menu().labels()[0].origin(), (100, 36));
    }

    #[test]
    fn test_escape_stops() {
        let mut menu = ControlMenu::new(Resolution::Hd.display());
        assert!(menu.is_running());
        let transition = menu.react(&InputEvent::KeyDown(Keycode::Escape), (0, 0));
        assert_eq!(transition, Transition::Stop);
    }

    #[test]
    fn test_other_input_ignored() {
        let mut menu = ControlMenu::new(Resolution::Hd.display());
        let click = InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 100,
            y: 36,
        };
        assert_eq!(menu.react(&click, (100, 36)), Transition::None);
        assert_eq!(menu.react(&InputEvent::KeyDown(Keycode::Q), (0, 0)), Transition::None);
    }
}
