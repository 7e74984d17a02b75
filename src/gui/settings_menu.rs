//! Settings screen: display resolution choice

use super::{Button, Label, Menu, Screen, ScreenRequest, Transition};
use crate::config::{DisplayConfig, Resolution};
use crate::input::InputEvent;
use crate::platform::Point;
use sdl2::keyboard::Keycode;

pub struct SettingsMenu {
    menu: Menu,
}

impl SettingsMenu {
    pub fn new(display: DisplayConfig) -> Self {
        let mut menu = Menu::new(display);
        let style = menu.style().clone();

        let y = menu.row(0.05);
        menu.add_label(Label::new("Resolution:", 22, style.text_color, (100, y)));

        for (i, resolution) in Resolution::ALL.into_iter().enumerate() {
            let y = menu.row(0.15 + 0.1 * i as f32);
            let button = Button::new(50, y, 300, 50, style.navigation_color)
                .with_caption(resolution.caption(), 25);
            menu.add_button(button);
        }

        SettingsMenu { menu }
    }
}

impl Screen for SettingsMenu {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn react(&mut self, event: &InputEvent, pointer: Point) -> Transition {
        if event.is_key(Keycode::Escape) {
            return Transition::Stop;
        }

        if !event.is_left_click() {
            return Transition::None;
        }

        // A new main menu opens on top of this screen instead of replacing
        // the one below it
        match self
            .menu
            .select_action(pointer)
            .and_then(|caption| Resolution::from_caption(&caption))
        {
            Some(resolution) => Transition::Spawn(ScreenRequest::MainMenu(resolution.display())),
            None => Transition::None,
        }
    }
}
