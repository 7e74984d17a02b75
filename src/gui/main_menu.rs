//! Main menu: navigation to the other screens and algorithm launch buttons

use super::{Button, Label, Menu, Screen, ScreenRequest, Transition};
use crate::config::DisplayConfig;
use crate::input::InputEvent;
use crate::platform::Point;
use crate::visualizer::Algorithm;
use sdl2::keyboard::Keycode;

pub const CONTROLS: &str = "Controls";
pub const SETTINGS: &str = "Settings";

const BUTTON_WIDTH: u32 = 300;
const BUTTON_HEIGHT: u32 = 50;
const BUTTON_FONT_SIZE: u32 = 25;

/// Left edges of the two launch button columns
const LAUNCH_COLUMNS: [i32; 2] = [50, 400];

/// Rows of the launch buttons as fractions of the display height
const LAUNCH_ROWS: [f32; 3] = [0.7, 0.8, 0.9];

pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new(display: DisplayConfig) -> Self {
        let mut menu = Menu::new(display);
        let style = menu.style().clone();

        for (caption, fraction) in [(CONTROLS, 0.05), (SETTINGS, 0.15)] {
            let button = Button::new(50, menu.row(fraction), BUTTON_WIDTH, BUTTON_HEIGHT, style.navigation_color)
                .with_caption(caption, BUTTON_FONT_SIZE);
            menu.add_button(button);
        }

        // Three rows per column, filled column by column
        for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            let x = LAUNCH_COLUMNS[i / LAUNCH_ROWS.len()];
            let y = menu.row(LAUNCH_ROWS[i % LAUNCH_ROWS.len()]);
            let button = Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, style.launch_color)
                .with_caption(algorithm.caption(), BUTTON_FONT_SIZE);
            menu.add_button(button);
        }

        let title_x = (display.width / 3) as i32;
        let title_y = (display.height / 3) as i32;
        menu.add_label(Label::new("Path Finding Visualizer", 50, style.text_color, (title_x, title_y)));
        menu.add_label(Label::new("By Asaf Brandwain", 30, style.text_color, (title_x, title_y + 60)));

        MainMenu { menu }
    }

    /// Grid columns handed to launched visualizers
    #[cfg(test)]
    pub fn columns(&self) -> u32 {
        self.menu.display().columns
    }
}

impl Screen for MainMenu {
    fn name(&self) -> &'static str {
        "main menu"
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn react(&mut self, event: &InputEvent, pointer: Point) -> Transition {
        // Unlike the other screens, escape here leaves the application
        if event.is_key(Keycode::Escape) {
            return Transition::Quit;
        }

        if !event.is_left_click() {
            return Transition::None;
        }

        let Some(action) = self.menu.select_action(pointer) else {
            return Transition::None;
        };

        match action.as_str() {
            CONTROLS => Transition::Spawn(ScreenRequest::Controls),
            SETTINGS => Transition::Spawn(ScreenRequest::Settings),
            other => match Algorithm::from_caption(other) {
                Some(algorithm) => Transition::Spawn(ScreenRequest::Visualizer(algorithm)),
                None => Transition::None,
            },
        }
    }
}
