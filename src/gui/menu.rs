//! Base Menu Component
//!
//! State and rendering shared by every screen: the running flag, the action
//! selected this frame and the screen's labels and buttons.

use super::{Button, Label};
use crate::config::DisplayConfig;
use crate::platform::{Platform, Point};
use sdl2::pixels::Color;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub background_color: Color,

    /// Label text color
    pub text_color: Color,

    /// Fill color of navigation buttons
    pub navigation_color: Color,

    /// Fill color of algorithm launch buttons
    pub launch_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(77, 77, 77),
            text_color: Color::RGB(255, 255, 255),
            navigation_color: Color::RGB(255, 0, 0),
            launch_color: Color::RGB(0, 255, 0),
        }
    }
}

/// Widgets and lifecycle of one screen
///
/// A menu starts running and can only be stopped, never restarted.
pub struct Menu {
    display: DisplayConfig,
    style: MenuStyle,
    running: bool,
    action: Option<String>,
    labels: Vec<Label>,
    buttons: Vec<Button>,
}

impl Menu {
    pub fn new(display: DisplayConfig) -> Self {
        Menu {
            display,
            style: MenuStyle::default(),
            running: true,
            action: None,
            labels: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Vertical position at `fraction` of the display height
    pub fn row(&self, fraction: f32) -> i32 {
        (self.display.height as f32 * fraction) as i32
    }

    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[cfg(test)]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Forgets the action selected during the previous frame
    pub fn begin_frame(&mut self) {
        self.action = None;
    }

    /// Caption of the last button clicked this frame
    #[allow(dead_code)] // Frame state; dispatch uses the value returned by select_action
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Resolves a click at `pointer` to a button caption
    ///
    /// When buttons overlap the last one in insertion order wins. A hit
    /// becomes this frame's action; a miss leaves the action unchanged and
    /// returns `None`.
    pub fn select_action(&mut self, pointer: Point) -> Option<String> {
        let hit = self
            .buttons
            .iter()
            .filter(|button| button.is_hovered(pointer))
            .filter_map(|button| button.caption())
            .last()
            .map(str::to_string);

        if hit.is_some() {
            self.action = hit.clone();
        }
        hit
    }

    /// Draws background, logo, labels and buttons
    pub fn render(&self, platform: &mut dyn Platform, pointer: Point) -> Result<(), String> {
        platform.clear(self.style.background_color)?;
        platform.draw_logo((self.display.width / 2) as i32, (self.display.height / 3) as i32)?;

        for label in &self.labels {
            label.render(platform)?;
        }
        for button in &self.buttons {
            button.render(platform, pointer)?;
        }

        Ok(())
    }
}
