//! Screen contract
//!
//! A screen is one modal UI state. It owns a [`Menu`] with its widgets and
//! maps each input event to a [`Transition`] that the navigator applies.

use super::Menu;
use crate::config::DisplayConfig;
use crate::input::InputEvent;
use crate::platform::Point;
use crate::visualizer::Algorithm;

/// What a screen wants to happen after an input event
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Keep running
    None,
    /// Leave this screen and resume the one below it
    Stop,
    /// End the whole application
    Quit,
    /// Open another screen or visualizer on top of this one
    Spawn(ScreenRequest),
}

/// A screen to open on top of the current one
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenRequest {
    Controls,
    Settings,
    /// A fresh main menu for a new display configuration
    MainMenu(DisplayConfig),
    Visualizer(Algorithm),
}

pub trait Screen {
    /// Name used in log output
    fn name(&self) -> &'static str;

    fn menu(&self) -> &Menu;

    fn menu_mut(&mut self) -> &mut Menu;

    /// Reacts to one input event; unrecognized events return `Transition::None`
    fn react(&mut self, event: &InputEvent, pointer: Point) -> Transition;

    fn is_running(&self) -> bool {
        self.menu().is_running()
    }

    fn display(&self) -> DisplayConfig {
        self.menu().display()
    }
}
