//! Screen-Space GUI System
//!
//! Widgets and screens of the visualizer's menus. Everything renders at fixed
//! screen positions through the [`Platform`](crate::platform::Platform)
//! surface using procedural SDL2 primitives.
//!
//! # Architecture
//!
//! - [`Label`] and [`Button`] are the widgets.
//! - [`Menu`] holds a screen's widgets, running flag and selected action.
//! - [`Screen`] is implemented by each concrete screen and turns input into
//!   a [`Transition`], which the navigator applies to its screen stack.
//!
//! # Available Screens
//!
//! - [`MainMenu`] - navigation and algorithm launch buttons
//! - [`ControlMenu`] - key bindings help
//! - [`SettingsMenu`] - display resolution choice

pub mod button;
pub mod control_menu;
pub mod label;
pub mod main_menu;
pub mod menu;
pub mod screen;
pub mod settings_menu;

pub use button::Button;
pub use control_menu::ControlMenu;
pub use label::Label;
pub use main_menu::MainMenu;
pub use menu::Menu;
pub use screen::{Screen, ScreenRequest, Transition};
pub use settings_menu::SettingsMenu;
