//! Drawing and input surface
//!
//! Screens never touch SDL2 directly. They draw through the [`Platform`]
//! trait and receive input as [`InputEvent`]s, so the navigation logic can
//! be driven by the SDL2 window in the binary or by a scripted platform in
//! tests.

use crate::input::InputEvent;
use crate::render::fill_rounded_rect;
use crate::text::draw_bitmap_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::{Window, WindowPos};
use sdl2::EventPump;

/// Pointer position in window pixels
pub type Point = (i32, i32);

/// The display, input queue and drawing primitives of the process
pub trait Platform {
    /// Drains all pending input events
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Live pointer position
    fn pointer(&self) -> Point;

    /// Resizes the window to `width` x `height` pixels
    fn set_display_mode(&mut self, width: u32, height: u32) -> Result<(), String>;

    /// Fills the whole frame with `color`
    fn clear(&mut self, color: Color) -> Result<(), String>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String>;

    /// Draws bitmap text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32)
        -> Result<(), String>;

    /// Blits the background logo with its top-left corner at `(x, y)`
    ///
    /// Does nothing when no logo was loaded.
    fn draw_logo(&mut self, x: i32, y: i32) -> Result<(), String>;

    /// Shows the frame drawn since the last present
    fn present(&mut self);
}

/// SDL2 implementation of [`Platform`]
pub struct SdlPlatform<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    logo: Option<Texture<'a>>,
}

impl<'a> SdlPlatform<'a> {
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump, logo: Option<Texture<'a>>) -> Self {
        SdlPlatform {
            canvas,
            event_pump,
            logo,
        }
    }
}

impl Platform for SdlPlatform<'_> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(InputEvent::from_sdl)
            .collect()
    }

    fn pointer(&self) -> Point {
        let state = self.event_pump.mouse_state();
        (state.x(), state.y())
    }

    fn set_display_mode(&mut self, width: u32, height: u32) -> Result<(), String> {
        let window = self.canvas.window_mut();
        window.set_size(width, height).map_err(|e| e.to_string())?;
        window.set_position(WindowPos::Centered, WindowPos::Centered);
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String> {
        fill_rounded_rect(&mut self.canvas, rect, radius, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        draw_bitmap_text(&mut self.canvas, text, x, y, color, scale)
    }

    fn draw_logo(&mut self, x: i32, y: i32) -> Result<(), String> {
        if let Some(logo) = &self.logo {
            let query = logo.query();
            self.canvas
                .copy(logo, None, Rect::new(x, y, query.width, query.height))?;
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
