//! Clickable button with hover feedback

use crate::platform::{Platform, Point};
use crate::text::{scale_for_size, text_size};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Outline extends this many pixels past the button on every side
const OUTLINE_MARGIN: i32 = 2;
const OUTLINE_RADIUS: u32 = 15;
const BODY_RADIUS: u32 = 13;

/// Colors shared by every button, independent of its fill color
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub outline_color: Color,

    /// Body color while the pointer is over the button
    pub highlight_color: Color,

    /// Caption color on the button's own fill color
    pub caption_color: Color,

    /// Caption color on the highlight color
    pub hovered_caption_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            outline_color: Color::RGB(0, 0, 0),
            highlight_color: Color::RGB(20, 20, 20),
            caption_color: Color::RGB(0, 0, 0),
            hovered_caption_color: Color::RGB(255, 255, 255),
        }
    }
}

/// A rectangular hit region with a fill color and an optional caption
///
/// Hover state is never stored: it is derived from the pointer position
/// every time it is needed.
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    color: Color,
    caption: Option<String>,
    scale: u32,
    style: ButtonStyle,
}

impl Button {
    pub fn new(x: i32, y: i32, width: u32, height: u32, color: Color) -> Self {
        Button {
            rect: Rect::new(x, y, width, height),
            color,
            caption: None,
            scale: 1,
            style: ButtonStyle::default(),
        }
    }

    /// Sets a centered caption rendered at `font_size`
    pub fn with_caption(mut self, caption: &str, font_size: u32) -> Self {
        self.caption = Some(caption.to_string());
        self.scale = scale_for_size(font_size);
        self
    }

    #[allow(dead_code)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// True iff `pointer` lies inside the button
    ///
    /// Left and top edges are inside, right and bottom edges are outside.
    pub fn is_hovered(&self, pointer: Point) -> bool {
        self.rect.contains_point(pointer)
    }

    /// Outline rectangle drawn behind the body
    pub fn outline(&self) -> Rect {
        Rect::new(
            self.rect.x() - OUTLINE_MARGIN,
            self.rect.y() - OUTLINE_MARGIN,
            self.rect.width() + 2 * OUTLINE_MARGIN as u32,
            self.rect.height() + 2 * OUTLINE_MARGIN as u32,
        )
    }

    /// Draws outline, body and caption for the current pointer position
    pub fn render(&self, platform: &mut dyn Platform, pointer: Point) -> Result<(), String> {
        let hovered = self.is_hovered(pointer);

        platform.fill_rounded_rect(self.outline(), OUTLINE_RADIUS, self.style.outline_color)?;

        let body_color = if hovered {
            self.style.highlight_color
        } else {
            self.color
        };
        platform.fill_rounded_rect(self.rect, BODY_RADIUS, body_color)?;

        if let Some(caption) = &self.caption {
            let caption_color = if hovered {
                self.style.hovered_caption_color
            } else {
                self.style.caption_color
            };
            let (width, height) = text_size(caption, self.scale);
            let center = self.rect.center();
            platform.draw_text(
                caption,
                center.x() - (width / 2) as i32,
                center.y() - (height / 2) as i32,
                caption_color,
                self.scale,
            )?;
        }

        Ok(())
    }
}
