//! Static text label

use crate::platform::{Platform, Point};
use crate::text::{scale_for_size, text_size};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// A piece of text at a fixed screen position
///
/// The placement is computed once per [`Label::set`] from the anchor, either
/// as the text's top-left corner or as its center.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    scale: u32,
    color: Color,
    anchor: Point,
    centered: bool,
    origin: Point,
    size: (u32, u32),
}

impl Label {
    /// Creates a label whose top-left corner sits at `anchor`
    pub fn new(text: &str, font_size: u32, color: Color, anchor: Point) -> Self {
        Self::build(text, font_size, color, anchor, false)
    }

    /// Creates a label centered on `anchor`
    #[allow(dead_code)]
    pub fn centered(text: &str, font_size: u32, color: Color, anchor: Point) -> Self {
        Self::build(text, font_size, color, anchor, true)
    }

    fn build(text: &str, font_size: u32, color: Color, anchor: Point, centered: bool) -> Self {
        let mut label = Label {
            text: String::new(),
            scale: scale_for_size(font_size),
            color,
            anchor,
            centered,
            origin: anchor,
            size: (0, 0),
        };
        label.set(text);
        label
    }

    /// Replaces the text and recomputes its placement
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.size = text_size(&self.text, self.scale);
        self.origin = if self.centered {
            (
                self.anchor.0 - (self.size.0 / 2) as i32,
                self.anchor.1 - (self.size.1 / 2) as i32,
            )
        } else {
            self.anchor
        };
    }

    #[allow(dead_code)] // Read back by tests and dynamic-text callers
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner of the rendered text
    #[allow(dead_code)]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Rendered text extents in pixels
    #[allow(dead_code)]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Placement rectangle, `None` for empty text
    #[allow(dead_code)]
    pub fn rect(&self) -> Option<Rect> {
        if self.size.0 == 0 {
            return None;
        }
        Some(Rect::new(self.origin.0, self.origin.1, self.size.0, self.size.1))
    }

    pub fn render(&self, platform: &mut dyn Platform) -> Result<(), String> {
        if self.text.is_empty() {
            return Ok(());
        }
        platform.draw_text(&self.text, self.origin.0, self.origin.1, self.color, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::scripted::ScriptedPlatform;

    const WHITE: Color = Color::RGB(255, 255, 255);

    #[test]
    fn test_top_left_anchor() {
        let label = Label::new("Resolution:", 22, WHITE, (100, 36));
        assert_eq!(label.origin(), (100, 36));
        assert_eq!(label.size(), text_size("Resolution:", 2));
    }

    #[test]
    fn test_centered_anchor() {
        // "AB" at scale 2 is 22x14
        let label = Label::centered("AB", 20, WHITE, (100, 100));
        assert_eq!(label.size(), (22, 14));
        assert_eq!(label.origin(), (89, 93));
    }

    #[test]
    fn test_set_recomputes_placement() {
        let mut label = Label::centered("A", 20, WHITE, (100, 100));
        let before = label.origin();

        label.set("A LONGER TEXT");
        assert_eq!(label.text(), "A LONGER TEXT");
        assert!(label.origin().0 < before.0);
        assert_eq!(label.origin().1, before.1);
    }

    #[test]
    fn test_empty_text() {
        let mut label = Label::new("Title", 30, WHITE, (10, 10));
        label.set("");
        assert_eq!(label.size(), (0, 0));
        assert_eq!(label.rect(), None);

        let mut platform = ScriptedPlatform::new();
        label.render(&mut platform).expect("render");
        assert!(platform.frame_text.is_empty());
    }

    #[test]
    fn test_render_draws_text() {
        let label = Label::new("Controls", 22, WHITE, (0, 0));
        let mut platform = ScriptedPlatform::new();
        label.render(&mut platform).expect("render");
        assert_eq!(platform.frame_text, vec!["Controls".to_string()]);
    }
}
