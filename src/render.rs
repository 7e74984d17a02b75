//! Procedural shape rendering
//!
//! SDL2 has no rounded rectangle primitive without SDL2_gfx, so rounded
//! rectangles are filled one pixel row at a time with a per-row inset that
//! follows a quarter circle in each corner.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Horizontal inset of `row` inside a rounded rectangle of `height` rows.
///
/// Rows at least `radius` away from both the top and bottom edge are not
/// inset. The radius is expected to be already clamped to half the
/// rectangle's smaller side.
pub fn row_inset(radius: u32, height: u32, row: u32) -> u32 {
    if radius == 0 || row >= height {
        return 0;
    }

    let edge_distance = row.min(height - 1 - row);
    if edge_distance >= radius {
        return 0;
    }

    // Sample the circle at the row's vertical center
    let r = radius as f32;
    let dy = r - edge_distance as f32 - 0.5;
    let dx = (r * r - dy * dy).max(0.0).sqrt();
    (r - dx).round() as u32
}

/// Clamps a corner radius so opposite corners never overlap
pub fn clamp_radius(rect: Rect, radius: u32) -> u32 {
    radius.min(rect.width() / 2).min(rect.height() / 2)
}

/// Fills `rect` with `color`, rounding its corners by `radius` pixels
pub fn fill_rounded_rect(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    radius: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let radius = clamp_radius(rect, radius);
    if radius == 0 {
        return canvas.fill_rect(rect);
    }

    for row in 0..rect.height() {
        let inset = row_inset(radius, rect.height(), row);
        let span = rect.width().saturating_sub(inset * 2);
        if span == 0 {
            continue;
        }
        canvas.fill_rect(Rect::new(
            rect.x() + inset as i32,
            rect.y() + row as i32,
            span,
            1,
        ))?;
    }

    Ok(())
}
