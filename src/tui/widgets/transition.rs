//! Terminal rendition of an animation [`Transform`].

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::animation::Transform;

/// Layout units per terminal row for `translate_y`.
const UNITS_PER_ROW: f32 = 10.0;

/// Where a block with `transform` lands inside its slot.
///
/// The offset pushes the block down (clipped to the slot) and scaling insets
/// it horizontally around its centre.
#[allow(clippy::cast_sign_loss)]
pub fn transformed_area(area: Rect, transform: Transform) -> Rect {
    let offset = (transform.translate_y.max(0.0) / UNITS_PER_ROW).round() as u16;
    let offset = offset.min(area.height);
    let inset = ((1.0 - transform.scale.clamp(0.0, 1.0)) * f32::from(area.width) / 2.0).round()
        as u16;
    let inset = inset.min(area.width / 2);
    Rect {
        x: area.x + inset,
        y: area.y + offset,
        width: area.width - inset * 2,
        height: area.height - offset,
    }
}

/// Linear blend of `from` toward `toward`; `amount` 0 keeps `from`.
#[allow(clippy::cast_sign_loss)]
pub fn blend(from: Color, toward: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, toward) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                (f32::from(b) - f32::from(a))
                    .mul_add(amount, f32::from(a))
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if amount >= 0.5 => toward,
        _ => from,
    }
}

/// Fade every cell in `area` toward `surface`. `opacity` 1 leaves the area
/// untouched, 0 makes it indistinguishable from the surface.
pub fn fade(buf: &mut Buffer, area: Rect, surface: Color, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    let amount = 1.0 - opacity.clamp(0.0, 1.0);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = blend(cell.fg, surface, amount);
                let bg = blend(cell.bg, surface, amount);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}
