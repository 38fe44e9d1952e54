use image::Rgba;

use crate::charts::canvas::{rgb, Canvas};
use crate::charts::ChartError;

pub const SIZE: u32 = 600;

pub const MATCHED_COLOR: Rgba<u8> = rgb(0x10B981);
pub const MISSING_COLOR: Rgba<u8> = rgb(0xF43F5E);
const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0x50]);
const TEXT_COLOR: Rgba<u8> = rgb(0xFFFFFF);

const START_ANGLE: f64 = 140.0;
const RADIUS: f64 = 190.0;
/// Offset of the exploded wedge, as a share of the radius.
const EXPLODE: f64 = 0.1;
const SHADOW_OFFSET: f64 = 6.0;

struct Slice {
    label: &'static str,
    share: f64,
    color: Rgba<u8>,
    exploded: bool,
}

/// Two-slice pie of matched vs missing share. The matched slice is pulled
/// out when non-zero, otherwise the missing slice is.
pub fn pie_chart_png(match_percentage: u8) -> Result<Vec<u8>, ChartError> {
    draw(match_percentage).encode_png()
}

fn slices(match_percentage: u8) -> [Slice; 2] {
    let matched = match_percentage.min(100) as f64;
    [
        Slice {
            label: "Matched Skills",
            share: matched,
            color: MATCHED_COLOR,
            exploded: matched > 0.0,
        },
        Slice {
            label: "Missing Skills",
            share: 100.0 - matched,
            color: MISSING_COLOR,
            exploded: matched <= 0.0,
        },
    ]
}

fn draw(match_percentage: u8) -> Canvas {
    let mut canvas = Canvas::new(SIZE, SIZE);
    let centre = SIZE as f64 / 2.0;

    let mut start = START_ANGLE;
    let mut placed = Vec::new();
    for slice in slices(match_percentage) {
        let sweep = slice.share / 100.0 * 360.0;
        if sweep > 0.0 {
            let mid = (start + sweep / 2.0).to_radians();
            let push = if slice.exploded { EXPLODE * RADIUS } else { 0.0 };
            // canvas y grows downwards
            let cx = centre + push * mid.cos();
            let cy = centre - push * mid.sin();
            placed.push((slice, cx, cy, start, sweep, mid));
        }
        start += sweep;
    }

    for (_, cx, cy, start, sweep, _) in &placed {
        canvas.fill_wedge(cx + SHADOW_OFFSET, cy + SHADOW_OFFSET, RADIUS, *start, *sweep, SHADOW_COLOR);
    }
    for (slice, cx, cy, start, sweep, _) in &placed {
        canvas.fill_wedge(*cx, *cy, RADIUS, *start, *sweep, slice.color);
    }
    for (slice, cx, cy, _, _, mid) in &placed {
        let pct = format!("{:.1}%", slice.share);
        let (px, py) = polar(*cx, *cy, RADIUS * 0.6, *mid);
        canvas.draw_text_centered(px, py, &pct, 3, TEXT_COLOR);
        let (lx, ly) = polar(*cx, *cy, RADIUS * 1.2, *mid);
        canvas.draw_text_centered(lx, ly, slice.label, 2, TEXT_COLOR);
    }
    canvas
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (i64, i64) {
    (
        (cx + r * angle.cos()).round() as i64,
        (cy - r * angle.sin()).round() as i64,
    )
}
