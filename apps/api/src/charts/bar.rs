use crate::charts::canvas::{fit_text, rgb, Canvas};
use crate::charts::glyphs::GLYPH_HEIGHT;
use crate::charts::ChartError;
use image::Rgba;

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 600;

const BAR_COLOR: Rgba<u8> = rgb(0x3B82F6);
const AXIS_COLOR: Rgba<u8> = rgb(0x6B7280);
const GRID_COLOR: Rgba<u8> = Rgba([0x6B, 0x72, 0x80, 0x40]);
const TEXT_COLOR: Rgba<u8> = rgb(0x9CA3AF);

const TITLE: &str = "Candidate Match Score Comparison";
const X_LABEL: &str = "Candidates";
const Y_LABEL: &str = "Match Score (%)";

const MARGIN_LEFT: i64 = 90;
const MARGIN_RIGHT: i64 = 30;
const MARGIN_TOP: i64 = 80;
const MARGIN_BOTTOM: i64 = 90;
/// Share of each slot the bar occupies.
const BAR_FILL: f64 = 0.8;

/// Bar chart of match scores, one bar per label, y axis fixed to 0–100.
pub fn bar_chart_png(labels: &[String], scores: &[u8]) -> Result<Vec<u8>, ChartError> {
    if labels.len() != scores.len() {
        return Err(ChartError::Mismatch {
            labels: labels.len(),
            values: scores.len(),
        });
    }
    draw(labels, scores).encode_png()
}

fn draw(labels: &[String], scores: &[u8]) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let plot_x = MARGIN_LEFT;
    let plot_y = MARGIN_TOP;
    let plot_w = WIDTH as i64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT as i64 - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = plot_y + plot_h;

    canvas.draw_text_centered(WIDTH as i64 / 2, 30, TITLE, 3, TEXT_COLOR);
    canvas.draw_text(10, plot_y - 30, Y_LABEL, 2, TEXT_COLOR);
    canvas.draw_text_centered(plot_x + plot_w / 2, HEIGHT as i64 - 20, X_LABEL, 2, TEXT_COLOR);

    for tick in (0..=100).step_by(20) {
        let y = baseline - plot_h * tick / 100;
        canvas.fill_rect(plot_x, y, plot_w, 1, GRID_COLOR);
        canvas.fill_rect(plot_x - 6, y, 6, 1, AXIS_COLOR);
        let label = tick.to_string();
        canvas.draw_text_centered(plot_x - 30, y, &label, 2, TEXT_COLOR);
    }

    if !scores.is_empty() {
        let slot = plot_w as f64 / scores.len() as f64;
        let bar_w = (slot * BAR_FILL).max(1.0);
        let label_width = (slot * 0.95) as u32;
        let label_y = baseline + 12 + (GLYPH_HEIGHT as i64 * 2) / 2;

        for (i, (label, &score)) in labels.iter().zip(scores).enumerate() {
            let score = score.min(100) as i64;
            let slot_x = plot_x as f64 + slot * i as f64;
            let bar_x = (slot_x + (slot - bar_w) / 2.0).round() as i64;
            let bar_h = plot_h * score / 100;
            let centre = (slot_x + slot / 2.0).round() as i64;

            canvas.fill_rect(bar_x, baseline - bar_h, bar_w.round() as i64, bar_h, BAR_COLOR);
            canvas.draw_text_centered(
                centre,
                baseline - bar_h - 14,
                &format!("{score}%"),
                2,
                TEXT_COLOR,
            );
            canvas.draw_text_centered(centre, label_y, &fit_text(label, 2, label_width), 2, TEXT_COLOR);
        }
    }

    // axes over the bars
    canvas.fill_rect(plot_x, plot_y, 2, plot_h + 1, AXIS_COLOR);
    canvas.fill_rect(plot_x, baseline, plot_w, 2, AXIS_COLOR);
    canvas
}
