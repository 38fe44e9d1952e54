// Chart Renderer: bar and pie charts rasterized to PNG, returned as base64.
// Rasterization is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod bar;
pub mod canvas;
pub mod glyphs;
pub mod pie;

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

pub use bar::bar_chart_png;
pub use pie::pie_chart_png;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("{labels} labels but {values} values")]
    Mismatch { labels: usize, values: usize },

    #[error("chart rendering task failed: {0}")]
    Task(String),
}

pub fn encode_base64(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// Renders the recruiter-mode comparison chart as base64 PNG.
pub async fn render_bar_chart(labels: Vec<String>, scores: Vec<u8>) -> Result<String, ChartError> {
    tokio::task::spawn_blocking(move || bar_chart_png(&labels, &scores).map(|png| encode_base64(&png)))
        .await
        .map_err(|e| ChartError::Task(e.to_string()))?
}

/// Renders one candidate's matched/missing pie as base64 PNG.
pub async fn render_pie_chart(match_percentage: u8) -> Result<String, ChartError> {
    tokio::task::spawn_blocking(move || pie_chart_png(match_percentage).map(|png| encode_base64(&png)))
        .await
        .map_err(|e| ChartError::Task(e.to_string()))?
}
