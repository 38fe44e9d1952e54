//! Text Extractor — pulls raw text out of uploaded PDF bytes.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("PDF contains no extractable text")]
    NoText,

    #[error("PDF extraction task failed: {0}")]
    Task(String),
}

/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, PdfError>;
}

/// `pdf-extract` backed extractor. Parsing is CPU-bound and runs on the
/// blocking pool; a panic inside the PDF library surfaces as `PdfError::Task`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, PdfError> {
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| PdfError::Parse(e.to_string()))
        })
        .await
        .map_err(|e| PdfError::Task(e.to_string()))??;
        require_text(text)
    }
}

/// Whitespace-only output counts as a failed extraction.
pub fn require_text(text: String) -> Result<String, PdfError> {
    if text.trim().is_empty() {
        Err(PdfError::NoText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(matches!(require_text(" \n\t ".to_string()), Err(PdfError::NoText)));
    }

    #[test]
    fn test_require_text_keeps_content() {
        assert_eq!(require_text("Jane Doe\nRust".to_string()).unwrap(), "Jane Doe\nRust");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_an_error() {
        let result = PdfTextExtractor
            .extract(Bytes::from_static(b"definitely not a pdf"))
            .await;
        assert!(result.is_err());
    }
}
