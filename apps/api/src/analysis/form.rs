//! Buffered view of a multipart upload: files and text fields in arrival order.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    files: Vec<(String, UploadedFile)>,
    fields: Vec<(String, String)>,
}

impl UploadForm {
    /// Reads every part of the body. A file part with no name and no bytes is
    /// what browsers send for an untouched file input, and is dropped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await.map_err(multipart_error)?;
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.push_file(&name, UploadedFile { file_name, data });
                }
                None => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.push_field(&name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn push_file(&mut self, name: &str, file: UploadedFile) {
        self.files.push((name.to_string(), file));
    }

    pub fn push_field(&mut self, name: &str, value: String) {
        self.fields.push((name.to_string(), value));
    }

    /// First file uploaded under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        let index = self.files.iter().position(|(n, _)| n == name)?;
        Some(self.files.remove(index).1)
    }

    /// All files uploaded under any of `names`, in upload order.
    pub fn take_files(&mut self, names: &[&str]) -> Vec<UploadedFile> {
        let (taken, kept) = std::mem::take(&mut self.files)
            .into_iter()
            .partition::<Vec<_>, _>(|(n, _)| names.contains(&n.as_str()));
        self.files = kept;
        taken.into_iter().map(|(_, file)| file).collect()
    }

    /// First non-blank text field named `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, v)| n == name && !v.trim().is_empty())
            .map(|(_, v)| v.as_str())
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the size limit.".to_string())
    } else {
        AppError::BadRequest(format!("Malformed multipart body: {}", e.body_text()))
    }
}
