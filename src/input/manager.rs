//! Input manager for handling different file types

use crate::config::{ExtractionConfig, UnknownFormatPolicy};
use crate::error::{Result, WellnessError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::path::Path;
use tokio::fs;

/// Routes uploaded bytes to the extractor for their declared format.
///
/// Holds no per-document state, so one manager can serve any number of
/// documents.
#[derive(Debug, Clone)]
pub struct InputManager {
    max_pdf_pages: usize,
    unknown_format: UnknownFormatPolicy,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_pdf_pages: config.max_pdf_pages,
            unknown_format: config.unknown_format,
        }
    }

    pub fn with_max_pdf_pages(mut self, max_pages: usize) -> Self {
        self.max_pdf_pages = max_pages;
        self
    }

    pub fn with_unknown_format(mut self, policy: UnknownFormatPolicy) -> Self {
        self.unknown_format = policy;
        self
    }

    /// Extract normalized text, degrading to an empty string on any failure.
    pub fn extract(&self, raw: &[u8], filename: &str) -> String {
        match self.try_extract(raw, filename) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not extract text from '{}': {}", filename, e);
                String::new()
            }
        }
    }

    /// Same dispatch as [`extract`](Self::extract), but surfaces the failure.
    pub fn try_extract(&self, raw: &[u8], filename: &str) -> Result<String> {
        match FileType::from_filename(filename) {
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", filename);
                DocxExtractor.extract(raw)
            }
            FileType::Pdf => {
                info!("Extracting text from PDF: {} (first {} pages)", filename, self.max_pdf_pages);
                PdfExtractor::new(self.max_pdf_pages).extract(raw)
            }
            FileType::Other => match self.unknown_format {
                UnknownFormatPolicy::LossyText => {
                    info!("Decoding as plain text: {}", filename);
                    PlainTextExtractor.extract(raw)
                }
                UnknownFormatPolicy::Reject => Err(WellnessError::UnsupportedFormat(format!(
                    "'{}' is neither a .docx nor a .pdf file",
                    filename
                ))),
            },
        }
    }

    /// Read an upload from disk. The file name is what later drives dispatch.
    pub async fn read_upload(&self, path: &Path) -> Result<(Vec<u8>, String)> {
        if !path.exists() {
            return Err(WellnessError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let raw = fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok((raw, filename))
    }

    pub async fn extract_file(&self, path: &Path) -> Result<String> {
        let (raw, filename) = self.read_upload(path).await?;
        Ok(self.extract(&raw, &filename))
    }
}
