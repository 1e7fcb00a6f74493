//! Error handling for the wellness assistant

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, WellnessError>;

/// Convert lopdf errors to our custom error type
impl From<lopdf::Error> for WellnessError {
    fn from(err: lopdf::Error) -> Self {
        WellnessError::PdfExtraction(err.to_string())
    }
}

impl From<zip::result::ZipError> for WellnessError {
    fn from(err: zip::result::ZipError) -> Self {
        WellnessError::DocxExtraction(format!("invalid archive: {}", err))
    }
}

impl From<quick_xml::Error> for WellnessError {
    fn from(err: quick_xml::Error) -> Self {
        WellnessError::DocxExtraction(format!("malformed document.xml: {}", err))
    }
}
