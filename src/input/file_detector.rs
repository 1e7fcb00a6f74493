//! File type detection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Docx,
    Pdf,
    /// Anything else; handled as raw text
    Other,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "docx" => FileType::Docx,
            "pdf" => FileType::Pdf,
            _ => FileType::Other,
        }
    }

    /// Detect from a declared upload name. Only the suffix matters, so
    /// names without a dot (or empty names) fall through to `Other`.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => FileType::Other,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Docx => write!(f, "DOCX"),
            FileType::Pdf => write!(f, "PDF"),
            FileType::Other => write!(f, "text"),
        }
    }
}
