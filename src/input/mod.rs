//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod pages;
pub mod text_extractor;
pub mod manager;

pub use file_detector::FileType;
pub use manager::InputManager;
