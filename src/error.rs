//! Error types for goalfinder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Per-frame failures. None of these abort the frame loop.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Frame acquisition failed: {0}")]
    Acquisition(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
