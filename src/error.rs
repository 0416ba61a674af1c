//! Error taxonomy for log loading, chart rendering and image output

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a bus log into a chart image
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Input log not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input log {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log data at line {line}: {message}")]
    InputParse { line: u64, message: String },

    #[error("Input log {} contains no samples", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("Failed to write chart to {}: {message}", .path.display())]
    OutputWrite { path: PathBuf, message: String },

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Invalid configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to load chart font: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
