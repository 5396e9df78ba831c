//! Error types for clip window construction and demo configuration.
//!
//! Rejected segments are not errors: they are an ordinary
//! [`ClipResult`](crate::clipper::ClipResult).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    #[error("invalid clip window size {width}x{height}: width and height must be finite and non-negative")]
    InvalidRectangle { width: f64, height: f64 },
    #[error("clip window corner ({x}, {y}) is not a finite coordinate")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("expected {expected} comma-separated numbers, got '{value}'")]
    MalformedNumbers { expected: usize, value: String },
    #[error("expected WIDTHxHEIGHT with each side in 1..=8192 pixels, got '{0}'")]
    MalformedSize(String),
    #[error(transparent)]
    Clip(#[from] ClipError),
}
