//! Error types for the catatduit-core library.

use thiserror::Error;

/// Main error type for the catatduit library.
#[derive(Error, Debug)]
pub enum CatatduitError {
    /// Text recognition (OCR) error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to text recognition.
///
/// The parsers themselves never fail: malformed input degrades to a
/// low-confidence result. The only hard failure is the recognition
/// capability being absent or producing nothing, which callers must catch
/// and answer with a fallback receipt or a user-facing message.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// No text recognition engine is configured.
    #[error("text recognition engine not configured")]
    NotConfigured,

    /// The engine ran but found no text in the image.
    #[error("no text detected in image")]
    NoTextDetected,

    /// The engine itself failed.
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

/// Result type for the catatduit library.
pub type Result<T> = std::result::Result<T, CatatduitError>;
