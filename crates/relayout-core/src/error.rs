use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RelayoutError {
    #[error("no text found: every recognized fragment was empty")]
    NoTextFound,

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("text recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("tesseract not found. Install it: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    OptionsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type returned by [`crate::reconstruct`].
///
/// The engine itself only ever produces [`RelayoutError::NoTextFound`];
/// the remaining variants come from recognizers and the options loader.
pub type ReconstructionError = RelayoutError;
