pub mod json;
pub mod tesseract;

use crate::error::RelayoutError;
use crate::model::TextFragment;
use crate::options::CoordinateOrigin;

/// Trait for text recognition backends feeding the reconstruction engine.
///
/// Every backend yields the same [`TextFragment`] shape; the engine never
/// branches on which one produced them.
pub trait Recognizer: Send + Sync {
    /// Recognize text in `input`, returning fragments in any order.
    ///
    /// `input` is whatever the backend consumes: encoded image bytes for a
    /// local engine, a response body for a remote one.
    fn recognize(&self, input: &[u8]) -> Result<Vec<TextFragment>, RelayoutError>;

    /// Coordinate origin of the boxes this backend reports.
    fn origin(&self) -> CoordinateOrigin;

    /// Name of this recognition backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
