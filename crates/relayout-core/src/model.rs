use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in normalized image coordinates.
///
/// Every component is a fraction of the image width or height. Which edge
/// `y` measures from depends on the producing recognizer; see
/// [`crate::options::CoordinateOrigin`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BoundingBox {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal end of the box (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns a copy with every component forced into `[0, 1]`.
    ///
    /// Negative extents collapse to zero and NaN components become zero.
    pub fn clamped(&self) -> BoundingBox {
        BoundingBox {
            x: unit(self.x),
            y: unit(self.y),
            width: unit(self.width),
            height: unit(self.height),
        }
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// One recognized text span as produced by a recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub confidence: f32,
    #[serde(rename = "box", alias = "bounding_box", alias = "boundingBox")]
    pub bbox: BoundingBox,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        TextFragment {
            text: text.into(),
            confidence,
            bbox,
        }
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Confidence forced into `[0, 1]`, with NaN read as zero.
    pub fn clamped_confidence(&self) -> f32 {
        if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 1.0)
        }
    }
}

/// Final output of one reconstruction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionResult {
    pub text: String,
    pub confidence: f32,
}
