use crate::error::RelayoutError;
use crate::model::{BoundingBox, TextFragment};
use crate::options::CoordinateOrigin;
use crate::recognition::Recognizer;
use serde::Deserialize;

/// Backend for fragments that were recognized elsewhere and serialized as
/// JSON, such as the reply of a remote OCR service.
///
/// Accepted payloads:
/// - an array of fragments,
/// - an object with a `fragments` array,
/// - a single fragment object,
/// - an object with only a `text` string, or plain UTF-8 text, which becomes
///   one full-page fragment with confidence 1.0.
pub struct JsonRecognizer {
    origin: CoordinateOrigin,
}

impl JsonRecognizer {
    pub fn new() -> Self {
        JsonRecognizer {
            origin: CoordinateOrigin::BottomLeft,
        }
    }

    pub fn with_origin(origin: CoordinateOrigin) -> Self {
        JsonRecognizer { origin }
    }
}

impl Default for JsonRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Fragments(Vec<TextFragment>),
    Envelope { fragments: Vec<TextFragment> },
    Single(TextFragment),
    Text(TextReply),
}

/// Plain reply of a remote service: nothing but the recognized text.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TextReply {
    text: String,
}

impl Recognizer for JsonRecognizer {
    fn recognize(&self, input: &[u8]) -> Result<Vec<TextFragment>, RelayoutError> {
        let body = std::str::from_utf8(input)
            .map_err(|e| RelayoutError::RecognitionFailed(format!("response is not UTF-8: {e}")))?;
        if body.trim().is_empty() {
            return Err(RelayoutError::RecognitionFailed("empty response body".into()));
        }

        match serde_json::from_str::<Payload>(body) {
            Ok(Payload::Fragments(fragments)) | Ok(Payload::Envelope { fragments }) => {
                Ok(fragments)
            }
            Ok(Payload::Single(fragment)) => Ok(vec![fragment]),
            Ok(Payload::Text(reply)) => Ok(vec![full_page(reply.text)]),
            Err(e) => {
                let trimmed = body.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    return Err(RelayoutError::RecognitionFailed(format!(
                        "malformed fragment payload: {e}"
                    )));
                }
                tracing::debug!("response is not JSON, treating it as plain text");
                Ok(vec![full_page(body.to_string())])
            }
        }
    }

    fn origin(&self) -> CoordinateOrigin {
        self.origin
    }

    fn backend_name(&self) -> &str {
        "json"
    }
}

fn full_page(text: String) -> TextFragment {
    TextFragment::new(text, 1.0, BoundingBox::new(0.0, 0.0, 1.0, 1.0))
}
