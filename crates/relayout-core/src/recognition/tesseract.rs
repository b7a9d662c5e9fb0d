use crate::error::RelayoutError;
use crate::model::{BoundingBox, TextFragment};
use crate::options::CoordinateOrigin;
use crate::recognition::Recognizer;
use std::io::Write;
use std::process::Command;

const LEVEL_PAGE: u32 = 1;
const LEVEL_WORD: u32 = 5;

/// Local recognition backend using the tesseract command line tool.
///
/// Runs `tesseract <image> stdout tsv` and turns each recognized word into
/// a fragment. Tesseract reports pixel boxes from the top-left corner;
/// they are normalized by the page size but keep the top-left origin.
pub struct TesseractRecognizer {
    languages: String,
    psm: u32,
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        TesseractRecognizer {
            languages: "eng".to_string(),
            psm: 3,
        }
    }

    /// Tesseract language list, e.g. `"eng+jpn"`.
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    /// Tesseract page segmentation mode.
    pub fn with_psm(mut self, psm: u32) -> Self {
        self.psm = psm;
        self
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&self, image: &[u8]) -> Result<Vec<TextFragment>, RelayoutError> {
        if image.is_empty() {
            return Err(RelayoutError::InvalidImage("image is empty".into()));
        }

        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| RelayoutError::RecognitionFailed(e.to_string()))?;
        tmpfile
            .write_all(image)
            .map_err(|e| RelayoutError::RecognitionFailed(e.to_string()))?;

        let output = Command::new("tesseract")
            .arg(tmpfile.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .arg("--psm")
            .arg(self.psm.to_string())
            .arg("tsv")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RelayoutError::TesseractNotFound
                } else {
                    RelayoutError::RecognitionFailed(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if stderr.contains("Error in pixReadStream") || stderr.contains("Unsupported image") {
                return Err(RelayoutError::InvalidImage(stderr.trim().to_string()));
            }
            return Err(RelayoutError::TesseractFailed { code, stderr });
        }

        let tsv = String::from_utf8_lossy(&output.stdout);
        parse_tsv(&tsv)
    }

    fn origin(&self) -> CoordinateOrigin {
        CoordinateOrigin::TopLeft
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

#[derive(Debug, Clone)]
struct TsvWord {
    page: u32,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    conf: f32,
    text: String,
}

/// Parse tesseract TSV output into normalized fragments.
///
/// Only word rows with a non-negative confidence are kept. Words are
/// normalized against the first page's dimensions; later pages are ignored.
fn parse_tsv(tsv: &str) -> Result<Vec<TextFragment>, RelayoutError> {
    let mut page_size: Option<(u32, f64, f64)> = None;
    let mut words = Vec::new();

    for row in tsv.lines() {
        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < 12 {
            continue;
        }
        let Ok(level) = cols[0].parse::<u32>() else {
            // header row
            continue;
        };
        let page = cols[1].parse::<u32>().unwrap_or(0);

        if level == LEVEL_PAGE && page_size.is_none() {
            let width = cols[8].parse::<f64>().unwrap_or(0.0);
            let height = cols[9].parse::<f64>().unwrap_or(0.0);
            page_size = Some((page, width, height));
            continue;
        }

        if level != LEVEL_WORD {
            continue;
        }
        let conf = cols[10].parse::<f32>().unwrap_or(-1.0);
        let text = cols[11..].join("\t");
        if conf < 0.0 || text.trim().is_empty() {
            continue;
        }
        words.push(TsvWord {
            page,
            left: cols[6].parse().unwrap_or(0.0),
            top: cols[7].parse().unwrap_or(0.0),
            width: cols[8].parse().unwrap_or(0.0),
            height: cols[9].parse().unwrap_or(0.0),
            conf,
            text,
        });
    }

    let (first_page, page_w, page_h) = match page_size {
        Some((page, w, h)) if w > 0.0 && h > 0.0 => (page, w, h),
        _ => {
            return Err(RelayoutError::RecognitionFailed(
                "tesseract output has no page dimensions".into(),
            ))
        }
    };

    let skipped = words.iter().filter(|w| w.page != first_page).count();
    if skipped > 0 {
        tracing::warn!(skipped, "ignoring words beyond the first page");
    }

    Ok(words
        .into_iter()
        .filter(|w| w.page == first_page)
        .map(|w| {
            TextFragment::new(
                w.text,
                (w.conf / 100.0).clamp(0.0, 1.0),
                BoundingBox::new(
                    w.left / page_w,
                    w.top / page_h,
                    w.width / page_w,
                    w.height / page_h,
                ),
            )
        })
        .collect())
}
