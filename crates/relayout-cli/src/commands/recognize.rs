use relayout_core::error::RelayoutError;
use relayout_core::recognition::tesseract::TesseractRecognizer;
use std::path::PathBuf;

use crate::commands::LayoutArgs;
use crate::output;

pub fn run(image: PathBuf, lang: &str, psm: u32, layout: &LayoutArgs) -> Result<(), RelayoutError> {
    if !TesseractRecognizer::is_available() {
        return Err(RelayoutError::TesseractNotFound);
    }

    let options = layout.resolve()?;
    let image_bytes = std::fs::read(&image)?;

    let recognizer = TesseractRecognizer::new().with_languages(lang).with_psm(psm);
    let report = relayout_core::recognize_and_report(&image_bytes, &recognizer, &options)?;

    output::print(&report, layout.output, layout.report)
}
