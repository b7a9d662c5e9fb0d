use relayout_core::error::RelayoutError;
use relayout_core::recognition::json::JsonRecognizer;
use relayout_core::CoordinateOrigin;
use std::path::PathBuf;

use crate::commands::LayoutArgs;
use crate::output;

pub fn run(input_file: PathBuf, top_left: bool, layout: &LayoutArgs) -> Result<(), RelayoutError> {
    let options = layout.resolve()?;
    let body = std::fs::read(&input_file)?;

    // --top-left wins over whatever the options file says
    let origin = if top_left {
        CoordinateOrigin::TopLeft
    } else {
        options.origin
    };
    let recognizer = JsonRecognizer::with_origin(origin);
    let report = relayout_core::recognize_and_report(&body, &recognizer, &options)?;

    output::print(&report, layout.output, layout.report)
}
