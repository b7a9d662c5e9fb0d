pub mod json;
pub mod text;

use clap::ValueEnum;
use relayout_core::error::RelayoutError;
use relayout_core::ReconstructionReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print(
    report: &ReconstructionReport,
    format: OutputFormat,
    with_report: bool,
) -> Result<(), RelayoutError> {
    match format {
        OutputFormat::Json => json::print(report, with_report),
        OutputFormat::Text => {
            text::print(report, with_report);
            Ok(())
        }
    }
}
