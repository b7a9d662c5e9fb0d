use relayout_core::error::RelayoutError;
use relayout_core::ReconstructionReport;

pub fn print(report: &ReconstructionReport, with_report: bool) -> Result<(), RelayoutError> {
    let json = if with_report {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string_pretty(&report.result)?
    };
    println!("{json}");
    Ok(())
}
