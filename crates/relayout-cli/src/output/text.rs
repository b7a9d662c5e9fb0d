use relayout_core::ReconstructionReport;

pub fn print(report: &ReconstructionReport, with_report: bool) {
    println!("{}", report.result.text);

    if !with_report {
        return;
    }

    println!();
    println!("--- Report ---\n");
    println!(
        "  Confidence: {:.3}   Rows: {}   Paragraphs: {}",
        report.result.confidence,
        report.rows.len(),
        report.paragraph_count()
    );
    println!(
        "  Fragments: {} used, {} dropped (blank), {} redacted, {} clamped\n",
        report.fragments_used,
        report.fragments_dropped,
        report.fragments_redacted,
        report.geometry_clamped
    );

    for row in &report.rows {
        if row.paragraph_break_before {
            println!("  {:>4}  {:<6}", "", "¶");
        }
        let redacted_marker = if row.redacted_count > 0 { " (□)" } else { "" };
        println!(
            "  {:>4}  y={:.3}  n={:<3} {}{}",
            row.index, row.y, row.fragment_count, row.text, redacted_marker
        );
    }
}
