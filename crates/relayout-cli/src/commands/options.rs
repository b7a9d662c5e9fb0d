use relayout_core::error::RelayoutError;
use relayout_core::options::{builtin, load_options};
use std::path::Path;

pub fn list() -> Result<(), RelayoutError> {
    println!("Available option presets:\n");
    for name in builtin::PRESETS {
        let preset = builtin::load_preset(name)?;
        let o = &preset.options;
        println!(
            "  {:<10} line {:.3}  paragraph {:.3}  space {:.3}  redact < {:.2}",
            name, o.line_threshold, o.paragraph_threshold, o.space_unit, o.confidence_threshold
        );
        if let Some(ref desc) = preset.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(name: &str) -> Result<(), RelayoutError> {
    let preset = builtin::load_preset(name)?;
    println!("{}", serde_json::to_string_pretty(&preset.options)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), RelayoutError> {
    let options = load_options(file)?;
    println!("Options file is valid: {}", file.display());
    println!(
        "  line {}  paragraph {}  small gap {}  space {}",
        options.line_threshold,
        options.paragraph_threshold,
        options.small_gap_threshold,
        options.space_unit
    );
    println!(
        "  redact below {} with '{}'  origin {}",
        options.confidence_threshold, options.redaction_glyph, options.origin
    );
    Ok(())
}
