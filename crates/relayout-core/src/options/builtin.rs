use crate::error::RelayoutError;
use crate::options::schema::PresetDef;
use crate::options::validate_options;

const STANDARD_JSON: &str = include_str!("../../../../presets/standard.json");
const DENSE_JSON: &str = include_str!("../../../../presets/dense.json");
const LOOSE_JSON: &str = include_str!("../../../../presets/loose.json");

/// Available predefined option presets.
pub const PRESETS: &[&str] = &["standard", "dense", "loose"];

/// Load a predefined preset by name.
pub fn load_preset(name: &str) -> Result<PresetDef, RelayoutError> {
    let json = match name {
        "standard" => STANDARD_JSON,
        "dense" => DENSE_JSON,
        "loose" => LOOSE_JSON,
        _ => {
            return Err(RelayoutError::OptionsInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let preset: PresetDef = serde_json::from_str(json)?;
    validate_options(&preset.options)?;
    Ok(preset)
}
