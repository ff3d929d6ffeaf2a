use crate::utils::constants::{
    CAPITAL_REGION, CAPITAL_REGION_ABBREV, INPUT_PREFIX, INPUT_SUFFIXES,
};
use std::path::Path;

/// Check a file name against `ruea-efp-*-ckan.csv` / `ruea-efp-*-ckan.xlsx`
pub fn is_input_file_name(file_name: &str) -> bool {
    input_stamp(file_name).is_some()
}

/// The part matched by the wildcard, e.g. "2021" for ruea-efp-2021-ckan.csv
pub fn input_stamp(file_name: &str) -> Option<&str> {
    let rest = file_name.strip_prefix(INPUT_PREFIX)?;
    INPUT_SUFFIXES
        .iter()
        .find_map(|suffix| rest.strip_suffix(suffix))
}

/// Suffix appended to output names: "RM" for the capital region, otherwise
/// the region name with spaces replaced by underscores.
pub fn region_suffix(region: &str) -> String {
    let trimmed = region.trim();
    if trimmed.to_lowercase() == CAPITAL_REGION.to_lowercase() {
        CAPITAL_REGION_ABBREV.to_string()
    } else {
        trimmed.replace(' ', "_")
    }
}

/// Base name (without extension) for the filtered outputs of `input`,
/// e.g. `{prefix}ruea-efp-2020-ckan_{suffix}`
pub fn output_base_name(input: &Path, prefix: &str, suffix: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!("{}{}_{}", prefix, stem, suffix)
}
