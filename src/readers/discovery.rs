use crate::error::{ProcessingError, Result};
use crate::utils::filename::is_input_file_name;
use std::fs;
use std::path::{Path, PathBuf};

/// List the RUEA-EFP input files of `dir`, sorted by file name.
///
/// A missing directory or an empty match set is an error, since nothing
/// downstream can run without inputs.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ProcessingError::InputDirMissing(dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_input_file_name);
        if matches {
            inputs.push(path);
        }
    }

    if inputs.is_empty() {
        return Err(ProcessingError::NoInputFiles(dir.to_path_buf()));
    }

    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discovery_filters_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        for name in [
            "ruea-efp-2021-ckan.xlsx",
            "ruea-efp-2019-ckan.csv",
            "ruea-efp-2020-ckan.csv",
            "ruea-efp-2018-ckan.xls",
            "readme.txt",
        ] {
            fs::write(dir.path().join(name), "")?;
        }
        fs::create_dir(dir.path().join("ruea-efp-2022-ckan.csv"))?;

        let names: Vec<String> = discover_inputs(dir.path())?
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "ruea-efp-2019-ckan.csv",
                "ruea-efp-2020-ckan.csv",
                "ruea-efp-2021-ckan.xlsx",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let result = discover_inputs(Path::new("/nonexistent/descargas_retc"));
        assert!(matches!(result, Err(ProcessingError::InputDirMissing(_))));
    }

    #[test]
    fn test_no_matching_files() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("other.csv"), "a;b\n")?;

        let result = discover_inputs(dir.path());
        assert!(matches!(result, Err(ProcessingError::NoInputFiles(_))));
        Ok(())
    }
}
