use crate::error::OboError;
use std::path::Path;

/// The recognised ontology file extension, compared case-insensitively
pub const OBO_EXTENSION: &str = ".obo";

/// Whether `path` ends in `.obo`, ignoring case. Does not touch the filesystem.
pub fn has_obo_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(OBO_EXTENSION)
}

/// Check that `path` names an existing `.obo` file.
///
/// The empty-path and extension checks run on the path text alone, so a path
/// with the wrong extension is rejected without any filesystem access.
pub fn validate_obo_path(path: &Path) -> Result<(), OboError> {
    let display = path.to_string_lossy();

    if display.trim().is_empty() {
        return Err(OboError::InvalidInput(
            "Please specify a valid OBO file path.".to_string(),
        ));
    }

    if !has_obo_extension(path) {
        return Err(OboError::InvalidInput(format!(
            "Please select a file with the '{}' extension: {}",
            OBO_EXTENSION, display
        )));
    }

    if !path.is_file() {
        return Err(OboError::InvalidInput(format!(
            "The specified OBO file was not found: {}",
            display
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(has_obo_extension(Path::new("go-basic.obo")));
        assert!(has_obo_extension(Path::new("/data/HP.OBO")));
        assert!(!has_obo_extension(Path::new("ontology.txt")));
        assert!(!has_obo_extension(Path::new("obo")));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        match validate_obo_path(Path::new("")) {
            Err(OboError::InvalidInput(msg)) => assert!(msg.contains("valid OBO file path")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        match validate_obo_path(Path::new("ontology.txt")) {
            Err(OboError::InvalidInput(msg)) => assert!(msg.contains("'.obo' extension")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        match validate_obo_path(Path::new("missing.obo")) {
            Err(OboError::InvalidInput(msg)) => assert!(msg.contains("missing.obo")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::Builder::new().suffix(".obo").tempdir().unwrap();
        assert!(matches!(
            validate_obo_path(dir.path()),
            Err(OboError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_existing_file_is_accepted() {
        let mut file = tempfile::Builder::new().suffix(".obo").tempfile().unwrap();
        writeln!(file, "format-version: 1.2").unwrap();
        assert!(validate_obo_path(file.path()).is_ok());
    }
}
