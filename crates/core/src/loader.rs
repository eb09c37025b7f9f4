//! Nguồn cung cấp bảng phí

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::table::FeeStructure;

/// Capability nạp bảng phí, được inject vào `FeeCalculator`
pub trait FeeStructureSource {
    fn load(&self) -> Result<FeeStructure, LoadError>;
}

/// Bảng phí trong bộ nhớ tự nạp chính nó
impl FeeStructureSource for FeeStructure {
    fn load(&self) -> Result<FeeStructure, LoadError> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// Nạp bảng phí từ file JSON
#[derive(Debug, Clone)]
pub struct FileFeeStructureLoader {
    path: PathBuf,
}

impl FileFeeStructureLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeeStructureSource for FileFeeStructureLoader {
    fn load(&self) -> Result<FeeStructure, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.display().to_string()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let structure = FeeStructure::from_json_str(&content)?;

        log::info!(
            "Loaded fee structure from {} ({} terms)",
            self.path.display(),
            structure.len()
        );
        for (term, breakpoints) in structure.iter() {
            log::debug!("  term {}: {} breakpoints", term, breakpoints.len());
        }

        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"12": {{"1000": 50, "2000": 90}}}}"#).unwrap();

        let loader = FileFeeStructureLoader::new(file.path());
        let structure = loader.load().unwrap();

        assert_eq!(structure.breakpoints(12).unwrap().fee_at(dec!(2000)), Some(dec!(90)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileFeeStructureLoader::new(dir.path().join("missing.json"));

        let result = loader.load();
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_invalid_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let result = FileFeeStructureLoader::new(file.path()).load();
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_in_memory_source() {
        let structure = FeeStructure::new().with_term(24, [(dec!(1000), dec!(70))]);
        assert_eq!(structure.load().unwrap(), structure);

        let empty = FeeStructure::new();
        assert!(matches!(empty.load(), Err(LoadError::Validation(_))));
    }
}
