use crate::adapters::batch::{read_move_rows, ParsedRow};
use crate::adapters::spec_file::{parse_move_specification, SpecFormat};
use crate::core::Storage;
use crate::domain::model::MoveSpecification;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Quote inputs and outputs on the local disk. Relative paths resolve against
/// `root`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn working_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Format comes from the extension, checked before the file is read.
    pub fn load_move_specification(&self, path: &str) -> Result<MoveSpecification> {
        let format = SpecFormat::from_path(path)?;
        let data = self.read_file(path)?;
        tracing::debug!("Read {} bytes of {:?} from {}", data.len(), format, path);
        parse_move_specification(&data, format)
    }

    pub fn load_move_rows(&self, path: &str) -> Result<Vec<ParsedRow>> {
        let data = self.read_file(path)?;
        read_move_rows(data.as_slice())
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(path))?)
    }

    /// Creates missing parent directories of the output file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, data)?;
        Ok(())
    }
}
