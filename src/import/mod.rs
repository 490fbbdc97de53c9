use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod csv;
pub mod json;

/// One raw sensor package: an activity code and its positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// The sample packages processed when no input file is given
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Trait for reading sensor packages from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read packages from in-memory content
    fn parse(&self, content: &str) -> Result<Vec<Package>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;

    /// Read packages from the file
    fn import_file(&self, file_path: &Path) -> Result<Vec<Package>> {
        let content = std::fs::read_to_string(file_path)?;
        self.parse(&content)
    }
}

/// Manager for coordinating different import formats
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(csv::CsvImporter::new()),
            Box::new(json::JsonImporter::new()),
        ];

        Self { importers }
    }

    /// Import a single file, picking the importer by extension
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<Package>> {
        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFormat {
                path: file_path.to_path_buf(),
            })?;

        let packages = importer.import_file(file_path)?;
        info!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            packages = packages.len(),
            "Imported sensor packages"
        );
        Ok(packages)
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Load packages from a file using the matching importer
pub fn load_packages(file_path: &Path) -> Result<Vec<Package>> {
    ImportManager::new().import_file(file_path)
}

pub(crate) fn has_extension(file_path: &Path, extension: &str) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
