use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat, Package};

/// JSON importer for an array of `{"code": ..., "values": [...]}` objects
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "json")
    }

    fn parse(&self, content: &str) -> Result<Vec<Package>> {
        let packages: Vec<Package> =
            serde_json::from_str(content).map_err(|e| ImportError::ParseError {
                format: "JSON",
                location: format!("line {}", e.line()),
                reason: e.to_string(),
            })?;
        Ok(packages)
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}
