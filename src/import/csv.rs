use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat, Package};

/// CSV importer for header-less `CODE,v1,v2,...` records
///
/// Records may have different widths; lines starting with `#` are comments.
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    fn parse_record(record: &csv::StringRecord, index: usize) -> Result<Package> {
        let code = record
            .get(0)
            .filter(|code| !code.is_empty())
            .ok_or(ImportError::MissingCode { record: index + 1 })?;

        let values = record
            .iter()
            .skip(1)
            .map(|field| {
                field.parse::<f64>().map_err(|e| ImportError::ParseError {
                    format: "CSV",
                    location: format!("record {}", index + 1),
                    reason: format!("'{}': {}", field, e),
                })
            })
            .collect::<std::result::Result<Vec<f64>, ImportError>>()?;

        Ok(Package::new(code, values))
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "csv")
    }

    fn parse(&self, content: &str) -> Result<Vec<Package>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(content.as_bytes());

        let mut packages = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ImportError::ParseError {
                format: "CSV",
                location: format!("record {}", index + 1),
                reason: e.to_string(),
            })?;
            packages.push(Self::parse_record(&record, index)?);
        }

        Ok(packages)
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    #[test]
    fn test_parse_mixed_widths() {
        let content = "# code,values...\nSWM,720,1,80,25,40\nRUN, 15000, 1, 75\n\nWLK,9000,1,75,180\n";
        let packages = CsvImporter::new().parse(content).unwrap();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0], Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));
        assert_eq!(packages[1].values, vec![15000.0, 1.0, 75.0]);
        assert_eq!(packages[2].code, "WLK");
    }

    #[test]
    fn test_parse_bad_number() {
        let err = CsvImporter::new().parse("RUN,lots,1,75\n").unwrap_err();
        match err {
            TrackerError::Import(ImportError::ParseError { location, reason, .. }) => {
                assert_eq!(location, "record 1");
                assert!(reason.contains("lots"));
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_code() {
        let err = CsvImporter::new().parse(",1,2\n").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Import(ImportError::MissingCode { record: 1 })
        ));
    }
}
