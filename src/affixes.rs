//! Prefix/postfix survey over the gloss spreadsheet, plus the
//! gloss-to-folder-path mapping derived from the same column.

use crate::error::DatasetError;
use crate::gloss;
use itertools::Itertools;
use std::collections::HashSet;
use std::path::Path;

/// Rows that mark section breaks in the spreadsheet rather than glosses.
const PLACEHOLDER_ROWS: [&str; 2] = ["============", "------------"];

/// Deduplicated survey of one gloss column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AffixReport {
    pub prefixes: HashSet<String>,
    pub postfixes: HashSet<String>,
    pub glosses: HashSet<String>,
}

impl AffixReport {
    /// Scan raw column values: trim each one, drop blanks and placeholder
    /// rows, and collect the unique glosses with their affixes.
    pub fn scan<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = AffixReport::default();
        for row in rows {
            let value = row.as_ref().trim();
            if value.is_empty() || PLACEHOLDER_ROWS.contains(&value) {
                continue;
            }
            report.glosses.insert(value.to_string());
            if let Some(prefix) = gloss::prefix(value) {
                report.prefixes.insert(prefix.to_string());
            }
            if let Some(postfix) = gloss::postfix(value) {
                report.postfixes.insert(postfix.to_string());
            }
        }
        report
    }

    /// Affix listing: both sets under fixed headers, sorted, one per line.
    pub fn format_affix_listing(&self) -> String {
        let mut out = String::from("Unique prefixes found:\n");
        for prefix in self.prefixes.iter().sorted() {
            out.push_str(prefix);
            out.push('\n');
        }
        out.push_str("\nUnique postfixes found:\n");
        for postfix in self.postfixes.iter().sorted() {
            out.push_str(postfix);
            out.push('\n');
        }
        out
    }

    /// Folder listing: `gloss -> bucket/safe-name` per gloss, sorted.
    pub fn format_folder_listing(&self) -> String {
        let mut out = String::from("Gloss to Folder Path Mapping (using new rules):\n");
        for gloss_name in self.glosses.iter().sorted() {
            if let Some(bucket) = gloss::bucket_letter(gloss_name) {
                out.push_str(&format!(
                    "{} -> {}/{}\n",
                    gloss_name,
                    bucket,
                    gloss::safe_folder_name(gloss_name)
                ));
            }
        }
        out
    }
}

/// Read one named column out of a headered CSV file, every value as raw
/// text. Short rows read as empty strings for the missing cells.
pub fn read_gloss_column(path: &Path, column: &str) -> Result<Vec<String>, DatasetError> {
    if !path.is_file() {
        return Err(DatasetError::missing_input(path));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        values.push(record.get(index).unwrap_or("").to_string());
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_scan_collects_affixes_and_glosses() {
        let report = AffixReport::scan(["mother-in-law", "A/B", "PLAIN"]);
        assert!(report.prefixes.contains("mother"));
        assert!(report.prefixes.contains("A"));
        assert!(report.postfixes.contains("law"));
        assert!(report.postfixes.contains("B"));
        assert_eq!(report.glosses.len(), 3);
    }

    #[test]
    fn test_scan_skips_placeholders_and_blanks() {
        let report = AffixReport::scan(["============", "------------", "", "   ", "DOG"]);
        assert_eq!(report.glosses.len(), 1);
        assert!(report.glosses.contains("DOG"));
        assert!(report.prefixes.is_empty());
        assert!(report.postfixes.is_empty());
    }

    #[test]
    fn test_scan_trims_before_filtering() {
        let report = AffixReport::scan(["  ============  ", "  DOG  "]);
        assert_eq!(report.glosses.len(), 1);
        assert!(report.glosses.contains("DOG"));
    }

    #[test]
    fn test_scan_deduplicates() {
        let report = AffixReport::scan(["a-b", "a-b", "a-c"]);
        assert_eq!(report.glosses.len(), 2);
        assert_eq!(report.prefixes.len(), 1);
        assert_eq!(report.postfixes.len(), 2);
    }

    #[test]
    fn test_glosses_without_delimiters_add_no_affixes() {
        let report = AffixReport::scan(["HELLO", "WORLD"]);
        assert_eq!(report.glosses.len(), 2);
        assert!(report.prefixes.is_empty());
        assert!(report.postfixes.is_empty());
    }

    #[test]
    fn test_affix_listing_is_sorted_under_headers() {
        let report = AffixReport::scan(["b-x", "a-y"]);
        let listing = report.format_affix_listing();
        assert_eq!(
            listing,
            "Unique prefixes found:\na\nb\n\nUnique postfixes found:\nx\ny\n"
        );
    }

    #[test]
    fn test_folder_listing_applies_both_naming_rules() {
        let report = AffixReport::scan(["A/THING", "ns-ABC-1", "B-GLOSS"]);
        let listing = report.format_folder_listing();
        assert_eq!(
            listing,
            "Gloss to Folder Path Mapping (using new rules):\n\
             A/THING -> A/A_THING\n\
             B-GLOSS -> B/B-GLOSS\n\
             ns-ABC-1 -> A/ns-ABC-1\n"
        );
    }

    #[test]
    fn test_read_gloss_column_extracts_named_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Id,Main New Gloss,Notes").unwrap();
        writeln!(file, "1,DOG,first").unwrap();
        writeln!(file, "2,CAT,second").unwrap();
        file.flush().unwrap();

        let values = read_gloss_column(file.path(), "Main New Gloss").unwrap();
        assert_eq!(values, vec!["DOG".to_string(), "CAT".to_string()]);
    }

    #[test]
    fn test_read_gloss_column_short_rows_read_empty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Id,Main New Gloss").unwrap();
        writeln!(file, "1,DOG").unwrap();
        writeln!(file, "2").unwrap();
        file.flush().unwrap();

        let values = read_gloss_column(file.path(), "Main New Gloss").unwrap();
        assert_eq!(values, vec!["DOG".to_string(), String::new()]);
    }

    #[test]
    fn test_read_gloss_column_missing_column_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Id,Other").unwrap();
        writeln!(file, "1,x").unwrap();
        file.flush().unwrap();

        let err = read_gloss_column(file.path(), "Main New Gloss").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { .. }));
        assert!(err.to_string().contains("Main New Gloss"));
    }

    #[test]
    fn test_read_gloss_column_missing_file_fails() {
        let err = read_gloss_column(Path::new("no/such/table.csv"), "Main New Gloss").unwrap_err();
        assert!(matches!(err, DatasetError::MissingInput { .. }));
    }
}
