use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a maintenance run. Nothing is retried; the
/// scripts print the error and exit, leaving already-applied changes in
/// place.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    #[error("Failed to read table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DatasetError {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    pub fn malformed_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MalformedJson {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_includes_path() {
        let err = DatasetError::missing_input("dataset/sheet2.csv");
        assert_eq!(err.to_string(), "Input file not found: dataset/sheet2.csv");

        let err = DatasetError::DestinationExists {
            path: Path::new("extension/asl_videos/D/DOG").to_path_buf(),
        };
        assert!(err.to_string().contains("extension/asl_videos/D/DOG"));
    }

    #[test]
    fn test_malformed_json_keeps_parse_detail() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = DatasetError::malformed_json("extension/glossary.json", source);
        let display = err.to_string();
        assert!(display.contains("extension/glossary.json"));
        assert!(display.contains("Invalid JSON"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<DatasetError>();
        assert_sync::<DatasetError>();
    }
}
