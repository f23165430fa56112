//! Place/state synonyms index: canonical sign name to the folder-name
//! variants seen for it in the video tree.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Marker carried by place/state name-sign folders.
pub const PLACE_MARKER: &str = "ns-";

/// Canonical synonyms key for a place-gloss folder name: strip the `ns-`
/// marker (exact case), strip at most one further leading `#`, uppercase
/// what remains. Names without the marker have no key.
pub fn canonical_key(folder: &str) -> Option<String> {
    let rest = folder.strip_prefix(PLACE_MARKER)?;
    let rest = rest.strip_prefix('#').unwrap_or(rest);
    Some(rest.to_uppercase())
}

/// The synonyms file the extension ships: canonical name to the list of
/// folder-name variants, in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymsIndex(pub BTreeMap<String, Vec<String>>);

impl SynonymsIndex {
    /// A missing file is an empty index; a present one must parse.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| DatasetError::malformed_json(path, source))
    }

    /// Written with 4-space indentation, the format the extension ships.
    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        fs::write(path, buf)?;
        Ok(())
    }

    /// Record one folder-name variant under its canonical key. Returns
    /// `true` when the variant was new, `false` for duplicates and for
    /// names without the place marker.
    pub fn record_variant(&mut self, folder: &str) -> bool {
        let Some(key) = canonical_key(folder) else {
            return false;
        };
        let variants = self.0.entry(key).or_default();
        if variants.iter().any(|variant| variant == folder) {
            return false;
        }
        variants.push(folder.to_string());
        true
    }
}

/// Every directory name under `root`, any depth, in a stable sorted
/// order. A missing tree contributes nothing.
pub fn collect_folder_names(root: &Path) -> Result<Vec<String>, DatasetError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_strips_marker_and_uppercases() {
        assert_eq!(canonical_key("ns-berkeley"), Some("BERKELEY".to_string()));
        assert_eq!(canonical_key("ns-Reno"), Some("RENO".to_string()));
    }

    #[test]
    fn test_canonical_key_strips_one_leading_hash() {
        assert_eq!(canonical_key("ns-#STANFORD"), Some("STANFORD".to_string()));
        assert_eq!(canonical_key("ns-##ODD"), Some("#ODD".to_string()));
    }

    #[test]
    fn test_canonical_key_requires_exact_marker() {
        assert_eq!(canonical_key("DOG"), None);
        assert_eq!(canonical_key("NS-FOO"), None);
        assert_eq!(canonical_key("fs-JOHN"), None);
    }

    #[test]
    fn test_record_variant_groups_by_key() {
        let mut index = SynonymsIndex::default();
        assert!(index.record_variant("ns-BERKELEY"));
        assert!(index.record_variant("ns-berkeley"));
        assert_eq!(
            index.0.get("BERKELEY"),
            Some(&vec!["ns-BERKELEY".to_string(), "ns-berkeley".to_string()])
        );
    }

    #[test]
    fn test_record_variant_ignores_duplicates_and_unmarked_names() {
        let mut index = SynonymsIndex::default();
        assert!(index.record_variant("ns-RENO"));
        assert!(!index.record_variant("ns-RENO"));
        assert!(!index.record_variant("RENO"));
        assert_eq!(index.0.len(), 1);
        assert_eq!(index.0["RENO"].len(), 1);
    }

    #[test]
    fn test_recording_is_idempotent() {
        let folders = ["ns-BOSTON", "ns-#BOSTON", "A", "DOG"];
        let mut once = SynonymsIndex::default();
        for folder in folders {
            once.record_variant(folder);
        }
        let mut twice = once.clone();
        for folder in folders {
            twice.record_variant(folder);
        }
        assert_eq!(once, twice);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        let mut index = SynonymsIndex::default();
        index.record_variant("ns-RENO");
        index.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "{\n    \"RENO\": [\n        \"ns-RENO\"\n    ]\n}"
        );
    }

    #[test]
    fn test_load_round_trips_saved_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        let mut index = SynonymsIndex::default();
        index.record_variant("ns-BERKELEY");
        index.record_variant("ns-#BERKELEY");
        index.save(&path).unwrap();

        let loaded = SynonymsIndex::load(&path).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = SynonymsIndex::load(&dir.path().join("none.json")).unwrap();
        assert!(index.0.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        fs::write(&path, "{not json").unwrap();
        let err = SynonymsIndex::load(&path).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedJson { .. }));
    }

    #[test]
    fn test_collect_folder_names_walks_all_depths_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("B/ns-BOSTON")).unwrap();
        fs::create_dir_all(dir.path().join("A/ALL")).unwrap();
        fs::write(dir.path().join("A/ALL/clip.mp4"), b"x").unwrap();

        let names = collect_folder_names(dir.path()).unwrap();
        assert_eq!(names, vec!["A", "ALL", "B", "ns-BOSTON"]);
    }

    #[test]
    fn test_collect_folder_names_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let names = collect_folder_names(&dir.path().join("absent")).unwrap();
        assert!(names.is_empty());
    }
}
