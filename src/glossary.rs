//! The two-level glossary the extension ships: bucket letter to sign
//! name to that sign's entry data.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One bucket: sign name to opaque entry data. In practice the data is
/// the list of video file names for that sign, but nothing here depends
/// on its shape.
pub type Bucket = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary(pub BTreeMap<String, Bucket>);

impl Glossary {
    /// Unlike the synonyms index, the glossary must already exist.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.is_file() {
            return Err(DatasetError::missing_input(path));
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| DatasetError::malformed_json(path, source))
    }

    /// Two-space pretty print, non-ASCII characters written verbatim.
    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
