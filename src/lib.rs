//! Batch maintenance for a folder-per-gloss ASL video dataset and the
//! JSON indexes a browser extension ships alongside it.
//!
//! The dataset files videos under `<bucket letter>/<gloss>/`, where the
//! bucket is the first letter of the gloss after any `ns-`/`fs-` marker.
//! Three maintenance jobs keep that layout and its indexes tidy:
//!
//! * [`affixes`]: survey the gloss spreadsheet for prefixes/postfixes
//!   and emit the gloss-to-folder-path mapping.
//! * [`synonyms`]: harvest `ns-` place folders from the video tree into
//!   the synonyms index.
//! * [`migrate`]: retire the legacy `#` bucket from the tree and the
//!   glossary, in both of its naming conventions.
//!
//! Each job is a separate binary taking no arguments; every path it
//! touches is fixed in [`layout`].

pub mod affixes;
pub mod error;
pub mod gloss;
pub mod glossary;
pub mod migrate;
pub mod synonyms;

/// Fixed dataset locations, relative to the repository root.
pub mod layout {
    /// Curated gloss spreadsheet.
    pub const GLOSS_TABLE: &str = "dataset/sheet2.csv";
    /// Column of the spreadsheet holding the glosses.
    pub const GLOSS_COLUMN: &str = "Main New Gloss";
    /// Root of the bucketed video tree.
    pub const VIDEO_TREE: &str = "extension/asl_videos";
    /// Glossary index the extension ships.
    pub const GLOSSARY_FILE: &str = "extension/glossary.json";
    /// Synonyms index the extension ships.
    pub const SYNONYMS_FILE: &str = "extension/synonyms.json";
    /// Affix survey report, written to the working directory.
    pub const AFFIX_LISTING: &str = "prefix_postfix_output.txt";
    /// Gloss-to-folder-path report, written to the working directory.
    pub const FOLDER_LISTING: &str = "gloss_folder_paths.txt";
}
