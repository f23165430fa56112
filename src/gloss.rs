//! String rules shared by every maintenance script: marker prefixes,
//! bucket letters, folder-safe names and prefix/postfix splitting.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker prefixes that carry meaning but never decide the bucket:
/// `ns-` for place/state name signs, `fs-` for fingerspelled ones.
pub const MARKERS: [&str; 2] = ["ns-", "fs-"];

lazy_static! {
    static ref PREFIX: Regex = Regex::new(r"^([^-/+]+)[-/+]").unwrap();
    static ref POSTFIX: Regex = Regex::new(r"[-/+]([^-/+]+)$").unwrap();
    static ref UNSAFE_CHARS: Regex = Regex::new(r#"[\\/:*?"<>|]"#).unwrap();
}

/// Bucket letter for a gloss: the uppercased first character, skipping a
/// leading marker when one is present and something follows it. Matching
/// is case-insensitive, so `NS-ABC` buckets under `A` like `ns-ABC` does.
/// Returns `None` for empty input.
pub fn bucket_letter(gloss: &str) -> Option<String> {
    let gloss = gloss.trim();
    for marker in MARKERS {
        if let Some(head) = gloss.get(..marker.len()) {
            if head.eq_ignore_ascii_case(marker) && gloss.len() > marker.len() {
                return gloss[marker.len()..].chars().next().map(upper);
            }
        }
    }
    gloss.chars().next().map(upper)
}

/// Folder-safe form of a gloss: `/` becomes `_` first so `A/B` reads
/// `A_B`, then every remaining character Windows rejects in file names
/// (`\ : * ? " < > |`) becomes `_` as well.
pub fn safe_folder_name(gloss: &str) -> String {
    let replaced = gloss.trim().replace('/', "_");
    UNSAFE_CHARS.replace_all(&replaced, "_").into_owned()
}

/// The run of characters before the first `-`, `/` or `+`, if any.
pub fn prefix(gloss: &str) -> Option<&str> {
    PREFIX
        .captures(gloss)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The run of characters after the last `-`, `/` or `+`, if any.
pub fn postfix(gloss: &str) -> Option<&str> {
    POSTFIX
        .captures(gloss)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn upper(c: char) -> String {
    c.to_uppercase().collect()
}
