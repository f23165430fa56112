//! Repair of the legacy `#` bucket, in the video tree and in the
//! glossary.
//!
//! Two naming conventions put signs there over time: plain `#SIGN`
//! folders and place signs written `ns-#SIGN`. Both repairs share the
//! same passes and differ only in how a legacy name is corrected, so the
//! convention is a [`LegacyNaming`] value and everything else is common.
//! Runs are not transactional; a failure leaves earlier moves in place.

use crate::error::DatasetError;
use crate::gloss;
use crate::glossary::Glossary;
use std::fs;
use std::path::Path;

/// Name of the legacy bucket, in trees and glossaries alike.
pub const HASH_BUCKET: &str = "#";

/// Which legacy convention a run repairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyNaming {
    /// Folders and entries named `#SIGN`, corrected to `SIGN`.
    Hash,
    /// Folders and entries named `ns-#SIGN`, corrected to `ns-SIGN`.
    NsHash,
}

impl LegacyNaming {
    /// Corrected name for a legacy one, or `None` when the name does not
    /// follow this convention or nothing would remain of it.
    pub fn corrected(self, name: &str) -> Option<String> {
        match self {
            LegacyNaming::Hash => name
                .strip_prefix('#')
                .filter(|rest| !rest.is_empty())
                .map(str::to_string),
            LegacyNaming::NsHash => name
                .strip_prefix("ns-#")
                .filter(|rest| !rest.is_empty())
                .map(|rest| format!("ns-{rest}")),
        }
    }
}

/// One planned folder relocation, relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub from: String,
    pub bucket: String,
    pub to: String,
}

/// One glossary entry relocation. `replaced` records that the
/// destination already held an entry and this one overwrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMove {
    pub from: String,
    pub bucket: String,
    pub to: String,
    pub replaced: bool,
}

/// What one full migration run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    pub folders_moved: usize,
    pub strays_relocated: usize,
    pub entries_moved: usize,
    pub entries_replaced: usize,
    pub files_flattened: usize,
}

/// Plan the relocation of every legacy-named entry of the `#` bucket.
/// Names that do not match the convention are left behind.
pub fn plan_bucket_repairs(names: &[String], naming: LegacyNaming) -> Vec<PlannedMove> {
    let mut moves = Vec::new();
    for name in names {
        let Some(to) = naming.corrected(name) else {
            continue;
        };
        let Some(bucket) = gloss::bucket_letter(&to) else {
            continue;
        };
        moves.push(PlannedMove {
            from: name.clone(),
            bucket,
            to,
        });
    }
    moves
}

/// Multi-character, all-uppercase names directly under the tree root are
/// sign folders sitting at the wrong level (`DOG` next to the `A`..`Z`
/// buckets). A name qualifies when it is longer than one character, has
/// at least one cased character, and none of them is lowercase.
pub fn is_misplaced_sign_folder(name: &str) -> bool {
    name.chars().count() > 1
        && name.chars().any(char::is_uppercase)
        && !name.chars().any(char::is_lowercase)
}

/// Plan the re-homing of misplaced sign folders into their buckets.
pub fn plan_stray_moves(names: &[String]) -> Vec<PlannedMove> {
    let mut moves = Vec::new();
    for name in names {
        if !is_misplaced_sign_folder(name) {
            continue;
        }
        let Some(bucket) = gloss::bucket_letter(name) else {
            continue;
        };
        moves.push(PlannedMove {
            from: name.clone(),
            bucket,
            to: name.clone(),
        });
    }
    moves
}

/// Move every legacy-named entry out of the glossary's `#` bucket, keyed
/// under its corrected name in the right letter bucket. A collision
/// overwrites the destination entry. The `#` key survives exactly when
/// entries that match no convention remain under it.
pub fn migrate_glossary(glossary: &mut Glossary, naming: LegacyNaming) -> Vec<EntryMove> {
    let Some(mut legacy) = glossary.0.remove(HASH_BUCKET) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    let names: Vec<String> = legacy.keys().cloned().collect();
    for name in names {
        let Some(to) = naming.corrected(&name) else {
            continue;
        };
        let Some(bucket) = gloss::bucket_letter(&to) else {
            continue;
        };
        let Some(data) = legacy.remove(&name) else {
            continue;
        };
        let replaced = glossary
            .0
            .entry(bucket.clone())
            .or_default()
            .insert(to.clone(), data)
            .is_some();
        moves.push(EntryMove {
            from: name,
            bucket,
            to,
            replaced,
        });
    }

    if !legacy.is_empty() {
        glossary
            .0
            .entry(HASH_BUCKET.to_string())
            .or_default()
            .extend(legacy);
    }
    moves
}

/// Sorted names of everything directly inside `dir`.
fn sorted_dir_names(dir: &Path) -> Result<Vec<String>, DatasetError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Sorted names of the subdirectories directly inside `dir`.
fn sorted_subdir_names(dir: &Path) -> Result<Vec<String>, DatasetError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Rename with a hard stop when the destination already exists. Nothing
/// is ever merged or overwritten on disk.
fn move_entry(src: &Path, dst: &Path) -> Result<(), DatasetError> {
    if dst.exists() {
        return Err(DatasetError::DestinationExists {
            path: dst.to_path_buf(),
        });
    }
    println!("Moving {} -> {}", src.display(), dst.display());
    fs::rename(src, dst)?;
    Ok(())
}

/// Move every legacy-named entry out of `<base>/#` into its letter
/// bucket, then remove the `#` directory if that emptied it. A missing
/// `#` directory is a no-op.
pub fn repair_hash_bucket(base: &Path, naming: LegacyNaming) -> Result<usize, DatasetError> {
    let hash_dir = base.join(HASH_BUCKET);
    if !hash_dir.is_dir() {
        println!("Hash directory does not exist: {}", hash_dir.display());
        return Ok(0);
    }

    let names = sorted_dir_names(&hash_dir)?;
    let moves = plan_bucket_repairs(&names, naming);
    for planned in &moves {
        let bucket_dir = base.join(&planned.bucket);
        fs::create_dir_all(&bucket_dir)?;
        move_entry(&hash_dir.join(&planned.from), &bucket_dir.join(&planned.to))?;
    }

    if sorted_dir_names(&hash_dir)?.is_empty() {
        println!("Removing empty directory: {}", hash_dir.display());
        fs::remove_dir(&hash_dir)?;
    }
    Ok(moves.len())
}

/// Relocate sign folders sitting directly under the tree root into their
/// letter buckets.
pub fn relocate_stray_folders(base: &Path) -> Result<usize, DatasetError> {
    let names = sorted_subdir_names(base)?;
    let moves = plan_stray_moves(&names);
    for planned in &moves {
        let bucket_dir = base.join(&planned.bucket);
        fs::create_dir_all(&bucket_dir)?;
        move_entry(&base.join(&planned.from), &bucket_dir.join(&planned.to))?;
    }
    Ok(moves.len())
}

/// Apply the glossary half of the repair to the file on disk. Returns
/// how many entries moved and how many of those overwrote an existing
/// destination entry.
pub fn migrate_glossary_file(
    path: &Path,
    naming: LegacyNaming,
) -> Result<(usize, usize), DatasetError> {
    let mut glossary = Glossary::load(path)?;
    let moves = migrate_glossary(&mut glossary, naming);
    for entry in &moves {
        if entry.replaced {
            println!(
                "Moving glossary entry {} -> {}/{} (replacing existing entry)",
                entry.from, entry.bucket, entry.to
            );
        } else {
            println!(
                "Moving glossary entry {} -> {}/{}",
                entry.from, entry.bucket, entry.to
            );
        }
    }
    glossary.save(path)?;

    let replaced = moves.iter().filter(|entry| entry.replaced).count();
    Ok((moves.len(), replaced))
}

/// Flatten the `SIGN/#SIGN/` double nesting the legacy convention left
/// behind: everything inside the inner folder moves up one level and the
/// emptied shell is removed.
pub fn flatten_nested_hash_folders(base: &Path) -> Result<usize, DatasetError> {
    let mut flattened = 0;
    for bucket in sorted_subdir_names(base)? {
        let bucket_dir = base.join(&bucket);
        for sign in sorted_subdir_names(&bucket_dir)? {
            let sign_dir = bucket_dir.join(&sign);
            let shell = sign_dir.join(format!("{HASH_BUCKET}{sign}"));
            if !shell.is_dir() {
                continue;
            }
            for name in sorted_dir_names(&shell)? {
                move_entry(&shell.join(&name), &sign_dir.join(&name))?;
                flattened += 1;
            }
            println!("Removing empty directory: {}", shell.display());
            fs::remove_dir(&shell)?;
        }
    }
    Ok(flattened)
}

/// Run all four passes against a video tree and its glossary file:
/// `#` bucket repair, stray folder relocation, glossary migration, and
/// nested `#SIGN` flattening.
pub fn migrate_dataset(
    base: &Path,
    glossary_path: &Path,
    naming: LegacyNaming,
) -> Result<MigrationSummary, DatasetError> {
    let mut summary = MigrationSummary::default();
    summary.folders_moved = repair_hash_bucket(base, naming)?;
    summary.strays_relocated = relocate_stray_folders(base)?;
    let (moved, replaced) = migrate_glossary_file(glossary_path, naming)?;
    summary.entries_moved = moved;
    summary.entries_replaced = replaced;
    summary.files_flattened = flatten_nested_hash_folders(base)?;
    Ok(summary)
}
