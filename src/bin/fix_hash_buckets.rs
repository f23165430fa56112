//! Retire the legacy `#` bucket for flat `#SIGN` names: move its
//! folders and glossary entries to the letter bucket of the name with
//! the `#` stripped, then flatten any `SIGN/#SIGN/` double nesting.

use asl_dataset::error::DatasetError;
use asl_dataset::layout;
use asl_dataset::migrate::{migrate_dataset, LegacyNaming};
use colored::Colorize;
use std::path::Path;

fn run() -> Result<(), DatasetError> {
    println!("Fixing #-prefixed sign folders under {}", layout::VIDEO_TREE);
    let summary = migrate_dataset(
        Path::new(layout::VIDEO_TREE),
        Path::new(layout::GLOSSARY_FILE),
        LegacyNaming::Hash,
    )?;
    println!(
        "{} {} folders rebucketed, {} strays relocated, {} glossary entries moved ({} replaced), {} files flattened",
        "Done:".green(),
        summary.folders_moved,
        summary.strays_relocated,
        summary.entries_moved,
        summary.entries_replaced,
        summary.files_flattened
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}
