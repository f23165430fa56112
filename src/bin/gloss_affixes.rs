//! Survey the gloss spreadsheet: report the unique prefixes and
//! postfixes in the gloss column, and the folder path each gloss maps
//! to under the current naming rules.

use asl_dataset::affixes::{read_gloss_column, AffixReport};
use asl_dataset::error::DatasetError;
use asl_dataset::layout;
use colored::Colorize;
use std::fs;
use std::path::Path;

fn run() -> Result<(), DatasetError> {
    let rows = read_gloss_column(Path::new(layout::GLOSS_TABLE), layout::GLOSS_COLUMN)?;
    let report = AffixReport::scan(rows);

    fs::write(layout::AFFIX_LISTING, report.format_affix_listing())?;
    fs::write(layout::FOLDER_LISTING, report.format_folder_listing())?;

    println!(
        "{} {} glosses, {} prefixes, {} postfixes",
        "Scanned:".green(),
        report.glosses.len(),
        report.prefixes.len(),
        report.postfixes.len()
    );
    println!(
        "Results written to {} and {}",
        layout::AFFIX_LISTING,
        layout::FOLDER_LISTING
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}
