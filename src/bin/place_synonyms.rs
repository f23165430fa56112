//! Walk the video tree for `ns-` place/state folders and merge every
//! variant spelling into the synonyms index.

use asl_dataset::error::DatasetError;
use asl_dataset::layout;
use asl_dataset::synonyms::{canonical_key, collect_folder_names, SynonymsIndex};
use colored::Colorize;
use std::path::Path;

fn run() -> Result<(), DatasetError> {
    let synonyms_path = Path::new(layout::SYNONYMS_FILE);
    let mut index = SynonymsIndex::load(synonyms_path)?;

    let mut added = 0;
    for folder in collect_folder_names(Path::new(layout::VIDEO_TREE))? {
        let Some(key) = canonical_key(&folder) else {
            continue;
        };
        if index.record_variant(&folder) {
            println!("  {} -> {}", folder, key);
            added += 1;
        }
    }

    index.save(synonyms_path)?;
    println!("{} {} new variant(s)", "Recorded:".green(), added);
    println!("Merged place glosses into {}", synonyms_path.display());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}
