//! Append command implementation.

use haf_archive::Archiver;
use haf_core::Result;
use std::path::PathBuf;

/// Append input files to an existing archive.
pub fn cmd_append(archiver: &Archiver, files: &[String]) -> Result<()> {
    let inputs: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let entries = archiver.append(&inputs)?;

    for entry in &entries {
        println!("  Added: {entry}");
    }
    println!("Archive updated: {}", archiver.path().display());
    Ok(())
}
