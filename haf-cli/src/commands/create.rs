//! Create command implementation.

use haf_archive::Archiver;
use haf_core::Result;
use std::path::PathBuf;

/// Create a new archive from the given input files.
pub fn cmd_create(archiver: &Archiver, files: &[String]) -> Result<()> {
    let inputs: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let entries = archiver.create(&inputs)?;

    for entry in &entries {
        println!("  Added: {entry}");
    }
    println!("Archive created: {}", archiver.path().display());
    Ok(())
}
