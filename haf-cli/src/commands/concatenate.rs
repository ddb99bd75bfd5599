//! Concatenate command implementation.

use haf_archive::Archiver;
use haf_core::Result;
use std::path::PathBuf;

/// Merge two or more source archives into the target archive.
pub fn cmd_concatenate(archiver: &Archiver, sources: &[String]) -> Result<()> {
    let sources: Vec<PathBuf> = sources.iter().map(PathBuf::from).collect();
    let entries = archiver.concatenate(&sources)?;

    println!(
        "Merged {} archives into {} ({} files)",
        sources.len(),
        archiver.path().display(),
        entries.len()
    );
    Ok(())
}
