//! Extract command implementation.

use haf_archive::Archiver;
use haf_core::Result;

/// Extract the named entries (all if none are named) into the current
/// working directory.
pub fn cmd_extract(archiver: &Archiver, names: &[String]) -> Result<()> {
    let entries = archiver.extract(names)?;

    for entry in &entries {
        println!("  Extracted: {entry}");
    }
    Ok(())
}
