//! Delete command implementation.

use haf_archive::Archiver;
use haf_core::Result;

/// Delete the named entries from the archive.
pub fn cmd_delete(archiver: &Archiver, names: &[String]) -> Result<()> {
    archiver.delete(names)?;

    for name in names {
        println!("  Deleted: {name}");
    }
    println!("Archive updated: {}", archiver.path().display());
    Ok(())
}
