//! List command implementation.

use haf_archive::Archiver;
use haf_core::Result;

/// Print one `<name> (<size> bytes)` line per entry, in archive order.
pub fn cmd_list(archiver: &Archiver) -> Result<()> {
    for entry in archiver.list()? {
        println!("{entry}");
    }
    Ok(())
}
