//! The archive mutation engine.
//!
//! [`Archiver`] implements the six archive operations: create, list,
//! extract, append, delete, and concatenate. Every operation opens the
//! archive afresh; none hold handles across calls.
//!
//! Archives are never edited in place. Append, delete, and concatenate
//! stage their output into a sibling `<archive>.tmp` file and finish by
//! replacing the destination, so a failure at any point leaves the original
//! archive untouched. Already-encoded payload bytes are copied verbatim
//! across rewrites, preserving any corruption the codec would repair later.

use crate::format;
use haf_core::entry::ArchiveEntry;
use haf_core::error::{HafError, Result};
use haf_hamming::{HammingCodec, HammingOptions};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// The archive engine: one archive path plus the codec protecting payloads.
///
/// The archive format does not record the Hamming parameters; the same
/// `(data_bits, parity_bits)` pair must be supplied when reading an archive
/// as was used to write it.
#[derive(Debug)]
pub struct Archiver {
    path: PathBuf,
    codec: HammingCodec,
}

/// An input file queued for encoding: its on-disk location plus the entry
/// that will describe it in the header.
#[derive(Debug)]
struct PendingInput {
    source: PathBuf,
    entry: ArchiveEntry,
}

/// The payload region of a source archive during concatenation.
#[derive(Debug)]
struct SourceRegion {
    path: PathBuf,
    data_start: u64,
    data_length: u64,
}

impl Archiver {
    /// Create an engine for the archive at `path` with the given codec
    /// parameters.
    pub fn new(path: impl Into<PathBuf>, options: HammingOptions) -> Self {
        Self {
            path: path.into(),
            codec: HammingCodec::new(options),
        }
    }

    /// The archive path this engine operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new archive from the given input files, replacing any
    /// existing archive at the target path.
    ///
    /// Every input must be an existing regular file; validation happens
    /// before anything is written. Entries are stored in input order under
    /// their basenames. On failure the partially written archive is removed.
    ///
    /// Returns the entries as written, offsets assigned.
    pub fn create(&self, inputs: &[PathBuf]) -> Result<Vec<ArchiveEntry>> {
        let pending = self.collect_inputs(inputs)?;
        let mut entries: Vec<ArchiveEntry> = pending.iter().map(|p| p.entry.clone()).collect();
        format::assign_offsets(&mut entries);

        ensure_parent_dir(&self.path)?;
        let mut out = BufWriter::new(File::create(&self.path)?);

        let result = self.write_entries(&mut out, &entries, &pending);
        drop(out);
        if let Err(err) = result {
            let _ = fs::remove_file(&self.path);
            return Err(err);
        }

        Ok(entries)
    }

    /// Read the archive header and return its entries in stored order.
    pub fn list(&self) -> Result<Vec<ArchiveEntry>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        format::read_header(&mut reader)
    }

    /// Extract entries into the current working directory.
    ///
    /// See [`Archiver::extract_into`].
    pub fn extract(&self, names: &[String]) -> Result<Vec<ArchiveEntry>> {
        let dest = std::env::current_dir()?;
        self.extract_into(names, &dest)
    }

    /// Extract entries into `dest`.
    ///
    /// An empty `names` list selects every entry in archive order; otherwise
    /// the named entries are extracted in the order given, and every name
    /// must be present — a missing name fails the operation before any
    /// output is written. Output files carry only the basename recorded in
    /// the archive and silently overwrite existing files. Files completed
    /// before a failing entry are not rolled back.
    pub fn extract_into(&self, names: &[String], dest: &Path) -> Result<Vec<ArchiveEntry>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let entries = format::read_header(&mut reader)?;
        let selected = select_entries(&entries, names)?;

        for entry in &selected {
            reader.seek(SeekFrom::Start(entry.offset))?;

            let out_path = dest.join(name_as_os_string(&entry.name));
            ensure_parent_dir(&out_path)?;

            let mut out = BufWriter::new(File::create(&out_path)?);
            self.codec
                .decode_stream(&mut reader, &mut out, entry.original_size)?;
            out.flush()?;
        }

        Ok(selected)
    }

    /// Append input files to an existing archive.
    ///
    /// The archive is rebuilt into a staged file: a new header covering the
    /// old and new entries with recomputed offsets, the old payloads copied
    /// byte for byte (never re-encoded), then the new inputs encoded. The
    /// staged file replaces the archive only on success.
    ///
    /// Returns the appended entries, offsets assigned.
    pub fn append(&self, inputs: &[PathBuf]) -> Result<Vec<ArchiveEntry>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let old_entries = format::read_header(&mut reader)?;
        let pending = self.collect_inputs(inputs)?;

        let mut all: Vec<ArchiveEntry> = old_entries
            .iter()
            .cloned()
            .chain(pending.iter().map(|p| p.entry.clone()))
            .collect();
        format::assign_offsets(&mut all);

        self.rewrite(|archiver, out| {
            format::write_header(out, &all)?;
            for old in &old_entries {
                copy_payload(&mut reader, old.offset, old.encoded_size, out)?;
            }
            for input in &pending {
                let source = BufReader::new(File::open(&input.source)?);
                archiver.codec.encode_stream(source, &mut *out)?;
            }
            Ok(())
        })?;

        Ok(all.split_off(old_entries.len()))
    }

    /// Delete the named entries from the archive.
    ///
    /// Every requested name must be present, and at least one entry must
    /// actually be removed. The survivors are rebuilt into a staged file
    /// with recomputed offsets, their payloads copied byte for byte from
    /// their pre-rewrite positions.
    ///
    /// Returns the kept entries, offsets assigned.
    pub fn delete(&self, names: &[String]) -> Result<Vec<ArchiveEntry>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let old_entries = format::read_header(&mut reader)?;

        for name in names {
            if !old_entries.iter().any(|e| e.name == name.as_bytes()) {
                return Err(HafError::entry_not_found(name.as_str()));
            }
        }

        // Survivors with their pre-rewrite offsets, for the payload copies.
        let kept_old: Vec<ArchiveEntry> = old_entries
            .iter()
            .filter(|e| !names.iter().any(|n| e.name == n.as_bytes()))
            .cloned()
            .collect();
        if kept_old.len() == old_entries.len() {
            return Err(HafError::NothingDeleted);
        }

        let mut kept = kept_old.clone();
        format::assign_offsets(&mut kept);

        self.rewrite(|_, out| {
            format::write_header(out, &kept)?;
            for old in &kept_old {
                copy_payload(&mut reader, old.offset, old.encoded_size, out)?;
            }
            Ok(())
        })?;

        Ok(kept)
    }

    /// Merge two or more source archives into this archive.
    ///
    /// Entries keep their per-source order. A name already taken by an
    /// earlier source is renamed by appending `(2)`, `(3)`, ... until free;
    /// the first occurrence keeps its name. Payload regions are copied
    /// whole, source by source, so the encoded bytes are preserved verbatim.
    ///
    /// Returns the combined entries, offsets assigned.
    pub fn concatenate(&self, sources: &[PathBuf]) -> Result<Vec<ArchiveEntry>> {
        if sources.len() < 2 {
            return Err(HafError::invalid_parameter(
                "concatenate requires at least two source archives",
            ));
        }

        let mut combined: Vec<ArchiveEntry> = Vec::new();
        let mut used_names: HashSet<Vec<u8>> = HashSet::new();
        let mut regions: Vec<SourceRegion> = Vec::with_capacity(sources.len());

        for source in sources {
            let file = File::open(source)?;
            let total_len = file.metadata()?.len();
            let mut reader = BufReader::new(file);

            let entries = format::read_header(&mut reader)?;
            let data_start = reader.stream_position()?;

            for mut entry in entries {
                if used_names.contains(&entry.name) {
                    entry.name = next_free_name(&entry.name, &used_names);
                }
                used_names.insert(entry.name.clone());
                combined.push(entry);
            }

            regions.push(SourceRegion {
                path: source.clone(),
                data_start,
                data_length: total_len.saturating_sub(data_start),
            });
        }

        format::assign_offsets(&mut combined);

        ensure_parent_dir(&self.path)?;
        self.rewrite(|_, out| {
            format::write_header(out, &combined)?;
            for region in &regions {
                let mut source = BufReader::new(File::open(&region.path)?);
                copy_payload(&mut source, region.data_start, region.data_length, out)?;
            }
            Ok(())
        })?;

        Ok(combined)
    }

    /// Validate the input files and build their entries in input order.
    fn collect_inputs(&self, inputs: &[PathBuf]) -> Result<Vec<PendingInput>> {
        let mut pending = Vec::with_capacity(inputs.len());

        for path in inputs {
            let metadata = match fs::metadata(path) {
                Ok(m) if m.is_file() => m,
                _ => return Err(HafError::input_not_found(path.display().to_string())),
            };

            // Basename bytes are captured as-is; no charset coercion.
            let name = path
                .file_name()
                .map(|n| n.as_encoded_bytes().to_vec())
                .ok_or_else(|| HafError::input_not_found(path.display().to_string()))?;

            let original_size = metadata.len();
            let encoded_size = self.codec.encoded_len(original_size);
            pending.push(PendingInput {
                source: path.clone(),
                entry: ArchiveEntry::new(name, original_size, encoded_size),
            });
        }

        Ok(pending)
    }

    /// Write header and encoded payloads for a fresh archive.
    fn write_entries(
        &self,
        out: &mut BufWriter<File>,
        entries: &[ArchiveEntry],
        pending: &[PendingInput],
    ) -> Result<()> {
        format::write_header(out, entries)?;
        for input in pending {
            let source = BufReader::new(File::open(&input.source)?);
            self.codec.encode_stream(source, &mut *out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Run `write` against a staged `<archive>.tmp` file, then replace the
    /// archive with it. On any failure the staged file is removed and the
    /// original archive is left untouched.
    fn rewrite<F>(&self, write: F) -> Result<()>
    where
        F: FnOnce(&Self, &mut BufWriter<File>) -> Result<()>,
    {
        let staged = self.stage_path();
        let _ = fs::remove_file(&staged);

        let mut out = BufWriter::new(File::create(&staged)?);
        let result = write(self, &mut out).and_then(|()| out.flush().map_err(HafError::from));
        drop(out);

        if let Err(err) = result {
            let _ = fs::remove_file(&staged);
            return Err(err);
        }

        let _ = fs::remove_file(&self.path);
        if let Err(err) = fs::rename(&staged, &self.path) {
            let _ = fs::remove_file(&staged);
            return Err(err.into());
        }

        Ok(())
    }

    /// The staging target next to the archive.
    fn stage_path(&self) -> PathBuf {
        let mut staged = self.path.as_os_str().to_os_string();
        staged.push(".tmp");
        PathBuf::from(staged)
    }
}

/// Resolve an extraction request against the header entries.
fn select_entries(entries: &[ArchiveEntry], names: &[String]) -> Result<Vec<ArchiveEntry>> {
    if names.is_empty() {
        return Ok(entries.to_vec());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let entry = entries
            .iter()
            .find(|e| e.name == name.as_bytes())
            .ok_or_else(|| HafError::entry_not_found(name.as_str()))?;
        selected.push(entry.clone());
    }
    Ok(selected)
}

/// First `name(2)`, `name(3)`, ... not yet taken.
fn next_free_name(original: &[u8], used: &HashSet<Vec<u8>>) -> Vec<u8> {
    let mut suffix = 2u32;
    loop {
        let mut candidate = original.to_vec();
        candidate.extend_from_slice(format!("({suffix})").as_bytes());
        if !used.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Turn stored name bytes back into a path component for extraction.
///
/// On Unix the bytes map to the filesystem name exactly; elsewhere names
/// that are not valid UTF-8 fall back to a lossy rendering, since the
/// platform cannot represent arbitrary bytes in a path. The header bytes
/// themselves are never altered.
#[cfg(unix)]
fn name_as_os_string(name: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(name).to_os_string()
}

#[cfg(not(unix))]
fn name_as_os_string(name: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(name).into_owned())
}

/// Copy exactly `length` bytes starting at `offset` from `reader` into
/// `writer`.
fn copy_payload<R, W>(reader: &mut R, offset: u64, length: u64, writer: &mut W) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    reader.seek(SeekFrom::Start(offset))?;
    let copied = io::copy(&mut reader.by_ref().take(length), writer)?;
    if copied != length {
        return Err(HafError::unexpected_eof((length - copied) as usize));
    }
    Ok(())
}

/// Create the parent directory of `path` if it has one and it is missing.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_free_name() {
        let mut used = HashSet::new();
        used.insert(b"dup.bin".to_vec());
        assert_eq!(next_free_name(b"dup.bin", &used), b"dup.bin(2)");

        used.insert(b"dup.bin(2)".to_vec());
        used.insert(b"dup.bin(3)".to_vec());
        assert_eq!(next_free_name(b"dup.bin", &used), b"dup.bin(4)");
    }

    #[test]
    fn test_stage_path_keeps_extension() {
        let archiver = Archiver::new("/data/backup.haf", HammingOptions::DEFAULT);
        assert_eq!(archiver.stage_path(), PathBuf::from("/data/backup.haf.tmp"));
    }

    #[test]
    fn test_select_entries_preserves_request_order() {
        let entries = vec![
            ArchiveEntry::new("a", 1, 2),
            ArchiveEntry::new("b", 3, 5),
            ArchiveEntry::new("c", 8, 13),
        ];

        let selected = select_entries(&entries, &["c".into(), "a".into()]).unwrap();
        assert_eq!(selected[0].name, b"c");
        assert_eq!(selected[1].name, b"a");

        let all = select_entries(&entries, &[]).unwrap();
        assert_eq!(all.len(), 3);

        assert!(select_entries(&entries, &["zzz".into()]).is_err());
    }
}
