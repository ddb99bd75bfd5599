//! HAF CLI — the Hamming-protected archiver.
//!
//! Packs files into a single container whose per-file payloads are protected
//! by a parametric Hamming single-error-correcting code; isolated single-bit
//! corruption is silently repaired on extraction.

mod commands;

use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use haf_archive::Archiver;
use haf_hamming::HammingOptions;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "haf", version)]
#[command(about = "Hamming-protected file archiver")]
#[command(long_about = "\
HAF packs files into a single archive whose payloads are protected by a
parametric Hamming code: single-bit corruption inside a payload is silently
repaired on extraction.

The archive does not record the Hamming parameters; pass the same
-D/-P values when reading an archive as were used to write it.

Examples:
  haf --create -f backup.haf notes.txt data.bin
  haf --list -f backup.haf
  haf --extract -f backup.haf notes.txt
  haf --append -f backup.haf more.bin
  haf --delete -f backup.haf data.bin
  haf --concatenate -f merged.haf one.haf two.haf
")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["create", "list", "extract", "append", "delete", "concatenate"])
))]
struct Cli {
    /// Create a new archive from the given files
    #[arg(short = 'c', long)]
    create: bool,

    /// List the files in the archive
    #[arg(short = 'l', long)]
    list: bool,

    /// Extract files from the archive into the current directory
    #[arg(short = 'x', long)]
    extract: bool,

    /// Append files to an existing archive
    #[arg(short = 'a', long)]
    append: bool,

    /// Delete files from the archive
    #[arg(short = 'd', long)]
    delete: bool,

    /// Concatenate source archives into the archive
    #[arg(short = 'A', long)]
    concatenate: bool,

    /// Archive file path
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// Hamming data bits per block (k)
    #[arg(
        short = 'D',
        long = "hamming-data-bits",
        value_name = "N",
        default_value_t = 8,
        value_parser = clap::value_parser!(u8).range(1..=16)
    )]
    hamming_data_bits: u8,

    /// Hamming parity bits per block (r)
    #[arg(
        short = 'P',
        long = "hamming-parity-bits",
        value_name = "N",
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    hamming_parity_bits: u8,

    /// File names: inputs for create/append, member names for extract/delete,
    /// source archives for concatenate
    #[arg(value_name = "FILES")]
    files: Vec<String>,
}

/// Per-mode positional requirements.
fn validate_positionals(cli: &Cli) -> Result<(), String> {
    if (cli.create || cli.append || cli.delete) && cli.files.is_empty() {
        return Err("this mode requires at least one file name".to_string());
    }
    if cli.concatenate && cli.files.len() < 2 {
        return Err("concatenate requires at least two source archives".to_string());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version exit 0; every argument error exits 1.
            let success = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    if let Err(message) = validate_positionals(&cli) {
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    let options = match HammingOptions::new(cli.hamming_data_bits, cli.hamming_parity_bits) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let archiver = Archiver::new(&cli.file, options);

    let result = if cli.create {
        commands::cmd_create(&archiver, &cli.files)
    } else if cli.list {
        commands::cmd_list(&archiver)
    } else if cli.extract {
        commands::cmd_extract(&archiver, &cli.files)
    } else if cli.append {
        commands::cmd_append(&archiver, &cli.files)
    } else if cli.delete {
        commands::cmd_delete(&archiver, &cli.files)
    } else {
        commands::cmd_concatenate(&archiver, &cli.files)
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
