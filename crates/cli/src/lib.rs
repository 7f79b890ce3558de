#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `pdf-flate` command-line front-end. It reads one
//! stream from a file or standard input, runs it through the declared stream
//! filter (`FlateDecode` unless told otherwise), and writes the result to a
//! file or standard output.
//!
//! # Design
//!
//! [`run`] accepts the argument list together with handles for standard
//! input, output, and error so tests can drive it in memory. Arguments are
//! parsed with a [`clap`](https://docs.rs/clap/) command definition and then
//! validated: mode names and filter names are parsed before any input is
//! read, so an unrecognised value fails without touching the payload.
//!
//! # Errors
//!
//! Diagnostics are written to the error handle prefixed with the program
//! name. Exit codes classify the failure: [`EXIT_USAGE`] for rejected
//! arguments, [`EXIT_MALFORMED`] for corrupt streams,
//! [`EXIT_NOT_IMPLEMENTED`] for filters without an implementation, and
//! [`EXIT_IO`] for read or write failures.
//!
//! # Examples
//!
//! ```
//! let mut stdin = &b"stream payload"[..];
//! let mut encoded = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["pdf-flate", "--mode", "best-speed"], &mut stdin, &mut encoded, &mut stderr);
//! assert_eq!(status, 0);
//!
//! let mut decoded = Vec::new();
//! let status = cli::run(["pdf-flate", "-d"], &mut encoded.as_slice(), &mut decoded, &mut stderr);
//! assert_eq!(status, 0);
//! assert_eq!(decoded, b"stream payload");
//! ```

mod args;
mod error;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;
use filters::{Filter, FilterName, FlateDecode};
use logging::LogConfig;

use args::{Operation, PROGRAM_NAME, ParsedArgs, clap_command};
use error::CliError;
pub use error::{EXIT_IO, EXIT_MALFORMED, EXIT_NOT_IMPLEMENTED, EXIT_USAGE};

/// Parses `arguments` and performs the requested operation.
///
/// Returns the process exit code; `0` on success.
pub fn run<I, T, In, Out, ErrOut>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut ErrOut,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    In: Read + ?Sized,
    Out: Write + ?Sized,
    ErrOut: Write + ?Sized,
{
    let matches = match clap_command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(err) => {
            return match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{err}");
                    0
                }
                _ => {
                    let _ = write!(stderr, "{err}");
                    EXIT_USAGE
                }
            };
        }
    };

    let result = ParsedArgs::from_matches(&matches).and_then(|parsed| {
        logging::init_tracing(LogConfig::from_verbose_level(parsed.verbose));
        execute(&parsed, stdin, stdout)
    });

    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {err}");
            err.exit_code()
        }
    }
}

fn execute<In, Out>(parsed: &ParsedArgs, stdin: &mut In, stdout: &mut Out) -> Result<(), CliError>
where
    In: Read + ?Sized,
    Out: Write + ?Sized,
{
    let filter = build_filter(parsed)?;
    let input = read_input(parsed.input.as_ref(), stdin)?;

    let output = match parsed.operation {
        Operation::Checksum => format!("{:08x}\n", checksums::adler32(&input)).into_bytes(),
        Operation::Encode => filter.encode(&input)?,
        Operation::Decode => filter.decode(&input, &parsed.parms)?,
    };

    tracing::info!(
        target: "flate::cli",
        operation = ?parsed.operation,
        filter = %parsed.filter,
        input = input.len(),
        output = output.len(),
        "stream processed"
    );

    write_output(parsed.output.as_ref(), stdout, &output)
}

fn build_filter(parsed: &ParsedArgs) -> Result<Box<dyn Filter>, CliError> {
    match parsed.filter {
        FilterName::FlateDecode => Ok(Box::new(
            FlateDecode::new()
                .with_mode(parsed.mode)
                .with_decode_options(parsed.decode_options),
        )),
        other => Ok(filters::filter_for(other)?),
    }
}

fn read_input<In: Read + ?Sized>(path: Option<&PathBuf>, stdin: &mut In) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => fs::read(path).map_err(|err| CliError::io(Some(path), err)),
        None => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .map_err(|err| CliError::io(None, err))?;
            Ok(buffer)
        }
    }
}

fn write_output<Out: Write + ?Sized>(
    path: Option<&PathBuf>,
    stdout: &mut Out,
    bytes: &[u8],
) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|err| CliError::io(Some(path), err)),
        None => stdout
            .write_all(bytes)
            .and_then(|()| stdout.flush())
            .map_err(|err: io::Error| CliError::io(None, err)),
    }
}
