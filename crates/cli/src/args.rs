use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::OsStringValueParser};
use compress::CompressionMode;
use compress::zlib::{ChecksumPolicy, DecodeOptions};
use filters::{FilterName, FilterParms};

use crate::error::CliError;

/// Program name used in usage output and diagnostics.
pub(crate) const PROGRAM_NAME: &str = "pdf-flate";

/// Direction of the transform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Operation {
    Encode,
    Decode,
    Checksum,
}

/// Validated command-line options.
#[derive(Clone, Debug)]
pub(crate) struct ParsedArgs {
    pub(crate) operation: Operation,
    pub(crate) mode: CompressionMode,
    pub(crate) filter: FilterName,
    pub(crate) decode_options: DecodeOptions,
    pub(crate) parms: FilterParms,
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) verbose: u8,
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode or decode FlateDecode (zlib) document streams")
        .arg(
            Arg::new("decode")
                .long("decode")
                .short('d')
                .help("Decode INPUT instead of encoding it.")
                .action(ArgAction::SetTrue)
                .conflicts_with("adler32"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .value_name("MODE")
                .help("Encoder mode: default, best-compression, or best-speed.")
                .default_value("default")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("NAME")
                .help("Declared stream filter name.")
                .default_value("FlateDecode")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("param")
                .long("param")
                .value_name("KEY=VALUE")
                .help("Decode parameter forwarded to the filter.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-verify")
                .long("no-verify")
                .help("Do not check the Adler-32 trailer when decoding.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict-header")
                .long("strict-header")
                .help("Reject zlib headers with a wrong method or check bits.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("adler32")
                .long("adler32")
                .help("Print the Adler-32 checksum of INPUT and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write the result to FILE instead of standard output.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Input file; standard input when omitted or '-'.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
}

impl ParsedArgs {
    /// Converts clap matches into validated options.
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let operation = if matches.get_flag("adler32") {
            Operation::Checksum
        } else if matches.get_flag("decode") {
            Operation::Decode
        } else {
            Operation::Encode
        };

        let mode = matches
            .get_one::<String>("mode")
            .map_or(Ok(CompressionMode::Default), |name| name.parse())?;
        let filter = matches
            .get_one::<String>("filter")
            .map_or(Ok(FilterName::FlateDecode), |name| name.parse())?;

        let checksum = if matches.get_flag("no-verify") {
            ChecksumPolicy::Ignore
        } else {
            ChecksumPolicy::Verify
        };
        let decode_options = DecodeOptions::default()
            .with_checksum(checksum)
            .with_strict_header(matches.get_flag("strict-header"));

        let mut parms = FilterParms::new();
        for entry in matches.get_many::<String>("param").into_iter().flatten() {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| CliError::InvalidArgument(format!("parameter '{entry}' is not KEY=VALUE")))?;
            parms.insert(key, value);
        }

        let input = matches
            .get_one::<OsString>("input")
            .filter(|path| path.as_os_str() != "-")
            .map(PathBuf::from);
        let output = matches.get_one::<OsString>("output").map(PathBuf::from);

        Ok(Self {
            operation,
            mode,
            filter,
            decode_options,
            parms,
            input,
            output,
            verbose: matches.get_count("verbose"),
        })
    }
}
