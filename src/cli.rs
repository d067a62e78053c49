// src/cli.rs
use std::path::PathBuf;

use crate::config::AuditOptions;
use crate::error::{AuditError, Result};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(AuditOptions),
    Help,
}

/// Parse arguments (program name already stripped).
/// No arguments → defaults, paths relative to the current directory.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AuditOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--root" => opts.inputs.root = path_value(&mut args, "--root")?,
            "--reference" => opts.inputs.reference = path_value(&mut args, "--reference")?,
            "--listings" => opts.inputs.listings = path_value(&mut args, "--listings")?,
            "--profiles" => opts.inputs.profiles = path_value(&mut args, "--profiles")?,
            "-v" | "--verbose" => opts.verbosity = opts.verbosity.saturating_add(1),
            "-vv" => opts.verbosity = opts.verbosity.saturating_add(2),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Run(opts))
}

fn path_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf> {
    let v = args
        .next()
        .ok_or_else(|| usage(format!("Missing value for {flag}")))?;
    if v.trim().is_empty() {
        return Err(usage(format!("Empty value for {flag}")));
    }
    Ok(PathBuf::from(v))
}

fn usage(msg: String) -> AuditError {
    AuditError::Usage(msg)
}
