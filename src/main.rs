//! Transaction Log Audit CLI
//!
//! Decodes a binary transaction log and prints the aggregated totals.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- txnlog.dat
//! cargo run -- txnlog.dat --user 2456938384156277127 --csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `trace` to control logging verbosity

use std::env;
use std::io;
use std::process;
use txnlog_audit::{AuditError, DecoderConfig, LogDecoder, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command-line options.
struct Options {
    input_path: String,
    config: DecoderConfig,
    csv: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut input_path = None;
    let mut config = DecoderConfig::default();
    let mut csv = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => csv = true,
            "--user" => {
                let value = args
                    .next()
                    .ok_or_else(|| AuditError::InvalidArgument("--user needs a value".into()))?;
                let user = value.parse::<u64>().map_err(|e| {
                    AuditError::InvalidArgument(format!("--user {}: {}", value, e))
                })?;
                config = config.with_target_user(user);
            }
            flag if flag.starts_with("--") => {
                return Err(AuditError::InvalidArgument(format!("unknown flag {}", flag)));
            }
            _ if input_path.is_none() => input_path = Some(arg),
            _ => {
                return Err(AuditError::InvalidArgument(format!(
                    "unexpected argument {}",
                    arg
                )));
            }
        }
    }

    Ok(Options {
        input_path: input_path.ok_or(AuditError::MissingArgument)?,
        config,
        csv,
    })
}

fn run() -> Result<()> {
    let options = parse_args(env::args().skip(1))?;

    let decoder = LogDecoder::new(options.config);
    let summary = decoder.decode_file(&options.input_path)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if options.csv {
        summary.write_csv(handle)?;
    } else {
        summary.write_report(decoder.config().target_user, handle)?;
    }

    Ok(())
}
