//! Running totals folded from a transaction log.

use crate::error::Result;
use crate::record::{LogRecord, RecordKind};
use serde::Serialize;
use std::io::Write;

/// Aggregate of one decode pass.
///
/// # Invariants
///
/// - `debits` and `credits` are the sums of every debit and credit amount seen,
///   regardless of user
/// - `started` and `ended` are exact counts of autopay start and end records
/// - `balance` only moves for records whose user is the configured target
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogSummary {
    /// Total debited amount across all users.
    pub debits: f64,

    /// Total credited amount across all users.
    pub credits: f64,

    /// Number of autopay start records.
    pub started: u64,

    /// Number of autopay end records.
    pub ended: u64,

    /// Net balance of the target user: credits minus debits.
    pub balance: f64,
}

impl LogSummary {
    /// Creates an all-zero summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a single record into the totals.
    pub fn apply(&mut self, record: &LogRecord, target_user: u64) {
        let is_target = record.user == target_user;

        match record.kind {
            RecordKind::Debit(amount) => {
                self.debits += amount;
                if is_target {
                    self.balance -= amount;
                }
            }
            RecordKind::Credit(amount) => {
                self.credits += amount;
                if is_target {
                    self.balance += amount;
                }
            }
            RecordKind::AutopayStart => self.started += 1,
            RecordKind::AutopayEnd => self.ended += 1,
        }
    }

    /// Writes the human-readable report, one value per line.
    pub fn write_report<W: Write>(&self, target_user: u64, mut writer: W) -> Result<()> {
        writeln!(writer, "total credit amount={}", format_amount(self.credits))?;
        writeln!(writer, "total debit amount={}", format_amount(self.debits))?;
        writeln!(writer, "autopays started={}", self.started)?;
        writeln!(writer, "autopays ended={}", self.ended)?;
        writeln!(
            writer,
            "balance for user {}={}",
            target_user,
            format_amount(self.balance)
        )?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the summary as a CSV header plus a single row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.serialize(self)?;
        csv_writer.flush()?;
        Ok(())
    }
}

/// Formats an amount as its shortest round-trip repr.
///
/// Integral values keep a trailing `.0`; exponents carry an explicit sign and at
/// least two digits (`1e+16`, `1e-05`).
fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
