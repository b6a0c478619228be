//! Record models for the binary transaction log.
//!
//! Every record starts with a 1-byte tag, a big-endian `u32` time and a
//! big-endian `u64` user. Debit and credit records carry a trailing
//! big-endian IEEE-754 `f64` amount.

use crate::error::{AuditError, Position, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// The closed set of record tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordTag {
    Debit = 0,
    Credit = 1,
    AutopayStart = 2,
    AutopayEnd = 3,
}

impl TryFrom<u8> for RecordTag {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(RecordTag::Debit),
            1 => Ok(RecordTag::Credit),
            2 => Ok(RecordTag::AutopayStart),
            3 => Ok(RecordTag::AutopayEnd),
            other => Err(other),
        }
    }
}

/// Record type with associated data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordKind {
    /// Funds debited from the user.
    Debit(f64),

    /// Funds credited to the user.
    Credit(f64),

    /// An autopay was started.
    AutopayStart,

    /// An autopay was ended.
    AutopayEnd,
}

/// A single decoded log record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRecord {
    /// Record timestamp. Not aggregated.
    pub time: u32,

    /// Account identifier
    pub user: u64,

    /// Record type with associated data
    pub kind: RecordKind,
}

impl LogRecord {
    /// Reads one record from `reader`.
    ///
    /// `index` is the 0-based record number, used only for error reporting.
    /// The tag is validated before `time` and `user` are read, so an unknown tag
    /// is reported even when the rest of the record is missing.
    pub fn read_from<R: Read>(reader: &mut R, index: u32) -> Result<Self> {
        let at = Position::Record(index);

        let raw = reader
            .read_u8()
            .map_err(|e| AuditError::truncated(e, at, "tag"))?;
        let tag = RecordTag::try_from(raw)
            .map_err(|tag| AuditError::UnknownRecordType { tag, record: index })?;

        let time = reader
            .read_u32::<BigEndian>()
            .map_err(|e| AuditError::truncated(e, at, "time"))?;
        let user = reader
            .read_u64::<BigEndian>()
            .map_err(|e| AuditError::truncated(e, at, "user"))?;

        let kind = match tag {
            RecordTag::Debit => RecordKind::Debit(read_amount(reader, at)?),
            RecordTag::Credit => RecordKind::Credit(read_amount(reader, at)?),
            RecordTag::AutopayStart => RecordKind::AutopayStart,
            RecordTag::AutopayEnd => RecordKind::AutopayEnd,
        };

        Ok(LogRecord { time, user, kind })
    }

    /// Returns the tag this record was decoded from.
    pub fn tag(&self) -> RecordTag {
        match self.kind {
            RecordKind::Debit(_) => RecordTag::Debit,
            RecordKind::Credit(_) => RecordTag::Credit,
            RecordKind::AutopayStart => RecordTag::AutopayStart,
            RecordKind::AutopayEnd => RecordTag::AutopayEnd,
        }
    }
}

fn read_amount<R: Read>(reader: &mut R, at: Position) -> Result<f64> {
    reader
        .read_f64::<BigEndian>()
        .map_err(|e| AuditError::truncated(e, at, "amount"))
}
