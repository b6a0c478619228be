//! Error types for the transaction log auditor.

use log::debug;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Where in the log a read was taking place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The opaque header prefix.
    Header,
    /// The record count following the header.
    RecordCount,
    /// A record, by 0-based index.
    Record(u32),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Header => write!(f, "header"),
            Position::RecordCount => write!(f, "record count"),
            Position::Record(index) => write!(f, "record {}", index),
        }
    }
}

/// Errors that can occur while decoding or reporting a log.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The byte source ended before a field was fully read
    #[error("Truncated input: {position} ended while reading {field}")]
    TruncatedInput {
        position: Position,
        field: &'static str,
    },

    /// Record tag outside the known set
    #[error("Unknown record type {tag} at record {record}")]
    UnknownRecordType { tag: u8, record: u32 },

    /// Failed to open the input file or write the report
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV report writing error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: txnlog-audit <log-file> [--user <id>] [--csv]")]
    MissingArgument,

    /// Unparseable command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AuditError {
    /// Maps a failed read of `field` at `position` to [`AuditError::TruncatedInput`].
    ///
    /// Every read error counts, including a source closed or invalidated mid-decode.
    pub(crate) fn truncated(err: io::Error, position: Position, field: &'static str) -> Self {
        debug!("Read of {} at {} failed: {}", field, position, err);
        AuditError::TruncatedInput { position, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_maps_to_truncated() {
        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let mapped = AuditError::truncated(err, Position::Record(3), "amount");
        assert!(matches!(
            mapped,
            AuditError::TruncatedInput {
                position: Position::Record(3),
                field: "amount"
            }
        ));
    }

    #[test]
    fn test_closed_source_maps_to_truncated() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let mapped = AuditError::truncated(err, Position::Header, "header");
        assert!(matches!(
            mapped,
            AuditError::TruncatedInput {
                position: Position::Header,
                field: "header"
            }
        ));
    }

    #[test]
    fn test_messages_name_the_record() {
        let err = AuditError::UnknownRecordType { tag: 9, record: 4 };
        assert_eq!(err.to_string(), "Unknown record type 9 at record 4");

        let err = AuditError::TruncatedInput {
            position: Position::Record(0),
            field: "user",
        };
        assert_eq!(
            err.to_string(),
            "Truncated input: record 0 ended while reading user"
        );
    }
}
