//! Single-pass decoder for the binary transaction log.
//!
//! Skips the opaque header, reads the big-endian record count and folds exactly
//! that many records into a [`LogSummary`]. Any truncated field or unknown tag
//! aborts the pass; no partial summary is ever returned.

use crate::config::DecoderConfig;
use crate::error::{AuditError, Position, Result};
use crate::record::LogRecord;
use crate::summary::LogSummary;
use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Decodes transaction logs with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct LogDecoder {
    config: DecoderConfig,
}

impl LogDecoder {
    /// Creates a decoder for the given configuration.
    pub fn new(config: DecoderConfig) -> Self {
        LogDecoder { config }
    }

    /// Returns the decoder's configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a whole log from `reader`, positioned at its first byte.
    ///
    /// Trailing bytes after the last declared record are left unread.
    pub fn decode<R: Read>(&self, mut reader: R) -> Result<LogSummary> {
        self.skip_header(&mut reader)?;

        let count = reader
            .read_u32::<BigEndian>()
            .map_err(|e| AuditError::truncated(e, Position::RecordCount, "record count"))?;
        debug!("Log declares {} records", count);

        let mut summary = LogSummary::new();
        for index in 0..count {
            let record = LogRecord::read_from(&mut reader, index)?;
            trace!(
                "Record {}: {:?} user={} time={}",
                index,
                record.kind,
                record.user,
                record.time
            );
            summary.apply(&record, self.config.target_user);
        }

        debug!(
            "Decoded {} records: debits={} credits={} started={} ended={} balance={}",
            count, summary.debits, summary.credits, summary.started, summary.ended, summary.balance
        );
        Ok(summary)
    }

    /// Opens and decodes the log file at `path`.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<LogSummary> {
        let path = path.as_ref();
        debug!("Opening transaction log {}", path.display());
        let file = File::open(path)?;
        self.decode(BufReader::new(file))
    }

    /// Consumes the header bytes without inspecting them.
    fn skip_header<R: Read>(&self, reader: &mut R) -> Result<()> {
        let wanted = self.config.header_len as u64;
        let skipped = io::copy(&mut reader.by_ref().take(wanted), &mut io::sink())
            .map_err(|e| AuditError::truncated(e, Position::Header, "header"))?;

        if skipped < wanted {
            return Err(AuditError::TruncatedInput {
                position: Position::Header,
                field: "header",
            });
        }
        Ok(())
    }
}
