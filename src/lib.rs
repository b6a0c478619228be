//! # Transaction Log Audit
//!
//! A single-pass decoder for a fixed-layout binary transaction log. It folds
//! debit, credit and autopay records into running totals plus the net balance
//! of one configured user.
//!
//! ## Log Format
//!
//! - 5 opaque header bytes, skipped
//! - `u32` big-endian record count
//! - per record: `u8` tag, `u32` time, `u64` user, and an `f64` amount for
//!   debits (tag 0) and credits (tag 1); tags 2 and 3 are autopay start/end
//!
//! Any truncated field or unknown tag fails the whole decode.
//!
//! ## Example
//!
//! ```no_run
//! use txnlog_audit::{DecoderConfig, LogDecoder};
//!
//! let decoder = LogDecoder::new(DecoderConfig::default());
//! let summary = decoder.decode_file("txnlog.dat").unwrap();
//! summary
//!     .write_report(decoder.config().target_user, std::io::stdout())
//!     .unwrap();
//! ```

pub mod config;
pub mod decoder;
pub mod error;
pub mod record;
pub mod summary;

pub use config::{DecoderConfig, DEFAULT_TARGET_USER, HEADER_LEN};
pub use decoder::LogDecoder;
pub use error::{AuditError, Position, Result};
pub use record::{LogRecord, RecordKind, RecordTag};
pub use summary::LogSummary;
