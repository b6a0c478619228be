//! Decoder configuration.

/// Length of the opaque header prefix, in bytes.
pub const HEADER_LEN: usize = 5;

/// Account whose balance is tracked in the reference deployment.
pub const DEFAULT_TARGET_USER: u64 = 2456938384156277127;

/// Read-only settings for a [`LogDecoder`](crate::LogDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Number of header bytes skipped before the record count.
    pub header_len: usize,

    /// User whose net balance is accumulated.
    pub target_user: u64,
}

impl DecoderConfig {
    /// Returns the config with a different target user.
    pub fn with_target_user(mut self, user: u64) -> Self {
        self.target_user = user;
        self
    }

    /// Returns the config with a different header length.
    pub fn with_header_len(mut self, len: usize) -> Self {
        self.header_len = len;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            header_len: HEADER_LEN,
            target_user: DEFAULT_TARGET_USER,
        }
    }
}
