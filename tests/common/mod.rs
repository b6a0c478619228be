//! Shared helpers for building transaction logs in tests.

#![allow(dead_code)]

/// Builds a binary transaction log record by record.
pub struct LogBuilder {
    header: Vec<u8>,
    count: Option<u32>,
    body: Vec<u8>,
    records: u32,
}

impl LogBuilder {
    pub fn new() -> Self {
        LogBuilder {
            header: b"MPS7\x01".to_vec(),
            count: None,
            body: Vec::new(),
            records: 0,
        }
    }

    /// Overrides the declared record count.
    pub fn declared_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn debit(self, user: u64, amount: f64) -> Self {
        self.record(0, user, Some(amount))
    }

    pub fn credit(self, user: u64, amount: f64) -> Self {
        self.record(1, user, Some(amount))
    }

    pub fn start(self, user: u64) -> Self {
        self.record(2, user, None)
    }

    pub fn end(self, user: u64) -> Self {
        self.record(3, user, None)
    }

    /// Appends a record with an arbitrary tag.
    pub fn raw(self, tag: u8, user: u64, amount: Option<f64>) -> Self {
        self.record(tag, user, amount)
    }

    fn record(mut self, tag: u8, user: u64, amount: Option<f64>) -> Self {
        self.body.push(tag);
        self.body.extend_from_slice(&1_393_108_945u32.to_be_bytes());
        self.body.extend_from_slice(&user.to_be_bytes());
        if let Some(amount) = amount {
            self.body.extend_from_slice(&amount.to_be_bytes());
        }
        self.records += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = self.header;
        bytes.extend_from_slice(&self.count.unwrap_or(self.records).to_be_bytes());
        bytes.extend(self.body);
        bytes
    }
}
