use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// One entry of the ledger: a transaction snapshot chained to its predecessor
/// by that predecessor's digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // Unix seconds (UTC), fractional part kept
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Current wall-clock time as fractional Unix seconds.
    pub fn now() -> f64 {
        chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }

    /// Compute the SHA-256 digest of this block over its canonical JSON
    /// encoding (object keys sorted), rendered as lowercase hex.
    ///
    /// Any change to any field, including the timestamp's fractional part or
    /// a single transaction's amount, yields a different digest.
    pub fn digest(&self) -> String {
        // serde_json::Value objects serialize with sorted keys, which gives
        // the canonical encoding regardless of struct field order.
        let canonical = serde_json::to_value(self).expect("serialize block");
        let encoded = serde_json::to_string(&canonical).expect("encode block");
        let mut hasher = Sha256::new();
        hasher.update(encoded.as_bytes());
        hex::encode(hasher.finalize())
    }
}
