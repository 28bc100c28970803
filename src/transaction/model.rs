use serde::{Deserialize, Serialize};

/// A value transfer between two identifiers.
///
/// The core performs no semantic validation here: identifier format and amount
/// sanity are the submitting layer's problem. The mining reward (sender `"0"`,
/// amount 1, paid to the local node id) travels through the pool as an
/// ordinary transaction with no special-casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}
