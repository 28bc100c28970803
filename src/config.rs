use std::env;

use crate::ledger::{DEFAULT_DIFFICULTY, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// Runtime settings read from the environment at startup (`.env` supported).
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Proof-of-Work difficulty: leading zero hex characters required.
    pub difficulty: usize,
    pub genesis_proof: u64,
    pub genesis_previous_hash: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 5000),
            difficulty: parse_or("DIFFICULTY", DEFAULT_DIFFICULTY),
            genesis_proof: parse_or("GENESIS_PROOF", GENESIS_PROOF),
            genesis_previous_hash: env::var("GENESIS_PREVIOUS_HASH")
                .unwrap_or_else(|_| GENESIS_PREVIOUS_HASH.to_string()),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
