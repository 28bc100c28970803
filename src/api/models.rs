use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::config::Settings;
use crate::ledger::{Block, Ledger};
use crate::registry::NodeRegistry;
use crate::transaction::Transaction;

/// Shared application state: the in-memory ledger, the peer registry and this
/// node's identity. Mutations to the ledger (submit, mine, replace) serialize
/// on its mutex.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub registry: Mutex<NodeRegistry>,
    pub node_id: String,
    pub difficulty: usize,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new(
                settings.genesis_proof,
                &settings.genesis_previous_hash,
            )),
            registry: Mutex::new(NodeRegistry::new()),
            node_id: Uuid::new_v4().simple().to_string(),
            difficulty: settings.difficulty,
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub block: Block,
}

/* ---------- Transaction API Models ---------- */

#[derive(Deserialize)]
pub struct NewTransactionRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct NewTransactionResponse {
    pub message: String,
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub size: usize,
    pub transactions: &'a [Transaction],
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub message: &'static str,
    pub replaced: bool,
    pub chain: Vec<Block>,
}
