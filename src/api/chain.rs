use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};
use crate::ledger::Ledger;
use crate::pow;
use crate::transaction::Transaction;

/// Sentinel sender identifying the mining reward.
const REWARD_SENDER: &str = "0";
const REWARD_AMOUNT: u64 = 1;

/// Get the full chain. Peers consume this same payload during consensus.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        length: ledger.len(),
        chain: &ledger.chain,
    })
}

/// Structural validation of the local chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ValidateResponse {
        valid: Ledger::is_valid_chain(&ledger.chain),
        length: ledger.len(),
    })
}

/// Mine a new block:
/// - run the proof-of-work search against the last block's proof
/// - submit the reward transaction to this node's identifier
/// - append a block carrying the drained pool
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    // Snapshot what the search and the new block need, then drop the lock:
    // the search is unbounded CPU work.
    let (last_proof, previous_hash) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        let last = ledger.last_block();
        (last.proof, last.digest())
    };

    let difficulty = state.difficulty;
    let proof = match web::block(move || pow::proof_of_work(last_proof, difficulty)).await {
        Ok(proof) => proof,
        Err(_) => return HttpResponse::InternalServerError().body("mining task failed"),
    };

    let block = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.submit_transaction(Transaction::new(
            REWARD_SENDER,
            state.node_id.clone(),
            REWARD_AMOUNT,
        ));
        ledger.mine(proof, Some(previous_hash)).clone()
    };

    info!(
        "MINER - sealed block #{} ({} txs, proof={})",
        block.index,
        block.transactions.len(),
        block.proof
    );
    HttpResponse::Ok().json(MineResponse {
        message: "Successfully mined new block",
        block,
    })
}
