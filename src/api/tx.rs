use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::models::{AppState, NewTransactionRequest, NewTransactionResponse, PendingResponse};
use crate::transaction::Transaction;

/// Submit a new transaction into the pool.
///
/// Structural completeness is enforced at the boundary (missing fields fail
/// JSON extraction with 400); the core does not inspect field semantics.
#[post("/transactions/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTransactionRequest>,
) -> impl Responder {
    let tx = Transaction::new(body.sender.clone(), body.recipient.clone(), body.amount);

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.submit_transaction(tx)
    };

    debug!("transaction queued for block #{index}");
    HttpResponse::Created().json(NewTransactionResponse {
        message: format!("Transaction will be added to block {index}"),
        index,
    })
}

/// List transactions waiting for the next block.
#[get("/transactions/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let pending = ledger.pending_transactions();
    HttpResponse::Ok().json(PendingResponse {
        size: pending.len(),
        transactions: pending,
    })
}
