use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, RegisterNodesRequest, RegisterNodesResponse, ResolveResponse};
use crate::consensus::{self, HttpChainTransport};

/// Register one or more peer addresses. Addresses are normalized to
/// `host:port`; re-registering is a no-op.
#[post("/nodes/register/")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    if body.nodes.is_empty() {
        return HttpResponse::BadRequest().body("Invalid request. Supply a list of nodes.");
    }

    let mut registry = state.registry.lock().expect("mutex poisoned");
    for address in &body.nodes {
        if let Err(err) = registry.register(address) {
            warn!("rejected peer address {address}: {err}");
            return HttpResponse::BadRequest().body(format!("{err}"));
        }
    }

    HttpResponse::Created().json(RegisterNodesResponse {
        message: "New nodes have been added.",
        total_nodes: registry.peers(),
    })
}

/// Run longest-valid-chain consensus against all registered peers.
#[get("/nodes/resolve/")]
pub async fn resolve_conflicts(state: web::Data<AppState>) -> impl Responder {
    let peers = {
        let registry = state.registry.lock().expect("mutex poisoned");
        registry.peers()
    };

    let transport = HttpChainTransport::new();
    let replaced = consensus::resolve(&state.ledger, &peers, &transport).await;

    let chain = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.chain.clone()
    };

    if replaced {
        info!("consensus replaced the local chain (new length {})", chain.len());
    }
    HttpResponse::Ok().json(ResolveResponse {
        message: if replaced {
            "Chain was replaced."
        } else {
            "No changes needed. Current chain is authoritative."
        },
        replaced,
        chain,
    })
}
