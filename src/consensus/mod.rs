pub mod transport;

use std::sync::Mutex;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::{Block, Ledger};

pub use transport::HttpChainTransport;

/// A peer's advertised chain: the length it reports plus the blocks
/// themselves. This is the wire shape of the chain endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteChain {
    pub length: usize,
    pub chain: Vec<Block>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {peer} failed: {reason}")]
    Request { peer: String, reason: String },
    #[error("{peer} answered with status {status}")]
    Status { peer: String, status: u16 },
    #[error("invalid chain payload from {peer}: {reason}")]
    Payload { peer: String, reason: String },
}

/// How the resolver obtains a peer's chain. Injected so the longest-chain
/// logic stays independent of the HTTP plumbing.
pub trait ChainTransport {
    async fn fetch_chain(&self, peer: &str) -> Result<RemoteChain, TransportError>;
}

/// Longest-valid-chain conflict resolution.
///
/// Every registered peer is queried; unreachable or malformed peers are
/// skipped without retry. A peer chain wins only if its reported length
/// strictly exceeds the best length seen so far (starting from the local
/// chain's) and it passes structural validation. Ties never replace the
/// local chain. Returns true iff the ledger was replaced.
pub async fn resolve<T: ChainTransport>(
    ledger: &Mutex<Ledger>,
    peers: &[String],
    transport: &T,
) -> bool {
    // Fetch everything before touching the ledger lock; selection below is
    // sequential against a monotonically increasing best length, so the
    // outcome matches a peer-by-peer scan.
    let mut responses = Vec::with_capacity(peers.len());
    for peer in peers {
        match transport.fetch_chain(peer).await {
            Ok(remote) => {
                debug!("peer {peer} advertises a chain of length {}", remote.length);
                responses.push(remote);
            }
            Err(err) => warn!("skipping peer during consensus: {err}"),
        }
    }

    let mut ledger = ledger.lock().expect("mutex poisoned");
    let mut best_length = ledger.len();
    let mut best_chain: Option<Vec<Block>> = None;

    for remote in responses {
        if remote.length > best_length && Ledger::is_valid_chain(&remote.chain) {
            best_length = remote.length;
            best_chain = Some(remote.chain);
        }
    }

    match best_chain {
        Some(chain) => {
            info!("adopting peer chain of length {best_length}");
            ledger.replace(chain);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::ledger::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
    use crate::transaction::Transaction;

    /// In-memory transport serving canned responses per peer.
    struct FakeTransport {
        chains: HashMap<String, RemoteChain>,
    }

    impl FakeTransport {
        fn new() -> Self {
            Self {
                chains: HashMap::new(),
            }
        }

        fn with_chain(mut self, peer: &str, chain: Vec<Block>) -> Self {
            let remote = RemoteChain {
                length: chain.len(),
                chain,
            };
            self.chains.insert(peer.to_string(), remote);
            self
        }
    }

    impl ChainTransport for FakeTransport {
        async fn fetch_chain(&self, peer: &str) -> Result<RemoteChain, TransportError> {
            self.chains
                .get(peer)
                .cloned()
                .ok_or_else(|| TransportError::Request {
                    peer: peer.to_string(),
                    reason: "connection refused".to_string(),
                })
        }
    }

    fn chain_of_length(len: usize) -> Vec<Block> {
        let mut lg = Ledger::new(GENESIS_PROOF, GENESIS_PREVIOUS_HASH);
        for proof in 1..len as u64 {
            lg.submit_transaction(Transaction::new("alice", "bob", proof));
            lg.mine(proof, None);
        }
        lg.chain
    }

    fn local_ledger_of_length(len: usize) -> Mutex<Ledger> {
        let mut lg = Ledger::new(GENESIS_PROOF, GENESIS_PREVIOUS_HASH);
        for proof in 1..len as u64 {
            lg.mine(proof, None);
        }
        Mutex::new(lg)
    }

    #[actix_web::test]
    async fn longer_valid_peer_chain_replaces_the_ledger() {
        let ledger = local_ledger_of_length(3);
        let peer_chain = chain_of_length(5);
        let transport = FakeTransport::new().with_chain("10.0.0.1:5000", peer_chain.clone());
        let peers = vec!["10.0.0.1:5000".to_string()];

        assert!(resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, peer_chain);
    }

    #[actix_web::test]
    async fn shorter_peer_chain_is_ignored() {
        let ledger = local_ledger_of_length(3);
        let before = ledger.lock().unwrap().chain.clone();
        let transport = FakeTransport::new().with_chain("10.0.0.1:5000", chain_of_length(2));
        let peers = vec!["10.0.0.1:5000".to_string()];

        assert!(!resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, before);
    }

    #[actix_web::test]
    async fn equal_length_peer_chain_never_wins() {
        let ledger = local_ledger_of_length(3);
        let before = ledger.lock().unwrap().chain.clone();
        let transport = FakeTransport::new().with_chain("10.0.0.1:5000", chain_of_length(3));
        let peers = vec!["10.0.0.1:5000".to_string()];

        assert!(!resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, before);
    }

    #[actix_web::test]
    async fn longer_but_invalid_peer_chain_is_rejected() {
        let ledger = local_ledger_of_length(3);
        let before = ledger.lock().unwrap().chain.clone();

        let mut forged = chain_of_length(5);
        forged[2].transactions[0].amount = 1_000_000;
        let transport = FakeTransport::new().with_chain("10.0.0.1:5000", forged);
        let peers = vec!["10.0.0.1:5000".to_string()];

        assert!(!resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, before);
    }

    #[actix_web::test]
    async fn unreachable_peers_are_skipped_not_fatal() {
        let ledger = local_ledger_of_length(3);
        let peer_chain = chain_of_length(5);
        let transport = FakeTransport::new().with_chain("10.0.0.2:5000", peer_chain.clone());
        let peers = vec!["10.0.0.1:5000".to_string(), "10.0.0.2:5000".to_string()];

        assert!(resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, peer_chain);
    }

    #[actix_web::test]
    async fn longest_of_several_valid_peer_chains_wins() {
        let ledger = local_ledger_of_length(1);
        let longest = chain_of_length(6);
        let transport = FakeTransport::new()
            .with_chain("10.0.0.1:5000", chain_of_length(4))
            .with_chain("10.0.0.2:5000", longest.clone())
            .with_chain("10.0.0.3:5000", chain_of_length(5));
        let peers = vec![
            "10.0.0.1:5000".to_string(),
            "10.0.0.2:5000".to_string(),
            "10.0.0.3:5000".to_string(),
        ];

        assert!(resolve(&ledger, &peers, &transport).await);
        assert_eq!(ledger.lock().unwrap().chain, longest);
    }
}
