use log::debug;

use super::Block;
use crate::transaction::{Transaction, TxPool};

/// Append-only block sequence plus the pool of not-yet-mined transactions.
///
/// The chain is never empty: construction seeds it with the genesis block, so
/// `last_block` treats an empty chain as a programming error.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pool: TxPool,
}

impl Ledger {
    /// Initialize the ledger with its genesis block (index 1, empty
    /// transaction list, caller-supplied sentinel hash and proof).
    pub fn new(genesis_proof: u64, genesis_previous_hash: &str) -> Self {
        let genesis = Block {
            index: 1,
            timestamp: Block::now(),
            transactions: Vec::new(),
            proof: genesis_proof,
            previous_hash: genesis_previous_hash.to_string(),
        };
        Self {
            chain: vec![genesis],
            pool: TxPool::new(),
        }
    }

    /// The most recently appended block.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Transactions waiting for the next block.
    pub fn pending_transactions(&self) -> &[Transaction] {
        self.pool.pending()
    }

    /// Queue a transaction for the next mined block and return the index that
    /// block will have. No field-level validation happens here.
    pub fn submit_transaction(&mut self, tx: Transaction) -> u64 {
        self.pool.push(tx);
        self.last_block().index + 1
    }

    /// Append a new block carrying the drained pool.
    ///
    /// `previous_hash` defaults to the digest of the current last block. The
    /// proof is trusted as given: callers run the proof-of-work search first,
    /// and no re-verification happens on append.
    pub fn mine(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| self.last_block().digest());
        let block = Block {
            index: self.last_block().index + 1,
            timestamp: Block::now(),
            transactions: self.pool.drain(),
            proof,
            previous_hash,
        };
        debug!(
            "appending block #{} ({} txs, proof={})",
            block.index,
            block.transactions.len(),
            block.proof
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Structural validity of an arbitrary candidate chain: every block after
    /// the first must store the digest of its immediate predecessor within the
    /// candidate. Index monotonicity, genesis shape and proof-of-work are
    /// deliberately not re-checked.
    pub fn is_valid_chain(candidate: &[Block]) -> bool {
        for pair in candidate.windows(2) {
            if pair[1].previous_hash != pair[0].digest() {
                return false;
            }
        }
        true
    }

    /// Swap in a replacement chain wholesale. Only the consensus resolver
    /// calls this, after validating the candidate.
    pub fn replace(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }
}
