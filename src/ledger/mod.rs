pub mod block;
pub mod model;

pub use block::Block;
pub use model::Ledger;

/// Default Proof-of-Work difficulty (leading zero hex characters).
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Proof recorded on the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel previous-hash recorded on the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";
