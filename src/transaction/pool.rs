use super::model::Transaction;

/// Pending transactions awaiting inclusion in the next mined block.
///
/// A plain FIFO buffer: submission order is preserved, and `drain` hands the
/// whole batch to exactly one block.
#[derive(Debug, Default)]
pub struct TxPool {
    pending: Vec<Transaction>,
}

impl TxPool {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Append a transaction to the pool.
    pub fn push(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Take the current contents and leave the pool empty.
    /// Called once per block creation.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Read-only view of the pending transactions (for the API listing).
    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }
}
