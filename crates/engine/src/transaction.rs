//! Scoped host transactions
//!
//! A [`TransactionScope`] commits only if it was marked successful before
//! being closed. Every other exit path, including `?` returns and panics
//! unwinding through the scope, rolls the transaction back when the scope
//! is dropped.

use graphscript_core::{GraphHandle, Result, Transaction};
use tracing::{debug, warn};

/// Transaction guard: rollback unless marked and closed
pub struct TransactionScope {
    tx: Option<Box<dyn Transaction>>,
    success: bool,
}

impl TransactionScope {
    /// Open a transaction on the graph's host database
    pub fn begin(graph: &GraphHandle) -> Result<Self> {
        let tx = graph.begin_tx()?;
        debug!(target: "graphscript::txn", "Transaction started");
        Ok(Self {
            tx: Some(tx),
            success: false,
        })
    }

    /// Mark the transaction for commit on close
    pub fn success(&mut self) {
        self.success = true;
    }

    /// Whether [`success`](Self::success) was called
    pub fn is_marked(&self) -> bool {
        self.success
    }

    /// Close the scope: commit if marked, roll back otherwise.
    ///
    /// A commit failure is returned to the caller.
    pub fn close(mut self) -> Result<()> {
        match self.tx.take() {
            Some(tx) if self.success => {
                tx.commit()?;
                debug!(target: "graphscript::txn", "Transaction committed");
                Ok(())
            }
            Some(tx) => {
                tx.rollback();
                debug!(target: "graphscript::txn", "Transaction rolled back");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Drop for TransactionScope {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            tx.rollback();
            warn!(
                target: "graphscript::txn",
                marked = self.success,
                "Transaction dropped unclosed, rolled back"
            );
        }
    }
}
