//! The shared graph handle
//!
//! A [`GraphHandle`] wraps the host database for the lifetime of the
//! gateway. Scripts see it twice: as the graph object itself and as a
//! [`TraversalSource`] from which traversals are spawned.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::traits::{GraphDatabase, Transaction};

/// Shared, immutable view onto the host database
pub struct GraphHandle {
    db: Arc<dyn GraphDatabase>,
}

impl GraphHandle {
    /// Wrap a host database.
    ///
    /// Fails when the database rejects the handle; nothing is retained in
    /// that case.
    pub fn open(db: Arc<dyn GraphDatabase>) -> Result<Self> {
        db.check_available()?;
        Ok(Self { db })
    }

    /// The host database behind this handle
    pub fn database(&self) -> &Arc<dyn GraphDatabase> {
        &self.db
    }

    /// Open a host transaction
    pub fn begin_tx(&self) -> Result<Box<dyn Transaction>> {
        self.db.begin_tx()
    }

    /// Traversal-source view of this handle
    pub fn traversal(self: &Arc<Self>) -> TraversalSource {
        TraversalSource {
            graph: Arc::clone(self),
        }
    }
}

impl fmt::Debug for GraphHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHandle").finish_non_exhaustive()
    }
}

/// Entry point for traversals over a [`GraphHandle`]
#[derive(Clone, Debug)]
pub struct TraversalSource {
    graph: Arc<GraphHandle>,
}

impl TraversalSource {
    /// The graph this source traverses
    pub fn graph(&self) -> &Arc<GraphHandle> {
        &self.graph
    }
}
