//! One-time construction of the shared graph handle
//!
//! The first request to reach the registry wraps the host database in a
//! [`GraphHandle`]; every other request, including the ones racing it,
//! receives that same handle. A failed construction leaves the registry
//! empty so the next request tries again.

use std::sync::Arc;

use graphscript_core::{GraphDatabase, GraphHandle, Result};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

/// Holds the process's single [`GraphHandle`]
#[derive(Debug, Default)]
pub struct GraphHandleRegistry {
    handle: OnceCell<Arc<GraphHandle>>,
}

impl GraphHandleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared handle, creating it from `db` on first use.
    ///
    /// Once a handle exists, `db` is ignored: the host supplies one
    /// database per process.
    pub fn get_or_create(&self, db: &Arc<dyn GraphDatabase>) -> Result<Arc<GraphHandle>> {
        // OnceCell blocks racing initializers and re-checks before running ours
        self.handle
            .get_or_try_init(|| match GraphHandle::open(Arc::clone(db)) {
                Ok(handle) => {
                    info!(target: "graphscript::registry", "Graph handle created");
                    Ok(Arc::new(handle))
                }
                Err(e) => {
                    warn!(
                        target: "graphscript::registry",
                        error = %e,
                        "Graph handle construction failed"
                    );
                    Err(e)
                }
            })
            .map(Arc::clone)
    }

    /// The shared handle, if it has been created
    pub fn get(&self) -> Option<Arc<GraphHandle>> {
        self.handle.get().map(Arc::clone)
    }

    /// Whether the handle has been created
    pub fn is_initialized(&self) -> bool {
        self.handle.get().is_some()
    }
}
