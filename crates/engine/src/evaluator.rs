//! Current evaluator and the wholesale reset policy
//!
//! An evaluator accumulates compiled-script state for every distinct script
//! it sees. Rather than track that state, the manager watches the size of
//! the [`ScriptCache`]: once it holds more than the reset threshold, the
//! next caller replaces the evaluator with a fresh one and empties the
//! cache, discarding all warmed state including library scripts, which are
//! then re-read from disk on their next use.
//!
//! The reset is a full reset, not LRU.
//!
//! # Thread Safety
//!
//! The current evaluator is published through a read-mostly lock and handed
//! out as an `Arc`, so callers never hold a lock while evaluating. Requests
//! that captured an evaluator before a replacement keep using it until they
//! finish. Replacement runs under the process-wide lock with the condition
//! re-checked, so threads that observe the threshold together replace the
//! evaluator once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use graphscript_core::{Evaluator, EvaluatorFactory, Result};
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::cache::ScriptCache;

/// Owns the current evaluator
pub struct EvaluatorManager {
    factory: Arc<dyn EvaluatorFactory>,
    current: RwLock<Option<Arc<dyn Evaluator>>>,
    cache: Arc<ScriptCache>,
    lock: Arc<Mutex<()>>,
    threshold: usize,
    generation: AtomicU64,
}

impl EvaluatorManager {
    /// Create a manager that builds evaluators with `factory`.
    ///
    /// No evaluator is built until the first call to [`current`](Self::current).
    pub fn new(
        factory: Arc<dyn EvaluatorFactory>,
        cache: Arc<ScriptCache>,
        lock: Arc<Mutex<()>>,
        threshold: usize,
    ) -> Self {
        Self {
            factory,
            current: RwLock::new(None),
            cache,
            lock,
            threshold,
            generation: AtomicU64::new(0),
        }
    }

    /// The evaluator to use for a request.
    ///
    /// Builds the first evaluator, or replaces the current one and clears
    /// the script cache when the cache has grown past the threshold. A
    /// factory failure is returned and the previous evaluator stays current.
    pub fn current(&self) -> Result<Arc<dyn Evaluator>> {
        if let Some(evaluator) = self.usable() {
            return Ok(evaluator);
        }

        let _guard = self.lock.lock();

        // Another thread may have replaced it while we waited
        if let Some(evaluator) = self.usable() {
            return Ok(evaluator);
        }

        let cached = self.cache.len();
        let evaluator = self.factory.create().map_err(|e| {
            warn!(target: "graphscript::evaluator", error = %e, "Evaluator construction failed");
            e
        })?;
        // Publish before clearing: a reader holding the old evaluator must
        // still see the oversized cache and fall through to the lock
        *self.current.write() = Some(Arc::clone(&evaluator));
        self.cache.clear();

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        info!(
            target: "graphscript::evaluator",
            generation,
            cached_scripts = cached,
            threshold = self.threshold,
            "Evaluator created, script cache cleared"
        );
        Ok(evaluator)
    }

    /// Number of evaluators created so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Cache size above which the evaluator is replaced
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    fn usable(&self) -> Option<Arc<dyn Evaluator>> {
        let current = self.current.read();
        match current.as_ref() {
            Some(evaluator) if self.cache.len() <= self.threshold => Some(Arc::clone(evaluator)),
            _ => None,
        }
    }
}
