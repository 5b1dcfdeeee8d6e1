//! Shared gateway state
//!
//! Everything that lives as long as the gateway: the graph handle registry,
//! the script cache, the evaluator manager and the script library. They
//! share one process-wide lock, which guards evaluator replacement.

use std::sync::Arc;

use graphscript_core::EvaluatorFactory;
use parking_lot::Mutex;

use crate::binding::BindingExecutor;
use crate::cache::ScriptCache;
use crate::config::GatewayConfig;
use crate::evaluator::EvaluatorManager;
use crate::library::ScriptLibrary;
use crate::registry::GraphHandleRegistry;

/// Long-lived state shared by all requests
pub struct GatewayState {
    graphs: GraphHandleRegistry,
    cache: Arc<ScriptCache>,
    evaluators: EvaluatorManager,
    library: ScriptLibrary,
    config: GatewayConfig,
}

impl GatewayState {
    /// Build fresh state from configuration.
    ///
    /// Neither the graph handle nor the first evaluator is created here;
    /// both are created by the first request that needs them.
    pub fn new(config: GatewayConfig, factory: Arc<dyn EvaluatorFactory>) -> Self {
        let lock = Arc::new(Mutex::new(()));
        let cache = Arc::new(ScriptCache::new());
        let evaluators = EvaluatorManager::new(
            factory,
            Arc::clone(&cache),
            lock,
            config.cache_reset_threshold,
        );
        Self {
            graphs: GraphHandleRegistry::new(),
            cache,
            evaluators,
            library: config.library(),
            config,
        }
    }

    /// Graph handle registry
    pub fn graphs(&self) -> &GraphHandleRegistry {
        &self.graphs
    }

    /// Script cache
    pub fn cache(&self) -> &ScriptCache {
        &self.cache
    }

    /// Evaluator manager
    pub fn evaluators(&self) -> &EvaluatorManager {
        &self.evaluators
    }

    /// Script library
    pub fn library(&self) -> &ScriptLibrary {
        &self.library
    }

    /// Configuration this state was built from
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Binding executor over this state's cache and library
    pub fn binding_executor(&self) -> BindingExecutor<'_> {
        BindingExecutor::new(&self.cache, &self.library)
    }
}
