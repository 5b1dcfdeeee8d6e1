//! Per-request script execution
//!
//! Runs the library scripts a request names, in order, and then its inline
//! script, all against one evaluator and one binding set. The value of the
//! last evaluation is the request's result; any error aborts the sequence.

use std::sync::Arc;

use graphscript_core::{
    Bindings, EvalResult, Evaluator, ExecutionRequest, GraphHandle, Result,
};
use tracing::debug;

use crate::cache::ScriptCache;
use crate::library::ScriptLibrary;

/// Drives the evaluator for one request
pub struct BindingExecutor<'a> {
    cache: &'a ScriptCache,
    library: &'a ScriptLibrary,
}

impl<'a> BindingExecutor<'a> {
    /// Executor reading library scripts through `cache`
    pub fn new(cache: &'a ScriptCache, library: &'a ScriptLibrary) -> Self {
        Self { cache, library }
    }

    /// Bindings for a request: the graph object, the traversal source and
    /// every parameter. Parameters shadow the graph bindings on name clash.
    pub fn bindings(request: &ExecutionRequest, graph: &Arc<GraphHandle>) -> Bindings {
        let mut bindings = Bindings::for_graph(graph);
        for (name, value) in &request.params {
            bindings.insert(name.clone(), value.clone());
        }
        bindings
    }

    /// Run the request.
    ///
    /// Returns `None` when the request names no library script and carries
    /// no inline script.
    pub fn run(
        &self,
        request: &ExecutionRequest,
        graph: &Arc<GraphHandle>,
        evaluator: &dyn Evaluator,
    ) -> Result<Option<EvalResult>> {
        let mut bindings = Self::bindings(request, graph);
        let mut result = None;

        for name in &request.load {
            let code = self.library_script(name)?;
            debug!(target: "graphscript::gateway", script = %name, "Evaluating library script");
            result = Some(evaluator.eval(&code, &mut bindings)?);
        }

        if let Some(script) = request.inline_script() {
            // Only counted toward the reset threshold, never looked up
            self.cache.put(script, script);
            result = Some(evaluator.eval(script, &mut bindings)?);
        }

        Ok(result)
    }

    /// Text of the library script `name`, from the cache or from disk
    pub fn library_script(&self, name: &str) -> Result<Arc<str>> {
        let path = self.library.resolve(name);
        let key = path.to_string_lossy();
        self.cache.get_or_load(&key, || self.library.read(&path))
    }
}
