//! Transactional request handling
//!
//! Each request runs inside one host transaction:
//!
//! 1. Obtain the shared graph handle
//! 2. Open a transaction scope
//! 3. Decode the raw request
//! 4. Fetch the current evaluator, replacing it if the cache grew too large
//! 5. Run library scripts then the inline script
//! 6. Serialize the last result
//! 7. Mark the scope successful and close it (commit)
//!
//! Any error along the way drops the scope unmarked, which rolls the
//! transaction back, and becomes a failure response. Shared state is never
//! left half-updated by a failed request.

use std::sync::Arc;

use graphscript_core::{GraphDatabase, Result};
use graphscript_engine::{GatewayState, TransactionScope};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::output::{ExecutionResult, Response};
use crate::request::RawRequest;
use crate::serializer::ResultSerializer;

/// Runs requests against shared gateway state
#[derive(Clone)]
pub struct TransactionalRequestHandler {
    state: Arc<GatewayState>,
}

impl TransactionalRequestHandler {
    /// Handler over `state`
    pub fn new(state: Arc<GatewayState>) -> Self {
        Self { state }
    }

    /// Shared state
    pub fn state(&self) -> &Arc<GatewayState> {
        &self.state
    }

    /// Execute one request. Never fails: errors become failure responses.
    pub fn execute(&self, db: &Arc<dyn GraphDatabase>, raw: &RawRequest) -> Response {
        match self.try_execute(db, raw) {
            Ok(results) => {
                debug!(
                    target: "graphscript::gateway",
                    has_results = results.is_some(),
                    "Request succeeded"
                );
                Response::ok(match results {
                    Some(json) => ExecutionResult::with_results(json),
                    None => ExecutionResult::empty(),
                })
            }
            Err(e) => {
                warn!(
                    target: "graphscript::gateway",
                    category = e.category().as_str(),
                    error = %e,
                    "Request failed"
                );
                Response::failure(&e)
            }
        }
    }

    fn try_execute(
        &self,
        db: &Arc<dyn GraphDatabase>,
        raw: &RawRequest,
    ) -> Result<Option<JsonValue>> {
        let graph = self.state.graphs().get_or_create(db)?;
        let mut scope = TransactionScope::begin(&graph)?;

        let request = raw.parse()?;
        let evaluator = self.state.evaluators().current()?;
        let result = self
            .state
            .binding_executor()
            .run(&request, &graph, evaluator.as_ref())?;

        let results = match result {
            Some(result) if !result.is_null() => Some(ResultSerializer::serialize(result)?),
            _ => None,
        };

        scope.success();
        scope.close()?;
        Ok(results)
    }
}
