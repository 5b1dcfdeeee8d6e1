//! # graphscript Executor
//!
//! The request-facing API of the graphscript gateway. A host hands each
//! incoming request to a [`Gateway`], which runs it inside one transaction
//! on the host's graph database and returns a JSON [`Response`].
//!
//! ## Quick Start
//!
//! ```text
//! use graphscript_executor::{Gateway, GatewayConfig, RawRequest};
//!
//! let gateway = Gateway::new(GatewayConfig::default(), Arc::new(factory));
//!
//! let raw = RawRequest::script("g.V(x).out('knows')")
//!     .with_load("helpers,paths")
//!     .with_params(r#"{"x": 1}"#);
//! let response = gateway.execute(&db, &raw);
//! // {"success":true,"results":[...]}
//! ```
//!
//! ## Request Fields
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `script` | Inline script, evaluated last |
//! | `load` | Comma-separated library scripts, evaluated first, in order |
//! | `params` | JSON object; each key is bound as a variable |

#![warn(missing_docs)]

mod gateway;
mod handler;
mod output;
mod request;
mod serializer;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use gateway::Gateway;
pub use handler::TransactionalRequestHandler;
pub use output::{ExecutionResult, Response, Status};
pub use request::{parse_params, split_load, RawRequest};
pub use serializer::ResultSerializer;

// Re-export types from the lower layers
pub use graphscript_core::{
    Binding, Bindings, Edge, ElementId, Error, ErrorCategory, EvalResult, Evaluator,
    EvaluatorFactory, ExecutionRequest, GraphDatabase, GraphHandle, Property, Result,
    Transaction, Traversal, TraversalSource, Value, Vertex, GRAPH_BINDING, TRAVERSAL_BINDING,
};
pub use graphscript_engine::{GatewayConfig, GatewayState, CONFIG_FILE_NAME};
