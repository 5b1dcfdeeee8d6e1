//! graphscript - In-process script execution gateway for embedded graph databases
//!
//! A host receives requests carrying an optional inline script, a list of
//! library scripts and a JSON object of parameters. graphscript runs them
//! against the host's graph database inside one transaction per request
//! and answers with a JSON body.
//!
//! # Quick Start
//!
//! ```ignore
//! use graphscript::{Gateway, GatewayConfig, RawRequest};
//!
//! let gateway = Gateway::new(GatewayConfig::default(), Arc::new(my_factory));
//!
//! let response = gateway.execute(&db, &RawRequest::script("g.V().count()"));
//! assert!(response.is_success());
//! ```
//!
//! # Architecture
//!
//! All requests go through the [`Gateway`], which hands them to the
//! [`TransactionalRequestHandler`]. Shared state (graph handle, evaluator,
//! script cache) lives in the engine crate and is not exposed beyond
//! [`GatewayState`].

// Re-export the public API from graphscript-executor
pub use graphscript_executor::*;
