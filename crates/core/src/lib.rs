//! Core types and traits for graphscript
//!
//! This crate defines the foundational types shared by the engine and the
//! executor:
//! - Value: Unified value enum, including graph elements (vertex, edge, property)
//! - EvalResult / Traversal: What an evaluator hands back
//! - Bindings: Named variables visible to a script
//! - GraphHandle / TraversalSource: The shared view onto the host database
//! - ExecutionRequest: A parsed request
//! - Traits: Collaborator boundaries (GraphDatabase, Transaction, Evaluator)
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bindings;
pub mod error;
pub mod graph;
pub mod request;
pub mod result;
pub mod traits;
pub mod value;

pub use bindings::{Binding, Bindings, GRAPH_BINDING, TRAVERSAL_BINDING};
pub use error::{Error, ErrorCategory, Result};
pub use graph::{GraphHandle, TraversalSource};
pub use request::ExecutionRequest;
pub use result::{EvalResult, Traversal};
pub use traits::{Evaluator, EvaluatorFactory, GraphDatabase, Transaction};
pub use value::{Edge, ElementId, Property, Value, Vertex};
