//! Named variables visible to a script

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::{GraphHandle, TraversalSource};
use crate::value::Value;

/// Binding name of the graph object
pub const GRAPH_BINDING: &str = "graph";

/// Binding name of the traversal source
pub const TRAVERSAL_BINDING: &str = "g";

/// A single bound variable
#[derive(Clone, Debug)]
pub enum Binding {
    /// The shared graph object
    Graph(Arc<GraphHandle>),
    /// The traversal source over the shared graph
    Traversal(TraversalSource),
    /// A plain value (request parameter or script-defined variable)
    Value(Value),
}

impl Binding {
    /// The bound value, if this is a plain value
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Binding::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for Binding {
    fn from(v: Value) -> Self {
        Binding::Value(v)
    }
}

/// Name → binding map handed to an evaluator
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    vars: HashMap<String, Binding>,
}

impl Bindings {
    /// Empty binding set
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding set exposing `graph` under [`GRAPH_BINDING`] and its
    /// traversal source under [`TRAVERSAL_BINDING`]
    pub fn for_graph(graph: &Arc<GraphHandle>) -> Self {
        let mut bindings = Self::new();
        bindings.insert(GRAPH_BINDING, Binding::Graph(Arc::clone(graph)));
        bindings.insert(TRAVERSAL_BINDING, Binding::Traversal(graph.traversal()));
        bindings
    }

    /// Bind `name`, replacing any previous binding
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        binding: impl Into<Binding>,
    ) -> Option<Binding> {
        self.vars.insert(name.into(), binding.into())
    }

    /// Look up a binding
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.vars.get(name)
    }

    /// Look up a plain value binding
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Binding::as_value)
    }

    /// The graph object, if bound
    pub fn graph(&self) -> Option<&Arc<GraphHandle>> {
        match self.get(GRAPH_BINDING) {
            Some(Binding::Graph(g)) => Some(g),
            _ => None,
        }
    }

    /// Whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no binding exists
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all bindings in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}
