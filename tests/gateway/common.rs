//! Common test utilities for gateway tests
//!
//! `MemGraph` is a host database whose transactions are bound to the
//! thread that opened them, the way embedded graph databases usually work.
//! `MiniEvaluator` understands a handful of scripts that read and write it.

#![allow(dead_code)]

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use graphscript::{Gateway, GatewayConfig};
use graphscript_core::{
    Bindings, Error, EvalResult, Evaluator, EvaluatorFactory, GraphDatabase, Result, Transaction,
    Traversal, Value, Vertex,
};
use parking_lot::Mutex;
use tempfile::TempDir;

// ============================================================================
// Host database
// ============================================================================

#[derive(Default)]
pub struct MemGraphInner {
    committed: Mutex<Vec<Vertex>>,
    pending: Mutex<HashMap<ThreadId, Vec<Vertex>>>,
    next_id: AtomicU64,
    pub commits: AtomicU64,
    pub rollbacks: AtomicU64,
}

#[derive(Clone, Default)]
pub struct MemGraph(pub Arc<MemGraphInner>);

impl MemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        self.0.committed.lock().clone()
    }

    fn add_vertex(&self, label: &str, name: &str) -> Result<Vertex> {
        let id = self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let vertex = Vertex::new(id, label).with_property("name", name);
        let mut pending = self.0.pending.lock();
        let writes = pending
            .get_mut(&thread::current().id())
            .ok_or_else(|| Error::evaluation("no transaction bound to this thread"))?;
        writes.push(vertex.clone());
        Ok(vertex)
    }

    /// Committed vertices plus this thread's uncommitted writes
    fn visible(&self) -> Vec<Vertex> {
        let mut all = self.vertices();
        if let Some(writes) = self.0.pending.lock().get(&thread::current().id()) {
            all.extend(writes.iter().cloned());
        }
        all
    }
}

struct MemTx {
    graph: Arc<MemGraphInner>,
    owner: ThreadId,
}

impl Transaction for MemTx {
    fn commit(self: Box<Self>) -> Result<()> {
        let writes = self.graph.pending.lock().remove(&self.owner).unwrap_or_default();
        self.graph.committed.lock().extend(writes);
        self.graph.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn rollback(self: Box<Self>) {
        self.graph.pending.lock().remove(&self.owner);
        self.graph.rollbacks.fetch_add(1, Ordering::SeqCst);
    }
}

impl GraphDatabase for MemGraph {
    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    fn begin_tx(&self) -> Result<Box<dyn Transaction>> {
        let owner = thread::current().id();
        self.0.pending.lock().insert(owner, Vec::new());
        Ok(Box::new(MemTx {
            graph: Arc::clone(&self.0),
            owner,
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Scripts:
/// - `addV <label> <name>` adds a vertex in the current transaction
/// - `g.V()` traverses every visible vertex
/// - `count` counts visible vertices
/// - `let <name> <int>` binds an integer
/// - `sum <a> <b>` adds two integer bindings
/// - `fail` raises an evaluation error
/// - a bound name returns its value; anything else echoes the script
pub struct MiniEvaluator;

fn graph_of(bindings: &Bindings) -> Result<MemGraph> {
    bindings
        .graph()
        .and_then(|g| g.database().as_any().downcast_ref::<MemGraph>().cloned())
        .ok_or_else(|| Error::evaluation("graph not bound"))
}

fn int_binding(bindings: &Bindings, name: &str) -> Result<i64> {
    bindings
        .value(name)
        .and_then(Value::as_int)
        .ok_or_else(|| Error::evaluation(format!("no such variable: {name}")))
}

impl Evaluator for MiniEvaluator {
    fn eval(&self, script: &str, bindings: &mut Bindings) -> Result<EvalResult> {
        let words: Vec<&str> = script.split_whitespace().collect();
        let result = match words.as_slice() {
            ["addV", label, name] => Value::Vertex(graph_of(bindings)?.add_vertex(label, name)?),
            ["g.V()"] => {
                let vertices = graph_of(bindings)?.visible();
                return Ok(Traversal::from_values(vertices.into_iter().map(Value::Vertex)).into());
            }
            ["count"] => Value::Int(graph_of(bindings)?.visible().len() as i64),
            ["let", name, n] => {
                let n: i64 = n.parse().map_err(|_| Error::evaluation("not an integer"))?;
                bindings.insert(name.to_string(), Value::Int(n));
                Value::Null
            }
            ["sum", a, b] => Value::Int(int_binding(bindings, a)? + int_binding(bindings, b)?),
            ["fail"] => return Err(Error::evaluation("No such property: bogus")),
            [name] if bindings.contains(name) => {
                bindings.value(name).cloned().unwrap_or(Value::Null)
            }
            _ => Value::from(script),
        };
        Ok(result.into())
    }
}

pub fn mini_factory() -> Arc<dyn EvaluatorFactory> {
    Arc::new(|| -> Result<Arc<dyn Evaluator>> { Ok(Arc::new(MiniEvaluator)) })
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct TestGateway {
    pub dir: TempDir,
    pub gateway: Gateway,
    pub graph: MemGraph,
    pub db: Arc<dyn GraphDatabase>,
}

impl TestGateway {
    pub fn new() -> Self {
        Self::with_config(|c| c)
    }

    pub fn with_config(f: impl FnOnce(GatewayConfig) -> GatewayConfig) -> Self {
        let dir = TempDir::new().unwrap();
        let config = f(GatewayConfig::default().with_script_dir(dir.path()));
        let graph = MemGraph::new();
        Self {
            gateway: Gateway::new(config, mini_factory()),
            db: Arc::new(graph.clone()),
            graph,
            dir,
        }
    }

    pub fn script(&self, name: &str, text: &str) {
        std::fs::write(self.dir.path().join(format!("{name}.gremlin")), text).unwrap();
    }

    pub fn run(&self, raw: &graphscript::RawRequest) -> graphscript::Response {
        self.gateway.execute(&self.db, raw)
    }
}
