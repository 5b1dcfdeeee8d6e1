//! Collaborator boundaries
//!
//! The gateway never manages storage or evaluates scripts itself. The host
//! database supplies a [`GraphDatabase`] that can open [`Transaction`]s, and
//! the scripting backend supplies an [`Evaluator`] through an
//! [`EvaluatorFactory`]. All of them are shared across worker threads.

use std::any::Any;
use std::sync::Arc;

use crate::bindings::Bindings;
use crate::error::Result;
use crate::result::EvalResult;

/// Handle to the host's graph database.
///
/// Implementations must be safe to call concurrently from multiple threads.
pub trait GraphDatabase: Send + Sync {
    /// Check that the database can back a graph handle.
    ///
    /// Called once, when the shared [`GraphHandle`](crate::GraphHandle) is
    /// constructed. An error leaves the handle unconstructed.
    fn check_available(&self) -> Result<()>;

    /// Open a transaction on the database.
    fn begin_tx(&self) -> Result<Box<dyn Transaction>>;

    /// Concrete database, for evaluators that need host-specific operations.
    fn as_any(&self) -> &dyn Any;
}

/// A single host transaction.
///
/// Exactly one of `commit` or `rollback` is called, after which the
/// transaction is gone.
pub trait Transaction: Send {
    /// Make the transaction's writes durable and visible.
    fn commit(self: Box<Self>) -> Result<()>;

    /// Discard the transaction's writes.
    fn rollback(self: Box<Self>);
}

/// A script-evaluation engine.
///
/// One evaluator is shared by all requests until it is replaced. The
/// bindings are passed mutably: variables a script defines stay visible to
/// later scripts evaluated with the same bindings.
pub trait Evaluator: Send + Sync {
    /// Evaluate `script` against `bindings`.
    ///
    /// Syntax and runtime failures are reported as
    /// [`Error::Evaluation`](crate::Error::Evaluation).
    fn eval(&self, script: &str, bindings: &mut Bindings) -> Result<EvalResult>;
}

/// Creates fresh evaluators.
pub trait EvaluatorFactory: Send + Sync {
    /// Construct a brand-new evaluator with no compiled-script state.
    fn create(&self) -> Result<Arc<dyn Evaluator>>;
}

impl<F> EvaluatorFactory for F
where
    F: Fn() -> Result<Arc<dyn Evaluator>> + Send + Sync,
{
    fn create(&self) -> Result<Arc<dyn Evaluator>> {
        self()
    }
}
