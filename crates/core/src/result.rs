//! Evaluation results
//!
//! An evaluator produces either a materialized [`Value`] or a lazy
//! [`Traversal`]. A traversal can be drained exactly once; draining takes
//! it by value, so a second drain does not compile.

use std::fmt;

use crate::error::Result;
use crate::value::Value;

type Elements = Box<dyn Iterator<Item = Result<Value>> + Send>;

/// Lazy, consume-once sequence of values
pub struct Traversal {
    elements: Elements,
}

impl Traversal {
    /// Wrap a fallible element iterator
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Result<Value>>,
        I::IntoIter: Send + 'static,
    {
        Self {
            elements: Box::new(elements.into_iter()),
        }
    }

    /// Wrap an infallible element iterator
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::new(values.into_iter().map(Ok))
    }

    /// Drain every element in order.
    ///
    /// The first element error aborts the drain and is returned.
    pub fn drain(self) -> Result<Vec<Value>> {
        self.elements.collect()
    }
}

impl fmt::Debug for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal").finish_non_exhaustive()
    }
}

/// What a single evaluation produced
#[derive(Debug)]
pub enum EvalResult {
    /// Scalar, container or graph element
    Value(Value),
    /// Lazy traversal
    Traversal(Traversal),
}

impl EvalResult {
    /// Null result
    pub fn null() -> Self {
        EvalResult::Value(Value::Null)
    }

    /// Whether this is a materialized null.
    ///
    /// A traversal is never null, even if it yields nothing.
    pub fn is_null(&self) -> bool {
        matches!(self, EvalResult::Value(Value::Null))
    }

    /// Materialize into a value, draining a traversal into an array
    pub fn into_value(self) -> Result<Value> {
        match self {
            EvalResult::Value(v) => Ok(v),
            EvalResult::Traversal(t) => t.drain().map(Value::Array),
        }
    }
}

impl From<Value> for EvalResult {
    fn from(v: Value) -> Self {
        EvalResult::Value(v)
    }
}

impl From<Traversal> for EvalResult {
    fn from(t: Traversal) -> Self {
        EvalResult::Traversal(t)
    }
}
