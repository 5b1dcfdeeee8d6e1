//! Shared gateway state for graphscript
//!
//! This crate owns everything that outlives a single request:
//! - GraphHandleRegistry: One-time construction of the shared graph handle
//! - ScriptCache: Concurrent key → script text map
//! - EvaluatorManager: Current evaluator plus the cache-size reset policy
//! - ScriptLibrary: Library script resolution on disk
//! - BindingExecutor: Runs library scripts then the inline script
//! - TransactionScope: Rollback-unless-marked transaction guard
//! - GatewayConfig: `graphscript.toml`
//!
//! [`GatewayState`] ties them together behind one process-wide lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod cache;
pub mod config;
pub mod evaluator;
pub mod library;
pub mod registry;
pub mod state;
pub mod transaction;

pub use binding::BindingExecutor;
pub use cache::ScriptCache;
pub use config::{GatewayConfig, CONFIG_FILE_NAME, DEFAULT_CACHE_RESET_THRESHOLD};
pub use evaluator::EvaluatorManager;
pub use library::ScriptLibrary;
pub use registry::GraphHandleRegistry;
pub use state::GatewayState;
pub use transaction::TransactionScope;
