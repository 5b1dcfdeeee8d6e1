//! Gateway entry point
//!
//! A [`Gateway`] owns the shared state and the request handler. Hosts
//! usually build one per process, either holding it themselves or
//! installing it as the process-global instance.

use std::path::Path;
use std::sync::Arc;

use graphscript_core::{Error, EvaluatorFactory, GraphDatabase, Result};
use graphscript_engine::{GatewayConfig, GatewayState};
use once_cell::sync::OnceCell;
use tracing::info;

use crate::handler::TransactionalRequestHandler;
use crate::output::Response;
use crate::request::RawRequest;

static GLOBAL: OnceCell<Gateway> = OnceCell::new();

/// Script execution gateway
///
/// # Example
///
/// ```text
/// use graphscript_executor::{Gateway, GatewayConfig, RawRequest};
///
/// let gateway = Gateway::new(GatewayConfig::default(), Arc::new(factory));
/// let response = gateway.execute(&db, &RawRequest::script("g.V().count()"));
/// assert!(response.is_success());
/// ```
#[derive(Clone)]
pub struct Gateway {
    handler: TransactionalRequestHandler,
}

impl Gateway {
    /// Build a gateway from configuration
    pub fn new(config: GatewayConfig, factory: Arc<dyn EvaluatorFactory>) -> Self {
        info!(
            target: "graphscript::gateway",
            script_dir = %config.library().dir().display(),
            threshold = config.cache_reset_threshold,
            "Gateway created"
        );
        let state = Arc::new(GatewayState::new(config, factory));
        Self {
            handler: TransactionalRequestHandler::new(state),
        }
    }

    /// Build a gateway from a `graphscript.toml` file.
    ///
    /// A commented default file is written first if none exists.
    pub fn open<P: AsRef<Path>>(
        config_path: P,
        factory: Arc<dyn EvaluatorFactory>,
    ) -> Result<Self> {
        let path = config_path.as_ref();
        GatewayConfig::write_default_if_missing(path)?;
        let config = GatewayConfig::from_file(path)?;
        Ok(Self::new(config, factory))
    }

    /// Install the process-global gateway.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a global gateway is already installed.
    pub fn install(
        config: GatewayConfig,
        factory: Arc<dyn EvaluatorFactory>,
    ) -> Result<&'static Gateway> {
        let mut created = false;
        let gateway = GLOBAL.get_or_init(|| {
            created = true;
            Self::new(config, factory)
        });
        if created {
            Ok(gateway)
        } else {
            Err(Error::Config("global gateway already installed".into()))
        }
    }

    /// The process-global gateway, if installed
    pub fn global() -> Option<&'static Gateway> {
        GLOBAL.get()
    }

    /// Execute one request against `db`
    pub fn execute(&self, db: &Arc<dyn GraphDatabase>, raw: &RawRequest) -> Response {
        self.handler.execute(db, raw)
    }

    /// Request handler
    pub fn handler(&self) -> &TransactionalRequestHandler {
        &self.handler
    }

    /// Shared state
    pub fn state(&self) -> &Arc<GatewayState> {
        self.handler.state()
    }
}
