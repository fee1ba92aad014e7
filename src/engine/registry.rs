//! The tool registry: immutable name → spec mapping plus the dispatch
//! pipeline.
//!
//! Built once at process start, read-only afterward. Concurrent dispatches
//! share only the registry and the credential, both immutable; every call
//! owns its own request, connection, and response buffer.

use crate::engine::binder::bind_params;
use crate::engine::decoder::decode_response;
use crate::engine::request::{build_request, parse_base_url};
use crate::engine::transport::{HttpTransport, Transport};
use crate::tools::{defs, ToolDef, ToolSpec};
use crate::types::{Config, Error, Result};
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Process-wide catalog of callable tools.
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    index: HashMap<&'static str, usize>,
    base_url: Url,
    credential: Option<String>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.specs.len())
            .field("base_url", &self.base_url.as_str())
            .field("credential", &self.credential.is_some())
            .finish()
    }
}

impl ToolRegistry {
    /// Build the registry over the full static tool table with the
    /// production HTTP transport.
    pub fn new(config: &Config) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        Self::with_transport(config, transport)
    }

    /// Build the registry with an injected transport (tests, embedders).
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::from_specs(defs::TOOLS.to_vec(), config, transport)
    }

    fn from_specs(
        specs: Vec<ToolSpec>,
        config: &Config,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let mut index = HashMap::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(Error::validation("tool name cannot be empty"));
            }
            if index.insert(spec.name, position).is_some() {
                return Err(Error::validation(format!(
                    "duplicate tool name: {}",
                    spec.name
                )));
            }
        }
        Ok(Self {
            specs,
            index,
            base_url,
            credential: config.api_key.clone(),
            transport,
        })
    }

    /// Stable enumeration of every tool's name, description, and parameter
    /// schema, in catalog order.
    pub fn list(&self) -> Vec<ToolDef> {
        self.specs.iter().map(ToolSpec::definition).collect()
    }

    /// Look up one tool's spec by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&position| &self.specs[position])
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolve `name` and run bind → build → execute → decode.
    ///
    /// Every failure comes back as an [`Error`] value; nothing here aborts
    /// other in-flight dispatches. `cancel` bounds only this call.
    pub async fn dispatch(
        &self,
        name: &str,
        args: &Value,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let spec = self
            .get(name)
            .ok_or_else(|| Error::not_found(name.to_string()))?;

        let pairs = bind_params(spec, args)?;
        tracing::debug!(tool = spec.name, params = pairs.len(), "dispatching tool");

        let request = build_request(&self.base_url, spec, &pairs, self.credential.as_deref())?;
        let response = self.transport.execute(request, cancel).await?;
        decode_response(spec, response)
    }
}
