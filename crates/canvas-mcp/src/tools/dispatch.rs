//! Tool dispatch: resolve a name, validate arguments, invoke, render text.

use std::sync::Arc;

use canvas_client::CanvasApi;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::catalog::{self, ToolSpec};
use super::error::{ToolError, ToolResult};
use super::validation::validate_arguments;

/// Text produced by a tool call. Failures are rendered, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub text: String,
    pub is_error: bool,
}

impl DispatchOutcome {
    fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn failure(error: &ToolError) -> Self {
        Self {
            text: error.render(),
            is_error: true,
        }
    }
}

/// Routes tool calls through the static catalog.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    api: Arc<dyn CanvasApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn CanvasApi>) -> Self {
        Self { api }
    }

    /// All registered tools.
    pub fn tools(&self) -> &'static [ToolSpec] {
        catalog::CATALOG
    }

    /// Run a tool by name and render its outcome as text.
    pub async fn dispatch(&self, name: &str, args: Map<String, Value>) -> DispatchOutcome {
        match self.invoke(name, args).await {
            Ok(text) => {
                debug!(tool = name, bytes = text.len(), "Tool call succeeded");
                DispatchOutcome::success(text)
            }
            Err(error) => {
                warn!(tool = name, code = error.code(), error = %error, "Tool call failed");
                DispatchOutcome::failure(&error)
            }
        }
    }

    async fn invoke(&self, name: &str, args: Map<String, Value>) -> ToolResult<String> {
        let spec = catalog::find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        validate_arguments(spec.name, &(spec.input_schema)(), &args)?;
        (spec.handler)(self.api.as_ref(), spec.name, args).await
    }
}
