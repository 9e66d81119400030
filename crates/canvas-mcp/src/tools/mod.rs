//! MCP tool catalog, parameter types and dispatch.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! Tool output is always text: pretty-printed Canvas JSON on success, a
//! structured error object otherwise.

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod helpers;
pub mod params;
pub mod validation;

pub use catalog::{ToolSpec, CATALOG};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::{FieldViolation, ToolError, ToolResult};
pub use params::*;
