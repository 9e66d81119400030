//! Canvas MCP workspace root.
//!
//! The root crate carries no library code. It hosts the end-to-end MCP tests
//! under `tests/`, which drive the `canvas-mcp` server against a mock Canvas
//! upstream. See the member crates:
//!
//! - `canvas-client`: Canvas REST client, configuration and error types
//! - `canvas-sdk`: course term classification
//! - `canvas-mcp`: MCP tool catalog, dispatcher and server binary
