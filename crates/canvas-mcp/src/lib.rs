//! Canvas MCP server library.
//!
//! Exposes the read-only Canvas tool catalog over the Model Context Protocol.
//! The binary in `main.rs` wires this to stdio; tests drive it over in-memory
//! transports.

pub mod server;
pub mod tools;

pub use server::CanvasMcpServer;
