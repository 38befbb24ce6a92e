//! MCP server exposing the Mobi2Go restaurant management API as agent tools.
//!
//! Every tool is a data-only [`models::ToolDescriptor`]. The [`catalog`] lists
//! the Mobi2Go operations, the [`registry`] indexes them by name, the
//! [`executor`] turns one descriptor plus arguments into exactly one HTTP call,
//! and [`mcp`] binds all of it to an rmcp stdio server.

pub mod catalog;
pub mod config;
pub mod credential;
pub mod executor;
pub mod mcp;
pub mod models;
pub mod registry;
