//! Data model for declarative HTTP tools.
//!
//! # Core Concepts
//!
//! - [`ToolDescriptor`]: Data-only description of one remote operation: HTTP
//!   method, path template, parameters, body construction, auth and response
//!   decoding. Descriptors carry no code; the executor interprets them.
//! - [`ParamSpec`]: One named, typed parameter of a tool, optionally
//!   constrained to an allowed value set or given a default.
//! - [`Payload`] / [`ToolError`]: The two sides of every tool invocation
//!   result. A call either yields a decoded payload or a classified failure.

mod descriptor;
mod outcome;
mod param;

pub use descriptor::*;
pub use outcome::*;
pub use param::*;
