//! Name-indexed registry of tool descriptors.
//!
//! Populated once at startup and read-only afterwards, so it can be shared
//! behind an `Arc` without locking.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog;
use crate::models::{DescriptorError, ToolDescriptor};

/// Registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid descriptor for '{name}': {source}")]
    InvalidDescriptor {
        name: String,
        #[source]
        source: DescriptorError,
    },
}

/// Capability advertisement for one tool. Contains no credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSummary<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub input_schema: Map<String, Value>,
}

/// Registry of all available tools, in registration order.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full Mobi2Go catalog.
    pub fn mobi2go() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in catalog::all() {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Add a descriptor after checking it for consistency.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        descriptor
            .check()
            .map_err(|source| RegistryError::InvalidDescriptor {
                name: descriptor.name.clone(),
                source,
            })?;

        if self.index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateTool(descriptor.name));
        }

        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
    }

    /// Summaries of every registered tool. Call again to restart.
    pub fn list(&self) -> impl Iterator<Item = ToolSummary<'_>> + '_ {
        self.tools.iter().map(|d| ToolSummary {
            name: &d.name,
            description: &d.description,
            input_schema: d.input_schema(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
