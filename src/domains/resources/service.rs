//! Resource service implementation.
//!
//! The ResourceService lists resources and serves read requests. Resources
//! are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Produces the resource text.
    pub load: fn() -> String,
}

/// Service for managing and accessing resources.
#[derive(Debug, Default)]
pub struct ResourceService {
    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a ResourceService holding every registered resource.
    pub fn new() -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let mut service = Self::default();
        for entry in get_all_resources() {
            service.register_resource(entry)?;
        }

        Ok(service)
    }

    /// Register a resource. URIs must be unique.
    pub fn register_resource(&mut self, entry: ResourceEntry) -> Result<(), ResourceError> {
        let uri = entry.resource.raw.uri.clone();
        if self.resources.contains_key(&uri) {
            return Err(ResourceError::duplicate(uri));
        }
        info!("Registering resource: {}", uri);
        self.resources.insert(uri, entry);
        Ok(())
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: entry.resource.raw.mime_type.clone(),
            text: (entry.load)(),
            meta: None,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}
