//! The schema-bound mapper.
//!
//! A [`Mapper`] flattens objects into documents and rebuilds them using the
//! [`Map`] of each class. Maps are built on first use and kept in the
//! configured [`Cache`].

mod builder;
pub use builder::Builder;

mod hydrate;

mod serialize;

use crate::{Cache, Describe, Formatter, Map, Parser, Registry, Result, SimpleMapper};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Mapper {
    /// Class descriptors
    registry: Arc<Registry>,

    /// Naming conventions
    formatter: Arc<dyn Formatter>,

    /// Built maps, by class name
    cache: Arc<dyn Cache>,

    /// Lifetime of cached maps
    ttl: Option<Duration>,

    /// Whether the simple mapper keeps undeclared keys
    schemaless: bool,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn formatter(&self) -> &dyn Formatter {
        &*self.formatter
    }

    pub fn cache(&self) -> &dyn Cache {
        &*self.cache
    }

    pub fn is_schemaless(&self) -> bool {
        self.schemaless
    }

    /// Returns the map of `class`, building and caching it if needed.
    pub fn map_for(&self, class: &str) -> Result<Arc<Map>> {
        if self.cache.contains(class) {
            if let Some(map) = self.cache.fetch(class) {
                debug!(class = %class, "map cache hit");
                return Ok(map);
            }

            warn!(class = %class, "cached map vanished before fetch; rebuilding");
        } else {
            debug!(class = %class, "map cache miss");
        }

        let map = Arc::new(Parser::new(&self.registry, &*self.formatter).build_map(class)?);
        self.cache.save(class, map.clone(), self.ttl);

        debug!(class = %class, keys = map.len(), ttl = ?self.ttl, "cached map");

        Ok(map)
    }

    pub fn map_of<T: Describe>(&self) -> Result<Arc<Map>> {
        self.map_for(T::type_name())
    }

    /// A mapper that works from class descriptors directly, without maps.
    pub fn simple(&self) -> SimpleMapper {
        SimpleMapper::new(self.registry.clone(), self.formatter.clone(), self.schemaless)
    }
}
