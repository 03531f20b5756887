use super::Mapper;
use crate::{Cache, CaseFormatter, Class, Describe, Formatter, MemoryCache, Registry, Result};

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Builder {
    /// Registered class descriptors
    registry: Registry,

    /// Defaults to [`CaseFormatter`]
    formatter: Option<Arc<dyn Formatter>>,

    /// Defaults to an empty [`MemoryCache`]
    cache: Option<Arc<dyn Cache>>,

    ttl: Option<Duration>,

    schemaless: bool,
}

impl Builder {
    pub fn register<T: Describe>(&mut self) -> &mut Self {
        self.registry.register::<T>();
        self
    }

    pub fn register_class(&mut self, class: Class) -> &mut Self {
        self.registry.register_class(class);
        self
    }

    pub fn formatter(&mut self, formatter: impl Formatter + 'static) -> &mut Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn cache(&mut self, cache: impl Cache + 'static) -> &mut Self {
        self.cache = Some(Arc::new(cache));
        self
    }

    /// Uses a cache that is also held elsewhere.
    pub fn shared_cache(&mut self, cache: Arc<dyn Cache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    /// Cached maps expire after `ttl`. By default they never expire.
    pub fn cache_ttl(&mut self, ttl: Duration) -> &mut Self {
        self.ttl = Some(ttl);
        self
    }

    /// Lets the simple mapper keep document keys that a class does not
    /// declare.
    pub fn schemaless(&mut self, schemaless: bool) -> &mut Self {
        self.schemaless = schemaless;
        self
    }

    /// Builds the mapper, along with the map of every registered class.
    pub fn build(&mut self) -> Result<Mapper> {
        let mapper = Mapper {
            registry: Arc::new(self.registry.clone()),
            formatter: self
                .formatter
                .clone()
                .unwrap_or_else(|| Arc::new(CaseFormatter::default())),
            cache: self
                .cache
                .clone()
                .unwrap_or_else(|| Arc::new(MemoryCache::new())),
            ttl: self.ttl,
            schemaless: self.schemaless,
        };

        for class in mapper.registry.classes() {
            mapper.map_for(class.name())?;
        }

        debug!(
            classes = mapper.registry.len(),
            schemaless = mapper.schemaless,
            "built mapper"
        );

        Ok(mapper)
    }
}
