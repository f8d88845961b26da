use crate::cache::{CacheStats, PlateCache};
use crate::models::PlateRequest;
use crate::store::TemplateStore;
use crate::Result;
use tracing::{debug, instrument};

const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Template store plus parsed-plate cache: the one entry point callers need
/// to turn a [`PlateRequest`] into boilerplate text
#[derive(Debug)]
pub struct Boiler {
    store: TemplateStore,
    plates: PlateCache,
}

impl Boiler {
    pub fn new(store: TemplateStore) -> Self {
        Self::with_cache_capacity(store, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(store: TemplateStore, capacity: u64) -> Self {
        Self {
            store,
            plates: PlateCache::new(capacity),
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Resolve the requested template and render it.
    ///
    /// Nothing is rendered when the lookup fails.
    #[instrument(skip_all, fields(language = ?request.language, extension = ?request.extension))]
    pub fn plate(&self, request: &PlateRequest) -> Result<String> {
        let template = self
            .store
            .resolve(request.language.as_deref(), request.extension.as_deref())?;

        let plate = self.plates.get_or_parse(template);
        let text = plate.generate(&request.options);

        debug!(
            "Generated {} bytes with {} function(s)",
            text.len(),
            request.options.functions.len()
        );
        Ok(text)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.plates.stats()
    }
}
