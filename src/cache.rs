//! Parsed-plate cache using Moka
//!
//! Parsing a template is cheap but not free; a process that renders the same
//! template repeatedly keeps the parsed [`Plate`] around, keyed by the
//! template text itself.

use crate::Plate;
use moka::sync::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument, trace};

/// Snapshot of plate cache usage
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Parsed plates currently held
    pub size: u64,
    pub max_size: u64,
    /// `hits / (hits + misses)`, 0 before the first lookup
    pub hit_rate: f64,
}

#[derive(Debug, Default)]
struct LookupCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LookupCounters {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self, cache_size: u64, max_size: u64) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            size: cache_size,
            max_size,
            hit_rate,
        }
    }
}

/// Bounded cache of parsed plates keyed by template text
#[derive(Debug)]
pub struct PlateCache {
    cache: Cache<String, Arc<Plate>>,
    counters: LookupCounters,
    max_size: u64,
}

impl PlateCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
            counters: LookupCounters::default(),
            max_size: max_entries,
        }
    }

    /// Return the parsed plate for `template`, parsing it on a miss
    #[instrument(skip_all, fields(len = template.len()))]
    pub fn get_or_parse(&self, template: &str) -> Arc<Plate> {
        if let Some(plate) = self.cache.get(template) {
            self.counters.hit();
            trace!("Plate cache hit");
            return plate;
        }

        self.counters.miss();
        trace!("Plate cache miss");
        let plate = Arc::new(Plate::parse(template));
        self.cache.insert(template.to_string(), Arc::clone(&plate));
        plate
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        let stats = self.counters.snapshot(self.cache.entry_count(), self.max_size);

        debug!(
            "Plate cache stats: {} hits, {} misses, {}% hit rate, {} entries",
            stats.hits,
            stats.misses,
            (stats.hit_rate * 100.0) as u32,
            stats.size
        );

        stats
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let cache = PlateCache::new(16);
        let first = cache.get_or_parse("class {BP_NAME} {}");
        let second = cache.get_or_parse("class {BP_NAME} {}");

        assert!(Arc::ptr_eq(&first, &second));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distinct_templates_are_distinct_entries() {
        let cache = PlateCache::new(16);
        cache.get_or_parse("a");
        cache.get_or_parse("b");

        let stats = cache.stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = PlateCache::new(16);
        cache.get_or_parse("a");
        cache.clear();

        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.stats().max_size, 16);
    }

    #[test]
    fn test_empty_stats() {
        let stats = PlateCache::new(4).stats();
        assert_eq!(stats.hits + stats.misses, 0);
        assert_eq!(stats.hit_rate, 0.0);
    }
}
