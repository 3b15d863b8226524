//! Bounded compile-once cache for templates.
//!
//! Compiled templates are immutable, so they are shared as
//! `Arc<CompiledTemplate>`. The cache holds at most `capacity` entries and
//! evicts the least recently used one when full. Two threads racing on the
//! same key may both compile; the first insert wins and both get equal
//! patterns.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use lru::LruCache;

use crate::pattern::{CompiledTemplate, ComparisonMode, MatchOptions};
use xt_core::errors::Result;

type CacheKey = (String, ComparisonMode, MatchOptions);

/// Capacity of [`TemplateCache::global`] and [`TemplateCache::new`].
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => unreachable!(),
};

/// A thread-safe LRU map from `(template, mode, options)` to its compiled
/// form.
pub struct TemplateCache {
    entries: Mutex<LruCache<CacheKey, Arc<CompiledTemplate>>>,
}

static GLOBAL: OnceLock<TemplateCache> = OnceLock::new();

impl TemplateCache {
    /// An empty cache holding up to [`DEFAULT_CAPACITY`] templates.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty cache holding up to `capacity` templates.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The process-wide cache used by the free `extract*` functions.
    pub fn global() -> &'static TemplateCache {
        GLOBAL.get_or_init(TemplateCache::new)
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, Arc<CompiledTemplate>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the compiled template for the key, compiling it on first use.
    ///
    /// Compilation errors are returned and nothing is cached.
    pub fn get_or_compile(
        &self,
        template: &str,
        mode: ComparisonMode,
        options: MatchOptions,
    ) -> Result<Arc<CompiledTemplate>> {
        let key = (template.to_string(), mode, options);
        if let Some(hit) = self.lock().get(&key) {
            tracing::trace!(template, "template cache hit");
            return Ok(Arc::clone(hit));
        }

        // Compile without holding the lock.
        let compiled = Arc::new(CompiledTemplate::new(template, mode, options)?);
        let mut entries = self.lock();
        let entry = entries.get_or_insert(key, || {
            tracing::debug!(template, "template cached");
            compiled
        });
        Ok(Arc::clone(entry))
    }

    /// Maximum number of cached templates.
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached template.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.lock();
        f.debug_struct("TemplateCache")
            .field("len", &entries.len())
            .field("capacity", &entries.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xt_core::Error;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn compiles_once_per_key() {
        let cache = TemplateCache::new();
        let a = cache
            .get_or_compile("{0} {1}", ComparisonMode::Default, MatchOptions::default())
            .unwrap();
        let b = cache
            .get_or_compile("{0} {1}", ComparisonMode::Default, MatchOptions::default())
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY.get());
    }

    #[test]
    fn mode_and_options_are_part_of_the_key() {
        let cache = TemplateCache::new();
        let t = "{0} {1}";
        cache.get_or_compile(t, ComparisonMode::Default, MatchOptions::default()).unwrap();
        cache.get_or_compile(t, ComparisonMode::Whole, MatchOptions::default()).unwrap();
        cache.get_or_compile(t, ComparisonMode::Whole, MatchOptions::case_insensitive()).unwrap();
        assert_eq!(cache.len(), 3);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = TemplateCache::new();
        let err = cache
            .get_or_compile("{", ComparisonMode::Default, MatchOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate { .. }));
        assert!(cache.is_empty());
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let cache = TemplateCache::with_capacity(cap(2));
        let get = |t: &str| {
            cache
                .get_or_compile(t, ComparisonMode::Whole, MatchOptions::default())
                .unwrap()
        };
        let a = get("a={0}");
        let b = get("b={0}");
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(Arc::ptr_eq(&a, &get("a={0}")));
        get("c={0}");
        assert_eq!(cache.len(), 2);
        assert!(Arc::ptr_eq(&a, &get("a={0}")));
        assert!(!Arc::ptr_eq(&b, &get("b={0}")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn many_distinct_templates_stay_within_capacity() {
        let cache = TemplateCache::with_capacity(cap(64));
        for i in 0..1_000 {
            cache
                .get_or_compile(&format!("key{i}={{0}}"), ComparisonMode::Default, MatchOptions::default())
                .unwrap();
        }
        assert_eq!(cache.len(), 64);
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(TemplateCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache
                        .get_or_compile("id={0}", ComparisonMode::Whole, MatchOptions::default())
                        .map(|c| c.pattern().to_string())
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), "^id=(?P<_1>.*?)$");
        }
        assert_eq!(cache.len(), 1);
    }
}
