use super::FitnessValue;
use crate::chromosome::GenesHash;
use crate::errors::Error;
use lru::LruCache;
use nohash_hasher::NoHashHasher;
use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock};

type CacheBuildHasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Default maximum number of cached fitness values; in practice the cache is
/// bounded by the number of distinct chromosomes seen within a run.
pub const DEFAULT_CACHE_SIZE: usize = 1 << 20;

/// Process-wide fitness memoization keyed by the genes fingerprint, shared
/// across generations and fitness worker threads. Entries are written once
/// and only evicted by the LRU bound.
#[derive(Debug, Clone)]
pub struct FitnessCache {
    pub cache_size: usize,
    cache_pointer: Arc<RwLock<LruCache<GenesHash, FitnessValue, CacheBuildHasher>>>,
    hit_miss_pointer: Arc<RwLock<(usize, usize)>>,
}

impl FitnessCache {
    pub fn try_new(cache_size: usize) -> Result<Self, Error> {
        let non_zero_cache_size = NonZeroUsize::new(cache_size)
            .ok_or(Error::InvalidConfig("fitness cache size must be non-zero"))?;
        let cache = LruCache::with_hasher(non_zero_cache_size, CacheBuildHasher::default());
        Ok(Self {
            cache_size,
            cache_pointer: Arc::new(RwLock::new(cache)),
            hit_miss_pointer: Arc::new(RwLock::new((0, 0))),
        })
    }

    pub fn read(&self, genes_hash: GenesHash) -> Option<FitnessValue> {
        let value = self
            .cache_pointer
            .read()
            .map(|cache| cache.peek(&genes_hash).copied())
            .unwrap();

        let mut hit_miss = self.hit_miss_pointer.write().unwrap();
        if value.is_some() {
            hit_miss.0 += 1;
        } else {
            hit_miss.1 += 1;
        }
        value
    }

    pub fn write(&self, genes_hash: GenesHash, value: FitnessValue) {
        self.cache_pointer.write().unwrap().put(genes_hash, value);
    }

    pub fn number_of_hits_and_misses(&self) -> (usize, usize) {
        *self.hit_miss_pointer.read().unwrap()
    }
}
