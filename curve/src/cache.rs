//! Bounded memoization of curve operations.
//!
//! Every cached operation is a pure function of the curve parameters (including the coordinate
//! mode) and its operands, so serving a result from the cache never changes what a caller
//! observes. Entries are keyed by the whole [`EllipticCurve`] value: curves that differ in any
//! parameter, or only in their `projective` flag, never share entries.

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use num_bigint::BigUint;

use crate::settings::Settings;
use crate::{CurveError, CurveOps, EllipticCurve, JacobianPoint, Point};

/// Least-recently-used map holding at most `capacity` entries.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            tick: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up `key`, marking it most recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let tick = self.next_tick();
        let (value, last_used) = self.entries.get_mut(key)?;
        let previous = std::mem::replace(last_used, tick);
        let value = value.clone();

        if let Some(k) = self.recency.remove(&previous) {
            self.recency.insert(tick, k);
        }
        Some(value)
    }

    /// Insert or refresh `key`, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let tick = self.next_tick();
        if let Some((_, previous)) = self.entries.insert(key.clone(), (value, tick)) {
            self.recency.remove(&previous);
        } else if self.entries.len() > self.capacity {
            if let Some((_, oldest)) = self.recency.pop_first() {
                self.entries.remove(&oldest);
            }
        }
        self.recency.insert(tick, key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Operation {
    IsOnCurve(Point),
    Add(Point, Point),
    Double(Point),
    Multiply(BigUint, Point),
    ToJacobian(Point),
    ToAffine(JacobianPoint),
    JacobianAdd(JacobianPoint, JacobianPoint),
    JacobianDouble(JacobianPoint),
    JacobianMultiply(BigUint, JacobianPoint),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    curve: EllipticCurve,
    operation: Operation,
}

#[derive(Clone, Debug)]
enum CachedValue {
    Flag(bool),
    Affine(Point),
    Jacobian(JacobianPoint),
}

trait Cacheable: Sized {
    fn into_value(self) -> CachedValue;
    fn from_value(value: CachedValue) -> Option<Self>;
}

impl Cacheable for bool {
    fn into_value(self) -> CachedValue {
        CachedValue::Flag(self)
    }

    fn from_value(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Flag(flag) => Some(flag),
            _ => None,
        }
    }
}

impl Cacheable for Point {
    fn into_value(self) -> CachedValue {
        CachedValue::Affine(self)
    }

    fn from_value(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Affine(point) => Some(point),
            _ => None,
        }
    }
}

impl Cacheable for JacobianPoint {
    fn into_value(self) -> CachedValue {
        CachedValue::Jacobian(self)
    }

    fn from_value(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Jacobian(point) => Some(point),
            _ => None,
        }
    }
}

/// Hit and miss counters of a [`ResultCache`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

#[derive(Debug)]
struct CacheState {
    entries: LruCache<CacheKey, CachedValue>,
    hits: u64,
    misses: u64,
}

/// Thread-safe LRU memoization table for curve operations.
///
/// A capacity of `0` turns memoization off: every call recomputes and counts as a miss.
/// The lock is only held for lookups and insertions, never while computing.
#[derive(Debug)]
pub struct ResultCache {
    state: Mutex<CacheState>,
}

static GLOBAL_CACHE: OnceLock<Arc<ResultCache>> = OnceLock::new();

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        ResultCache {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// A cache that stores nothing.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cache_capacity)
    }

    /// The process-wide cache, sized from [`Settings::from_env`] on first use.
    pub fn global() -> Arc<ResultCache> {
        GLOBAL_CACHE
            .get_or_init(|| {
                let settings = Settings::from_env();
                log::debug!(
                    "creating global result cache with capacity {}",
                    settings.cache_capacity
                );
                Arc::new(Self::from_settings(&settings))
            })
            .clone()
    }

    // Values are immutable once inserted, so a panic elsewhere cannot leave a stale result.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.lock().entries.capacity()
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity() > 0
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.entries.len(),
            capacity: state.entries.capacity(),
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.hits = 0;
        state.misses = 0;
    }

    fn get_or_compute<T, E, F>(&self, key: CacheKey, compute: F) -> Result<T, E>
    where
        T: Cacheable + Clone,
        F: FnOnce() -> Result<T, E>,
    {
        {
            let mut state = self.lock();
            if let Some(value) = state.entries.get(&key).and_then(T::from_value) {
                state.hits += 1;
                log::trace!("cache hit: {:?}", key.operation);
                return Ok(value);
            }
            state.misses += 1;
        }

        log::trace!("cache miss: {:?}", key.operation);
        let value = compute()?;
        self.lock().entries.insert(key, value.clone().into_value());
        Ok(value)
    }
}

/// An [`EllipticCurve`] whose operations are memoized in a shared [`ResultCache`].
///
/// Each public operation, including the unchecked `jacobian_*` ones, is memoized as a whole
/// call. The doublings and additions inside one scalar multiplication are not cached
/// individually.
///
/// Cloning is cheap for the cache (an `Arc`); give each worker its own cache when lock
/// contention matters more than sharing hits.
#[derive(Clone, Debug)]
pub struct CachedCurve {
    curve: EllipticCurve,
    cache: Arc<ResultCache>,
}

impl CachedCurve {
    pub fn new(curve: EllipticCurve, cache: Arc<ResultCache>) -> Self {
        CachedCurve { curve, cache }
    }

    /// Use the process-wide cache.
    pub fn with_global_cache(curve: EllipticCurve) -> Self {
        Self::new(curve, ResultCache::global())
    }

    /// Use a private cache of the given capacity.
    pub fn with_capacity(curve: EllipticCurve, capacity: usize) -> Self {
        Self::new(curve, Arc::new(ResultCache::new(capacity)))
    }

    #[inline]
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Memoized [`EllipticCurve::jacobian_add_points`].
    pub fn jacobian_add_points(&self, p1: &JacobianPoint, p2: &JacobianPoint) -> JacobianPoint {
        self.infallible(Operation::JacobianAdd(p1.clone(), p2.clone()), || {
            self.curve.jacobian_add_points(p1, p2)
        })
    }

    /// Memoized [`EllipticCurve::jacobian_double_point`].
    pub fn jacobian_double_point(&self, point: &JacobianPoint) -> JacobianPoint {
        self.infallible(Operation::JacobianDouble(point.clone()), || {
            self.curve.jacobian_double_point(point)
        })
    }

    /// Memoized [`EllipticCurve::jacobian_multiply_point`].
    pub fn jacobian_multiply_point(&self, k: &BigUint, point: &JacobianPoint) -> JacobianPoint {
        self.infallible(Operation::JacobianMultiply(k.clone(), point.clone()), || {
            self.curve.jacobian_multiply_point(k, point)
        })
    }

    fn key(&self, operation: Operation) -> CacheKey {
        CacheKey {
            curve: self.curve.clone(),
            operation,
        }
    }

    fn infallible<T>(&self, operation: Operation, compute: impl FnOnce() -> T) -> T
    where
        T: Cacheable + Clone,
    {
        match self
            .cache
            .get_or_compute(self.key(operation), || Ok::<T, Infallible>(compute()))
        {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl CurveOps for CachedCurve {
    #[inline]
    fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    fn is_point_on_curve(&self, point: &Point) -> bool {
        self.infallible(Operation::IsOnCurve(point.clone()), || {
            self.curve.is_point_on_curve(point)
        })
    }

    fn add_points(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        let key = self.key(Operation::Add(p1.clone(), p2.clone()));
        self.cache
            .get_or_compute(key, || self.curve.add_points(p1, p2))
    }

    fn double_point(&self, point: &Point) -> Result<Point, CurveError> {
        let key = self.key(Operation::Double(point.clone()));
        self.cache
            .get_or_compute(key, || self.curve.double_point(point))
    }

    fn multiply_point(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError> {
        let key = self.key(Operation::Multiply(k.clone(), point.clone()));
        self.cache
            .get_or_compute(key, || self.curve.multiply_point(k, point))
    }

    fn to_jacobian(&self, point: &Point) -> JacobianPoint {
        self.infallible(Operation::ToJacobian(point.clone()), || {
            self.curve.to_jacobian(point)
        })
    }

    fn to_affine(&self, point: &JacobianPoint) -> Point {
        self.infallible(Operation::ToAffine(point.clone()), || {
            self.curve.to_affine(point)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{big, p1, p2, secp192k1_affine, secp192k1_projective};

    #[test]
    fn test_lru_eviction_order() {
        let mut lru = LruCache::new(2);
        lru.insert("a", 1);
        lru.insert("b", 2);
        assert_eq!(lru.get(&"a"), Some(1));

        // "b" is now the least recently used
        lru.insert("c", 3);
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.get(&"b"), None);
        assert_eq!(lru.get(&"a"), Some(1));
        assert_eq!(lru.get(&"c"), Some(3));
    }

    #[test]
    fn test_lru_refresh_existing_key() {
        let mut lru = LruCache::new(2);
        lru.insert("a", 1);
        lru.insert("b", 2);
        lru.insert("a", 10);
        lru.insert("c", 3);

        assert_eq!(lru.get(&"a"), Some(10));
        assert_eq!(lru.get(&"b"), None);
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_zero_capacity_stores_nothing() {
        let mut lru = LruCache::new(0);
        lru.insert("a", 1);
        assert!(lru.is_empty());
        assert_eq!(lru.get(&"a"), None);
    }

    #[test]
    fn test_repeated_calls_hit() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 128);
        for _ in 0..10 {
            assert!(curve.add_points(&p1(), &p2()).is_ok());
        }

        let stats = curve.cache().stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 9);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 128);
    }

    #[test]
    fn test_zero_capacity_never_hits() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 0);
        for _ in 0..10 {
            assert!(curve.add_points(&p1(), &p2()).is_ok());
        }

        let stats = curve.cache().stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 10);
        assert_eq!(stats.size, 0);
        assert!(!curve.cache().is_enabled());
    }

    #[test]
    fn test_cache_transparency() {
        let plain = secp192k1_projective();
        let cached = CachedCurve::with_capacity(plain.clone(), 16);
        let uncached = CachedCurve::new(plain.clone(), Arc::new(ResultCache::disabled()));

        for _ in 0..2 {
            for k in [1u32, 2, 3, 1000] {
                let expected = plain.multiply_point(&big(k), &p2());
                assert_eq!(cached.multiply_point(&big(k), &p2()), expected);
                assert_eq!(uncached.multiply_point(&big(k), &p2()), expected);
            }
            assert_eq!(cached.double_point(&p1()), plain.double_point(&p1()));
            assert_eq!(cached.is_point_on_curve(&p1()), plain.is_point_on_curve(&p1()));
            let jacobian = cached.to_jacobian(&p1());
            assert_eq!(jacobian, plain.to_jacobian(&p1()));
            assert_eq!(cached.to_affine(&jacobian), p1());
        }
        assert!(cached.cache().stats().hits > 0);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 16);
        let off_curve = Point::new(big(200), big(119));

        for _ in 0..3 {
            assert_eq!(curve.add_points(&p1(), &off_curve), Err(CurveError::InvalidPoint));
        }
        let stats = curve.cache().stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_modes_do_not_share_entries() {
        let cache = Arc::new(ResultCache::new(16));
        let projective = CachedCurve::new(secp192k1_projective(), cache.clone());
        let affine = CachedCurve::new(secp192k1_affine(), cache.clone());

        let a = projective.add_points(&p1(), &p2());
        let b = affine.add_points(&p1(), &p2());
        assert_eq!(a, b);

        let stats = cache.stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn test_clear_resets_entries_and_counters() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 16);
        curve.double_point(&p1()).unwrap();
        curve.double_point(&p1()).unwrap();
        curve.cache().clear();

        assert_eq!(
            curve.cache().stats(),
            CacheStats {
                hits: 0,
                misses: 0,
                size: 0,
                capacity: 16,
            }
        );
    }

    #[test]
    fn test_capacity_bounds_size() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 3);
        for k in 1..10u32 {
            curve.multiply_point(&big(k), &p1()).unwrap();
        }
        assert_eq!(curve.cache().stats().size, 3);
    }

    #[test]
    fn test_shared_across_threads() {
        let curve = CachedCurve::with_capacity(secp192k1_projective(), 64);
        let expected: Vec<Point> = (1..=8u32)
            .map(|k| secp192k1_projective().multiply_point(&big(k), &p1()).unwrap())
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let curve = &curve;
                let expected = &expected;
                scope.spawn(move || {
                    for (k, want) in (1..=8u32).zip(expected) {
                        assert_eq!(&curve.multiply_point(&big(k), &p1()).unwrap(), want);
                    }
                });
            }
        });

        let stats = curve.cache().stats();
        assert_eq!(stats.hits + stats.misses, 32);
        assert_eq!(stats.size, 8);
    }

    #[test]
    fn test_jacobian_operations_are_memoized() {
        let plain = secp192k1_projective();
        let cached = CachedCurve::with_capacity(plain.clone(), 16);
        let j1 = plain.to_jacobian(&p1());
        let j2 = plain.to_jacobian(&p2());

        for _ in 0..2 {
            assert_eq!(cached.jacobian_add_points(&j1, &j2), plain.jacobian_add_points(&j1, &j2));
            assert_eq!(cached.jacobian_double_point(&j1), plain.jacobian_double_point(&j1));
            assert_eq!(
                cached.jacobian_multiply_point(&big(1000), &j2),
                plain.jacobian_multiply_point(&big(1000), &j2)
            );
        }

        let stats = cached.cache().stats();
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.size, 3);
    }

    #[test]
    fn test_global_cache_is_shared() {
        let first = ResultCache::global();
        let second = ResultCache::global();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
