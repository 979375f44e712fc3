use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::lod::LodGeometryBundle;
use crate::material::GarmentMaterial;
use crate::resources::MeshBuffer;
use crate::settings::CacheSettings;
use crate::utils::{Clock, SystemClock};

use super::store::Store;

/// Which store a cached value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Geometry,
    LodBundle,
    Material,
}

impl CacheKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geometry => "geometry",
            Self::LodBundle => "lod-bundle",
            Self::Material => "material",
        }
    }
}

/// A value from any of the three stores.
#[derive(Clone)]
pub enum CacheValue {
    Geometry(Arc<MeshBuffer>),
    LodBundle(Arc<LodGeometryBundle>),
    Material(Arc<GarmentMaterial>),
}

impl CacheValue {
    #[must_use]
    pub fn kind(&self) -> CacheKind {
        match self {
            Self::Geometry(_) => CacheKind::Geometry,
            Self::LodBundle(_) => CacheKind::LodBundle,
            Self::Material(_) => CacheKind::Material,
        }
    }

    #[must_use]
    pub fn as_geometry(&self) -> Option<&Arc<MeshBuffer>> {
        match self {
            Self::Geometry(g) => Some(g),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_lod_bundle(&self) -> Option<&Arc<LodGeometryBundle>> {
        match self {
            Self::LodBundle(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_material(&self) -> Option<&Arc<GarmentMaterial>> {
        match self {
            Self::Material(m) => Some(m),
            _ => None,
        }
    }
}

/// Entry counts and estimated footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub geometries: usize,
    pub lod_bundles: usize,
    pub materials: usize,
    /// Buffer bytes of every stored geometry, all LOD tiers included.
    pub estimated_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.geometries + self.lod_bundles + self.materials
    }
}

#[derive(Default)]
struct CacheInner {
    geometries: Store<MeshBuffer>,
    lod_bundles: Store<LodGeometryBundle>,
    materials: Store<GarmentMaterial>,
    sequence: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheInner {
    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn len(&self) -> usize {
        self.geometries.len() + self.lod_bundles.len() + self.materials.len()
    }

    fn remove_everywhere(&mut self, key: &str) -> usize {
        usize::from(self.geometries.remove(key).is_some())
            + usize::from(self.lod_bundles.remove(key).is_some())
            + usize::from(self.materials.remove(key).is_some())
    }

    fn cleanup(&mut self, now: Duration, settings: &CacheSettings) -> usize {
        let ttl = settings.idle_ttl();
        let expired = self.geometries.expire(now, ttl)
            + self.lod_bundles.expire(now, ttl)
            + self.materials.expire(now, ttl);

        let mut evicted = 0;
        let len = self.len();
        if len > settings.max_entries {
            let count = (len as f32 * settings.evict_fraction).floor() as usize;

            let mut ages: Vec<(Duration, u64, String)> = self
                .geometries
                .ages()
                .chain(self.lod_bundles.ages())
                .chain(self.materials.ages())
                .map(|(at, seq, key)| (at, seq, key.to_string()))
                .collect();
            ages.sort_unstable_by_key(|(at, seq, _)| (*at, *seq));

            for (_, _, key) in ages.into_iter().take(count) {
                evicted += self.remove_everywhere(&key);
            }
        }

        let removed = expired + evicted;
        if removed > 0 {
            self.evictions += removed as u64;
            log::debug!(
                "Cache cleanup: expired {expired}, evicted {evicted}, {} entries remain",
                self.len()
            );
        }
        removed
    }
}

/// Keyed, time- and size-bounded storage for geometries, LOD bundles and
/// materials.
///
/// Values are handed out as `Arc`s, so eviction only drops the cache's own
/// reference; callers keep whatever they already hold. A miss runs
/// [`cleanup`](Self::cleanup) before the generator.
///
/// The whole check-generate-insert sequence holds one lock, so concurrent
/// callers never generate the same key twice. Generators therefore must not
/// call back into the same cache.
pub struct ResourceCache {
    inner: Mutex<CacheInner>,
    settings: CacheSettings,
    clock: Arc<dyn Clock>,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new(CacheSettings::default())
    }
}

impl ResourceCache {
    #[must_use]
    pub fn new(settings: CacheSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock::new()))
    }

    #[must_use]
    pub fn with_clock(settings: CacheSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            settings,
            clock,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    fn get_or_insert_with<T, F>(
        &self,
        key: &str,
        select: fn(&mut CacheInner) -> &mut Store<T>,
        generator: F,
    ) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let sequence = inner.next_sequence();
        if let Some(value) = select(inner).touch(key, now, sequence) {
            inner.hits += 1;
            return value;
        }

        inner.misses += 1;
        inner.cleanup(now, &self.settings);

        let value = Arc::new(generator());
        let sequence = inner.next_sequence();
        select(inner).insert(key, value.clone(), now, sequence);
        value
    }

    pub fn get_or_create_geometry<F>(&self, key: &str, generator: F) -> Arc<MeshBuffer>
    where
        F: FnOnce() -> MeshBuffer,
    {
        self.get_or_insert_with(key, |i| &mut i.geometries, generator)
    }

    pub fn get_or_create_lod_bundle<F>(&self, key: &str, generator: F) -> Arc<LodGeometryBundle>
    where
        F: FnOnce() -> LodGeometryBundle,
    {
        self.get_or_insert_with(key, |i| &mut i.lod_bundles, generator)
    }

    pub fn get_or_create_material<F>(&self, key: &str, generator: F) -> Arc<GarmentMaterial>
    where
        F: FnOnce() -> GarmentMaterial,
    {
        self.get_or_insert_with(key, |i| &mut i.materials, generator)
    }

    /// Kind-dispatched lookup.
    ///
    /// A generator that returns a value of another kind is stored under the
    /// value's own kind and logged; the value is still returned.
    pub fn get_or_create<F>(&self, key: &str, kind: CacheKind, generator: F) -> CacheValue
    where
        F: FnOnce() -> CacheValue,
    {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let sequence = inner.next_sequence();

        let hit = match kind {
            CacheKind::Geometry => inner.geometries.touch(key, now, sequence).map(CacheValue::Geometry),
            CacheKind::LodBundle => inner.lod_bundles.touch(key, now, sequence).map(CacheValue::LodBundle),
            CacheKind::Material => inner.materials.touch(key, now, sequence).map(CacheValue::Material),
        };
        if let Some(value) = hit {
            inner.hits += 1;
            return value;
        }

        inner.misses += 1;
        inner.cleanup(now, &self.settings);

        let value = generator();
        if value.kind() != kind {
            log::warn!(
                "Cache: generator for '{key}' requested as {} produced a {}",
                kind.as_str(),
                value.kind().as_str()
            );
        }

        let sequence = inner.next_sequence();
        match &value {
            CacheValue::Geometry(g) => inner.geometries.insert(key, g.clone(), now, sequence),
            CacheValue::LodBundle(b) => inner.lod_bundles.insert(key, b.clone(), now, sequence),
            CacheValue::Material(m) => inner.materials.insert(key, m.clone(), now, sequence),
        }
        value
    }

    // ---- Peeks (no generation, no access refresh) ----

    #[must_use]
    pub fn get_geometry(&self, key: &str) -> Option<Arc<MeshBuffer>> {
        self.inner.lock().geometries.peek(key)
    }

    #[must_use]
    pub fn get_lod_bundle(&self, key: &str) -> Option<Arc<LodGeometryBundle>> {
        self.inner.lock().lod_bundles.peek(key)
    }

    #[must_use]
    pub fn get_material(&self, key: &str) -> Option<Arc<GarmentMaterial>> {
        self.inner.lock().materials.peek(key)
    }

    /// Removes `key` from every store; returns how many entries went.
    pub fn remove(&self, key: &str) -> usize {
        self.inner.lock().remove_everywhere(key)
    }

    /// Expires idle entries, then trims the oldest share if still over
    /// capacity. Returns the number of entries removed.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        self.inner.lock().cleanup(now, &self.settings)
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.geometries.clear();
        inner.lod_bundles.clear();
        inner.materials.clear();
        log::debug!("Cache cleared");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let estimated_bytes = inner
            .geometries
            .values()
            .map(|g| g.byte_length())
            .sum::<usize>()
            + inner
                .lod_bundles
                .values()
                .map(|b| b.byte_length())
                .sum::<usize>();

        CacheStats {
            geometries: inner.geometries.len(),
            lod_bundles: inner.lod_bundles.len(),
            materials: inner.materials.len(),
            estimated_bytes,
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
        }
    }
}
