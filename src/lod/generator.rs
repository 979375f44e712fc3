use std::sync::Arc;

use crate::resources::MeshBuffer;
use crate::settings::TriangleBudgets;
use crate::viewport::ViewportManager;

use super::simplify::simplify;
use super::tier::LodGeometryBundle;

/// Builds the three detail tiers of a garment from its full-detail mesh.
///
/// Performs no caching: it is only invoked on a
/// [`ResourceCache`](crate::cache::ResourceCache) miss.
pub struct LodGenerator {
    viewport: Arc<ViewportManager>,
    budgets: TriangleBudgets,
}

impl LodGenerator {
    #[must_use]
    pub fn new(viewport: Arc<ViewportManager>) -> Self {
        let budgets = viewport.lod_settings().budgets;
        Self { viewport, budgets }
    }

    #[must_use]
    pub fn with_budgets(viewport: Arc<ViewportManager>, budgets: TriangleBudgets) -> Self {
        Self { viewport, budgets }
    }

    #[must_use]
    pub fn budgets(&self) -> TriangleBudgets {
        self.budgets
    }

    /// `high` is the base mesh as produced; `medium` and `low` are decimated
    /// to their budgets. Distances follow the live viewport.
    pub fn generate<F>(&self, garment_type: &str, base_generator: F) -> LodGeometryBundle
    where
        F: FnOnce() -> MeshBuffer,
    {
        let distances = self.viewport.lod_distances(garment_type);
        let base = base_generator();

        if base.is_empty() {
            log::warn!("LOD: base mesh for '{garment_type}' has no triangles, all tiers will be empty");
        }

        let medium = simplify(&base, self.budgets.medium);
        let low = simplify(&base, self.budgets.low);

        if base.triangle_count() > self.budgets.high {
            log::debug!(
                "LOD: '{}' high tier has {} triangles, above the {} budget",
                garment_type,
                base.triangle_count(),
                self.budgets.high
            );
        }

        let bundle = LodGeometryBundle {
            high: Arc::new(base),
            medium: Arc::new(medium),
            low: Arc::new(low),
            distances,
        };

        log::debug!(
            "LOD: generated '{}' tiers {:?} at distances {:?}",
            garment_type,
            bundle.triangle_counts(),
            distances
        );

        bundle
    }
}
