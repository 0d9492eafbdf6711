//! Component-lookup statistics.
//!
//! Used for testing and debugging item-view caching behavior.

/// Counters for geometry-component access on a single entity.
///
/// `lookups` counts real component queries against the host entity;
/// `cache_hits` counts accessor calls served from the item view's cache.
/// Observation only, no behavioral effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupStats {
    /// Number of geometry-component lookups performed on the entity.
    pub lookups: usize,

    /// Number of accessor calls answered from the cached handle.
    pub cache_hits: usize,
}
