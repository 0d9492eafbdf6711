//! Item-view component: cached access to the owning entity's layout handle.
//!
//! [`ItemView`] is the base building block for recyclable list rows. It
//! caches the geometry [`LayoutHandle`] of the entity it is attached to so
//! that per-bind and per-frame access never repeats the host component
//! lookup. The cache is filled either eagerly when the entity's
//! initialization lifecycle fires, or lazily on first access, whichever
//! happens first; both paths run the same guarded fill, so exactly one
//! lookup ever occurs.
//!
//! The component has two observable states, "handle not yet cached" and
//! "handle cached", with a single one-way transition between them.
//!
//! Concrete row types compose an `ItemView` together with their own cached
//! data-access fields and implement [`Bindable`](crate::bind::Bindable) for
//! fast rebinding; see the `bind` module.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::entity::{EntityInner, ViewEntity};
use crate::geometry::LayoutHandle;

/// Component giving a recyclable list row cached access to its entity's
/// geometry handle.
///
/// Cloning is cheap; clones are handles to the same component and share one
/// cache. The view holds a weak reference to its owning entity — the entity
/// owns the view, not the other way around.
#[derive(Clone)]
pub struct ItemView {
    inner: Rc<ItemViewInner>,
}

impl std::fmt::Debug for ItemView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemView").finish_non_exhaustive()
    }
}

struct ItemViewInner {
    owner: Weak<RefCell<EntityInner>>,
    cache: RefCell<Option<LayoutHandle>>,
}

impl ItemView {
    pub(crate) fn attached(owner: Weak<RefCell<EntityInner>>) -> Self {
        Self {
            inner: Rc::new(ItemViewInner {
                owner,
                cache: RefCell::new(None),
            }),
        }
    }

    /// Returns the layout handle of the owning entity.
    ///
    /// Resolves and caches the handle on first access; every later call is
    /// answered from the cache. The handle always belongs to the same entity
    /// this view is attached to.
    ///
    /// # Panics
    ///
    /// Panics if the owning entity has been destroyed and no handle was
    /// cached before that. The host keeps entities alive while their views
    /// are in use, so this only fires on host misuse.
    pub fn layout_handle(&self) -> LayoutHandle {
        if let Some(handle) = self.inner.cache.borrow().as_ref() {
            if let Some(owner) = self.inner.owner.upgrade() {
                owner.borrow_mut().record_cache_hit();
            }
            return handle.clone();
        }
        self.resolve()
    }

    /// Initialization hook, invoked by the entity when its framework-level
    /// construction completes.
    ///
    /// Primes the cache so the first post-init accessor call is a cache hit.
    /// Runs the same guarded fill as the accessor: if an earlier access
    /// already filled the cache, no further lookup happens.
    pub fn awake(&self) {
        if self.inner.cache.borrow().is_some() {
            return;
        }
        let _ = self.resolve();
    }

    /// True once the handle has been resolved and cached.
    pub fn is_cached(&self) -> bool {
        self.inner.cache.borrow().is_some()
    }

    fn resolve(&self) -> LayoutHandle {
        let owner = self
            .inner
            .owner
            .upgrade()
            .expect("item view accessed after its owning entity was destroyed");
        let entity = ViewEntity::from_inner(owner);
        let handle = entity.layout_component();
        log::debug!("resolved layout handle for `{}`", entity.name());
        *self.inner.cache.borrow_mut() = Some(handle.clone());
        handle
    }
}

#[cfg(test)]
mod tests {
    use crate::entity::EntityBuilder;
    use crate::geometry::{LayoutHandle, LayoutRect};

    #[test]
    fn repeated_access_returns_the_same_handle() {
        let entity = EntityBuilder::new("row").item_view().build().unwrap();
        let view = entity.item_view().unwrap();

        let first = view.layout_handle();
        let second = view.layout_handle();
        let third = view.layout_handle();

        assert!(LayoutHandle::same_handle(&first, &second));
        assert!(LayoutHandle::same_handle(&second, &third));
    }

    #[test]
    fn awake_primes_the_cache_with_one_lookup() {
        let entity = EntityBuilder::new("row").item_view().build().unwrap();
        let view = entity.item_view().unwrap();
        assert!(!view.is_cached());

        entity.fire_awake();
        assert!(view.is_cached());
        assert_eq!(entity.stats().lookups, 1);

        // Subsequent accessor calls are cache hits, not fresh lookups.
        for _ in 0..10 {
            let _ = view.layout_handle();
        }
        let stats = entity.stats();
        assert_eq!(stats.lookups, 1);
        assert_eq!(stats.cache_hits, 10);
    }

    #[test]
    fn access_before_awake_falls_back_to_lazy_lookup() {
        let entity = EntityBuilder::new("row")
            .layout(LayoutRect::row(48.0))
            .item_view()
            .build()
            .unwrap();
        let view = entity.item_view().unwrap();

        let handle = view.layout_handle();
        assert_eq!(entity.stats().lookups, 1);
        assert!(LayoutHandle::same_handle(&handle, &entity.layout_component()));
    }

    #[test]
    fn awake_after_lazy_access_performs_no_extra_lookup() {
        let entity = EntityBuilder::new("row").item_view().build().unwrap();
        let view = entity.item_view().unwrap();

        let before = view.layout_handle();
        assert_eq!(entity.stats().lookups, 1);

        entity.fire_awake();
        assert_eq!(entity.stats().lookups, 1);

        let after = view.layout_handle();
        assert!(LayoutHandle::same_handle(&before, &after));
        assert_eq!(entity.stats().lookups, 1);
    }

    #[test]
    fn views_in_a_pool_resolve_their_own_entity_handle() {
        let rows: Vec<_> = (0..4)
            .map(|i| {
                EntityBuilder::new(format!("row-{i}"))
                    .layout(LayoutRect::row(32.0 + i as f32))
                    .item_view()
                    .build()
                    .unwrap()
            })
            .collect();

        for entity in &rows {
            entity.fire_awake();
        }

        for (i, entity) in rows.iter().enumerate() {
            let handle = entity.item_view().unwrap().layout_handle();
            assert!(LayoutHandle::same_handle(&handle, &entity.layout_component()));
            assert_eq!(handle.rect().size.1, 32.0 + i as f32);

            for other in rows.iter().skip(i + 1) {
                let other_handle = other.item_view().unwrap().layout_handle();
                assert!(!LayoutHandle::same_handle(&handle, &other_handle));
            }
        }
    }
}
