//! Host-side visual entity and its construction-time component constraint.
//!
//! [`ViewEntity`] is the minimal host-framework surface an item view needs:
//! typed component storage with lookup, a geometry component that is
//! structurally guaranteed to exist, and a one-shot initialization
//! lifecycle ([`ViewEntity::fire_awake`]).
//!
//! [`EntityBuilder`] enforces the required-geometry constraint when the
//! entity is built: by default a missing geometry component is auto-attached
//! with a default rect; with auto-attach disabled, construction is rejected
//! instead.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use thiserror::Error;

use crate::geometry::{LayoutHandle, LayoutRect};
use crate::item_view::ItemView;
use crate::stats::LookupStats;

/// Errors surfaced while constructing or mutating a host entity.
///
/// The item-view accessor itself surfaces no errors; these cover the host
/// construction rules only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The builder was configured to reject entities without a geometry
    /// component and none was supplied.
    #[error("entity `{0}` has no layout component and auto-attach is disabled")]
    MissingLayout(String),

    /// The entity already carries an item view.
    #[error("entity `{0}` already has an item view attached")]
    DuplicateItemView(String),
}

pub(crate) struct EntityInner {
    name: String,
    layout: LayoutHandle,
    components: SmallVec<[Rc<dyn Any>; 2]>,
    item_view: Option<ItemView>,
    awake_fired: bool,
    stats: LookupStats,
}

impl EntityInner {
    pub(crate) fn record_cache_hit(&mut self) {
        self.stats.cache_hits += 1;
    }
}

/// A visual entity managed by the host.
///
/// Cloning is cheap; clones are handles to the same entity. The entity keeps
/// its attached components alive, including its item view, for as long as
/// any handle to it exists.
#[derive(Clone)]
pub struct ViewEntity {
    inner: Rc<RefCell<EntityInner>>,
}

impl std::fmt::Debug for ViewEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEntity")
            .field("name", &self.inner.borrow().name)
            .finish_non_exhaustive()
    }
}

impl ViewEntity {
    pub(crate) fn from_inner(inner: Rc<RefCell<EntityInner>>) -> Self {
        Self { inner }
    }

    /// The entity's debug name.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Host component-lookup operation for the geometry component.
    ///
    /// Always succeeds: the builder guarantees a geometry component exists.
    /// Each call counts as one lookup in [`ViewEntity::stats`].
    pub fn layout_component(&self) -> LayoutHandle {
        let mut inner = self.inner.borrow_mut();
        inner.stats.lookups += 1;
        inner.layout.clone()
    }

    /// Typed lookup over the entity's auxiliary components.
    ///
    /// Returns the first attached component of type `T`, if any.
    pub fn component<T: Any>(&self) -> Option<Rc<T>> {
        let inner = self.inner.borrow();
        inner
            .components
            .iter()
            .find_map(|c| Rc::clone(c).downcast::<T>().ok())
    }

    /// Attaches an auxiliary data component.
    pub fn insert_component<T: Any>(&self, value: T) {
        self.inner.borrow_mut().components.push(Rc::new(value));
    }

    /// Attaches an item view to this entity.
    ///
    /// Fails if one is already attached; the geometry requirement is always
    /// satisfied here because construction guaranteed it.
    pub fn attach_item_view(&self) -> Result<ItemView, HostError> {
        let mut inner = self.inner.borrow_mut();
        if inner.item_view.is_some() {
            return Err(HostError::DuplicateItemView(inner.name.clone()));
        }
        let view = ItemView::attached(Rc::downgrade(&self.inner));
        inner.item_view = Some(view.clone());
        Ok(view)
    }

    /// The attached item view, if any.
    pub fn item_view(&self) -> Option<ItemView> {
        self.inner.borrow().item_view.clone()
    }

    /// Fires the framework initialization lifecycle.
    ///
    /// Invoked once per entity instance; repeat calls are ignored so the
    /// hook cannot fire twice even under a misbehaving driver.
    pub fn fire_awake(&self) {
        let view = {
            let mut inner = self.inner.borrow_mut();
            if inner.awake_fired {
                return;
            }
            inner.awake_fired = true;
            log::trace!("awake: `{}`", inner.name);
            inner.item_view.clone()
        };
        // The borrow is released above: awake() re-enters the entity to
        // resolve the layout component.
        if let Some(view) = view {
            view.awake();
        }
    }

    /// True once the initialization lifecycle has fired.
    pub fn awake_fired(&self) -> bool {
        self.inner.borrow().awake_fired
    }

    /// Snapshot of the entity's lookup counters.
    pub fn stats(&self) -> LookupStats {
        self.inner.borrow().stats.clone()
    }
}

/// Builds a [`ViewEntity`], enforcing the required-geometry constraint.
///
/// # Example
///
/// ```
/// use repool_foundation::{EntityBuilder, LayoutRect};
///
/// let entity = EntityBuilder::new("row-0")
///     .layout(LayoutRect::row(48.0))
///     .item_view()
///     .build()
///     .unwrap();
///
/// entity.fire_awake();
/// let handle = entity.item_view().unwrap().layout_handle();
/// assert_eq!(handle.rect().size.1, 48.0);
/// ```
pub struct EntityBuilder {
    name: String,
    layout: Option<LayoutRect>,
    auto_attach_layout: bool,
    with_item_view: bool,
    components: SmallVec<[Rc<dyn Any>; 2]>,
}

impl EntityBuilder {
    /// Starts building an entity with the given debug name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: None,
            auto_attach_layout: true,
            with_item_view: false,
            components: SmallVec::new(),
        }
    }

    /// Supplies the geometry component's initial rect.
    pub fn layout(mut self, rect: LayoutRect) -> Self {
        self.layout = Some(rect);
        self
    }

    /// Controls what happens when no geometry was supplied: attach a default
    /// one (the default) or reject construction.
    pub fn auto_attach_layout(mut self, enabled: bool) -> Self {
        self.auto_attach_layout = enabled;
        self
    }

    /// Attaches an item view to the built entity.
    pub fn item_view(mut self) -> Self {
        self.with_item_view = true;
        self
    }

    /// Attaches an auxiliary data component.
    pub fn component<T: Any>(mut self, value: T) -> Self {
        self.components.push(Rc::new(value));
        self
    }

    /// Builds the entity.
    ///
    /// The built entity always carries exactly one geometry component: a
    /// missing one is auto-attached, or construction fails with
    /// [`HostError::MissingLayout`] when auto-attach is disabled.
    pub fn build(self) -> Result<ViewEntity, HostError> {
        let layout = match self.layout {
            Some(rect) => LayoutHandle::new(rect),
            None if self.auto_attach_layout => {
                log::debug!("auto-attaching default layout to `{}`", self.name);
                LayoutHandle::default()
            }
            None => return Err(HostError::MissingLayout(self.name)),
        };

        let entity = ViewEntity {
            inner: Rc::new(RefCell::new(EntityInner {
                name: self.name,
                layout,
                components: self.components,
                item_view: None,
                awake_fired: false,
                stats: LookupStats::default(),
            })),
        };

        if self.with_item_view {
            // Cannot fail: the entity was just built without a view.
            let _ = entity.attach_item_view();
        }

        Ok(entity)
    }
}
