//! Recyclable list-item view foundation.
//!
//! The leaf building block a recycling list manages: a visual entity
//! ([`ViewEntity`]) structurally guaranteed to carry a geometry component
//! ([`LayoutHandle`]), and an [`ItemView`] component that caches that handle
//! so repeated per-bind or per-frame access never repeats the host lookup.
//!
//! # Architecture
//!
//! - [`ItemView`] — cached layout-handle accessor (lazy fill, eagerly primed
//!   by the entity's initialization lifecycle)
//! - [`ViewEntity`] / [`EntityBuilder`] — minimal host-entity model with the
//!   required-geometry constraint enforced at construction
//! - [`Bindable`] — capability trait for row types that rebind content in
//!   place when the list recycles them
//! - [`LookupStats`] — per-entity lookup counters for tests
//!
//! # Example
//!
//! ```
//! use repool_foundation::{EntityBuilder, LayoutRect};
//!
//! let entity = EntityBuilder::new("row-0")
//!     .layout(LayoutRect::row(48.0))
//!     .item_view()
//!     .build()
//!     .unwrap();
//! entity.fire_awake();
//!
//! let view = entity.item_view().unwrap();
//! assert_eq!(view.layout_handle().rect().size.1, 48.0);
//! ```

pub mod bind;
pub mod entity;
pub mod geometry;
pub mod item_view;
pub mod stats;

pub use bind::Bindable;
pub use entity::{EntityBuilder, HostError, ViewEntity};
pub use geometry::{Anchor, LayoutHandle, LayoutRect};
pub use item_view::ItemView;
pub use stats::LookupStats;
