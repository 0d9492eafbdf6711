use repool_foundation::{EntityBuilder, LayoutHandle, LayoutRect, ViewEntity};

/// Test fixture holding a pool of row entities.
///
/// Builds rows through the production [`EntityBuilder`] path and lets tests
/// drive the initialization lifecycle in whatever order the scenario needs.
/// The pool keeps every entity alive for the duration of the test.
#[derive(Default)]
pub struct HostPool {
    entities: Vec<ViewEntity>,
}

impl HostPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a row entity with an item view and a default layout rect.
    ///
    /// The initialization lifecycle is NOT fired; call
    /// [`ViewEntity::fire_awake`] or [`HostPool::awake_all`] explicitly.
    pub fn spawn_row(&mut self, name: &str) -> ViewEntity {
        self.spawn_row_with(name, LayoutRect::default())
    }

    /// Spawns a row entity with an item view and the given layout rect.
    pub fn spawn_row_with(&mut self, name: &str, rect: LayoutRect) -> ViewEntity {
        let entity = EntityBuilder::new(name)
            .layout(rect)
            .item_view()
            .build()
            .expect("row construction cannot fail with a layout supplied");
        self.entities.push(entity.clone());
        entity
    }

    /// Fires the initialization lifecycle on every entity, in spawn order.
    pub fn awake_all(&self) {
        for entity in &self.entities {
            entity.fire_awake();
        }
    }

    /// The entity at the given spawn index.
    pub fn entity(&self, index: usize) -> &ViewEntity {
        &self.entities[index]
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Sum of geometry lookups across the pool.
    pub fn total_lookups(&self) -> usize {
        self.entities.iter().map(|e| e.stats().lookups).sum()
    }
}

/// Asserts that two handles refer to the same underlying geometry.
#[track_caller]
pub fn assert_same_handle(a: &LayoutHandle, b: &LayoutHandle) {
    assert!(
        LayoutHandle::same_handle(a, b),
        "expected the same layout handle, got distinct handles:\n  left:  {a:?}\n  right: {b:?}"
    );
}

/// Asserts that two handles refer to distinct geometry.
#[track_caller]
pub fn assert_distinct_handles(a: &LayoutHandle, b: &LayoutHandle) {
    assert!(
        !LayoutHandle::same_handle(a, b),
        "expected distinct layout handles, got the same handle: {a:?}"
    );
}
