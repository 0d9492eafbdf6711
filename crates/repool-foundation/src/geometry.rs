//! Layout geometry handle for item views.
//!
//! [`LayoutHandle`] is the opaque handle an item view caches: a cheaply
//! cloneable reference to the [`LayoutRect`] attached to the same visual
//! entity. Clones share one underlying rect, and equality is reference
//! identity rather than value equality, so two entities whose rects happen
//! to hold the same numbers still compare as distinct.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Anchoring of a rect within its parent, in normalized `[0, 1]` space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for Anchor {
    /// Stretches across the full parent extent.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        }
    }
}

impl Anchor {
    /// Anchors to the parent's top edge, stretched horizontally.
    ///
    /// The usual anchoring for rows in a vertical list.
    pub fn top_stretch() -> Self {
        Self {
            min_x: 0.0,
            min_y: 1.0,
            max_x: 1.0,
            max_y: 1.0,
        }
    }
}

/// Position, size, anchoring and pivot of an entity within its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRect {
    /// Anchoring within the parent.
    pub anchor: Anchor,

    /// Pivot point for positioning, in normalized local space.
    pub pivot: (f32, f32),

    /// Offset of the pivot from the anchor, in pixels.
    pub offset: (f32, f32),

    /// Size in pixels (per axis, where the anchor does not stretch).
    pub size: (f32, f32),
}

impl Default for LayoutRect {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            pivot: (0.5, 0.5),
            offset: (0.0, 0.0),
            size: (0.0, 0.0),
        }
    }
}

impl LayoutRect {
    /// Creates a top-anchored row rect of the given height.
    pub fn row(height: f32) -> Self {
        Self {
            anchor: Anchor::top_stretch(),
            pivot: (0.5, 1.0),
            offset: (0.0, 0.0),
            size: (0.0, height),
        }
    }
}

/// Opaque handle to the geometry component of a visual entity.
///
/// Cloning is cheap and every clone refers to the same underlying rect.
/// `PartialEq` (and [`LayoutHandle::same_handle`]) compare reference
/// identity, never rect contents.
#[derive(Clone)]
pub struct LayoutHandle {
    inner: Rc<RefCell<LayoutRect>>,
}

impl LayoutHandle {
    /// Creates a handle owning the given rect.
    pub fn new(rect: LayoutRect) -> Self {
        Self {
            inner: Rc::new(RefCell::new(rect)),
        }
    }

    /// Returns a snapshot of the current rect.
    pub fn rect(&self) -> LayoutRect {
        self.inner.borrow().clone()
    }

    /// Mutates the rect in place.
    pub fn update(&self, f: impl FnOnce(&mut LayoutRect)) {
        f(&mut self.inner.borrow_mut());
    }

    /// Moves the pivot offset, keeping everything else.
    pub fn set_offset(&self, x: f32, y: f32) {
        self.inner.borrow_mut().offset = (x, y);
    }

    /// Resizes, keeping everything else.
    pub fn set_size(&self, width: f32, height: f32) {
        self.inner.borrow_mut().size = (width, height);
    }

    /// True when both handles refer to the same underlying rect.
    pub fn same_handle(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for LayoutHandle {
    fn eq(&self, other: &Self) -> bool {
        Self::same_handle(self, other)
    }
}

impl Eq for LayoutHandle {}

impl fmt::Debug for LayoutHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LayoutHandle")
            .field(&self.inner.borrow())
            .finish()
    }
}

impl Default for LayoutHandle {
    fn default() -> Self {
        Self::new(LayoutRect::default())
    }
}
