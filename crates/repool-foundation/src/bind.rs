//! Data-rebind capability for concrete row types.
//!
//! A recycling list rebinds a bounded pool of row instances to new data as
//! the data set scrolls past. Row types opt into that by composing an
//! [`ItemView`](crate::ItemView) with their own cached data-access fields
//! and implementing [`Bindable`]; the shared layout handle stays stable
//! across rebinds.
//!
//! This is a capability seam, not a data-binding engine: implementors decide
//! what "bind" means for their content.

/// Capability for row types whose content can be rebound in place.
///
/// # Example
///
/// ```
/// use repool_foundation::{Bindable, EntityBuilder, ItemView};
///
/// struct LabelRow {
///     view: ItemView,
///     text: String,
/// }
///
/// impl Bindable for LabelRow {
///     type Item = str;
///
///     fn bind(&mut self, item: &str) {
///         self.text = item.to_owned();
///     }
/// }
///
/// let entity = EntityBuilder::new("row").item_view().build().unwrap();
/// let mut row = LabelRow {
///     view: entity.item_view().unwrap(),
///     text: String::new(),
/// };
///
/// let before = row.view.layout_handle();
/// row.bind("first");
/// row.bind("second");
/// assert_eq!(row.text, "second");
/// assert_eq!(before, row.view.layout_handle());
/// ```
pub trait Bindable {
    /// The data an instance is bound to.
    type Item: ?Sized;

    /// Rebinds this instance's content to `item`.
    fn bind(&mut self, item: &Self::Item);
}
