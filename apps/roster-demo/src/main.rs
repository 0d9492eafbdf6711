//! Builds a small roster of row entities, binds sample data, dumps geometry.
//!
//! No scrolling and no recycling controller here: this only exercises the
//! pieces a controller would manage — construction, the initialization
//! lifecycle, rebinding, and cached layout-handle access.

use repool_foundation::{Bindable, EntityBuilder, ItemView, LayoutRect, ViewEntity};

const ROW_HEIGHT: f32 = 48.0;

/// A row showing a single text label.
struct LabelRow {
    view: ItemView,
    text: String,
}

impl LabelRow {
    fn attached_to(entity: &ViewEntity) -> Self {
        Self {
            view: entity
                .item_view()
                .expect("roster rows are built with an item view"),
            text: String::new(),
        }
    }
}

impl Bindable for LabelRow {
    type Item = str;

    fn bind(&mut self, item: &str) {
        self.text = item.to_owned();
    }
}

fn main() {
    env_logger::init();

    let names = ["Ada", "Grace", "Edsger", "Barbara", "Tony"];

    let entities: Vec<ViewEntity> = names
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let entity = EntityBuilder::new(format!("row-{i}"))
                .layout(LayoutRect::row(ROW_HEIGHT))
                .item_view()
                .build()
                .expect("a layout rect was supplied");
            entity
                .layout_component()
                .set_offset(0.0, -(i as f32) * ROW_HEIGHT);
            entity
        })
        .collect();

    for entity in &entities {
        entity.fire_awake();
    }

    let mut rows: Vec<LabelRow> = entities.iter().map(LabelRow::attached_to).collect();
    for (row, name) in rows.iter_mut().zip(names) {
        row.bind(name);
    }

    // Rebind in place, the way a recycling controller reuses rows.
    rows[0].bind("Alan");

    for (row, entity) in rows.iter().zip(&entities) {
        let rect = row.view.layout_handle().rect();
        log::info!(
            "{}: \"{}\" at y={} height={} ({:?})",
            entity.name(),
            row.text,
            rect.offset.1,
            rect.size.1,
            entity.stats(),
        );
    }
}
