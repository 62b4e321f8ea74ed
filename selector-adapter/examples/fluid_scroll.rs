use selector::{Geometry, Item, SelectorOptions};
use selector_adapter::{Controller, ControllerConfig};

fn main() {
    // Example: fluid (scrollable) mode — many items overflow a narrow
    // viewport, and the controller keeps the selection visible.
    let items: Vec<Item<String>> = (0..12)
        .map(|i| Item::new(format!("tab-{i}"), format!("Tab {i}")))
        .collect();
    let mut c = Controller::new(
        SelectorOptions::new(items),
        ControllerConfig::default()
            .with_fluid(true)
            .with_scroll_padding(8.0),
    );
    c.set_viewport_extent(240.0);
    for i in 0..12 {
        c.measure(format!("tab-{i}"), Geometry::new(i as f32 * 72.0, 72.0), 0);
    }

    c.activate(9, 0);
    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
    }
    println!(
        "selection={:?} scroll_offset={} indicator={:?}",
        c.selection().map(|s| s.index),
        c.scroll_offset(),
        c.indicator_geometry()
    );
}
