use selector::{Geometry, Item, SelectorOptions};
use selector_adapter::{Controller, ControllerConfig};

fn main() {
    // Example: tab-bar style controller driving the indicator without any
    // UI objects.
    //
    // An adapter would:
    // - forward taps to activate(index, now_ms)
    // - forward layout reports to measure(value, geometry, now_ms)
    // - call tick(now_ms) in a frame loop while is_animating()
    // - paint the pill from indicator_geometry()
    let items: Vec<Item<String>> = ["home", "feed", "profile"]
        .iter()
        .map(|v| Item::new(v.to_string(), *v))
        .collect();
    let mut c = Controller::new(SelectorOptions::new(items), ControllerConfig::default());

    c.measure("home".to_string(), Geometry::new(0.0, 80.0), 0);
    c.measure("feed".to_string(), Geometry::new(80.0, 90.0), 0);
    c.measure("profile".to_string(), Geometry::new(170.0, 100.0), 0);
    println!("snapped to {:?}", c.indicator_geometry());

    c.activate(2, 0);
    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
        if now % 80 == 0 {
            println!("t={now} indicator={:?}", c.indicator_geometry());
        }
    }
    println!("done: {:?}", c.indicator_geometry());
}
