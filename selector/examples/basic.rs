// Example: minimal store usage with both change callbacks.
use selector::{Item, SelectionStore, SelectorOptions};

fn main() {
    let items = vec![
        Item::new("home".to_string(), "Home"),
        Item::new("feed".to_string(), "Feed"),
        Item::new("profile".to_string(), "Profile"),
    ];

    let mut store = SelectionStore::new(
        SelectorOptions::new(items)
            .with_on_value_change(Some(|v: &String| println!("value -> {v}")))
            .with_on_index_change(Some(|i| println!("index -> {i}"))),
    );
    println!("initial: {:?}", store.selection());

    store.select(2);
    store.select(2); // idempotent: no second event
    println!("after select: {:?}", store.selection());
}
