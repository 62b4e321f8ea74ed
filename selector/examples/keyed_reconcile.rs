// Example: selection follows the value, not the slot, across list mutations.
use selector::{Item, SelectionStore, SelectorOptions};

fn list(values: &[&str]) -> Vec<Item<String>> {
    values
        .iter()
        .map(|v| Item::new(v.to_string(), v.to_uppercase()))
        .collect()
}

fn main() {
    let mut store = SelectionStore::new(SelectorOptions::new(list(&["a", "b", "c"])));
    store.select(1);
    println!("selected: {:?}", store.selection());

    // Reorder: "b" moves to the front, selection sticks to it.
    let outcome = store.reconcile(list(&["b", "c", "a"]));
    println!("reorder -> {outcome:?}, selection {:?}", store.selection());

    // Remove the selected value: falls back to the resolution order.
    let outcome = store.reconcile(list(&["c", "a"]));
    println!("removal -> {outcome:?}, selection {:?}", store.selection());
}
