use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn items(values: &[&'static str]) -> Vec<Item<&'static str>> {
    values.iter().map(|v| Item::new(*v, *v)).collect()
}

#[test]
fn value_prop_takes_precedence_over_default_and_index() {
    let store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B", "C"]))
            .with_value(Some("B"))
            .with_default_value(Some("A"))
            .with_index(Some(2)),
    );
    assert_eq!(store.selected_index(), Some(1));
    assert_eq!(store.selected_value(), Some(&"B"));
    assert_eq!(store.mode(), ControlMode::Controlled);
}

#[test]
fn default_value_applies_when_no_value_prop() {
    let store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B", "C"]))
            .with_default_value(Some("C"))
            .with_index(Some(0)),
    );
    assert_eq!(store.selected_index(), Some(2));
}

#[test]
fn index_prop_applies_when_no_value_props() {
    let store =
        SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])).with_index(Some(2)));
    assert_eq!(store.selected_value(), Some(&"C"));
}

#[test]
fn resolution_defaults_to_first_item() {
    let store = SelectionStore::new(SelectorOptions::new(items(&["A", "B"])));
    assert_eq!(store.selected_index(), Some(0));
    assert_eq!(store.mode(), ControlMode::Uncontrolled);
}

#[test]
fn empty_list_resolves_to_no_selection() {
    let store = SelectionStore::<&'static str>::new(SelectorOptions::new(Vec::new()));
    assert!(store.selection().is_none());
}

#[test]
fn resolution_skips_disabled_candidates() {
    let list = vec![
        Item::new("A", "A").disabled(true),
        Item::new("B", "B"),
        Item::new("C", "C"),
    ];
    // Value prop names a disabled item: falls through to default_value.
    let store = SelectionStore::new(
        SelectorOptions::new(list.clone())
            .with_value(Some("A"))
            .with_default_value(Some("C")),
    );
    assert_eq!(store.selected_value(), Some(&"C"));

    // No props at all: first enabled item.
    let store = SelectionStore::new(SelectorOptions::new(list));
    assert_eq!(store.selected_index(), Some(1));
}

#[test]
fn fully_disabled_list_resolves_to_index_zero() {
    let list = vec![
        Item::new("A", "A").disabled(true),
        Item::new("B", "B").disabled(true),
    ];
    let store = SelectionStore::new(SelectorOptions::new(list));
    assert_eq!(store.selected_index(), Some(0));
}

#[test]
fn select_fires_both_callbacks_exactly_once() {
    let value_calls = Arc::new(AtomicUsize::new(0));
    let index_calls = Arc::new(AtomicUsize::new(0));
    let last_value = Arc::new(Mutex::new(None::<&'static str>));
    let last_index = Arc::new(AtomicUsize::new(usize::MAX));

    let vc = Arc::clone(&value_calls);
    let lv = Arc::clone(&last_value);
    let ic = Arc::clone(&index_calls);
    let li = Arc::clone(&last_index);
    let mut store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B", "C"]))
            .with_on_value_change(Some(move |v: &&'static str| {
                vc.fetch_add(1, Ordering::SeqCst);
                *lv.lock().unwrap() = Some(*v);
            }))
            .with_on_index_change(Some(move |i| {
                ic.fetch_add(1, Ordering::SeqCst);
                li.store(i, Ordering::SeqCst);
            })),
    );

    assert!(store.select(2));
    assert_eq!(value_calls.load(Ordering::SeqCst), 1);
    assert_eq!(index_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*last_value.lock().unwrap(), Some("C"));
    assert_eq!(last_index.load(Ordering::SeqCst), 2);

    // Re-selecting the same index is idempotent: no second event.
    assert!(!store.select(2));
    assert_eq!(value_calls.load(Ordering::SeqCst), 1);
    assert_eq!(index_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn select_disabled_item_is_a_noop() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut store = SelectionStore::new(
        SelectorOptions::new(vec![
            Item::new("A", "A"),
            Item::new("B", "B").disabled(true),
        ])
        .with_on_index_change(Some(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        })),
    );

    assert!(!store.select(1));
    assert_eq!(store.selected_index(), Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn select_out_of_range_is_a_noop() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A"])));
    assert!(!store.select(5));
    assert_eq!(store.selected_index(), Some(0));
}

#[test]
fn select_on_empty_list_is_a_noop() {
    let mut store = SelectionStore::<&'static str>::new(SelectorOptions::new(Vec::new()));
    assert!(!store.select(0));
    assert!(store.selection().is_none());
}

#[test]
fn uncontrolled_select_updates_state_synchronously() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B"])));
    assert!(store.select(1));
    assert_eq!(store.selected_index(), Some(1));
    assert_eq!(store.selected_value(), Some(&"B"));
}

#[test]
fn controlled_select_fires_but_leaves_state_to_the_owner() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B"]))
            .with_value(Some("A"))
            .with_on_index_change(Some(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })),
    );

    assert!(store.select(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // State still reflects the controlled prop until the owner re-supplies it.
    assert_eq!(store.selected_index(), Some(0));

    store.update_options(|o| o.value = Some("B"));
    assert_eq!(store.selected_index(), Some(1));
}

#[test]
fn reconcile_follows_value_across_reorder() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"]))
        .with_on_value_change(Some(move |_: &&'static str| {
            c.fetch_add(1, Ordering::SeqCst);
        })));
    store.select(1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let outcome = store.reconcile(items(&["B", "C", "A"]));
    assert_eq!(outcome, Reconcile::Moved);
    assert_eq!(store.selected_value(), Some(&"B"));
    assert_eq!(store.selected_index(), Some(0));
    // Reconciliation alone never fires the selection callbacks.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn reconcile_reports_unchanged_when_index_survives() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])));
    let outcome = store.reconcile(items(&["A", "B", "C", "D"]));
    assert_eq!(outcome, Reconcile::Unchanged);
    assert_eq!(store.selected_value(), Some(&"A"));
}

#[test]
fn reconcile_falls_back_when_selected_value_vanishes() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C", "D", "E"])));
    store.select(4);

    let outcome = store.reconcile(items(&["A", "B", "C"]));
    assert_eq!(outcome, Reconcile::Fallback);
    assert_eq!(store.selected_index(), Some(0));
    assert_eq!(store.selected_value(), Some(&"A"));
}

#[test]
fn reconcile_falls_back_when_selected_value_becomes_disabled() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B"])));
    store.select(1);

    let outcome = store.reconcile(vec![
        Item::new("A", "A"),
        Item::new("B", "B").disabled(true),
    ]);
    assert_eq!(outcome, Reconcile::Fallback);
    assert_eq!(store.selected_value(), Some(&"A"));
}

#[test]
fn reconcile_detects_wholesale_replacement() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B"])));
    store.select(1);

    let outcome = store.reconcile(items(&["X", "Y", "Z"]));
    assert_eq!(outcome, Reconcile::Replaced);
    assert_eq!(store.selected_value(), Some(&"X"));
}

#[test]
fn set_options_refresh_keeps_uncontrolled_selection() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])));
    store.select(2);

    // A render pass re-supplies the same props; the user's selection stays.
    store.set_options(SelectorOptions::new(items(&["A", "B", "C"])));
    assert_eq!(store.selected_value(), Some(&"C"));
}

#[test]
fn set_options_controlled_to_uncontrolled_flip_keeps_selection() {
    let mut store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B", "C"])).with_value(Some("B")),
    );
    assert_eq!(store.mode(), ControlMode::Controlled);

    store.set_options(SelectorOptions::new(items(&["A", "B", "C"])));
    assert_eq!(store.mode(), ControlMode::Uncontrolled);
    assert_eq!(store.selected_value(), Some(&"B"));
}

#[test]
fn set_options_uncontrolled_to_controlled_follows_the_prop() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])));
    store.select(2);

    store.set_options(SelectorOptions::new(items(&["A", "B", "C"])).with_value(Some("A")));
    assert_eq!(store.selected_value(), Some(&"A"));
}

#[test]
fn stale_controlled_value_falls_back_to_resolution_order() {
    let store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B"])).with_value(Some("GONE")),
    );
    // Documented fallback: item 0, not "no selection".
    assert_eq!(store.selected_index(), Some(0));
}

#[test]
fn batch_update_coalesces_on_change() {
    let changes = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&changes);
    let mut store = SelectionStore::new(
        SelectorOptions::new(items(&["A", "B", "C"])).with_on_change(Some(
            move |_: &SelectionStore<&'static str>| {
                c.fetch_add(1, Ordering::SeqCst);
            },
        )),
    );
    changes.store(0, Ordering::SeqCst);

    store.batch_update(|s| {
        s.select(1);
        s.select(2);
        let _ = s.reconcile(items(&["A", "B", "C", "D"]));
    });
    assert_eq!(changes.load(Ordering::SeqCst), 1);
}

#[test]
fn selection_state_round_trips_across_remount() {
    let mut store = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])));
    store.select(2);
    let snapshot = store.selection_state();
    assert_eq!(snapshot.value, Some("C"));

    let mut restored = SelectionStore::new(SelectorOptions::new(items(&["A", "B", "C"])));
    assert!(restored.restore_selection_state(snapshot));
    assert_eq!(restored.selected_index(), Some(2));

    // A snapshot naming a vanished value leaves the resolved selection.
    let mut other = SelectionStore::new(SelectorOptions::new(items(&["X", "Y"])));
    assert!(!other.restore_selection_state(store.selection_state()));
    assert_eq!(other.selected_index(), Some(0));
}

#[test]
fn registry_upsert_last_report_wins() {
    let mut reg = LayoutRegistry::new();
    reg.report("A", Geometry::new(0.0, 40.0));
    reg.report("A", Geometry::new(2.0, 44.0));
    assert_eq!(reg.lookup(&"A"), Some(Geometry::new(2.0, 44.0)));
    assert_eq!(reg.len(), 1);
}

#[test]
fn registry_lookup_is_pending_until_reported() {
    let reg = LayoutRegistry::<&'static str>::new();
    assert_eq!(reg.lookup(&"A"), None);
}

#[test]
fn registry_prune_drops_vanished_values() {
    let mut reg = LayoutRegistry::new();
    reg.report("A", Geometry::new(0.0, 40.0));
    reg.report("B", Geometry::new(40.0, 40.0));
    reg.report("C", Geometry::new(80.0, 40.0));

    reg.prune_to_items(&items(&["A", "C"]));
    assert!(reg.contains(&"A"));
    assert!(!reg.contains(&"B"));
    assert!(reg.contains(&"C"));
}

#[test]
fn registry_export_import_round_trip() {
    let mut reg = LayoutRegistry::new();
    reg.report("A", Geometry::new(0.0, 40.0));
    reg.report("B", Geometry::new(40.0, 56.0));

    let exported = reg.export();
    let mut restored = LayoutRegistry::new();
    restored.import(exported);

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.lookup(&"B"), Some(Geometry::new(40.0, 56.0)));
}

#[test]
fn randomized_selects_and_reconciles_keep_selection_valid() {
    let universe = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let mut rng = Lcg::new(0x5EED);

    let mut list = items(&universe[..4]);
    let mut store = SelectionStore::new(SelectorOptions::new(list.clone()));

    for _ in 0..500 {
        if rng.gen_bool() {
            let i = rng.gen_range_usize(0, list.len() + 2);
            let _ = store.select(i);
        } else {
            let n = rng.gen_range_usize(1, universe.len() + 1);
            let start = rng.gen_range_usize(0, universe.len() - n + 1);
            list = items(&universe[start..start + n]);
            if rng.gen_bool() {
                let i = rng.gen_range_usize(0, list.len());
                list[i].disabled = true;
            }
            let _ = store.reconcile(list.clone());
        }

        let sel = store.selection().expect("non-empty list always selects");
        assert!(sel.index < list.len());
        assert_eq!(list[sel.index].value, sel.value);
        // An enabled item must be selected whenever one exists.
        if list.iter().any(|it| !it.disabled) {
            assert!(!list[sel.index].disabled);
        }
    }
}
