//! Toggle/counter store scenarios.

use std::sync::Arc;

use serde_json::json;
use unistate::counter::{
    counter_store, decrease, increase, toggle_switch, CounterAction, CounterError, CounterState,
};
use unistate::store::StoreError;

fn fresh() -> unistate::counter::CounterStore {
    counter_store(Some(CounterState::new(false, 0))).unwrap()
}

#[test]
fn default_store_starts_off_at_zero() {
    let store = counter_store(None).unwrap();
    assert_eq!(*store.get_state(), CounterState::new(false, 0));
}

#[test]
fn toggle_switch_flips_back_and_forth() {
    let store = fresh();

    store.dispatch(toggle_switch()).unwrap();
    assert_eq!(*store.get_state(), CounterState::new(true, 0));

    store.dispatch(toggle_switch()).unwrap();
    assert_eq!(*store.get_state(), CounterState::new(false, 0));
}

#[test]
fn increase_then_decrease() {
    let store = fresh();

    store.dispatch(increase(5)).unwrap();
    assert_eq!(store.get_state().counter, 5);

    store.dispatch(decrease()).unwrap();
    assert_eq!(store.get_state().counter, 4);
    assert!(!store.get_state().toggle);
}

#[test]
fn untyped_actions_follow_the_same_transitions() {
    let store = fresh();

    store.dispatch_value(json!({"type": "TOGGLE_SWITCH"})).unwrap();
    store
        .dispatch_value(json!({"type": "INCREASE", "difference": 5}))
        .unwrap();
    let action = store.dispatch_value(json!({"type": "DECREASE"})).unwrap();

    assert_eq!(action, CounterAction::Decrease);
    assert_eq!(*store.get_state(), CounterState::new(true, 4));
}

#[test]
fn empty_object_is_invalid_and_state_unchanged() {
    let store = fresh();
    store.dispatch(increase(2)).unwrap();
    let before = store.get_state();

    let err = store.dispatch_value(json!({})).unwrap_err();

    assert!(matches!(err, StoreError::InvalidAction { .. }));
    assert!(err.to_string().contains("missing \"type\" field"));
    assert!(Arc::ptr_eq(&before, &store.get_state()));
}

#[test]
fn non_object_and_bad_type_field_are_invalid() {
    let store = fresh();
    for value in [
        json!("TOGGLE_SWITCH"),
        json!(null),
        json!({"type": 3}),
        json!({"type": ""}),
        json!({"type": "INCREASE"}),
        json!({"type": "INCREASE", "difference": "five"}),
    ] {
        let err = store.dispatch_value(value.clone()).unwrap_err();
        assert!(
            matches!(err, StoreError::InvalidAction { .. }),
            "expected InvalidAction for {}",
            value
        );
    }
    assert_eq!(*store.get_state(), CounterState::default());
}

#[test]
fn unknown_type_keeps_same_state() {
    let store = fresh();
    let before = store.get_state();

    let action = store.dispatch_value(json!({"type": "RESET"})).unwrap();

    assert_eq!(action, CounterAction::Unknown);
    assert!(Arc::ptr_eq(&before, &store.get_state()));
}

#[test]
fn overflow_leaves_last_committed_state() {
    let store = counter_store(Some(CounterState::new(true, i64::MAX - 1))).unwrap();
    store.dispatch(increase(1)).unwrap();
    let before = store.get_state();

    let err = store.dispatch(increase(1)).unwrap_err();

    match err {
        StoreError::Reducer(source) => assert_eq!(
            source.downcast_ref::<CounterError>(),
            Some(&CounterError::Overflow {
                counter: i64::MAX,
                difference: 1
            })
        ),
        other => panic!("Expected reducer error, got {:?}", other),
    }
    assert!(Arc::ptr_eq(&before, &store.get_state()));
    assert_eq!(*store.get_state(), CounterState::new(true, i64::MAX));
}
