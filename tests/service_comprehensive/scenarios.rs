//! Concrete Scenarios
//!
//! Walk-throughs of a single key's life: write, read, clear, rewrite.

use crate::*;

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn test_set_then_read_at_same_instant() {
    let (store, _) = create_store();

    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    assert_eq!(store.get(&bob(), "k", at(0)).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.audit_trail().len(), 2);
}

#[test]
fn test_full_lifecycle() {
    let (store, clock) = create_store();

    // T0: write
    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    assert_eq!(store.get(&bob(), "k", at(0)).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.audit_trail().len(), 2);

    // T1: clear
    clock.set(at(1));
    store.tombstone(&alice(), "k").unwrap();
    assert_eq!(store.get(&bob(), "k", at(2)).unwrap(), Lookup::Tombstone);
    assert_eq!(store.audit_trail().len(), 4);

    // T3: rewrite
    store.set(&bob(), "k", 2, Some(at(3))).unwrap();
    assert_eq!(store.get(&alice(), "k", at(4)).unwrap(), Lookup::Value(Value::Int(2)));

    // History stays readable
    assert_eq!(store.get(&alice(), "k", at(0)).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.get(&alice(), "k", at(2)).unwrap(), Lookup::Tombstone);

    assert_eq!(
        audit_actions(&store),
        vec![
            AuditAction::Set,
            AuditAction::Get,
            AuditAction::Tombstone,
            AuditAction::Get,
            AuditAction::Set,
            AuditAction::Get,
            AuditAction::Get,
            AuditAction::Get,
        ]
    );
}

#[test]
fn test_missing_key_on_empty_store() {
    let (store, _) = create_store();

    assert_eq!(store.get(&bob(), "missing", at(0)).unwrap(), Lookup::NotFound);

    let records = store.audit_trail().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].action, AuditAction::Get);
    assert_eq!(records[0].user, bob());
    assert_eq!(records[0].value, None);
}

#[test]
fn test_repeated_tombstones_with_live_clock() {
    let (store, clock) = create_store();

    store.set(&alice(), "1", 1, Some(clock.now())).unwrap();
    assert_eq!(store.audit_trail().len(), 1);

    let now = tick(&clock);
    assert_eq!(store.get(&bob(), "1", now).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.audit_trail().len(), 2);

    tick(&clock);
    store.tombstone(&alice(), "1").unwrap();
    let now = tick(&clock);
    assert!(store.get(&bob(), "1", now).unwrap().is_tombstone());
    assert_eq!(store.audit_trail().len(), 4);

    let now = tick(&clock);
    store.set(&bob(), "1", 2, Some(now)).unwrap();
    let now = tick(&clock);
    assert_eq!(store.get(&alice(), "1", now).unwrap(), Lookup::Value(Value::Int(2)));

    tick(&clock);
    store.tombstone(&alice(), "1").unwrap();
    let now = tick(&clock);
    assert!(store.get(&bob(), "1", now).unwrap().is_tombstone());
    assert_eq!(store.audit_trail().len(), 8);
    assert_eq!(store.event_log().len(), 4);
}

// =============================================================================
// TIME SEMANTICS
// =============================================================================

#[test]
fn test_read_before_first_write_is_not_found() {
    let (store, _) = create_store();

    store.set(&alice(), "k", "v", Some(at(10))).unwrap();
    assert_eq!(store.get(&bob(), "k", at(9)).unwrap(), Lookup::NotFound);
}

#[test]
fn test_backdated_write_fills_the_past() {
    let (store, _) = create_store();

    store.set(&alice(), "k", "late", Some(at(10))).unwrap();
    store.set(&alice(), "k", "early", Some(at(5))).unwrap();

    let early = store.get(&bob(), "k", at(7)).unwrap();
    assert_eq!(early.value().and_then(Value::as_text), Some("early"));
    assert_eq!(store.get(&bob(), "k", at(12)).unwrap(), Lookup::Value(Value::from("late")));
}

#[test]
fn test_tombstone_does_not_hide_the_past() {
    let (store, clock) = create_store();

    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    clock.set(at(5));
    store.tombstone(&alice(), "k").unwrap();

    assert_eq!(store.get(&bob(), "k", at(4)).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.get(&bob(), "k", at(5)).unwrap(), Lookup::Tombstone);
}

#[test]
fn test_future_dated_write_shadows_tombstone_later() {
    let (store, clock) = create_store();

    store.set(&alice(), "k", 1, Some(at(100))).unwrap();
    clock.set(at(10));
    store.tombstone(&alice(), "k").unwrap();

    assert_eq!(store.get(&bob(), "k", at(50)).unwrap(), Lookup::Tombstone);
    assert_eq!(store.get(&bob(), "k", at(100)).unwrap(), Lookup::Value(Value::Int(1)));
}

#[test]
fn test_set_and_tombstone_at_same_instant_keep_first() {
    let (store, _) = create_store();

    // Clock is parked at T0, so the tombstone ties with the write
    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    store.tombstone(&alice(), "k").unwrap();
    assert_eq!(store.get(&bob(), "k", at(0)).unwrap(), Lookup::Value(Value::Int(1)));

    store.tombstone(&alice(), "j").unwrap();
    store.set(&alice(), "j", 2, Some(at(0))).unwrap();
    assert_eq!(store.get(&bob(), "j", at(0)).unwrap(), Lookup::Tombstone);

    // A strictly later write still wins
    store.set(&alice(), "j", 3, Some(at(1))).unwrap();
    assert_eq!(store.get(&bob(), "j", at(1)).unwrap(), Lookup::Value(Value::Int(3)));
}

#[test]
fn test_keys_are_independent() {
    let (store, _) = create_store();

    store.set(&alice(), "a", 1, Some(at(0))).unwrap();
    store.set(&alice(), "b", 2, Some(at(0))).unwrap();

    assert_eq!(store.get(&bob(), "a", at(1)).unwrap(), Lookup::Value(Value::Int(1)));
    assert_eq!(store.get(&bob(), "b", at(1)).unwrap(), Lookup::Value(Value::Int(2)));
    assert_eq!(store.get(&bob(), "c", at(1)).unwrap(), Lookup::NotFound);
}

#[test]
fn test_value_that_looks_like_a_tombstone_is_a_value() {
    let (store, _) = create_store();

    store.set(&alice(), "k", "TOMBSTONED", Some(at(0))).unwrap();
    assert_eq!(
        store.get(&bob(), "k", at(0)).unwrap(),
        Lookup::Value(Value::from("TOMBSTONED"))
    );
}

// =============================================================================
// AUDIT CONTENT
// =============================================================================

#[test]
fn test_audit_records_carry_user_key_and_outcome() {
    let (store, clock) = create_store();

    store.set(&alice(), "k", 5, Some(at(-100))).unwrap();
    tick(&clock);
    store.get(&bob(), "k", at(0)).unwrap();

    let records = store.audit_trail().records();
    assert_eq!(records[0].user, alice());
    assert_eq!(records[0].key, Key::from("k"));
    assert_eq!(records[0].value, Some(StoredValue::Payload(Value::Int(5))));
    assert_eq!(records[0].system_time, at(0));

    assert_eq!(records[1].user, bob());
    assert_eq!(records[1].value, Some(StoredValue::Payload(Value::Int(5))));
    assert_eq!(records[1].system_time, at(1));
}

#[test]
fn test_audit_query_by_user_and_action() {
    let (store, _) = create_store();

    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    store.get(&bob(), "k", at(0)).unwrap();
    store.get(&alice(), "k", at(0)).unwrap();
    store.tombstone(&alice(), "k").unwrap();

    let filter = AuditFilter::new().user("Alice");
    assert_eq!(store.audit_trail().query(&filter).len(), 3);

    let filter = AuditFilter::new().action(AuditAction::Get);
    let reads = store.audit_trail().query(&filter);
    assert_eq!(reads.len(), 2);
    assert_eq!(reads[0].user, bob());
}

#[test]
fn test_audit_trail_exports_as_json() {
    let (store, _) = create_store();

    store.set(&alice(), "k", 1, Some(at(0))).unwrap();
    store.tombstone(&alice(), "k").unwrap();

    let json = serde_json::to_string_pretty(&store.audit_trail().records()).unwrap();
    assert!(json.contains("Alice"));
    assert!(json.contains("Tombstone"));
}

#[test]
fn test_event_history_is_in_insertion_order() {
    let (store, _) = create_store();

    store.set(&alice(), "k", 1, Some(at(5))).unwrap();
    store.set(&alice(), "k", 2, Some(at(1))).unwrap();

    let history = store.event_log().history(&Key::from("k"), None);
    assert_eq!(history.len(), 2);
    assert!(history[0].sequence < history[1].sequence);
    assert_eq!(history[0].business_time, at(5));
}
