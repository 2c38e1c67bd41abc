//! CRUD Engine Invariant Tests
//!
//! - insert assigns max(ID) + 1 and never touches existing rows
//! - select never mutates and returns independent copies
//! - update changes exactly the assigned keys on matching rows
//! - rows holding keys outside the schema, or missing some, stay usable
//! - delete removes exactly the matching rows, order preserved
//! - update/delete refuse an empty predicate and leave rows intact

use primdb::engine::{delete, insert, select, update, EngineError};
use primdb::record::{Assignment, Predicate, Row};
use primdb::scalar::Scalar;
use primdb::schema::Registry;

// =============================================================================
// Helper Functions
// =============================================================================

fn map(pairs: &[(&str, Scalar)]) -> Predicate {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn setup() -> (Registry, Vec<Row>) {
    let mut registry = Registry::new();
    registry
        .create_table("users", &["name:str", "age:int", "active:bool"])
        .unwrap();

    let mut rows = Vec::new();
    for (name, age, active) in [("Ann", 30, true), ("Bob", 25, false), ("Cid", 30, true)] {
        insert(
            &registry,
            "users",
            &[Scalar::from(name), Scalar::Int(age), Scalar::Bool(active)],
            &mut rows,
        )
        .unwrap();
    }
    (registry, rows)
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter().filter_map(|r| r["ID"].as_int()).collect()
}

// =============================================================================
// Insert
// =============================================================================

#[test]
fn test_ids_are_max_plus_one() {
    let (registry, mut rows) = setup();
    assert_eq!(ids(&rows), vec![1, 2, 3]);

    delete(&mut rows, &map(&[("ID", Scalar::Int(2))])).unwrap();
    let id = insert(
        &registry,
        "users",
        &[Scalar::from("Dee"), Scalar::Int(41), Scalar::Bool(true)],
        &mut rows,
    )
    .unwrap();
    assert_eq!(id, 4);
    assert_eq!(ids(&rows), vec![1, 3, 4]);
}

#[test]
fn test_first_insert_gets_one() {
    let (registry, _) = setup();
    let mut rows = Vec::new();
    let id = insert(
        &registry,
        "users",
        &[Scalar::from("Ann"), Scalar::from("30"), Scalar::from("no")],
        &mut rows,
    )
    .unwrap();
    assert_eq!(id, 1);
    assert_eq!(rows[0]["age"], Scalar::Int(30));
    assert_eq!(rows[0]["active"], Scalar::Bool(false));
}

#[test]
fn test_failed_insert_appends_nothing() {
    let (registry, mut rows) = setup();
    let before = rows.clone();

    let err = insert(
        &registry,
        "users",
        &[Scalar::from("Eve"), Scalar::from("old"), Scalar::Bool(true)],
        &mut rows,
    )
    .unwrap_err();
    assert_eq!(err.code(), "PRIMDB_TYPE_COERCION");

    let err = insert(&registry, "users", &[Scalar::from("Eve")], &mut rows).unwrap_err();
    assert!(matches!(err, EngineError::ArityMismatch { expected: 3, got: 1 }));

    assert_eq!(rows, before);
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_is_read_only() {
    let (_, rows) = setup();
    let before = rows.clone();

    let mut all = select(&rows, None);
    all.clear();
    let mut some = select(&rows, Some(&map(&[("age", Scalar::Int(30))])));
    some[0].insert("name".into(), Scalar::from("changed"));

    assert_eq!(rows, before);
    assert_eq!(select(&rows, Some(&Predicate::new())), before);
}

#[test]
fn test_select_conjunction_and_order() {
    let (_, rows) = setup();
    let found = select(
        &rows,
        Some(&map(&[("age", Scalar::Int(30)), ("active", Scalar::Bool(true))])),
    );
    assert_eq!(ids(&found), vec![1, 3]);

    let none = select(&rows, Some(&map(&[("missing", Scalar::Int(1))])));
    assert!(none.is_empty());
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_touches_only_assigned_keys_on_matches() {
    let (_, mut rows) = setup();
    let before = rows.clone();

    let changed = update(
        &mut rows,
        &map(&[("age", Scalar::Int(30))]),
        &map(&[("active", Scalar::Bool(false))]),
    )
    .unwrap();
    assert_eq!(changed, 2);

    for (after, before) in rows.iter().zip(&before) {
        if before["age"] == Scalar::Int(30) {
            assert_eq!(after["active"], Scalar::Bool(false));
            assert_eq!(after["name"], before["name"]);
            assert_eq!(after["ID"], before["ID"]);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_update_stores_assigned_values_as_given() {
    let (_, mut rows) = setup();
    update(
        &mut rows,
        &map(&[("ID", Scalar::Int(1))]),
        &map(&[("age", Scalar::from("thirty"))]),
    )
    .unwrap();
    assert_eq!(rows[0]["age"], Scalar::from("thirty"));
}

#[test]
fn test_rows_off_schema_stay_usable() {
    let (_, mut rows) = setup();
    // update may add a key the schema does not list
    update(
        &mut rows,
        &map(&[("ID", Scalar::Int(2))]),
        &map(&[("nickname", Scalar::from("B"))]),
    )
    .unwrap();
    rows[2].remove("active");

    let found = select(&rows, Some(&map(&[("nickname", Scalar::from("B"))])));
    assert_eq!(ids(&found), vec![2]);
    assert_eq!(found[0]["nickname"], Scalar::from("B"));

    // a missing key never matches
    let found = select(&rows, Some(&map(&[("active", Scalar::Bool(true))])));
    assert_eq!(ids(&found), vec![1]);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_exact_matches_in_order() {
    let (_, mut rows) = setup();
    let removed = delete(&mut rows, &map(&[("active", Scalar::Bool(true))])).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(ids(&rows), vec![2]);
}

// =============================================================================
// Empty predicates
// =============================================================================

#[test]
fn test_empty_predicate_never_mutates() {
    let (_, mut rows) = setup();
    let before = rows.clone();

    let err = update(
        &mut rows,
        &Predicate::new(),
        &map(&[("age", Scalar::Int(1))]),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::EmptyPredicate));

    let err = delete(&mut rows, &Predicate::new()).unwrap_err();
    assert!(matches!(err, EngineError::EmptyPredicate));

    let err = update(&mut rows, &map(&[("ID", Scalar::Int(1))]), &Assignment::new()).unwrap_err();
    assert!(matches!(err, EngineError::EmptyAssignment));

    assert_eq!(rows, before);
}
