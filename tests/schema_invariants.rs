//! Schema Registry Invariant Tests
//!
//! - `ID:int` is prepended exactly once, user columns keep their order
//! - a table name can be registered only once
//! - every check runs before the registry changes
//! - list order is lexicographic

use primdb::schema::{describe_columns, Registry, SchemaError};

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_id_prepended_once_in_order() {
    let mut registry = Registry::new();
    registry
        .create_table("books", &["title:str", "year:int", "available:bool"])
        .unwrap();

    let columns = registry.get_columns("books").unwrap();
    assert_eq!(
        describe_columns(columns),
        "ID:int, title:str, year:int, available:bool"
    );
    assert_eq!(columns.iter().filter(|c| c.is_id()).count(), 1);
}

#[test]
fn test_duplicate_table_rejected_regardless_of_specs() {
    let mut registry = Registry::new();
    registry.create_table("books", &["title:str"]).unwrap();

    let err = registry.create_table("books", &["bad spec"]).unwrap_err();
    assert_eq!(err, SchemaError::AlreadyExists("books".into()));

    let err = registry.create_table::<&str>("books", &[]).unwrap_err();
    assert_eq!(err, SchemaError::AlreadyExists("books".into()));
}

#[test]
fn test_spec_whitespace_is_trimmed() {
    let mut registry = Registry::new();
    registry.create_table("t", &[" name : str "]).unwrap();
    assert_eq!(describe_columns(registry.get_columns("t").unwrap()), "ID:int, name:str");
}

// =============================================================================
// Rejections leave the registry untouched
// =============================================================================

#[test]
fn test_invalid_specs_do_not_register() {
    let cases: &[&[&str]] = &[
        &[],
        &["title"],
        &[":str"],
        &["title:"],
        &["ID:int"],
        &["title:float"],
        &["title:str", "title:int"],
        &["title:str", "year"],
    ];

    for specs in cases {
        let mut registry = Registry::new();
        let err = registry.create_table("books", *specs).unwrap_err();
        assert!(
            matches!(
                err,
                SchemaError::EmptySchema | SchemaError::InvalidColumnSpec { .. }
            ),
            "specs {:?} gave {:?}",
            specs,
            err
        );
        assert!(!registry.contains("books"), "specs {:?} registered", specs);
    }
}

#[test]
fn test_path_like_names_rejected() {
    for name in ["", "..", ".", "a/b", "a\\b", " padded"] {
        let mut registry = Registry::new();
        let err = registry.create_table(name, &["x:int"]).unwrap_err();
        assert_eq!(err.code(), "PRIMDB_INVALID_TABLE_NAME", "name {:?}", name);
        assert_eq!(registry.table_count(), 0);
    }
}

// =============================================================================
// Drop, list, lookup
// =============================================================================

#[test]
fn test_drop_and_lookup() {
    let mut registry = Registry::new();
    registry.create_table("books", &["title:str"]).unwrap();

    registry.drop_table("books").unwrap();
    assert_eq!(
        registry.drop_table("books").unwrap_err(),
        SchemaError::NotFound("books".into())
    );
    assert_eq!(
        registry.get_columns("books").unwrap_err(),
        SchemaError::NotFound("books".into())
    );
}

#[test]
fn test_list_is_sorted() {
    let mut registry = Registry::new();
    for name in ["zebra", "apple", "mango"] {
        registry.create_table(name, &["x:int"]).unwrap();
    }
    assert_eq!(registry.list_tables(), vec!["apple", "mango", "zebra"]);
}

#[test]
fn test_empty_stored_columns_are_corrupt() {
    let registry: Registry =
        serde_json::from_str(r#"{"tables": {"broken": {"columns": []}, "bare": {}}}"#).unwrap();
    assert_eq!(
        registry.get_columns("broken").unwrap_err(),
        SchemaError::CorruptSchema("broken".into())
    );
    assert_eq!(
        registry.get_columns("bare").unwrap_err(),
        SchemaError::CorruptSchema("bare".into())
    );
}
