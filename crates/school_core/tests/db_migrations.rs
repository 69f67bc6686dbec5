use rusqlite::Connection;
use school_core::db::migrations::{latest_version, schema_version};
use school_core::db::{open_db, open_db_in_memory};
use school_core::{Collection, StoreError};

#[test]
fn open_db_in_memory_creates_every_collection() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_eq!(latest_version(), 1);
    for collection in Collection::ALL {
        assert_table_exists(&conn, collection.name());
    }
}

#[test]
fn reopening_a_database_keeps_its_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("school.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO students (id, body) VALUES ('s-1', '{}');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn missing_collections_are_created_without_touching_existing_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE students (id TEXT PRIMARY KEY NOT NULL, body TEXT NOT NULL);
         INSERT INTO students (id, body) VALUES ('s-legacy', '{}');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_table_exists(&conn, "courses");
    assert_table_exists(&conn, "services");
    let legacy: String = conn
        .query_row("SELECT id FROM students;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(legacy, "s-legacy");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        StoreError::UnsupportedSchema { found, supported } => {
            assert_eq!(found, 42);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "collection {table_name} does not exist");
}
