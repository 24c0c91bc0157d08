use mindfuel_core::db::schema::latest_version;
use mindfuel_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_all_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "habits");
    assert_table_exists(&conn, "moods");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mindfuel.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO habits (name, timestamp) VALUES ('run', 1);", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let habits: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM habits;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(habits, 1, "reopening must not drop existing rows");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_rejects_blank_names_and_long_notes_at_the_sql_level() {
    let conn = open_db_in_memory().unwrap();

    let blank = conn.execute("INSERT INTO habits (name) VALUES ('   ');", []);
    assert!(blank.is_err());

    let long_note = "x".repeat(201);
    let too_long = conn.execute(
        "INSERT INTO moods (score, note) VALUES (3, ?1);",
        [long_note.as_str()],
    );
    assert!(too_long.is_err());
}

#[test]
fn column_defaults_fill_timestamp() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO moods (score) VALUES (4);", [])
        .unwrap();

    let timestamp: i64 = conn
        .query_row("SELECT timestamp FROM moods;", [], |row| row.get(0))
        .unwrap();
    assert!(timestamp > 0);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
