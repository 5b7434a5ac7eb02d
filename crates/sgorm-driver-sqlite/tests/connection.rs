use pretty_assertions::assert_eq;
use sgorm_core::{
    config::SqliteOptions,
    driver::{
        operation::{ListColumns, QuerySql},
        Driver,
    },
    stmt::{Record, Value},
    Connection,
};
use sgorm_driver_sqlite::Sqlite;

async fn connect() -> Box<dyn Connection> {
    Sqlite::in_memory().connect().await.unwrap()
}

async fn execute(conn: &mut dyn Connection, sql: &str, params: Vec<Value>) -> u64 {
    conn.exec(QuerySql::execute(sql, params).into())
        .await
        .unwrap()
        .rows
        .into_count()
        .unwrap()
}

async fn list_columns(conn: &mut dyn Connection, table: &str) -> Vec<String> {
    conn.exec(
        ListColumns {
            table: table.to_string(),
        }
        .into(),
    )
    .await
    .unwrap()
    .rows
    .into_columns()
    .unwrap()
    .into_iter()
    .collect()
}

#[test]
fn parse_url() {
    assert!(matches!(
        Sqlite::new("sqlite::memory:").unwrap(),
        Sqlite::InMemory
    ));
    assert!(matches!(
        Sqlite::new("sqlite:/tmp/movies.db").unwrap(),
        Sqlite::File(path) if path.to_str() == Some("/tmp/movies.db")
    ));

    let err = Sqlite::new("mysql://localhost/db").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn from_options() {
    assert_eq!(
        Sqlite::from_options(&SqliteOptions::InMemory).url(),
        "sqlite::memory:"
    );
    assert_eq!(
        Sqlite::from_options(&SqliteOptions::File("local.db".into())).url(),
        "sqlite:local.db"
    );
}

#[tokio::test]
async fn missing_table_has_no_columns() {
    let mut conn = connect().await;
    assert!(list_columns(&mut *conn, "movie").await.is_empty());
}

#[tokio::test]
async fn columns_in_ordinal_order() {
    let mut conn = connect().await;
    execute(
        &mut *conn,
        "CREATE TABLE movie (id INTEGER PRIMARY KEY AUTOINCREMENT, title VARCHAR(50) NOT NULL, description TEXT NULL)",
        vec![],
    )
    .await;

    assert_eq!(
        list_columns(&mut *conn, "movie").await,
        ["id", "title", "description"]
    );
}

#[tokio::test]
async fn rows_round_trip_through_parameters() {
    let mut conn = connect().await;
    execute(
        &mut *conn,
        "CREATE TABLE author (id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR(20) NOT NULL, sex BOOLEAN NOT NULL, rating DECIMAL(3,1) NULL)",
        vec![],
    )
    .await;

    let inserted = execute(
        &mut *conn,
        "INSERT INTO author (name, sex, rating) VALUES (?1, ?2, ?3)",
        vec!["O'Brien".into(), true.into(), Value::Null],
    )
    .await;
    assert_eq!(inserted, 1);

    let records = conn
        .exec(QuerySql::query("SELECT * FROM author WHERE name = ?1", vec!["O'Brien".into()]).into())
        .await
        .unwrap()
        .rows
        .into_records()
        .unwrap();

    assert_eq!(
        records,
        [Record::new()
            .with("id", 1)
            .with("name", "O'Brien")
            .with("sex", 1)
            .with("rating", Value::Null)]
    );
}

#[tokio::test]
async fn failing_statement_is_a_driver_error() {
    let mut conn = connect().await;
    let err = conn
        .exec(QuerySql::execute("ALTER TABLE movie ADD COLUMN title TEXT", vec![]).into())
        .await
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert!(err.to_string().contains("no such table"));
}
