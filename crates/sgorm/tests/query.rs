mod support;

use pretty_assertions::assert_eq;
use sgorm::{Field, Filter, Model, Record, Value};
use support::setup;

fn author() -> Model {
    Model::builder("Author")
        .table_name("Authors")
        .field("name", Field::char("姓名", 20))
        .field("sex", Field::boolean("性别"))
        .field("bio", Field::text("简介").nullable())
        .build()
}

#[tokio::test]
async fn insert_and_filter() {
    let (db, log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();

    let inserted = db
        .insert(
            &author,
            &Record::new().with("name", "O'Brien").with("sex", true),
        )
        .await
        .unwrap();
    assert_eq!(inserted, 1);
    db.insert(&author, &Record::new().with("name", "Ann").with("sex", false))
        .await
        .unwrap();

    let rows = db
        .filter(&author, &Filter::new().eq("name", "O'Brien"))
        .await
        .unwrap();

    assert_eq!(
        log.sql().last().unwrap(),
        "SELECT * FROM Authors WHERE name = ?1"
    );
    assert_eq!(log.last_params(), [Value::from("O'Brien")]);
    assert_eq!(
        rows,
        [Record::new()
            .with("id", 1)
            .with("name", "O'Brien")
            .with("sex", true)
            .with("bio", Value::Null)]
    );
}

#[tokio::test]
async fn all_rows_in_insertion_order() {
    let (db, _log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();

    for name in ["a", "b", "c"] {
        db.insert(&author, &Record::new().with("name", name).with("sex", false))
            .await
            .unwrap();
    }

    let names: Vec<_> = db
        .all(&author)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.get("name").cloned().unwrap())
        .collect();
    assert_eq!(names, [Value::from("a"), Value::from("b"), Value::from("c")]);

    assert_eq!(db.filter(&author, &Filter::new()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn get_first_match() {
    let (db, log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();
    db.insert(&author, &Record::new().with("name", "Ann").with("sex", false))
        .await
        .unwrap();

    let row = db
        .get(&author, &Filter::new().eq("name", "Ann").eq("sex", false))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("id"), Some(&Value::I64(1)));
    assert_eq!(row.get("sex"), Some(&Value::Bool(false)));
    assert_eq!(
        log.sql().last().unwrap(),
        "SELECT * FROM Authors WHERE name = ?1 AND sex = ?2 LIMIT 1"
    );

    let missing = db
        .get(&author, &Filter::new().eq("name", "Bob"))
        .await
        .unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn null_predicate() {
    let (db, _log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();
    db.insert(&author, &Record::new().with("name", "Ann").with("sex", false))
        .await
        .unwrap();
    db.insert(
        &author,
        &Record::new()
            .with("name", "Bob")
            .with("sex", true)
            .with("bio", "writer"),
    )
    .await
    .unwrap();

    let rows = db
        .filter(&author, &Filter::new().eq("bio", Value::Null))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name"), Some(&Value::from("Ann")));
}

#[tokio::test]
async fn delete_requires_a_filter() {
    let (db, log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();
    db.insert(&author, &Record::new().with("name", "Ann").with("sex", false))
        .await
        .unwrap();
    log.clear();

    let err = db.delete(&author, &Filter::new()).await.unwrap_err();
    assert!(err.is_query());
    assert!(log.sql().is_empty());

    let deleted = db
        .delete(&author, &Filter::new().eq("name", "Ann"))
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(log.sql(), ["DELETE FROM Authors WHERE name = ?1"]);
    assert!(db.all(&author).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_columns_are_rejected() {
    let (db, log) = setup().await;
    let author = author();
    db.sync(&author).await.unwrap();
    log.clear();

    let err = db
        .filter(&author, &Filter::new().eq("age", 3))
        .await
        .unwrap_err();
    assert!(err.is_query());
    assert_eq!(
        err.to_string(),
        "invalid query: unknown column `age` for model `Author`"
    );

    let err = db
        .insert(&author, &Record::new().with("nickname", "x"))
        .await
        .unwrap_err();
    assert!(err.is_query());

    // `id` is always a column
    assert!(db
        .filter(&author, &Filter::new().eq("id", 1))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(log.sql().len(), 1);
}

#[tokio::test]
async fn insert_defaults_only() {
    let (db, log) = setup().await;
    let counter = Model::builder("Counter")
        .field("n", Field::integer("计数").default(0))
        .field("active", Field::boolean("启用").default(true))
        .build();
    db.sync(&counter).await.unwrap();

    assert_eq!(db.insert(&counter, &Record::new()).await.unwrap(), 1);
    assert_eq!(
        log.sql().last().unwrap(),
        "INSERT INTO counter DEFAULT VALUES"
    );

    assert_eq!(
        db.all(&counter).await.unwrap(),
        [Record::new()
            .with("id", 1)
            .with("n", 0)
            .with("active", true)]
    );
}

#[tokio::test]
async fn missing_table_is_a_query_error() {
    let (db, _log) = setup().await;

    let err = db.all(&author()).await.unwrap_err();
    assert!(err.is_query());
    assert!(err.root().is_driver_operation_failed());
    assert!(err.to_string().contains("no such table: Authors"));
}
