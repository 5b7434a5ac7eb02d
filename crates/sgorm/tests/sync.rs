mod support;

use pretty_assertions::assert_eq;
use sgorm::{Db, Field, Filter, MigrationReport, Model, Record, Value};
use support::{setup, BrokenDriver};

fn movie(fields: &[(&str, Field)]) -> Model {
    let mut builder = Model::builder("Movie");
    for (name, field) in fields {
        builder = builder.field(*name, field.clone());
    }
    builder.build()
}

#[tokio::test]
async fn creates_missing_table() {
    let (db, log) = setup().await;
    let model = movie(&[("title", Field::char("标题", 50))]);

    let report = db.sync(&model).await.unwrap();

    assert_eq!(
        report,
        MigrationReport::Created {
            table: "movie".to_string()
        }
    );
    assert_eq!(
        log.sql(),
        ["CREATE TABLE movie (id INTEGER PRIMARY KEY AUTOINCREMENT, title VARCHAR(50) NOT NULL)"]
    );
    assert_eq!(log.list_columns_count(), 1);
}

#[tokio::test]
async fn creates_indexes_with_the_table() {
    let (db, log) = setup().await;
    let model = movie(&[
        ("title", Field::char("标题", 50).indexed()),
        ("slug", Field::char("别名", 50).unique()),
    ]);

    assert!(db.sync(&model).await.unwrap().is_created());
    assert_eq!(
        log.sql(),
        [
            "CREATE TABLE movie (id INTEGER PRIMARY KEY AUTOINCREMENT, title VARCHAR(50) NOT NULL, slug VARCHAR(50) UNIQUE NOT NULL)",
            "CREATE INDEX idx_movie_title ON movie (title)",
        ]
    );
}

#[tokio::test]
async fn sync_is_idempotent() {
    let (db, log) = setup().await;
    let model = movie(&[
        ("title", Field::char("标题", 50)),
        ("description", Field::text("描述").nullable()),
        ("created", Field::datetime("创建").auto_now_add()),
        ("updated", Field::datetime("更新").auto_now()),
        ("price", Field::decimal("价格", 10, 2).default("9.99")),
    ]);

    assert!(db.sync(&model).await.unwrap().is_created());
    log.clear();

    let report = db.sync(&model).await.unwrap();
    assert_eq!(
        report,
        MigrationReport::Unchanged {
            table: "movie".to_string()
        }
    );
    assert!(log.sql().is_empty());
}

#[tokio::test]
async fn adds_and_drops_columns() {
    let (db, log) = setup().await;

    let before = movie(&[
        ("title", Field::char("标题", 50)),
        ("legacy", Field::integer("旧").indexed()),
    ]);
    db.sync(&before).await.unwrap();
    db.insert(&before, &Record::new().with("title", "Alien").with("legacy", 1))
        .await
        .unwrap();
    log.clear();

    let after = movie(&[
        ("title", Field::char("标题", 50)),
        ("bio", Field::text("简介")),
    ]);
    let report = db.sync(&after).await.unwrap();

    assert_eq!(
        report,
        MigrationReport::Migrated {
            table: "movie".to_string(),
            added: vec!["bio".to_string()],
            removed: vec!["legacy".to_string()],
        }
    );
    assert_eq!(
        log.sql(),
        [
            "ALTER TABLE movie ADD COLUMN bio TEXT DEFAULT '' NOT NULL",
            "DROP INDEX IF EXISTS idx_movie_legacy",
            "ALTER TABLE movie DROP COLUMN legacy",
        ]
    );

    // Existing rows keep their data and pick up the default
    let rows = db.all(&after).await.unwrap();
    assert_eq!(
        rows,
        [Record::new()
            .with("id", 1)
            .with("title", "Alien")
            .with("bio", "")]
    );

    assert!(db.sync(&after).await.unwrap().is_unchanged());
}

#[tokio::test]
async fn rows_after_migration_use_the_new_columns() {
    let (db, _log) = setup().await;

    let before = movie(&[
        ("title", Field::char("标题", 50)),
        ("legacy", Field::integer("旧")),
    ]);
    db.sync(&before).await.unwrap();
    db.insert(&before, &Record::new().with("title", "Alien").with("legacy", 7))
        .await
        .unwrap();
    assert_eq!(
        db.all(&before).await.unwrap(),
        [Record::new()
            .with("id", 1)
            .with("title", "Alien")
            .with("legacy", 7)]
    );

    let after = movie(&[
        ("title", Field::char("标题", 50)),
        ("bio", Field::text("简介")),
        ("year", Field::integer("年份")),
    ]);
    assert!(db.sync(&after).await.unwrap().is_migrated());

    let expected = [Record::new()
        .with("id", 1)
        .with("title", "Alien")
        .with("bio", "")
        .with("year", 0)];
    assert_eq!(db.all(&after).await.unwrap(), expected);
    assert_eq!(
        db.filter(&after, &Filter::new().eq("title", "Alien"))
            .await
            .unwrap(),
        expected
    );
}

#[tokio::test]
async fn unique_not_null_column_is_not_added_with_a_shared_default() {
    let (db, _log) = setup().await;

    let before = movie(&[("title", Field::char("标题", 50))]);
    db.sync(&before).await.unwrap();
    for title in ["Alien", "Aliens"] {
        db.insert(&before, &Record::new().with("title", title))
            .await
            .unwrap();
    }

    let after = movie(&[
        ("title", Field::char("标题", 50)),
        ("slug", Field::char("别名", 50).unique()),
    ]);

    let err = db.sync(&after).await.unwrap_err();
    assert!(err.is_migration());
    assert!(err
        .to_string()
        .starts_with("migration of table `movie` failed while adding column `slug`: "));

    // Nothing was applied, so the next sync tries again instead of converging
    assert!(db.sync(&before).await.unwrap().is_unchanged());
    assert!(db.sync(&after).await.unwrap_err().is_migration());
}

#[tokio::test]
async fn delta_matches_set_difference() {
    let (db, _log) = setup().await;

    let live = movie(&[
        ("a", Field::text("a").nullable()),
        ("b", Field::text("b").nullable()),
        ("c", Field::text("c").nullable()),
    ]);
    db.sync(&live).await.unwrap();

    let declared = movie(&[
        ("b", Field::text("b").nullable()),
        ("d", Field::integer("d")),
        ("e", Field::boolean("e").default(true)),
    ]);

    let MigrationReport::Migrated { added, removed, .. } = db.sync(&declared).await.unwrap()
    else {
        panic!("expected a migration");
    };

    assert_eq!(added, ["d", "e"]);
    assert_eq!(removed, ["a", "c"]);
}

#[tokio::test]
async fn unique_column_added_through_an_index() {
    let (db, log) = setup().await;

    db.sync(&movie(&[("title", Field::char("标题", 50))]))
        .await
        .unwrap();
    log.clear();

    let model = movie(&[
        ("title", Field::char("标题", 50)),
        ("slug", Field::char("别名", 50).unique().nullable()),
    ]);
    assert!(db.sync(&model).await.unwrap().is_migrated());
    assert_eq!(
        log.sql(),
        [
            "ALTER TABLE movie ADD COLUMN slug VARCHAR(50) NULL",
            "CREATE UNIQUE INDEX idx_movie_slug ON movie (slug)",
        ]
    );

    db.insert(&model, &Record::new().with("title", "a").with("slug", "x"))
        .await
        .unwrap();
    let err = db
        .insert(&model, &Record::new().with("title", "b").with("slug", "x"))
        .await
        .unwrap_err();
    assert!(err.is_query());
}

#[tokio::test]
async fn failed_step_leaves_earlier_steps_applied() {
    let (db, _log) = setup().await;

    let before = movie(&[("title", Field::char("标题", 50))]);
    db.sync(&before).await.unwrap();
    db.insert(&before, &Record::new().with("title", "Alien"))
        .await
        .unwrap();

    // SQLite cannot add a CURRENT_TIMESTAMP column to a table with rows
    let after = movie(&[
        ("title", Field::char("标题", 50)),
        ("rating", Field::integer("评分")),
        ("updated", Field::datetime("更新").auto_now()),
    ]);
    let err = db.sync(&after).await.unwrap_err();

    assert!(err.is_migration());
    assert!(err
        .to_string()
        .starts_with("migration of table `movie` failed while adding column `updated`: "));
    assert!(err.root().is_driver_operation_failed());

    let partial = movie(&[
        ("title", Field::char("标题", 50)),
        ("rating", Field::integer("评分")),
    ]);
    assert!(db.sync(&partial).await.unwrap().is_unchanged());
}

#[tokio::test]
async fn introspection_failure_is_not_an_absent_table() {
    let db = Db::connect("BROKEN", &BrokenDriver).await.unwrap();
    let model = movie(&[("title", Field::char("标题", 50))]);

    let err = db.sync(&model).await.unwrap_err();

    assert!(err.is_schema_introspection());
    assert_eq!(
        err.to_string(),
        "failed to list columns of table `movie`: database is locked"
    );
}

#[tokio::test]
async fn table_name_override() {
    let (db, log) = setup().await;
    let author = Model::builder("Author")
        .table_name("Authors")
        .field("name", Field::char("姓名", 20))
        .field("sex", Field::boolean("性别"))
        .build();

    let report = db.sync(&author).await.unwrap();

    assert_eq!(report.table(), "Authors");
    assert_eq!(report.to_string(), "created table `Authors`");
    assert_eq!(
        log.sql(),
        ["CREATE TABLE Authors (id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR(20) NOT NULL, sex BOOLEAN NOT NULL)"]
    );

    db.insert(&author, &Record::new().with("name", "Ann").with("sex", Value::Bool(false)))
        .await
        .unwrap();
    assert_eq!(db.all(&author).await.unwrap().len(), 1);
}
