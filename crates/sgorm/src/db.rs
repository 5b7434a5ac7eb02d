mod query;

mod sync;
pub use sync::MigrationReport;

use crate::{Dialect, Result};

use sgorm_core::{
    driver::{operation::QuerySql, Response},
    Connection, Driver,
};
use sgorm_sql::{Serializer, Statement};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to one shared database connection.
///
/// Clones refer to the same connection. Every operation holds the connection
/// lock for its whole duration, so operations from different clones never
/// interleave.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

struct Shared {
    name: String,
    dialect: Dialect,
    serializer: Serializer,
    connection: Mutex<Box<dyn Connection>>,
}

impl Db {
    /// Opens a connection through `driver`. A single attempt.
    pub async fn connect(name: impl Into<String>, driver: &dyn Driver) -> Result<Db> {
        let name = name.into();
        tracing::debug!(name = %name, url = %driver.url(), "opening connection");

        let connection = driver.connect().await?;
        let dialect = connection.dialect();

        Ok(Db {
            shared: Arc::new(Shared {
                name,
                dialect,
                serializer: Serializer::for_dialect(dialect),
                connection: Mutex::new(connection),
            }),
        })
    }

    /// Name of the configuration this connection was opened for.
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn dialect(&self) -> Dialect {
        self.shared.dialect
    }

    /// Returns `true` if both handles share the same connection.
    pub fn ptr_eq(a: &Db, b: &Db) -> bool {
        Arc::ptr_eq(&a.shared, &b.shared)
    }

    /// Serializes `stmt` for this connection's dialect and runs it.
    async fn exec(&self, conn: &mut dyn Connection, stmt: &Statement) -> Result<Response> {
        let mut params = vec![];
        let sql = self.shared.serializer.serialize(stmt, &mut params);

        let op = if stmt.returns_rows() {
            QuerySql::query(sql, params)
        } else {
            QuerySql::execute(sql, params)
        };

        conn.exec(op.into()).await
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("name", &self.shared.name)
            .field("dialect", &self.shared.dialect)
            .finish()
    }
}
