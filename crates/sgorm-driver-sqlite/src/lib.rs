mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use sgorm_core::{
    async_trait,
    config::SqliteOptions,
    driver::{
        operation::{ListColumns, Operation, QuerySql},
        Dialect, Driver, Response,
    },
    stmt::Record,
    Error, Result,
};
use sgorm_sql as sql;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database; any other path names
    /// the database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn from_options(options: &SqliteOptions) -> Self {
        match options {
            SqliteOptions::InMemory => Self::InMemory,
            SqliteOptions::File(path) => Self::open(path),
        }
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn sgorm_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl sgorm_core::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.exec_sql(op),
            Operation::ListColumns(op) => self.list_columns(op),
        }
    }
}

impl Connection {
    fn exec_sql(&mut self, op: QuerySql) -> Result<Response> {
        tracing::debug!(sql = %op.sql, params = op.params.len(), "sqlite exec");

        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        if !op.ret {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver_operation_failed)?;

            return Ok(Response::count(count as _));
        }

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut columns: Vec<String> = vec![];
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            // A cached statement is recompiled on its first step after the
            // schema changes, so names are only current once a row exists.
            if columns.is_empty() {
                let stmt: &rusqlite::Statement<'_> = row.as_ref();
                columns = stmt.column_names().into_iter().map(String::from).collect();
            }

            let mut record = Record::new();

            for (index, column) in columns.iter().enumerate() {
                record.set(column.as_str(), Value::from_sql(row, index)?.into_inner());
            }

            ret.push(record);
        }

        Ok(Response::records(ret))
    }

    /// `PRAGMA table_info` yields one row per column, in ordinal order, with
    /// the name in the second position. A missing table yields no rows.
    fn list_columns(&mut self, op: ListColumns) -> Result<Response> {
        let mut params = Vec::<sql::stmt::Value>::new();
        let sql_str = sql::Serializer::sqlite()
            .serialize(&sql::Statement::list_columns(&op.table), &mut params);
        debug_assert!(params.is_empty());

        tracing::debug!(sql = %sql_str, "sqlite list columns");

        let mut stmt = self
            .connection
            .prepare(&sql_str)
            .map_err(Error::driver_operation_failed)?;

        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .map_err(Error::driver_operation_failed)?;

        let columns = columns
            .collect::<rusqlite::Result<_>>()
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::columns(columns))
    }
}
