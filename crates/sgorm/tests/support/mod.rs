#![allow(dead_code)]

use sgorm::{
    driver::{operation::QuerySql, Connection, Dialect, Driver, Operation, Response},
    Db, Error, Result,
};
use sgorm_core::async_trait;
use sgorm_driver_sqlite::Sqlite;
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

/// A driver wrapper that records every operation its connections execute.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn exec_log(&self) -> ExecLog {
        ExecLog {
            ops: self.ops_log.clone(),
        }
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log.clone(),
        }))
    }
}

#[derive(Debug)]
struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        self.ops_log.lock().unwrap().push(operation.clone());
        self.inner.exec(operation).await
    }
}

/// Read access to the operations recorded by a [`LoggingDriver`].
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl ExecLog {
    /// SQL text of every statement executed so far, in order.
    pub fn sql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::QuerySql(QuerySql { sql, .. }) => Some(sql.clone()),
                Operation::ListColumns(_) => None,
            })
            .collect()
    }

    /// Parameters bound to the most recent statement.
    pub fn last_params(&self) -> Vec<sgorm::Value> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|op| match op {
                Operation::QuerySql(QuerySql { params, .. }) => Some(params.clone()),
                Operation::ListColumns(_) => None,
            })
            .unwrap_or_default()
    }

    pub fn list_columns_count(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(op, Operation::ListColumns(_)))
            .count()
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}

/// A connection to a fresh in-memory SQLite database, with its statements
/// logged.
pub async fn setup() -> (Db, ExecLog) {
    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let log = driver.exec_log();
    let db = Db::connect("TEST", &driver).await.unwrap();
    (db, log)
}

/// A driver whose connections fail every operation.
#[derive(Debug)]
pub struct BrokenDriver;

#[derive(Debug)]
struct BrokenConnection;

#[async_trait]
impl Driver for BrokenDriver {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("broken:")
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(BrokenConnection))
    }
}

#[async_trait]
impl Connection for BrokenConnection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn exec(&mut self, _operation: Operation) -> Result<Response> {
        Err(Error::driver_operation_failed(std::io::Error::new(
            std::io::ErrorKind::Other,
            "database is locked",
        )))
    }
}
