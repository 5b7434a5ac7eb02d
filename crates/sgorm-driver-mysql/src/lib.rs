mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Opts, OptsBuilder,
};
use sgorm_core::{
    async_trait,
    config::MysqlOptions,
    driver::{
        operation::{ListColumns, Operation, QuerySql},
        Dialect, Driver, Response,
    },
    stmt::Record,
    Error, Result,
};
use sgorm_sql as sql;
use std::borrow::Cow;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    opts: Opts,

    /// Connection URL without the password, for logging.
    url: String,
}

impl MySQL {
    /// Create a new MySQL driver from a `mysql://` connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "mysql" {
            return Err(Error::configuration(format!(
                "connection url does not have a `mysql` scheme; url={url}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::configuration(format!("missing host in connection URL; url={url}"))
        })?;

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::configuration(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let display = format!(
            "mysql://{}@{host}:{}{}",
            url.username(),
            url.port().unwrap_or(3306),
            url.path()
        );

        let opts = Opts::from_url(url.as_str()).map_err(Error::driver_operation_failed)?;

        Ok(Self {
            opts,
            url: display,
        })
    }

    pub fn from_options(options: &MysqlOptions) -> Self {
        let opts = OptsBuilder::default()
            .ip_or_hostname(options.host.clone())
            .tcp_port(options.port)
            .user(Some(options.user.clone()))
            .pass(options.password.clone())
            .db_name(Some(options.database.clone()));

        Self {
            opts: opts.into(),
            url: format!(
                "mysql://{}@{}:{}/{}",
                options.user, options.host, options.port, options.database
            ),
        }
    }
}

#[async_trait]
impl Driver for MySQL {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn connect(&self) -> Result<Box<dyn sgorm_core::Connection>> {
        let conn = Conn::new(self.opts.clone())
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl sgorm_core::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.exec_sql(op).await,
            Operation::ListColumns(op) => self.list_columns(op).await,
        }
    }
}

impl Connection {
    async fn exec_sql(&mut self, op: QuerySql) -> Result<Response> {
        tracing::debug!(sql = %op.sql, params = op.params.len(), "mysql exec");

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param.to_value())
            .collect::<Vec<_>>();

        if !op.ret {
            if args.is_empty() {
                // DDL goes over the text protocol
                self.conn
                    .query_drop(op.sql.as_str())
                    .await
                    .map_err(Error::driver_operation_failed)?;
            } else {
                self.conn
                    .exec_drop(op.sql.as_str(), args)
                    .await
                    .map_err(Error::driver_operation_failed)?;
            }

            return Ok(Response::count(self.conn.affected_rows()));
        }

        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(op.sql.as_str(), args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut ret = Vec::with_capacity(rows.len());

        for mut row in rows {
            let mut record = Record::new();

            for i in 0..row.len() {
                let column = row.columns_ref()[i].clone();
                let value = Value::from_sql(i, &mut row, &column).into_inner();
                record.set(column.name_str(), value);
            }

            ret.push(record);
        }

        Ok(Response::records(ret))
    }

    /// Reads `information_schema.COLUMNS` for the current database. A missing
    /// table yields no rows.
    async fn list_columns(&mut self, op: ListColumns) -> Result<Response> {
        let mut params = Vec::<sql::stmt::Value>::new();
        let sql_str = sql::Serializer::mysql()
            .serialize(&sql::Statement::list_columns(&op.table), &mut params);

        tracing::debug!(sql = %sql_str, "mysql list columns");

        let args = params
            .into_iter()
            .map(|param| Value::from(param).to_value())
            .collect::<Vec<_>>();

        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(sql_str.as_str(), args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let columns = rows
            .into_iter()
            .map(|mut row| match row.take::<mysql_async::Value, usize>(0) {
                Some(mysql_async::Value::Bytes(bytes)) => {
                    String::from_utf8(bytes).map_err(Error::driver_operation_failed)
                }
                value => Err(Error::invalid_result(format!(
                    "expected a column name, got {value:?}"
                ))),
            })
            .collect::<Result<_>>()?;

        Ok(Response::columns(columns))
    }
}
