use crate::stmt::Value;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a serialized SQL statement
    QuerySql(QuerySql),

    /// List the column names of a table
    ListColumns(ListColumns),
}

/// A serialized statement and its bound parameters.
#[derive(Debug, Clone)]
pub struct QuerySql {
    pub sql: String,

    pub params: Vec<Value>,

    /// When `true`, the statement returns rows; otherwise the affected row
    /// count is returned.
    pub ret: bool,
}

/// Reads the live columns of `table` in their ordinal order.
///
/// A table that does not exist has no columns. A failing introspection query
/// is an error, never an empty result.
#[derive(Debug, Clone)]
pub struct ListColumns {
    pub table: String,
}

impl QuerySql {
    pub fn execute(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
            ret: false,
        }
    }

    pub fn query(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
            ret: true,
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}

impl From<ListColumns> for Operation {
    fn from(value: ListColumns) -> Self {
        Self::ListColumns(value)
    }
}
