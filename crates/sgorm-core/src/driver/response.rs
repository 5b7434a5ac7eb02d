use crate::{stmt::Record, Error, Result};

use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Records(Vec<Record>),

    /// Column names returned by introspection
    Columns(IndexSet<String>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn records(records: Vec<Record>) -> Self {
        Self {
            rows: Rows::Records(records),
        }
    }

    pub fn columns(columns: IndexSet<String>) -> Self {
        Self {
            rows: Rows::Columns(columns),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_records(&self) -> bool {
        matches!(self, Self::Records(_))
    }

    fn describe(&self) -> &'static str {
        match self {
            Rows::Count(_) => "a row count",
            Rows::Records(_) => "records",
            Rows::Columns(_) => "a column list",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(Error::invalid_result(format!(
                "expected a row count, got {}",
                rows.describe()
            ))),
        }
    }

    pub fn into_records(self) -> Result<Vec<Record>> {
        match self {
            Rows::Records(records) => Ok(records),
            rows => Err(Error::invalid_result(format!(
                "expected records, got {}",
                rows.describe()
            ))),
        }
    }

    pub fn into_columns(self) -> Result<IndexSet<String>> {
        match self {
            Rows::Columns(columns) => Ok(columns),
            rows => Err(Error::invalid_result(format!(
                "expected a column list, got {}",
                rows.describe()
            ))),
        }
    }
}
