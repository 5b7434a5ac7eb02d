use super::{Record, Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub into: String,

    pub columns: Vec<String>,

    /// One value per column, sent as parameters
    pub values: Vec<Value>,
}

impl Statement {
    pub fn insert(table: &str, record: &Record) -> Self {
        Insert {
            into: table.to_string(),
            columns: record.columns().map(str::to_string).collect(),
            values: record.values().cloned().collect(),
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
