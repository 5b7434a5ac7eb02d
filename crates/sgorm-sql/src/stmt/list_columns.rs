use super::Statement;

/// Reads the column names of a table, in ordinal order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListColumns {
    pub table: String,
}

impl Statement {
    pub fn list_columns(table: &str) -> Self {
        ListColumns {
            table: table.to_string(),
        }
        .into()
    }
}

impl From<ListColumns> for Statement {
    fn from(value: ListColumns) -> Self {
        Self::ListColumns(value)
    }
}
