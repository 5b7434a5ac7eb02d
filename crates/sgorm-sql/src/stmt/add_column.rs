use super::{ColumnDef, Statement};

/// A statement to add a column to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: String,

    /// Column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to a table.
    pub fn add_column(table: &str, column: ColumnDef) -> Self {
        AddColumn {
            table: table.to_string(),
            column,
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
