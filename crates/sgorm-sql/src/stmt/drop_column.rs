use super::Statement;

/// A statement to drop a column from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropColumn {
    /// Name of the table.
    pub table: String,

    /// Name of the column to drop.
    pub name: String,
}

impl Statement {
    pub fn drop_column(table: &str, name: &str) -> Self {
        DropColumn {
            table: table.to_string(),
            name: name.to_string(),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
