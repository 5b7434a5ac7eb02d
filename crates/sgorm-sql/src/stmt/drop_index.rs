use super::{index_name, Statement};

/// Drops the index sgorm created for a column.
///
/// Migrations only emit this on SQLite, which refuses to drop an indexed
/// column. MySQL drops a column's indexes along with it, so the MySQL
/// rendering is only reached when the statement is built directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    /// Name of the index
    pub name: String,

    /// Table the index belongs to
    pub on: String,
}

impl Statement {
    pub fn drop_index(table: &str, column: &str) -> Self {
        DropIndex {
            name: index_name(table, column),
            on: table.to_string(),
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
