use super::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Which table to index
    pub on: String,

    /// The indexed column
    pub column: String,

    /// When true, the index is unique
    pub unique: bool,
}

/// Name of the single-column index sgorm creates for `column`.
pub fn index_name(table: &str, column: &str) -> String {
    format!("idx_{table}_{column}")
}

impl Statement {
    pub fn create_index(table: &str, column: &str, unique: bool) -> Self {
        CreateIndex {
            name: index_name(table, column),
            on: table.to_string(),
            column: column.to_string(),
            unique,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
