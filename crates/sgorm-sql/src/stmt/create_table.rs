use super::{ColumnDef, Statement};

use sgorm_core::{schema::IndexClause, Model};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key columns emitted as a trailing table constraint
    pub primary_key: Vec<String>,
}

impl Statement {
    /// Creates a table with every column of the model.
    ///
    /// The auto-increment `id` keeps its primary key inline. Any other primary
    /// key column is collected into one trailing `PRIMARY KEY (...)`.
    pub fn create_table(model: &Model) -> Self {
        let mut columns = vec![];
        let mut primary_key = vec![];

        for (name, field) in model.columns() {
            let mut column = ColumnDef::from_field(name, field);

            if column.constraint == Some(IndexClause::PrimaryKey)
                && !column.is_auto_increment_primary_key()
            {
                column.constraint = None;
                primary_key.push(name.to_string());
            }

            columns.push(column);
        }

        CreateTable {
            name: model.table_name().to_string(),
            columns,
            primary_key,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
