mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::{index_name, CreateIndex};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_column;
pub use drop_column::DropColumn;

mod drop_index;
pub use drop_index::DropIndex;

mod insert;
pub use insert::Insert;

mod list_columns;
pub use list_columns::ListColumns;

mod select;
pub use select::Select;

pub use sgorm_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Delete(Delete),
    DropColumn(DropColumn),
    DropIndex(DropIndex),
    Insert(Insert),
    ListColumns(ListColumns),
    Select(Select),
}

impl Statement {
    /// Returns `true` if executing the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Select(_) | Statement::ListColumns(_))
    }
}
