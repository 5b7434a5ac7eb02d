use crate::stmt::{ColumnDef, Statement};

use sgorm_core::{
    schema::{DefaultValue, FieldTy, IndexClause, SchemaDelta},
    Dialect, Model,
};
use std::fmt;

/// A DDL statement produced while synchronizing a table, tagged with the step
/// it performs.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationStatement {
    statement: Statement,
    step: MigrationStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationStep {
    CreateTable,
    CreateIndex(String),
    AddColumn(String),
    DropIndex(String),
    DropColumn(String),
}

impl MigrationStatement {
    fn new(statement: Statement, step: MigrationStep) -> Self {
        Self { statement, step }
    }

    /// Statements creating the table for `model` from scratch: the table
    /// itself, then one index per indexed column.
    pub fn create_table(model: &Model) -> Vec<MigrationStatement> {
        let table = model.table_name();
        let mut result = vec![MigrationStatement::new(
            Statement::create_table(model),
            MigrationStep::CreateTable,
        )];

        for (name, field) in model.columns() {
            if field.index_clause() == Some(IndexClause::Index) {
                result.push(MigrationStatement::new(
                    Statement::create_index(table, name, false),
                    MigrationStep::CreateIndex(name.to_string()),
                ));
            }
        }

        result
    }

    /// Statements applying `delta` to the live table: every addition, then
    /// every removal.
    pub fn from_delta(
        model: &Model,
        delta: &SchemaDelta,
        dialect: Dialect,
    ) -> Vec<MigrationStatement> {
        let table = model.table_name();
        let mut result = vec![];

        for name in &delta.columns_to_add {
            let Some(field) = model.column(name) else {
                continue;
            };

            let mut column = ColumnDef::from_field(name, field);
            let mut unique_index = false;

            if dialect.is_sqlite() {
                // Existing rows would all share the zero default, so keys and
                // unique columns are left to fail the ADD before anything changes
                let keyed = column.constraint.is_some();

                // SQLite cannot add a NOT NULL column without a default
                if !keyed
                    && !column.nullable
                    && column.default.is_none()
                    && !column.is_auto_increment()
                {
                    column.default = Some(zero_default(&column.ty));
                }

                // ...nor a UNIQUE column; a unique index does the same job
                if column.constraint == Some(IndexClause::Unique) {
                    column.constraint = None;
                    unique_index = true;
                }
            }

            result.push(MigrationStatement::new(
                Statement::add_column(table, column),
                MigrationStep::AddColumn(name.clone()),
            ));

            if unique_index || field.index_clause() == Some(IndexClause::Index) {
                result.push(MigrationStatement::new(
                    Statement::create_index(table, name, unique_index),
                    MigrationStep::CreateIndex(name.clone()),
                ));
            }
        }

        for name in &delta.columns_to_remove {
            // SQLite refuses to drop an indexed column
            if dialect.is_sqlite() {
                result.push(MigrationStatement::new(
                    Statement::drop_index(table, name),
                    MigrationStep::DropIndex(name.clone()),
                ));
            }

            result.push(MigrationStatement::new(
                Statement::drop_column(table, name),
                MigrationStep::DropColumn(name.clone()),
            ));
        }

        result
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn step(&self) -> &MigrationStep {
        &self.step
    }
}

/// The value existing rows receive when a NOT NULL column is added to them.
fn zero_default(ty: &FieldTy) -> DefaultValue {
    match ty {
        FieldTy::Char { .. } | FieldTy::Text => DefaultValue::Str(String::new()),
        FieldTy::Integer { .. } => DefaultValue::Int(0),
        FieldTy::Boolean => DefaultValue::Bool(false),
        FieldTy::Date => DefaultValue::Str("1970-01-01".to_string()),
        FieldTy::DateTime { .. } => DefaultValue::Str("1970-01-01 00:00:00".to_string()),
        FieldTy::Decimal { .. } => DefaultValue::Numeric("0".to_string()),
    }
}

impl fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationStep::CreateTable => f.write_str("creating table"),
            MigrationStep::CreateIndex(column) => {
                write!(f, "creating index on column `{column}`")
            }
            MigrationStep::AddColumn(column) => write!(f, "adding column `{column}`"),
            MigrationStep::DropIndex(column) => {
                write!(f, "dropping index on column `{column}`")
            }
            MigrationStep::DropColumn(column) => write!(f, "dropping column `{column}`"),
        }
    }
}
