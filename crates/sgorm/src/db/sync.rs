use super::Db;
use crate::{Error, Model, Result};

use sgorm_core::{driver::operation::ListColumns, schema::SchemaDelta, Connection};
use sgorm_sql::{MigrationStatement, MigrationStep};
use std::fmt;

/// The outcome of synchronizing one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationReport {
    /// The table did not exist and was created with every declared column.
    Created { table: String },

    /// Columns were added to and/or dropped from an existing table.
    Migrated {
        table: String,
        added: Vec<String>,
        removed: Vec<String>,
    },

    Unchanged { table: String },
}

impl Db {
    /// Brings the live table for `model` in line with its declaration.
    ///
    /// A missing table is created. Otherwise declared columns missing from
    /// the table are added, then live columns missing from the declaration
    /// are dropped, along with their data. Column types are not compared.
    ///
    /// Each statement commits on its own. If one fails, the statements before
    /// it stay applied and the error names the table and the failing step.
    pub async fn sync(&self, model: &Model) -> Result<MigrationReport> {
        let table = model.table_name();

        // Held across introspection and every DDL statement of this model
        let mut conn = self.shared.connection.lock().await;

        let live = conn
            .exec(
                ListColumns {
                    table: table.to_string(),
                }
                .into(),
            )
            .await
            .and_then(|response| response.rows.into_columns())
            .map_err(|err| err.context(Error::schema_introspection(table)))?;

        if live.is_empty() {
            for stmt in MigrationStatement::create_table(model) {
                self.apply(&mut **conn, table, &stmt).await?;
            }

            tracing::info!(table, "created table");
            return Ok(MigrationReport::Created {
                table: table.to_string(),
            });
        }

        let delta = SchemaDelta::between(model, &live);

        if delta.is_empty() {
            tracing::debug!(table, "table is up to date");
            return Ok(MigrationReport::Unchanged {
                table: table.to_string(),
            });
        }

        for stmt in MigrationStatement::from_delta(model, &delta, self.dialect()) {
            self.apply(&mut **conn, table, &stmt).await?;

            match stmt.step() {
                MigrationStep::AddColumn(column) => {
                    tracing::info!(table, column = %column, "added column")
                }
                MigrationStep::DropColumn(column) => {
                    tracing::info!(table, column = %column, "dropped column")
                }
                _ => {}
            }
        }

        Ok(MigrationReport::Migrated {
            table: table.to_string(),
            added: delta.columns_to_add,
            removed: delta.columns_to_remove,
        })
    }

    async fn apply(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        stmt: &MigrationStatement,
    ) -> Result<()> {
        self.exec(conn, stmt.statement())
            .await
            .map_err(|err| err.context(Error::migration(table, stmt.step().to_string())))?;
        Ok(())
    }
}

impl MigrationReport {
    pub fn table(&self) -> &str {
        match self {
            MigrationReport::Created { table }
            | MigrationReport::Migrated { table, .. }
            | MigrationReport::Unchanged { table } => table,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, MigrationReport::Created { .. })
    }

    pub fn is_migrated(&self) -> bool {
        matches!(self, MigrationReport::Migrated { .. })
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, MigrationReport::Unchanged { .. })
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationReport::Created { table } => write!(f, "created table `{table}`"),
            MigrationReport::Migrated {
                table,
                added,
                removed,
            } => {
                write!(f, "migrated table `{table}`")?;

                let mut sep = " (";
                if !added.is_empty() {
                    write!(f, "{sep}added: {}", added.join(", "))?;
                    sep = "; ";
                }
                if !removed.is_empty() {
                    write!(f, "{sep}removed: {}", removed.join(", "))?;
                }

                f.write_str(")")
            }
            MigrationReport::Unchanged { table } => write!(f, "table `{table}` is up to date"),
        }
    }
}
