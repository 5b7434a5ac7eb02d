use super::Db;
use crate::{Error, Filter, Model, Record, Result};

use sgorm_sql::Statement;

impl Db {
    /// Every row of the model's table.
    pub async fn all(&self, model: &Model) -> Result<Vec<Record>> {
        self.filter(model, &Filter::new()).await
    }

    /// Rows matching every condition of `filter`. An empty filter matches all
    /// rows.
    pub async fn filter(&self, model: &Model, filter: &Filter) -> Result<Vec<Record>> {
        check_columns(model, filter.columns())?;

        let stmt = Statement::select(model.table_name(), filter.clone());
        self.query(model, &stmt).await
    }

    /// The first row matching `filter`, or `None`.
    pub async fn get(&self, model: &Model, filter: &Filter) -> Result<Option<Record>> {
        check_columns(model, filter.columns())?;

        let stmt = Statement::select_first(model.table_name(), filter.clone());
        Ok(self.query(model, &stmt).await?.into_iter().next())
    }

    /// Deletes the rows matching `filter`, returning how many were deleted.
    ///
    /// The filter must not be empty.
    pub async fn delete(&self, model: &Model, filter: &Filter) -> Result<u64> {
        let table = model.table_name();

        if filter.is_empty() {
            return Err(Error::query(format!(
                "delete from `{table}` requires at least one condition"
            )));
        }

        check_columns(model, filter.columns())?;

        let stmt = Statement::delete(table, filter.clone());
        self.execute(table, &stmt).await
    }

    /// Inserts one row. Columns left out take their database default.
    pub async fn insert(&self, model: &Model, record: &Record) -> Result<u64> {
        check_columns(model, record.columns())?;

        let table = model.table_name();
        let stmt = Statement::insert(table, record);
        self.execute(table, &stmt).await
    }

    async fn query(&self, model: &Model, stmt: &Statement) -> Result<Vec<Record>> {
        let mut conn = self.shared.connection.lock().await;

        let records = self
            .exec(&mut **conn, stmt)
            .await
            .and_then(|response| response.rows.into_records())
            .map_err(|err| err.context(failed(model.table_name())))?;

        Ok(records
            .into_iter()
            .map(|record| decode(model, record))
            .collect())
    }

    async fn execute(&self, table: &str, stmt: &Statement) -> Result<u64> {
        let mut conn = self.shared.connection.lock().await;

        self.exec(&mut **conn, stmt)
            .await
            .and_then(|response| response.rows.into_count())
            .map_err(|err| err.context(failed(table)))
    }
}

fn failed(table: &str) -> Error {
    Error::query(format!("statement on table `{table}` failed"))
}

/// Every column must be declared on the model, `id` included.
fn check_columns<'a>(model: &Model, columns: impl Iterator<Item = &'a str>) -> Result<()> {
    for column in columns {
        if !model.has_column(column) {
            return Err(Error::query(format!(
                "unknown column `{column}` for model `{}`",
                model.name()
            )));
        }
    }

    Ok(())
}

/// Normalizes driver values against the declared field types.
fn decode(model: &Model, record: Record) -> Record {
    record
        .into_iter()
        .map(|(column, value)| match model.column(&column) {
            Some(field) => (column, value.for_field(field)),
            None => (column, value),
        })
        .collect()
}
