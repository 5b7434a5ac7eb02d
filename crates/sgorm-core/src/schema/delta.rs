use super::{Model, ID};

use indexmap::IndexSet;

/// Column names to add and remove to bring a live table in line with a model.
///
/// Only presence is compared; a column whose declared type changed is not
/// part of the delta. The implicit `id` never appears on either side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaDelta {
    /// Declared but not live, in declaration order.
    pub columns_to_add: Vec<String>,

    /// Live but not declared, in the table's column order.
    pub columns_to_remove: Vec<String>,
}

impl SchemaDelta {
    pub fn between(model: &Model, live: &IndexSet<String>) -> Self {
        let columns_to_add = model
            .declared_columns()
            .filter(|(name, _)| !live.contains(*name))
            .map(|(name, _)| name.to_string())
            .collect();

        let columns_to_remove = live
            .iter()
            .filter(|name| name.as_str() != ID && !model.has_column(name))
            .cloned()
            .collect();

        Self {
            columns_to_add,
            columns_to_remove,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns_to_add.is_empty() && self.columns_to_remove.is_empty()
    }
}
