use super::Value;

/// Equality predicates on columns, combined with `AND`.
///
/// Values are always sent to the database as bound parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the condition `column = value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.conditions.iter().map(|(column, _)| column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.conditions
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Filter::new(), |filter, (column, value)| {
                filter.eq(column, value)
            })
    }
}
