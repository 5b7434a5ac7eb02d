use super::{Filter, Statement};

/// `SELECT *` with an optional equality filter and row limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub from: String,

    pub filter: Filter,

    pub limit: Option<u64>,
}

impl Statement {
    pub fn select(table: &str, filter: Filter) -> Self {
        Select {
            from: table.to_string(),
            filter,
            limit: None,
        }
        .into()
    }

    pub fn select_first(table: &str, filter: Filter) -> Self {
        Select {
            from: table.to_string(),
            filter,
            limit: Some(1),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
