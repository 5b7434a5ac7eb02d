use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: String,

    pub filter: Filter,
}

impl Statement {
    pub fn delete(table: &str, filter: Filter) -> Self {
        Delete {
            from: table.to_string(),
            filter,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
