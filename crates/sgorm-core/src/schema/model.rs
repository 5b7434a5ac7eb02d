use super::Field;

use indexmap::IndexMap;

/// Name of the implicit auto-increment primary key every model carries.
pub const ID: &str = "id";

/// A declared table shape.
///
/// The implicit `id` column is always the first column. User declarations
/// follow in the order they were registered on the [`ModelBuilder`]; declaring
/// the same name again replaces the earlier field in place.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    table_name: String,
    columns: IndexMap<String, Field>,

    /// Every declaration as written, including the ones that did not become
    /// columns. Only consulted by the lint pass.
    pub(super) declarations: Vec<Declaration>,
}

#[derive(Debug, Clone)]
pub(super) struct Declaration {
    pub(super) name: String,
    pub(super) field: Option<Field>,
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    table_name: Option<String>,
    declarations: Vec<Declaration>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table_name: None,
            declarations: vec![],
        }
    }

    /// The model name as declared, e.g. `Movie`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// All columns, `id` first.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = (&str, &Field)> + '_ {
        self.columns.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// User-declared columns, without the implicit `id`.
    pub fn declared_columns(&self) -> impl Iterator<Item = (&str, &Field)> + '_ {
        self.columns().filter(|(name, _)| *name != ID)
    }

    pub fn column(&self, name: &str) -> Option<&Field> {
        self.columns.get(name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }
}

impl ModelBuilder {
    /// Overrides the table name. Kept verbatim; the default is the model name
    /// lower-cased.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Declares a column. A `None` field is recorded for the lint pass and
    /// does not become a column.
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Option<Field>>) -> Self {
        self.declarations.push(Declaration {
            name: name.into(),
            field: field.into(),
        });
        self
    }

    pub fn build(self) -> Model {
        let mut columns = IndexMap::new();
        columns.insert(
            ID.to_string(),
            Field::integer(ID).primary_key().auto_increment(),
        );

        for declaration in &self.declarations {
            let Some(field) = &declaration.field else {
                continue;
            };

            if declaration.name == ID {
                continue;
            }

            columns.insert(declaration.name.clone(), field.clone());
        }

        Model {
            table_name: self
                .table_name
                .unwrap_or_else(|| self.name.to_lowercase()),
            name: self.name,
            columns,
            declarations: self.declarations,
        }
    }
}
