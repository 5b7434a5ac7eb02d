use super::Error;

/// Error when the live column list of a table cannot be read.
#[derive(Debug)]
pub(super) struct SchemaIntrospectionError {
    table: Box<str>,
}

impl std::error::Error for SchemaIntrospectionError {}

impl core::fmt::Display for SchemaIntrospectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to list columns of table `{}`", self.table)
    }
}

impl Error {
    /// Creates a schema introspection error for `table`.
    pub fn schema_introspection(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaIntrospection(
            SchemaIntrospectionError {
                table: table.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a schema introspection error.
    pub fn is_schema_introspection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaIntrospection(_))
    }
}
