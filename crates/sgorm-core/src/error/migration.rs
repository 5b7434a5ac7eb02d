use super::Error;

/// Error when a DDL statement fails part way through a table synchronization.
///
/// Statements that already ran are not rolled back; the table may be left in a
/// partially migrated state.
#[derive(Debug)]
pub(super) struct MigrationError {
    table: Box<str>,
    step: Box<str>,
}

impl std::error::Error for MigrationError {}

impl core::fmt::Display for MigrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "migration of table `{}` failed while {}",
            self.table, self.step
        )
    }
}

impl Error {
    /// Creates a migration error for `table`, describing the failed `step`.
    pub fn migration(table: impl Into<String>, step: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Migration(MigrationError {
            table: table.into().into(),
            step: step.into().into(),
        }))
    }

    /// Returns `true` if this error is a migration error.
    pub fn is_migration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Migration(_))
    }
}
