mod delta;
pub use delta::SchemaDelta;

mod field;
pub use field::{AutoNow, DefaultValue, Field, FieldTy, IndexClause};

mod lint;
pub use lint::LintIssue;

mod model;
pub use model::{Model, ModelBuilder, ID};

/// Returns `true` if `name` can be emitted as a bare SQL identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
