use super::{Formatter, Params, ToSql};

use sgorm_core::{schema::DefaultValue, stmt};

/// Values are never inlined; each one becomes a placeholder.
impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}

impl ToSql for &DefaultValue {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self {
            // SQLite has no `ON UPDATE`; the column keeps its insert default
            DefaultValue::CurrentTimestampOnUpdate if f.serializer.is_sqlite() => {
                fmt!(f, "DEFAULT CURRENT_TIMESTAMP")
            }
            default => write!(f.dst, "{default}").unwrap(),
        }
    }
}
