use super::{Delimited, Formatter, Ident, Params, ToSql};

use crate::stmt::{Filter, Value};

struct Condition<'a>(&'a str, &'a Value);

impl ToSql for &Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.is_empty() {
            return;
        }

        let conditions = Delimited(self.iter().map(|(c, v)| Condition(c, v)), " AND ");
        fmt!(f, " WHERE " conditions);
    }
}

impl ToSql for Condition<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(self.0);

        if self.1.is_null() {
            fmt!(f, column " IS NULL");
        } else {
            fmt!(f, column " = " self.1);
        }
    }
}
