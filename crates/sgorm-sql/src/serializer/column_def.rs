use super::{Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt::ColumnDef;
use sgorm_core::schema::{FieldTy, IndexClause};

impl ToSql for &ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        if self.is_auto_increment_primary_key() {
            match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, name " INT AUTO_INCREMENT PRIMARY KEY"),
                Flavor::Sqlite => fmt!(f, name " INTEGER PRIMARY KEY AUTOINCREMENT"),
            }
            return;
        }

        let ty = &self.ty;
        fmt!(f, name " " ty);

        // SQLite only auto-increments an `INTEGER PRIMARY KEY`
        if self.is_auto_increment() && f.serializer.is_mysql() {
            fmt!(f, " AUTO_INCREMENT");
        }

        if let Some(default) = &self.default {
            fmt!(f, " " default);
        }

        match self.constraint {
            Some(IndexClause::PrimaryKey) => fmt!(f, " PRIMARY KEY"),
            Some(IndexClause::Unique) => fmt!(f, " UNIQUE"),
            Some(IndexClause::Index) | None => {}
        }

        let null = if self.nullable { " NULL" } else { " NOT NULL" };
        fmt!(f, null);
    }
}

impl ToSql for &FieldTy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        write!(f.dst, "{self}").unwrap();
    }
}
