use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement, Value};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropColumn(stmt) => stmt.to_sql(f),
            Statement::DropIndex(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::ListColumns(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let add = match f.serializer.flavor {
            Flavor::Mysql => " ADD ",
            Flavor::Sqlite => " ADD COLUMN ",
        };

        let column = &self.column;

        fmt!(f, "ALTER TABLE " table_name add column);
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let index_name = Ident(&self.name);
        let table_name = Ident(&self.on);
        let column_name = Ident(&self.column);
        let unique = if self.unique { "UNIQUE " } else { "" };

        fmt!(
            f, "CREATE " unique "INDEX " index_name " ON " table_name " (" column_name ")"
        );
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " name " (" columns);

        if !self.primary_key.is_empty() {
            let primary_key = Comma(self.primary_key.iter().map(Ident));
            fmt!(f, ", PRIMARY KEY (" primary_key ")");
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.from);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table_name filter);
    }
}

impl ToSql for &stmt::DropColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let column_name = Ident(&self.name);
        let action = match f.serializer.flavor {
            Flavor::Mysql => " DROP ",
            Flavor::Sqlite => " DROP COLUMN ",
        };

        fmt!(f, "ALTER TABLE " table_name action column_name);
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let index_name = Ident(&self.name);

        match f.serializer.flavor {
            Flavor::Mysql => fmt!(f, "DROP INDEX " index_name " ON " Ident(&self.on)),
            Flavor::Sqlite => fmt!(f, "DROP INDEX IF EXISTS " index_name),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.into);

        if self.columns.is_empty() {
            match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, "INSERT INTO " table_name " () VALUES ()"),
                Flavor::Sqlite => fmt!(f, "INSERT INTO " table_name " DEFAULT VALUES"),
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table_name " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::ListColumns {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Sqlite => fmt!(f, "PRAGMA table_info(" Ident(&self.table) ")"),
            Flavor::Mysql => {
                let table = Value::from(&self.table);
                let table = &table;
                fmt!(
                    f,
                    "SELECT COLUMN_NAME FROM information_schema.COLUMNS WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = "
                    table
                    " ORDER BY ORDINAL_POSITION"
                );
            }
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.from);
        let filter = &self.filter;
        let limit = self.limit.map(|limit| (" LIMIT ", limit));

        fmt!(f, "SELECT * FROM " table_name filter limit);
    }
}

impl<A: ToSql, B: ToSql> ToSql for (A, B) {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.0 self.1);
    }
}
