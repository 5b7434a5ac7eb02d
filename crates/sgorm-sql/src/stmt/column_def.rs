use sgorm_core::schema::{DefaultValue, Field, FieldTy, IndexClause};

/// A column as it appears in `CREATE TABLE` or `ALTER TABLE ... ADD`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    pub ty: FieldTy,

    pub default: Option<DefaultValue>,

    /// Inline constraint. Plain indexes are never inline; they become a
    /// separate `CREATE INDEX`.
    pub constraint: Option<IndexClause>,

    pub nullable: bool,
}

impl ColumnDef {
    pub fn from_field(name: &str, field: &Field) -> ColumnDef {
        let constraint = match field.index_clause() {
            Some(IndexClause::Index) | None => None,
            clause => clause,
        };

        ColumnDef {
            name: name.to_string(),
            ty: field.ty.clone(),
            default: field.default_value(),
            constraint,
            nullable: field.nullable,
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        matches!(
            self.ty,
            FieldTy::Integer {
                auto_increment: true
            }
        )
    }

    /// An auto-increment primary key renders as a single dialect-specific
    /// clause.
    pub fn is_auto_increment_primary_key(&self) -> bool {
        self.is_auto_increment() && self.constraint == Some(IndexClause::PrimaryKey)
    }
}
