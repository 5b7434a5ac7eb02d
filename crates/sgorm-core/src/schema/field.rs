use crate::stmt::Value;

use std::fmt;

/// A typed column declaration.
///
/// Fields are built once through the constructor for their kind and the
/// chained flag setters, then handed to a [`Model`](super::Model) which owns
/// them. The rendering queries (`sql_type`, `sql_default`, `sql_index`,
/// `sql_null`) return fragments with a leading space, or an empty string, so
/// they concatenate directly into a column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Human readable label, never used in SQL.
    pub verbose_name: String,

    /// Kind of the field and its kind-specific attributes.
    pub ty: FieldTy,

    /// Declared default value. Only rendered when it fits the kind.
    pub default: Option<Value>,

    pub indexed: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTy {
    /// Bounded length character data.
    Char { max_length: u32 },

    Text,

    Integer { auto_increment: bool },

    Boolean,

    Date,

    /// Timestamp, optionally maintained by the database.
    DateTime { auto: Option<AutoNow> },

    Decimal { precision: u32, scale: u32 },
}

/// Which writes refresh a database-maintained timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoNow {
    /// Set when the row is inserted (`auto_now_add`).
    Insert,

    /// Set when the row is inserted and on every update (`auto_now`).
    Update,
}

/// The single index clause a field renders, by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexClause {
    PrimaryKey,
    Unique,
    Index,
}

/// A column default, as rendered in a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Int(i64),
    Bool(bool),
    /// Quoted string literal.
    Str(String),
    /// Unquoted numeric literal.
    Numeric(String),
    CurrentTimestamp,
    CurrentTimestampOnUpdate,
}

impl Field {
    fn new(verbose_name: impl Into<String>, ty: FieldTy) -> Self {
        Self {
            verbose_name: verbose_name.into(),
            ty,
            default: None,
            indexed: false,
            primary_key: false,
            unique: false,
            nullable: false,
        }
    }

    /// `VARCHAR(max_length)`
    pub fn char(verbose_name: impl Into<String>, max_length: u32) -> Self {
        Self::new(verbose_name, FieldTy::Char { max_length })
    }

    /// `TEXT`
    pub fn text(verbose_name: impl Into<String>) -> Self {
        Self::new(verbose_name, FieldTy::Text)
    }

    /// `INT`
    pub fn integer(verbose_name: impl Into<String>) -> Self {
        Self::new(
            verbose_name,
            FieldTy::Integer {
                auto_increment: false,
            },
        )
    }

    /// `BOOLEAN`
    pub fn boolean(verbose_name: impl Into<String>) -> Self {
        Self::new(verbose_name, FieldTy::Boolean)
    }

    /// `DATE`
    pub fn date(verbose_name: impl Into<String>) -> Self {
        Self::new(verbose_name, FieldTy::Date)
    }

    /// `DATETIME`
    pub fn datetime(verbose_name: impl Into<String>) -> Self {
        Self::new(verbose_name, FieldTy::DateTime { auto: None })
    }

    /// `DECIMAL(precision,scale)`
    pub fn decimal(verbose_name: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self::new(verbose_name, FieldTy::Decimal { precision, scale })
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks an integer field as auto-incrementing. No effect on other kinds.
    pub fn auto_increment(mut self) -> Self {
        if let FieldTy::Integer { auto_increment } = &mut self.ty {
            *auto_increment = true;
        }
        self
    }

    /// Sets a timestamp on insert. Replaces `auto_now`. No effect on other kinds.
    pub fn auto_now_add(mut self) -> Self {
        if let FieldTy::DateTime { auto } = &mut self.ty {
            *auto = Some(AutoNow::Insert);
        }
        self
    }

    /// Refreshes a timestamp on every update. Replaces `auto_now_add`. No
    /// effect on other kinds.
    pub fn auto_now(mut self) -> Self {
        if let FieldTy::DateTime { auto } = &mut self.ty {
            *auto = Some(AutoNow::Update);
        }
        self
    }

    pub fn is_auto_increment(&self) -> bool {
        matches!(
            self.ty,
            FieldTy::Integer {
                auto_increment: true
            }
        )
    }

    /// Index clause by precedence: primary key, then unique, then indexed.
    pub fn index_clause(&self) -> Option<IndexClause> {
        if self.primary_key {
            Some(IndexClause::PrimaryKey)
        } else if self.unique {
            Some(IndexClause::Unique)
        } else if self.indexed {
            Some(IndexClause::Index)
        } else {
            None
        }
    }

    /// The default the column renders, or `None` when no default is declared
    /// or the declared one does not fit the kind.
    pub fn default_value(&self) -> Option<DefaultValue> {
        match (&self.ty, &self.default) {
            (FieldTy::DateTime { auto: Some(AutoNow::Insert) }, _) => {
                Some(DefaultValue::CurrentTimestamp)
            }
            (FieldTy::DateTime { auto: Some(AutoNow::Update) }, _) => {
                Some(DefaultValue::CurrentTimestampOnUpdate)
            }
            (FieldTy::Integer { .. }, Some(Value::I64(v))) => Some(DefaultValue::Int(*v)),
            (FieldTy::Boolean, Some(Value::Bool(v))) => Some(DefaultValue::Bool(*v)),
            (FieldTy::Date, Some(Value::String(v))) => Some(DefaultValue::Str(v.clone())),
            (FieldTy::Decimal { .. }, Some(Value::I64(v))) => {
                Some(DefaultValue::Numeric(v.to_string()))
            }
            (FieldTy::Decimal { .. }, Some(Value::F64(v))) if v.is_finite() => {
                Some(DefaultValue::Numeric(v.to_string()))
            }
            (FieldTy::Decimal { .. }, Some(Value::String(v))) if is_decimal_literal(v) => {
                Some(DefaultValue::Numeric(v.clone()))
            }
            _ => None,
        }
    }

    pub fn sql_type(&self) -> String {
        format!(" {}", self.ty)
    }

    pub fn sql_default(&self) -> String {
        self.default_value()
            .map(|default| format!(" {default}"))
            .unwrap_or_default()
    }

    pub fn sql_index(&self) -> &'static str {
        match self.index_clause() {
            Some(IndexClause::PrimaryKey) => " PRIMARY KEY",
            Some(IndexClause::Unique) => " UNIQUE",
            Some(IndexClause::Index) => " INDEX",
            None => "",
        }
    }

    pub fn sql_null(&self) -> &'static str {
        if self.nullable {
            " NULL"
        } else {
            " NOT NULL"
        }
    }
}

impl fmt::Display for FieldTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTy::Char { max_length } => write!(f, "VARCHAR({max_length})"),
            FieldTy::Text => f.write_str("TEXT"),
            FieldTy::Integer { .. } => f.write_str("INT"),
            FieldTy::Boolean => f.write_str("BOOLEAN"),
            FieldTy::Date => f.write_str("DATE"),
            FieldTy::DateTime { .. } => f.write_str("DATETIME"),
            FieldTy::Decimal { precision, scale } => write!(f, "DECIMAL({precision},{scale})"),
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Int(v) => write!(f, "DEFAULT {v}"),
            DefaultValue::Bool(true) => f.write_str("DEFAULT TRUE"),
            DefaultValue::Bool(false) => f.write_str("DEFAULT FALSE"),
            DefaultValue::Str(v) => write!(f, "DEFAULT '{}'", v.replace('\'', "''")),
            DefaultValue::Numeric(v) => write!(f, "DEFAULT {v}"),
            DefaultValue::CurrentTimestamp => f.write_str("DEFAULT CURRENT_TIMESTAMP"),
            DefaultValue::CurrentTimestampOnUpdate => {
                f.write_str("DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP")
            }
        }
    }
}

/// `[-+]digits[.digits]`
pub(crate) fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.map_or(true, |frac| {
            !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit())
        })
}
