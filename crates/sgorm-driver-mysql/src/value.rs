use mysql_async::{consts::ColumnType, prelude::ToValue, Column, Row};
use sgorm_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this MySQL driver value into the core sgorm value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a MySQL value within a row to an sgorm value.
    ///
    /// Temporal values are returned as their canonical text form; `DECIMAL`
    /// arrives as text already.
    pub fn from_sql(i: usize, row: &mut Row, column: &Column) -> Self {
        use mysql_async::Value as SqlValue;

        let value: Option<SqlValue> = row.take(i);

        let core_value = match value {
            None | Some(SqlValue::NULL) => CoreValue::Null,
            Some(SqlValue::Bytes(bytes)) => match String::from_utf8(bytes) {
                Ok(s) => CoreValue::String(s),
                Err(err) => CoreValue::Bytes(err.into_bytes()),
            },
            Some(SqlValue::Int(v)) => CoreValue::I64(v),
            Some(SqlValue::UInt(v)) => match i64::try_from(v) {
                Ok(v) => CoreValue::I64(v),
                Err(_) => CoreValue::String(v.to_string()),
            },
            Some(SqlValue::Float(v)) => CoreValue::F64(v.into()),
            Some(SqlValue::Double(v)) => CoreValue::F64(v),
            Some(SqlValue::Date(year, month, day, hour, minute, second, _)) => {
                if column.column_type() == ColumnType::MYSQL_TYPE_DATE {
                    CoreValue::String(format!("{year:04}-{month:02}-{day:02}"))
                } else {
                    CoreValue::String(format!(
                        "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                    ))
                }
            }
            Some(SqlValue::Time(negative, days, hours, minutes, seconds, _)) => {
                let sign = if negative { "-" } else { "" };
                let hours = u32::from(hours) + days * 24;
                CoreValue::String(format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"))
            }
        };

        Value(core_value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
        }
    }
}
