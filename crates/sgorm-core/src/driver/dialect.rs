use crate::Error;

use std::{fmt, str::FromStr};

/// The database engines sgorm can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Sqlite,
    Mysql,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
        }
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Dialect::Sqlite)
    }

    pub fn is_mysql(self) -> bool {
        matches!(self, Dialect::Mysql)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::Mysql),
            _ => Err(Error::configuration(format!(
                "unsupported ENGINE `{s}`; expected `sqlite` or `mysql`"
            ))),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_engine() {
        assert_eq!("sqlite".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::Mysql);

        let err = "postgresql".parse::<Dialect>().unwrap_err();
        assert!(err.is_configuration());
    }
}
