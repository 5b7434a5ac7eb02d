use crate::Result;

pub use sgorm_core::driver::{
    operation::{self, Operation},
    Connection, Dialect, Driver, Response, Rows,
};

use sgorm_core::config::{ConnectOptions, Config};

/// Resolves the named configuration into one of the built-in drivers.
pub(crate) fn from_config(config: &Config, name: &str) -> Result<Box<dyn Driver>> {
    match config.connect_options(name)? {
        ConnectOptions::Sqlite(options) => sqlite(&options),
        ConnectOptions::Mysql(options) => mysql(&options),
    }
}

#[cfg(feature = "sqlite")]
fn sqlite(options: &sgorm_core::config::SqliteOptions) -> Result<Box<dyn Driver>> {
    Ok(Box::new(sgorm_driver_sqlite::Sqlite::from_options(options)))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_options: &sgorm_core::config::SqliteOptions) -> Result<Box<dyn Driver>> {
    Err(crate::Error::configuration("`sqlite` feature not enabled"))
}

#[cfg(feature = "mysql")]
fn mysql(options: &sgorm_core::config::MysqlOptions) -> Result<Box<dyn Driver>> {
    Ok(Box::new(sgorm_driver_mysql::MySQL::from_options(options)))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_options: &sgorm_core::config::MysqlOptions) -> Result<Box<dyn Driver>> {
    Err(crate::Error::configuration("`mysql` feature not enabled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgorm_core::config::DatabaseConfig;

    #[test]
    #[cfg(all(feature = "sqlite", feature = "mysql"))]
    fn resolves_built_in_drivers() {
        let config = Config::new()
            .database("LOCAL", DatabaseConfig::sqlite(":memory:"))
            .database("DEFAULT", DatabaseConfig::mysql("127.0.0.1", "root", "sgo_demo"));

        let driver = from_config(&config, "LOCAL").unwrap();
        assert_eq!(driver.dialect(), Dialect::Sqlite);
        assert_eq!(driver.url(), "sqlite::memory:");

        let driver = from_config(&config, "DEFAULT").unwrap();
        assert_eq!(driver.dialect(), Dialect::Mysql);
        assert_eq!(driver.url(), "mysql://root@127.0.0.1:3306/sgo_demo");
    }

    #[test]
    fn unknown_name() {
        let err = from_config(&Config::new(), "DEFAULT").unwrap_err();
        assert!(err.is_configuration());
    }
}
