use crate::{driver::Dialect, Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration name used when none is given.
pub const DEFAULT_NAME: &str = "DEFAULT";

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "SGORM_CONFIG";

/// Path used when [`CONFIG_ENV`] is not set.
pub const DEFAULT_PATH: &str = "sgorm.toml";

const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Named database configurations.
///
/// ```toml
/// use = "DEFAULT"
///
/// [database.DEFAULT]
/// ENGINE = "mysql"
/// DB = "sgo_demo"
/// HOST = "127.0.0.1"
/// PORT = 3306
/// USER = "root"
/// PWD = "secret"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the configuration used by default.
    #[serde(rename = "use", default = "default_name")]
    pub default: String,

    #[serde(rename = "database", default)]
    pub databases: IndexMap<String, DatabaseConfig>,
}

/// Connection settings for one named database.
///
/// Keys are validated when the configuration is resolved, not when it is
/// parsed, so a file may hold entries for engines that are never used.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `sqlite` or `mysql`. Defaults to `mysql`.
    pub engine: Option<String>,

    /// Database name, or the database file for sqlite.
    pub db: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pwd: Option<String>,
}

/// Validated connection settings, ready for a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOptions {
    Sqlite(SqliteOptions),
    Mysql(MysqlOptions),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteOptions {
    InMemory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MysqlOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default: default_name(),
            databases: IndexMap::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration used by default
    pub fn use_database(mut self, name: impl Into<String>) -> Self {
        self.default = name.into();
        self
    }

    /// Adds or replaces a named database configuration
    pub fn database(mut self, name: impl Into<String>, config: DatabaseConfig) -> Self {
        self.databases.insert(name.into(), config);
        self
    }

    pub fn from_toml(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|err| Error::configuration(err.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|err| {
            Error::configuration(format!("failed to read `{}`: {err}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::from_toml(&src)
    }

    /// Loads the file named by `SGORM_CONFIG`, or `sgorm.toml`.
    pub fn load_from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
        Self::load(path)
    }

    pub fn get(&self, name: &str) -> Result<&DatabaseConfig> {
        self.databases.get(name).ok_or_else(|| {
            Error::configuration(format!("no database configuration named `{name}`"))
        })
    }

    /// Resolves the named configuration into validated connection options.
    pub fn connect_options(&self, name: &str) -> Result<ConnectOptions> {
        self.get(name)?.connect_options(name)
    }
}

impl DatabaseConfig {
    pub fn sqlite(db: impl Into<String>) -> Self {
        Self {
            engine: Some(Dialect::Sqlite.to_string()),
            db: Some(db.into()),
            ..Self::default()
        }
    }

    pub fn mysql(host: impl Into<String>, user: impl Into<String>, db: impl Into<String>) -> Self {
        Self {
            engine: Some(Dialect::Mysql.to_string()),
            db: Some(db.into()),
            host: Some(host.into()),
            user: Some(user.into()),
            ..Self::default()
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.pwd = Some(pwd.into());
        self
    }

    pub fn dialect(&self) -> Result<Dialect> {
        self.engine
            .as_deref()
            .unwrap_or(Dialect::Mysql.as_str())
            .parse()
    }

    /// `name` is only used in error messages.
    pub fn connect_options(&self, name: &str) -> Result<ConnectOptions> {
        let dialect = self.dialect().map_err(|_| {
            Error::configuration(format!(
                "database `{name}` has unsupported ENGINE `{}`; expected `sqlite` or `mysql`",
                self.engine.as_deref().unwrap_or_default()
            ))
        })?;

        let required = |key: &str, value: &Option<String>| {
            value.clone().filter(|v| !v.is_empty()).ok_or_else(|| {
                Error::configuration(format!(
                    "database `{name}` is missing required key `{key}` for engine `{dialect}`"
                ))
            })
        };

        match dialect {
            Dialect::Sqlite => {
                let db = required("DB", &self.db)?;
                Ok(ConnectOptions::Sqlite(if db == ":memory:" {
                    SqliteOptions::InMemory
                } else {
                    SqliteOptions::File(PathBuf::from(db))
                }))
            }
            Dialect::Mysql => Ok(ConnectOptions::Mysql(MysqlOptions {
                host: required("HOST", &self.host)?,
                port: self.port.unwrap_or(DEFAULT_MYSQL_PORT),
                user: required("USER", &self.user)?,
                password: self.pwd.clone(),
                database: required("DB", &self.db)?,
            })),
        }
    }
}

impl ConnectOptions {
    pub fn dialect(&self) -> Dialect {
        match self {
            ConnectOptions::Sqlite(_) => Dialect::Sqlite,
            ConnectOptions::Mysql(_) => Dialect::Mysql,
        }
    }
}
