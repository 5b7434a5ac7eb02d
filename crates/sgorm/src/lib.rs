pub mod db;
pub use db::{Db, MigrationReport};

pub mod driver;

mod registry;
pub use registry::Registry;

pub use sgorm_core::{
    config::{self, Config, DatabaseConfig},
    schema::{self, Field, Model},
    stmt::{Filter, Record, Value},
    Dialect, Error, Result,
};
