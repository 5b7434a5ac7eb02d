use crate::{driver, Config, Db, Error, Result};

use indexmap::IndexMap;
use sgorm_core::Driver;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Hands out one shared [`Db`] per configuration name.
///
/// Cloning a registry is cheap; clones share the open connections. The first
/// request for a name opens the connection while holding the registry lock,
/// so concurrent first requests never open a second one.
#[derive(Debug, Clone)]
pub struct Registry {
    config: Arc<Config>,

    /// Drivers installed explicitly, keyed by configuration name. Checked
    /// before the configuration.
    drivers: IndexMap<String, Arc<dyn Driver>>,

    connections: Arc<Mutex<IndexMap<String, Db>>>,
}

impl Registry {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            drivers: IndexMap::new(),
            connections: Arc::new(Mutex::new(IndexMap::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serves `name` from `driver` instead of resolving it from the
    /// configuration. Only affects this registry and clones made afterwards.
    pub fn register_driver(&mut self, name: impl Into<String>, driver: impl Driver) -> &mut Self {
        self.drivers.insert(name.into(), Arc::new(driver));
        self
    }

    /// Returns the connection for `name`, opening it on first use.
    pub async fn connection(&self, name: &str) -> Result<Db> {
        let mut connections = self.connections.lock().await;

        if let Some(db) = connections.get(name) {
            return Ok(db.clone());
        }

        let driver: Arc<dyn Driver> = match self.drivers.get(name) {
            Some(driver) => driver.clone(),
            None => driver::from_config(&self.config, name)?.into(),
        };

        let db = Db::connect(name, driver.as_ref())
            .await
            .map_err(|err| err.context(Error::connection(name)))?;

        connections.insert(name.to_string(), db.clone());
        Ok(db)
    }

    /// Returns the connection for the configuration's default name.
    pub async fn default_connection(&self) -> Result<Db> {
        self.connection(&self.config.default).await
    }
}
