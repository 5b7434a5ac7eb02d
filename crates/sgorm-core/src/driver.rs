mod dialect;
pub use dialect::Dialect;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect spoken by connections from this driver.
    fn dialect(&self) -> Dialect;

    /// Connection URL, without credentials. Used for logging.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection. A single attempt; failures are not retried.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn dialect(&self) -> Dialect;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
