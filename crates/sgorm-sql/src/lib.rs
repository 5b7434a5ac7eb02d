pub mod migration;
pub use migration::*;

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
