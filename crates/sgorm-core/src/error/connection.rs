use super::Error;

/// Error when a connection to a configured database cannot be established.
///
/// The driver error that caused the failure is attached as the cause.
#[derive(Debug)]
pub(super) struct ConnectionError {
    name: Box<str>,
}

impl std::error::Error for ConnectionError {}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to connect to database `{}`", self.name)
    }
}

impl Error {
    /// Creates a connection error for the named database configuration.
    pub fn connection(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Connection(ConnectionError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Connection(_))
    }
}
