use super::Error;

/// Error when the database configuration cannot be resolved.
///
/// Raised for an unknown configuration name, an unsupported `ENGINE`, a missing
/// required key, or a configuration file that cannot be read or parsed.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
