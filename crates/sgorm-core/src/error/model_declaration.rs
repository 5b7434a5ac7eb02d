use super::Error;

/// Error when a model declares attributes that cannot become columns.
#[derive(Debug)]
pub(super) struct ModelDeclarationError {
    model: Box<str>,
    issues: Vec<String>,
}

impl std::error::Error for ModelDeclarationError {}

impl core::fmt::Display for ModelDeclarationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model `{}`: {}", self.model, self.issues.join("; "))
    }
}

impl Error {
    /// Creates a model declaration error listing every issue found on `model`.
    pub fn model_declaration(model: impl Into<String>, issues: Vec<String>) -> Error {
        Error::from(super::ErrorKind::ModelDeclaration(ModelDeclarationError {
            model: model.into().into(),
            issues,
        }))
    }

    /// Returns `true` if this error is a model declaration error.
    pub fn is_model_declaration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelDeclaration(_))
    }
}
