use super::{is_valid_identifier, FieldTy, Model, ID};
use crate::{Error, Result};

use std::{collections::HashSet, fmt};

/// A declaration problem found by [`Model::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// A field was declared under the reserved `id` name.
    ReservedField(String),

    /// A name was declared without a field.
    NoneField(String),

    DuplicateField(String),

    /// The column name cannot be emitted as a bare identifier.
    InvalidColumnName(String),

    InvalidTableName(String),

    /// A user field claims the primary key, which `id` already holds.
    ExtraPrimaryKey(String),

    /// The declared default does not fit the field kind and is ignored.
    MismatchedDefault(String),
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::ReservedField(name) => write!(f, "cannot override reserved field `{name}`"),
            LintIssue::NoneField(name) => write!(f, "field `{name}` is declared as None"),
            LintIssue::DuplicateField(name) => {
                write!(f, "field `{name}` is declared more than once")
            }
            LintIssue::InvalidColumnName(name) => write!(f, "`{name}` is not a valid column name"),
            LintIssue::InvalidTableName(name) => write!(f, "`{name}` is not a valid table name"),
            LintIssue::ExtraPrimaryKey(name) => {
                write!(f, "field `{name}` cannot be a primary key, `{ID}` already is")
            }
            LintIssue::MismatchedDefault(name) => {
                write!(f, "default of field `{name}` does not fit its type")
            }
        }
    }
}

impl Model {
    /// Lists every declaration problem, in declaration order.
    ///
    /// Synchronization does not lint; a model with issues is synchronized with
    /// whatever columns its valid declarations produce.
    pub fn lint_issues(&self) -> Vec<LintIssue> {
        let mut issues = vec![];

        if !is_valid_identifier(self.table_name()) {
            issues.push(LintIssue::InvalidTableName(self.table_name().to_string()));
        }

        let mut seen = HashSet::new();

        for declaration in &self.declarations {
            let name = &declaration.name;

            if !seen.insert(name.as_str()) {
                issues.push(LintIssue::DuplicateField(name.clone()));
                continue;
            }

            if name == ID {
                issues.push(LintIssue::ReservedField(name.clone()));
                continue;
            }

            let Some(field) = &declaration.field else {
                issues.push(LintIssue::NoneField(name.clone()));
                continue;
            };

            if !is_valid_identifier(name) {
                issues.push(LintIssue::InvalidColumnName(name.clone()));
            }

            if field.primary_key {
                issues.push(LintIssue::ExtraPrimaryKey(name.clone()));
            }

            let datetime_auto = matches!(field.ty, FieldTy::DateTime { auto: Some(_) });
            if field.default.is_some() && (datetime_auto || field.default_value().is_none()) {
                issues.push(LintIssue::MismatchedDefault(name.clone()));
            }
        }

        issues
    }

    /// Fails with a model declaration error listing every issue.
    pub fn lint(&self) -> Result<()> {
        let issues = self.lint_issues();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::model_declaration(
                self.name(),
                issues.iter().map(ToString::to_string).collect(),
            ))
        }
    }
}
