//! Configuration issues reported by [`FileConfig::validate`].
//!
//! [`FileConfig::validate`]: super::FileConfig::validate

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field that must hold text is empty or whitespace.
    EmptyField { field: String },
    /// No API key is configured and the named variable is unset.
    MissingApiKey { env_var: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn empty_field(field: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptyField {
                field: field.to_string(),
            },
            message: format!("{} is empty", field),
        }
    }
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
