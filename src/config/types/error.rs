//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),

    #[error("config has already been initialized")]
    AlreadyInitialized,
}

impl ConfigError {
    /// Validation errors, if this is a validation failure.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A single violated configuration invariant.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Config field path (e.g., "socials[4].href")
    pub field: FieldPath,
    /// What is wrong with the value
    pub reason: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ValidationError {
    pub fn new(field: FieldPath, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.reason)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Validation errors collected across all sections, in discovery order.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ValidationError>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, reason: impl Into<String>) {
        self.errors.push(ValidationError::new(field, reason));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        reason: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ValidationError::new(field, reason).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First error reported for `field`, if any.
    pub fn find(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field.as_str() == field)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("blog.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("blog.toml"));
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(FieldPath::new("site.title"), "must not be empty");
        diag.error_with_hint(
            FieldPath::new("site.website"),
            "invalid URL",
            "use format like https://example.com",
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, "site.title");
        assert!(diag.find("site.website").unwrap().hint.is_some());
        assert!(diag.find("site.profile").is_none());

        let display = format!("{diag}");
        assert!(display.contains("must not be empty"));
        assert!(display.contains("invalid URL"));

        let err = diag.into_result().unwrap_err();
        assert!(err.has_errors());
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
