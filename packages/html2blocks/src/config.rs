//! Configuration constants, conversion options and validation.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

use crate::error::{ConvertError, Result};

/// Prefix for generated client identifiers (`block-1`, `block-2`, ...).
pub const CLIENT_ID_PREFIX: &str = "block";

/// Parse mode used when none is given.
pub const DEFAULT_PARSE_MODE: ParseMode = ParseMode::Auto;

/// Block namespace pattern: lowercase identifier, may contain digits and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid regex"));

/// How the input string is handed to the HTML parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ParseMode {
    /// Document when the input starts with a doctype or `<html>`, fragment otherwise.
    #[default]
    Auto,
    /// Full document: the `html` root, `head` and `body` are walked as parsed.
    Document,
    /// Fragment: top-level nodes are returned without the synthesized wrappers.
    Fragment,
}

/// Options for a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Namespace prepended to block names (`core` gives `core/paragraph`).
    pub namespace: Option<String>,
    /// How the input is parsed.
    pub parse_mode: ParseMode,
    /// Attach a `clientId` to every block.
    pub client_ids: bool,
    /// Fail when the parser reports recoverable errors.
    pub strict: bool,
}

impl ConvertOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the parse mode.
    #[must_use]
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Enable or disable client identifiers.
    #[must_use]
    pub fn with_client_ids(mut self, enabled: bool) -> Self {
        self.client_ids = enabled;
        self
    }

    /// Enable or disable strict parsing.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate the options.
    ///
    /// # Errors
    /// Returns `InvalidNamespace` if a namespace is set and malformed.
    pub fn validate(&self) -> Result<()> {
        match &self.namespace {
            Some(namespace) => validate_namespace(namespace),
            None => Ok(()),
        }
    }
}

/// Validate a block namespace.
///
/// # Examples
/// ```
/// use html2blocks::config::validate_namespace;
///
/// assert!(validate_namespace("core").is_ok());
/// assert!(validate_namespace("my-plugin2").is_ok());
/// assert!(validate_namespace("Core").is_err());
/// assert!(validate_namespace("core/html").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if NAMESPACE_PATTERN.is_match(namespace) {
        Ok(())
    } else {
        Err(ConvertError::InvalidNamespace(namespace.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_namespace_valid() {
        assert!(validate_namespace("core").is_ok());
        assert!(validate_namespace("acme-blocks").is_ok());
    }

    #[test]
    fn test_default_parse_mode() {
        assert_eq!(DEFAULT_PARSE_MODE, ParseMode::Auto);
        assert_eq!(ConvertOptions::new().parse_mode, DEFAULT_PARSE_MODE);
    }

    #[test]
    fn test_validate_namespace_invalid() {
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("1core").is_err());
        assert!(validate_namespace("core blocks").is_err());
        assert!(validate_namespace("core/").is_err());
    }

    #[test]
    fn test_options_default() {
        let options = ConvertOptions::new();
        assert!(options.namespace.is_none());
        assert_eq!(options.parse_mode, ParseMode::Auto);
        assert!(!options.client_ids);
        assert!(!options.strict);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_builder() {
        let options = ConvertOptions::new()
            .with_namespace("core")
            .with_parse_mode(ParseMode::Document)
            .with_client_ids(true)
            .with_strict(true);
        assert_eq!(options.namespace.as_deref(), Some("core"));
        assert_eq!(options.parse_mode, ParseMode::Document);
        assert!(options.client_ids);
        assert!(options.strict);
    }

    #[test]
    fn test_options_validate_rejects_bad_namespace() {
        let options = ConvertOptions::new().with_namespace("Bad NS");
        assert!(matches!(
            options.validate(),
            Err(ConvertError::InvalidNamespace(ns)) if ns == "Bad NS"
        ));
    }
}
