//! Main converter service that ties parsing and block conversion together.

use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::html::parse_html;
use crate::registry::{create_block_registry, ConvertContext, ConvertEngine};
use crate::types::Block;

/// Result of converting one HTML document.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
    /// Recoverable parser errors, kept when not running in strict mode.
    pub warnings: Vec<String>,
}

/// Reusable converter holding a configured engine.
///
/// Every call to [`Converter::convert`] gets a fresh [`ConvertContext`], so
/// repeated conversions are independent of each other.
pub struct Converter {
    engine: ConvertEngine,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the standard block registry.
    ///
    /// # Errors
    /// Returns `InvalidNamespace` if the options carry a malformed namespace.
    pub fn new(options: ConvertOptions) -> Result<Self> {
        Self::with_engine(ConvertEngine::new(create_block_registry()), options)
    }

    /// Create a converter with a custom engine.
    ///
    /// # Errors
    /// Returns `InvalidNamespace` if the options carry a malformed namespace.
    pub fn with_engine(engine: ConvertEngine, options: ConvertOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { engine, options })
    }

    /// Convert an HTML string into blocks.
    ///
    /// # Errors
    /// * `EmptyInput` if the input is blank
    /// * `HtmlParse` in strict mode when the parser reported errors
    pub fn convert(&self, html: &str) -> Result<Conversion> {
        let html = html.trim();
        if html.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let outcome = parse_html(html, self.options.parse_mode);
        if self.options.strict {
            if let Some(first) = outcome.errors.first() {
                return Err(ConvertError::HtmlParse {
                    count: outcome.errors.len(),
                    first: first.clone(),
                });
            }
        }

        let mut context = ConvertContext::from_options(&self.options);
        let blocks = self.engine.flatten(&outcome.nodes, &mut context);

        tracing::debug!(
            blocks = context.count(),
            warnings = outcome.errors.len(),
            "Converted HTML document"
        );

        Ok(Conversion {
            blocks,
            warnings: outcome.errors,
        })
    }
}

/// Convert an HTML string into blocks with the given options.
///
/// # Examples
/// ```
/// use html2blocks::{convert_html, ConvertOptions};
///
/// let blocks = convert_html("<div><p>A</p><p>B</p></div>", &ConvertOptions::default()).unwrap();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].block_name, "paragraph");
/// ```
///
/// # Errors
/// See [`Converter::convert`]; also fails on an invalid namespace.
pub fn convert_html(html: &str, options: &ConvertOptions) -> Result<Vec<Block>> {
    let converter = Converter::new(options.clone())?;
    Ok(converter.convert(html)?.blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseMode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_convert_empty_input() {
        let converter = Converter::new(ConvertOptions::default()).unwrap();
        assert!(matches!(
            converter.convert("  \n\t "),
            Err(ConvertError::EmptyInput)
        ));
    }

    #[test]
    fn test_convert_rejects_bad_namespace() {
        let result = Converter::new(ConvertOptions::new().with_namespace("Not Valid"));
        assert!(matches!(result, Err(ConvertError::InvalidNamespace(_))));
    }

    #[test]
    fn test_convert_with_namespace() {
        let options = ConvertOptions::new().with_namespace("core");
        let blocks = convert_html("<p>x</p><table></table>", &options).unwrap();
        let names: Vec<_> = blocks.iter().map(|b| b.block_name.as_str()).collect();
        assert_eq!(names, vec!["core/paragraph", "core/html"]);
    }

    #[test]
    fn test_client_ids_restart_per_conversion() {
        let converter = Converter::new(ConvertOptions::new().with_client_ids(true)).unwrap();
        let first = converter.convert("<p>a</p><p>b</p>").unwrap();
        let second = converter.convert("<p>c</p>").unwrap();

        assert_eq!(first.blocks[1].client_id.as_deref(), Some("block-2"));
        assert_eq!(second.blocks[0].client_id.as_deref(), Some("block-1"));
    }

    #[test]
    fn test_no_client_ids_by_default() {
        let blocks = convert_html("<p>a</p>", &ConvertOptions::default()).unwrap();
        let value = serde_json::to_value(&blocks[0]).unwrap();
        assert!(value.get("clientId").is_none());
    }

    #[test]
    fn test_strict_mode_fails_on_parser_errors() {
        let converter = Converter::new(ConvertOptions::new().with_strict(true)).unwrap();
        let result = converter.convert("<p>ok</p></div>");
        assert!(matches!(result, Err(ConvertError::HtmlParse { .. })));
    }

    #[test]
    fn test_lenient_mode_reports_warnings() {
        let converter = Converter::new(ConvertOptions::default()).unwrap();
        let conversion = converter.convert("<p>ok</p></div>").unwrap();
        assert_eq!(conversion.blocks.len(), 1);
        assert!(!conversion.warnings.is_empty());
    }

    #[test]
    fn test_document_mode_emits_head_block() {
        let options = ConvertOptions::new().with_parse_mode(ParseMode::Document);
        let blocks = convert_html(
            "<html><head><title>T</title></head><body><p>x</p></body></html>",
            &options,
        )
        .unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].block_name, "html");
        assert_eq!(
            blocks[0].attr("content"),
            Some(&json!("<head><title>T</title></head>"))
        );
        assert_eq!(blocks[1].block_name, "paragraph");
    }

    #[test]
    fn test_fragment_mode_has_no_head_block() {
        let blocks = convert_html("<h1>T</h1><p>x</p>", &ConvertOptions::default()).unwrap();
        let names: Vec<_> = blocks.iter().map(|b| b.block_name.as_str()).collect();
        assert_eq!(names, vec!["heading", "paragraph"]);
    }
}
