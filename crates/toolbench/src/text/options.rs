//! Word counting configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Controls which formatting is stripped before counting.
///
/// Missing or null fields deserialize to their defaults, so a caller only
/// needs to send the flags it wants to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordCountOptions {
    /// Strip HTML tags and decode entities (default: true).
    #[serde(deserialize_with = "null_as_true")]
    pub strip_html: bool,
    /// Strip Markdown formatting (default: true).
    #[serde(deserialize_with = "null_as_true")]
    pub strip_markdown: bool,
    /// Count words inside code blocks (default: true).
    #[serde(deserialize_with = "null_as_true")]
    pub count_code_blocks: bool,
    /// Count image alt text (default: true).
    #[serde(deserialize_with = "null_as_true")]
    pub count_image_alt: bool,
    /// Count link URLs alongside link text (default: false).
    #[serde(deserialize_with = "null_as_false")]
    pub count_link_urls: bool,
    /// Count media elements as the words "media element" (default: false).
    #[serde(deserialize_with = "null_as_false")]
    pub count_media_elements: bool,
}

impl Default for WordCountOptions {
    fn default() -> Self {
        Self {
            strip_html: true,
            strip_markdown: true,
            count_code_blocks: true,
            count_image_alt: true,
            count_link_urls: false,
            count_media_elements: false,
        }
    }
}

impl WordCountOptions {
    /// Options with every stripping stage disabled: text is counted as-is.
    pub fn raw() -> Self {
        Self {
            strip_html: false,
            strip_markdown: false,
            ..Self::default()
        }
    }

    /// Set whether HTML tags and entities are stripped.
    pub fn with_strip_html(mut self, enabled: bool) -> Self {
        self.strip_html = enabled;
        self
    }

    /// Set whether Markdown formatting is stripped.
    pub fn with_strip_markdown(mut self, enabled: bool) -> Self {
        self.strip_markdown = enabled;
        self
    }

    /// Set whether words inside code blocks are counted.
    pub fn with_code_blocks(mut self, enabled: bool) -> Self {
        self.count_code_blocks = enabled;
        self
    }

    /// Set whether image alt text is counted.
    pub fn with_image_alt(mut self, enabled: bool) -> Self {
        self.count_image_alt = enabled;
        self
    }

    /// Set whether link URLs are counted.
    pub fn with_link_urls(mut self, enabled: bool) -> Self {
        self.count_link_urls = enabled;
        self
    }

    /// Set whether media elements are counted.
    pub fn with_media_elements(mut self, enabled: bool) -> Self {
        self.count_media_elements = enabled;
        self
    }
}

fn null_as_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let opts = WordCountOptions::default();
        assert!(opts.strip_html);
        assert!(opts.strip_markdown);
        assert!(opts.count_code_blocks);
        assert!(opts.count_image_alt);
        assert!(!opts.count_link_urls);
        assert!(!opts.count_media_elements);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: WordCountOptions =
            serde_json::from_str(r#"{"countLinkUrls": true, "stripHtml": false}"#).unwrap();
        assert!(opts.count_link_urls);
        assert!(!opts.strip_html);
        assert!(opts.strip_markdown);
        assert!(opts.count_image_alt);
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let opts: WordCountOptions = serde_json::from_str(
            r#"{"stripHtml": null, "countLinkUrls": null, "countCodeBlocks": false}"#,
        )
        .unwrap();
        assert!(opts.strip_html);
        assert!(!opts.count_link_urls);
        assert!(!opts.count_code_blocks);
        assert_eq!(opts.with_code_blocks(true), WordCountOptions::default());
    }

    #[test]
    fn test_non_boolean_is_rejected() {
        let result: Result<WordCountOptions, _> = serde_json::from_str(r#"{"stripHtml": "yes"}"#);
        assert!(result.is_err());
    }
}
