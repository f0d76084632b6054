//! Format stripping applied before tokenization.
//!
//! Stages always run in the same order: HTML, Markdown (which re-runs HTML
//! stripping for embedded markup), then code-block removal. Every stage is
//! best-effort: constructs that do not match are left as literal text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::options::WordCountOptions;

// =============================================================================
// HTML PATTERNS
// =============================================================================

static HTML_IMG_ALT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]*alt=["']([^"']*)["'][^>]*>"#).unwrap());
static HTML_IMG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]*>").unwrap());
static HTML_LINK_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["']([^"']*)["'][^>]*>(.*?)</a>"#).unwrap()
});
static HTML_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<a[^>]*>(.*?)</a>").unwrap());

/// One alternation branch per tag, since the open and close names must agree.
static HTML_MEDIA: Lazy<Regex> = Lazy::new(|| {
    let branches: Vec<String> = ["video", "audio", "iframe", "canvas", "svg"]
        .iter()
        .map(|tag| format!("<{tag}[^>]*>.*?</{tag}>"))
        .collect();
    Regex::new(&format!("(?i){}", branches.join("|"))).unwrap()
});

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[a-zA-Z0-9]+;").unwrap());

/// Decoded in this order; `&amp;` last among the named ones.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

// =============================================================================
// MARKDOWN PATTERNS
// =============================================================================

static MD_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s+").unwrap());
static MD_STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").unwrap());
static MD_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*|_(.*?)_").unwrap());
static MD_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\([^)]+\)").unwrap());
static MD_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static MD_BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*>\s+").unwrap());
static MD_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\s*[*-]\s*){3,}$").unwrap());

// =============================================================================
// CODE PATTERNS
// =============================================================================

static CODE_FENCED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static CODE_INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]*`").unwrap());
static CODE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<code>.*?</code>").unwrap());
static PRE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<pre>.*?</pre>").unwrap());

/// Run every enabled stage over `text`.
pub fn preprocess(text: &str, options: &WordCountOptions) -> String {
    let mut processed = text.to_string();

    if options.strip_html {
        processed = strip_html(&processed, options);
    }

    if options.strip_markdown {
        processed = strip_markdown(&processed, options);
    }

    if !options.count_code_blocks {
        processed = remove_code_blocks(&processed);
    }

    processed
}

/// Remove HTML markup, keeping the text the options ask to count.
pub fn strip_html(text: &str, options: &WordCountOptions) -> String {
    let text = if options.count_image_alt {
        HTML_IMG_ALT.replace_all(text, " ${1} ")
    } else {
        HTML_IMG.replace_all(text, " ")
    };

    let text = if options.count_link_urls {
        HTML_LINK_HREF.replace_all(&text, "${2} ${1}")
    } else {
        HTML_LINK.replace_all(&text, "${1}")
    };

    let media = if options.count_media_elements {
        " media element "
    } else {
        " "
    };
    let text = HTML_MEDIA.replace_all(&text, media);

    let mut text = HTML_TAG.replace_all(&text, " ").into_owned();

    for (entity, decoded) in ENTITIES {
        text = text.replace(entity, decoded);
    }

    HTML_ENTITY.replace_all(&text, " ").into_owned()
}

/// Remove Markdown syntax, keeping the text the options ask to count.
///
/// Images are matched before links so the `!` prefix does not leak into
/// the output. With alt counting off, images vanish entirely.
pub fn strip_markdown(text: &str, options: &WordCountOptions) -> String {
    let text = MD_HEADING.replace_all(text, "");
    let text = MD_STRONG.replace_all(&text, inner_text);
    let text = MD_EMPHASIS.replace_all(&text, inner_text);

    let text = if options.count_image_alt {
        MD_IMAGE.replace_all(&text, "${1}")
    } else {
        MD_IMAGE.replace_all(&text, "")
    };

    let text = if options.count_link_urls {
        MD_LINK.replace_all(&text, "${1} ${2}")
    } else {
        MD_LINK.replace_all(&text, "${1}")
    };

    let text = MD_BLOCKQUOTE.replace_all(&text, "");
    let text = MD_RULE.replace_all(&text, "").into_owned();

    if options.strip_html {
        strip_html(&text, options)
    } else {
        text
    }
}

/// Remove fenced, inline, and HTML code blocks along with their content.
pub fn remove_code_blocks(text: &str) -> String {
    let text = CODE_FENCED.replace_all(text, "");
    let text = CODE_INLINE.replace_all(&text, "");
    let text = CODE_TAG.replace_all(&text, "");
    PRE_TAG.replace_all(&text, "").into_owned()
}

/// Replacement for paired-marker alternations: whichever branch matched.
fn inner_text(caps: &Captures<'_>) -> String {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
