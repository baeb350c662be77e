//! HTML to visible text reduction.
//!
//! Produces roughly what a reader would see: script/style bodies and
//! comments removed, tags stripped, entities decoded, whitespace collapsed.
//! Malformed markup is never an error; fragments that do not parse as tags
//! pass through as literal text.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup from `html`, collapse whitespace runs to single spaces,
/// and trim. Empty or markup-only input yields `""`.
pub fn reduce_to_visible_text(html: &str) -> String {
    // Non-visible elements go first so their bodies never reach the output.
    let text = SCRIPT_RE.replace_all(html, "");
    let text = STYLE_RE.replace_all(&text, "");
    let text = COMMENT_RE.replace_all(&text, "");

    // Each tag becomes a space so words separated only by markup do not fuse.
    let text = TAG_RE.replace_all(&text, " ");

    let text = decode_entities(&text);

    let text = WS_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Decode the common HTML entities.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}
