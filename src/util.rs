//! Shared utility functions

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("tag pattern is valid"))
}

fn whitespace_pattern() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Turn a clue fragment from the service into plain display text.
///
/// The service returns small HTML fragments (`<i>Hamlet</i>`, `&amp;`,
/// escaped quotes). Tags are dropped and the common entities decoded. Runs
/// of whitespace are collapsed. A bare `<` or `>` in the text is kept.
pub fn clean_clue_text(raw: &str) -> String {
    let without_tags = tag_pattern().replace_all(raw, "");
    // &amp; goes last so "&amp;lt;" decodes once, to "&lt;"
    let decoded = without_tags
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("&amp;", "&");
    whitespace_pattern()
        .replace_all(decoded.trim(), " ")
        .into_owned()
}

/// Truncate to at most `max_width` terminal columns, adding an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
