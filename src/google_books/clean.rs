// Description cleanup.
//
// Google search snippets are HTML fragments (`<b>`, `&#39;`, `<br>`) and
// are cut off mid-sentence with a trailing ellipsis or dash. Cleaning
// turns them into plain text suitable for the cache and the lexicon.

use std::sync::LazyLock;

use regex_lite::Regex;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&hellip;", "\u{2026}"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    // Last, so "&amp;lt;" decodes to "&lt;" rather than "<"
    ("&amp;", "&"),
];

/// Closing characters a complete sentence may legitimately end with.
const CLOSING: &[char] = &['.', '!', '?', '"', '\'', ')', ']', '\u{2019}', '\u{201D}'];

/// Turn an HTML description or snippet into plain, trimmed text.
///
/// A single trailing stray character (anything that isn't alphanumeric or
/// closing punctuation, e.g. `…` or `-`) is dropped.
pub fn clean_description(raw: &str) -> String {
    let without_tags = HTML_TAG.replace_all(raw, " ");

    let mut decoded = without_tags.into_owned();
    for (entity, replacement) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }

    let collapsed = WHITESPACE.replace_all(decoded.trim(), " ").into_owned();
    strip_stray_tail(&collapsed).to_string()
}

fn strip_stray_tail(text: &str) -> &str {
    match text.chars().last() {
        Some(last) if !last.is_alphanumeric() && !CLOSING.contains(&last) => {
            text[..text.len() - last.len_utf8()].trim_end()
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_trailing_ellipsis() {
        assert_eq!(
            clean_description("A family saga spanning three generations\u{2026}"),
            "A family saga spanning three generations"
        );
    }

    #[test]
    fn test_drops_trailing_stray_after_space() {
        assert_eq!(clean_description("The detective returns -"), "The detective returns");
    }

    #[test]
    fn test_keeps_sentence_punctuation() {
        assert_eq!(clean_description("It ends well."), "It ends well.");
        assert_eq!(clean_description("Does it end?"), "Does it end?");
        assert_eq!(clean_description("He said \"no\""), "He said \"no\"");
    }

    #[test]
    fn test_keeps_trailing_alphanumeric() {
        assert_eq!(clean_description("Book 2"), "Book 2");
    }

    #[test]
    fn test_only_one_stray_char_dropped() {
        assert_eq!(clean_description("wait --"), "wait -");
    }

    #[test]
    fn test_strips_html_and_entities() {
        assert_eq!(
            clean_description("<b>Harry</b> &amp; Hermione&#39;s <i>quest</i>"),
            "Harry & Hermione's quest"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            clean_description("  line one<br>\n\n line   two  "),
            "line one line two"
        );
    }

    #[test]
    fn test_empty_and_stray_only() {
        assert_eq!(clean_description(""), "");
        assert_eq!(clean_description("   "), "");
        assert_eq!(clean_description("\u{2026}"), "");
    }
}
