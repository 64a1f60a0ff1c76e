//! HTML remnant handling
//!
//! Expanded templates leave HTML behind: references, spans, line breaks,
//! layout containers and inline formatting. These passes are stateless; the
//! ones that need to clean nested text (`<sup>`, `<chem>`, ...) live on
//! [`Cleaner`](super::Cleaner).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    pub(super) static ref NOWIKI: Regex = Regex::new(r"<nowiki\s*/>").unwrap();

    static ref REF_NAMED: Regex = Regex::new(r#"<ref\s+name="[^"]+"\s*/>"#).unwrap();
    static ref REF_PAIRED: Regex = Regex::new(r"(?is)<ref\b\s*[^>/]*?>\s*.*?</ref\s*>").unwrap();

    static ref SPAN: Regex = Regex::new(r"(?is)<span\b\s*[^>]*?>(.*?)\s*</span\s*>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    static ref LINE_BREAK: Regex = Regex::new(r"(?is)\s*<br\s*/?>\n*").unwrap();

    static ref DIV_OPEN: Regex = Regex::new(r"(?is)<div\b[^>]*>").unwrap();
    static ref DIV_TAG: Regex = Regex::new(r"(?is)<div\b[^>]*>|</div\s*>").unwrap();
    static ref FLOAT_CLASS: Regex = Regex::new(r#"(?i)\bclass="[^"]*?\bfloatright\b"#).unwrap();
    static ref FLOAT_STYLE: Regex = Regex::new(r#"(?i)\bstyle="[^"]*?\bfloat:"#).unwrap();
    static ref PREVIEW_ONLY: Regex = Regex::new(
        r#"(?is)<sup\b[^>]*?\bclass="[^"<>]*?\bpreviewonly\b[^>]*?>.+?</sup\s*>"#
    ).unwrap();
    static ref ERROR_STRONG: Regex = Regex::new(
        r#"(?is)<strong\b[^>]*?\bclass="[^"]*?\berror\b[^>]*?>.+?</strong\s*>"#
    ).unwrap();

    static ref BLOCK_TAG: Regex = Regex::new(r"(?is)</?(?:div|tr|li|table|dl|ul|ol)\b[^>]*>").unwrap();
    static ref DEFINITION_TAG: Regex = Regex::new(r"(?i)</?d[dt]\s*>").unwrap();
    static ref CELL_TAG: Regex = Regex::new(r"(?is)</?(?:td|th)\b[^>]*>").unwrap();

    static ref ANY_TAG: Regex = Regex::new(r"(?s)<[/!a-zA-Z][^>]*>").unwrap();
    static ref CLOSING_TAG: Regex = Regex::new(r"(?s)</[^>]+>").unwrap();
    static ref NOINCLUDE: Regex = Regex::new(r"(?i)<noinclude\s*/\s*>").unwrap();
}

/// Remove `<ref name="x"/>` and paired `<ref>...</ref>`
pub fn strip_references(text: &str) -> String {
    let text = REF_NAMED.replace_all(text, "");
    REF_PAIRED.replace_all(&text, "").into_owned()
}

/// Replace spans by their content with whitespace collapsed
pub fn unwrap_spans(text: &str) -> String {
    SPAN.replace_all(text, |caps: &Captures| {
        WHITESPACE_RUN.replace_all(&caps[1], " ").into_owned()
    })
    .into_owned()
}

/// `<br>` with its surrounding whitespace becomes one newline
pub fn convert_line_breaks(text: &str) -> String {
    LINE_BREAK.replace_all(text, "\n").into_owned()
}

/// Remove floating boxes, preview-only notes and rendered error messages
pub fn remove_wrappers(text: &str) -> String {
    let text = remove_floating_divs(text);
    let text = PREVIEW_ONLY.replace_all(&text, "");
    ERROR_STRONG.replace_all(&text, "").into_owned()
}

/// Turn layout tags into line or word separators
pub fn convert_block_tags(text: &str) -> String {
    let text = BLOCK_TAG.replace_all(text, "\n");
    let text = DEFINITION_TAG.replace_all(&text, "\n");
    CELL_TAG.replace_all(&text, " ").into_owned()
}

/// Remove every remaining tag, comment and doctype
pub fn strip_tags(text: &str) -> String {
    let text = ANY_TAG.replace_all(text, "");
    CLOSING_TAG.replace_all(&text, "").into_owned()
}

/// Remove only `<noinclude/>`, keeping other HTML
pub fn strip_noinclude(text: &str) -> String {
    NOINCLUDE.replace_all(text, "").into_owned()
}

fn is_floating(open_tag: &str) -> bool {
    FLOAT_CLASS.is_match(open_tag) || FLOAT_STYLE.is_match(open_tag)
}

/// Remove floating `<div>` elements together with all nested divs.
/// A floating div without a matching close tag is left untouched.
fn remove_floating_divs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(open) = DIV_OPEN.find_at(text, search) {
        if !is_floating(open.as_str()) {
            search = open.end();
            continue;
        }
        match matching_div_close(text, open.end()) {
            Some(end) => {
                out.push_str(&text[copied..open.start()]);
                copied = end;
                search = end;
            }
            None => search = open.end(),
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// End offset of the `</div>` closing a div opened just before `from`
fn matching_div_close(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for tag in DIV_TAG.find_iter(&text[from..]) {
        if tag.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(from + tag.end());
            }
        } else {
            depth += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references() {
        assert_eq!(strip_references(r#"a<ref name="x"/>b"#), "ab");
        assert_eq!(strip_references("a<ref>cite\nmore</ref>b"), "ab");
        assert_eq!(strip_references(r#"a<ref group="n">x</ref>b"#), "ab");
    }

    #[test]
    fn test_spans() {
        assert_eq!(unwrap_spans(r#"<span class="x">a  b</span>"#), "a b");
        assert_eq!(unwrap_spans("<span>a\n\nb </span>!"), "a b!");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(convert_line_breaks("a <br/>\n\nb"), "a\nb");
        assert_eq!(convert_line_breaks("a<BR>b"), "a\nb");
    }

    #[test]
    fn test_floating_div_removed_with_nested_divs() {
        let input = r#"a<div class="thumb floatright"><div>x</div><div>y</div></div>b"#;
        assert_eq!(remove_wrappers(input), "ab");
    }

    #[test]
    fn test_float_style() {
        let input = r#"a<div style="float: left">x</div>b"#;
        assert_eq!(remove_wrappers(input), "ab");
    }

    #[test]
    fn test_ordinary_div_kept() {
        let input = r#"<div class="main"><div class="floatright">x</div>y</div>"#;
        assert_eq!(remove_wrappers(input), r#"<div class="main">y</div>"#);
    }

    #[test]
    fn test_unclosed_floating_div_kept() {
        let input = r#"<div class="floatright">x"#;
        assert_eq!(remove_wrappers(input), input);
    }

    #[test]
    fn test_preview_and_error_wrappers() {
        let input = r#"a<sup class="noprint previewonly">x</sup><strong class="error">boom</strong>b"#;
        assert_eq!(remove_wrappers(input), "ab");
    }

    #[test]
    fn test_block_tags() {
        assert_eq!(convert_block_tags("<ul><li>a</li><li>b</li></ul>"), "\n\na\n\nb\n\n");
        assert_eq!(convert_block_tags("<dt>t</dt>"), "\nt\n");
        assert_eq!(convert_block_tags("<td>a</td><th>b</th>"), " a  b ");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>a</b><!-- c -->b<!DOCTYPE html>"), "ab");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
        assert_eq!(strip_tags("a</ 3>b"), "ab");
    }

    #[test]
    fn test_strip_noinclude_only() {
        assert_eq!(strip_noinclude("<b>a</b><noinclude/>"), "<b>a</b>");
    }
}
