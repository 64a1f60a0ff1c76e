//! Wiki markup to plain text
//!
//! [`Cleaner::clean`] turns a template-expanded wiki fragment into plain text.
//! Passes run in a fixed order, since later passes depend on earlier ones
//! (tables go before tags, tags before links, links before emphasis):
//!
//! 1. `<nowiki/>` placeholders and tables
//! 2. references, spans, line breaks, floating boxes, layout tags
//! 3. `<sup>`, `<sub>`, `<chem>`, `<math>` and `<syntaxhighlight>` content
//! 4. remaining tags, ellipses, superscript URLs and edit links
//! 5. wiki links, then external links
//! 6. bold/italic markers
//! 7. entities, invisible characters, whitespace, NFC
//!
//! ## Example
//!
//! ```rust
//! use wikiclean::{clean_value, CleanOptions, Cleaner, NamespaceConfig};
//!
//! assert_eq!(clean_value("[[dog|Dogs]] are ''loyal''"), "Dogs are loyal");
//!
//! let german = NamespaceConfig::new(["Datei"], ["Kategorie"]);
//! let cleaner = Cleaner::new(german);
//! let text = cleaner.clean("Hund [[Kategorie:Tiere]]", CleanOptions::default());
//! assert_eq!(text, "Hund");
//! ```

mod html;
mod links;
mod tables;

pub use links::{LinkAction, LinkPatterns};

use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::core::emphasis::strip_emphasis;
use crate::core::math::render_math_with_sink;
use crate::core::scripts::{to_chem, to_subscript, to_superscript};
use crate::data::namespaces::NamespaceConfig;
use crate::utils::diagnostics::{DiagnosticSink, LogSink};

lazy_static! {
    static ref EMPTY_SUP: Regex = Regex::new(r"(?is)<sup\b[^>]*>\s*</sup\s*>").unwrap();
    static ref SUP: Regex = Regex::new(r"(?is)<sup\b[^>]*>(.*?)</sup\s*>").unwrap();
    static ref EMPTY_SUB: Regex = Regex::new(r"(?is)<sub\b[^>]*>\s*</sub\s*>").unwrap();
    static ref SUB: Regex = Regex::new(r"(?is)<sub\b[^>]*>(.*?)</sub\s*>").unwrap();
    static ref CHEM: Regex = Regex::new(r"(?is)<chem\b[^>]*>(.*?)</chem\s*>").unwrap();
    static ref MATH: Regex = Regex::new(r"(?is)<math\b[^>]*>(.*?)</math\s*>").unwrap();
    static ref SYNTAX_HIGHLIGHT: Regex =
        Regex::new(r"(?is)<syntaxhighlight\b[^>]*>(.*?)</syntaxhighlight\s*>").unwrap();

    static ref BRACKETED_ELLIPSIS: Regex = Regex::new(r"(?s)\[\s*\.\.\.\s*\]").unwrap();
    static ref SUPERSCRIPT_URL: Regex = Regex::new(r"\^\(\[?(https?:)?//[^\]()]+\]?\)").unwrap();
    static ref EDIT_LINK: Regex = Regex::new(r"\[//[^\]\s]+\s+edit\s*\]").unwrap();

    static ref INVISIBLE: Regex =
        Regex::new("[\u{200e}\u{200f}\u{200b}\u{200d}\u{200c}\u{feff}]").unwrap();
    static ref HORIZONTAL_SPACE: Regex = Regex::new("[ \t\r\u{2002}]+").unwrap();
    static ref LINE_END: Regex = Regex::new(r" *\n+").unwrap();
    static ref SPACED_ELLIPSIS: Regex = Regex::new(r"\[\s*…\s*\]").unwrap();

    static ref DEFAULT_CLEANER: Cleaner = Cleaner::default();
}

/// Options for one [`Cleaner::clean`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep leading and trailing whitespace
    /// Default: false
    pub no_strip: bool,

    /// Keep HTML tags that no earlier pass consumed (`<noinclude/>` is
    /// still removed)
    /// Default: false
    pub no_html_strip: bool,
}

impl CleanOptions {
    /// Keep surrounding whitespace, as used for link labels
    pub fn no_strip() -> Self {
        Self {
            no_strip: true,
            ..Self::default()
        }
    }

    /// Keep residual HTML, as used for template arguments
    pub fn raw_html() -> Self {
        Self {
            no_html_strip: true,
            ..Self::default()
        }
    }
}

/// Markup cleaner bound to one wiki's namespace names
///
/// The namespace-dependent link patterns are compiled on first use and
/// cached for the lifetime of the cleaner. A `Cleaner` can be shared across
/// threads.
#[derive(Debug, Default)]
pub struct Cleaner {
    namespaces: NamespaceConfig,
    patterns: OnceCell<LinkPatterns>,
}

impl Cleaner {
    pub fn new(namespaces: NamespaceConfig) -> Self {
        Self {
            namespaces,
            patterns: OnceCell::new(),
        }
    }

    pub fn namespaces(&self) -> &NamespaceConfig {
        &self.namespaces
    }

    fn patterns(&self) -> &LinkPatterns {
        self.patterns
            .get_or_init(|| LinkPatterns::compile(&self.namespaces))
    }

    /// Clean `text`, logging formula problems
    pub fn clean(&self, text: &str, options: CleanOptions) -> String {
        self.clean_with_sink(text, options, &LogSink)
    }

    /// Clean `text`, reporting formula problems to `sink`
    pub fn clean_with_sink(
        &self,
        text: &str,
        options: CleanOptions,
        sink: &dyn DiagnosticSink,
    ) -> String {
        let text = html::NOWIKI.replace_all(text, "");
        let text = tables::remove_tables(&text);

        let text = html::strip_references(&text);
        let text = html::unwrap_spans(&text);
        let text = html::convert_line_breaks(&text);
        let text = html::remove_wrappers(&text);
        let text = html::convert_block_tags(&text);

        let text = self.render_inline_tags(&text, sink);
        let text = if options.no_html_strip {
            html::strip_noinclude(&text)
        } else {
            html::strip_tags(&text)
        };

        let text = BRACKETED_ELLIPSIS.replace_all(&text, "…");
        let text = SUPERSCRIPT_URL.replace_all(&text, "");
        let text = EDIT_LINK.replace_all(&text, "");

        let text = self.resolve_links(&text, options, sink);
        let text = links::resolve_external_links(&text);

        let text = strip_emphasis(&text);
        normalize(&text, options)
    }

    /// Convert tags whose content is rendered rather than stripped
    fn render_inline_tags(&self, text: &str, sink: &dyn DiagnosticSink) -> String {
        let nested = |inner: &str| self.clean_with_sink(inner, CleanOptions::default(), sink);

        let text = EMPTY_SUP.replace_all(text, "");
        let text = SUP.replace_all(&text, |caps: &Captures| to_superscript(&nested(&caps[1])));
        let text = EMPTY_SUB.replace_all(&text, "");
        let text = SUB.replace_all(&text, |caps: &Captures| to_subscript(&nested(&caps[1])));
        let text = CHEM.replace_all(&text, |caps: &Captures| to_chem(&nested(&caps[1])));
        let text = MATH.replace_all(&text, |caps: &Captures| {
            render_math_with_sink(&caps[1], sink)
        });
        SYNTAX_HIGHLIGHT
            .replace_all(&text, |caps: &Captures| format!("\n{}\n", caps[1].trim()))
            .into_owned()
    }

    fn resolve_links(
        &self,
        text: &str,
        options: CleanOptions,
        sink: &dyn DiagnosticSink,
    ) -> String {
        if !text.contains("[[") {
            return text.to_string();
        }
        let patterns = self.patterns();
        let label_options = CleanOptions {
            no_strip: true,
            ..options
        };
        let clean_label = |label: &str| self.clean_with_sink(label, label_options, sink);
        links::resolve_links(text, &|content: &str| {
            links::classify_link(content, patterns, &clean_label)
        })
    }
}

/// Entities, invisible characters, whitespace, trimming and NFC
fn normalize(text: &str, options: CleanOptions) -> String {
    let text = html_escape::decode_html_entities(text);
    let text = text.replace('\u{a0}', " ");
    let text = INVISIBLE.replace_all(&text, "");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = LINE_END.replace_all(&text, "\n");
    let text = SPACED_ELLIPSIS.replace_all(&text, "[…]");
    let text: &str = if options.no_strip { &text } else { text.trim() };
    text.nfc().collect()
}

/// The shared cleaner for English namespace names
pub(crate) fn default_cleaner() -> &'static Cleaner {
    &DEFAULT_CLEANER
}

/// Clean `text` with English namespace names and default options
pub fn clean_value(text: &str) -> String {
    DEFAULT_CLEANER.clean(text, CleanOptions::default())
}

/// Clean `text` with English namespace names
pub fn clean_value_with_options(text: &str, options: CleanOptions) -> String {
    DEFAULT_CLEANER.clean(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::diagnostics::CollectingSink;

    fn clean(text: &str) -> String {
        clean_value(text)
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(clean("hello world"), "hello world");
    }

    #[test]
    fn test_links() {
        assert_eq!(clean("[[foo|bar]]"), "bar");
        assert_eq!(clean("[[Category:Foo]]"), "");
        assert_eq!(clean("a [[b]] c"), "a b c");
        assert_eq!(clean("[[a|''b'']]"), "b");
    }

    #[test]
    fn test_references_removed() {
        assert_eq!(clean("<ref>x</ref>remain"), "remain");
        assert_eq!(clean(r#"word<ref name="n"/>."#), "word.");
    }

    #[test]
    fn test_tables_removed() {
        assert_eq!(clean("before\n{|\n|a\n{|\n|b\n|}\n|}\nafter"), "before\nafter");
    }

    #[test]
    fn test_superscript_and_subscript_tags() {
        assert_eq!(clean("x<sup>2</sup>"), "x²");
        assert_eq!(clean("H<sub>2</sub>O"), "H₂O");
        assert_eq!(clean("x<sup> </sup>y"), "xy");
        assert_eq!(clean("e<sup>[[pi|π]]</sup>"), "e^π");
    }

    #[test]
    fn test_chem_and_math_tags() {
        assert_eq!(clean("<chem>H2SO4</chem>"), "H₂SO₄");
        assert_eq!(clean(r"<math>\frac{1}{2}</math>"), "1/2");
    }

    #[test]
    fn test_syntaxhighlight_is_preformatted() {
        assert_eq!(
            clean("code:<syntaxhighlight lang=\"c\">  x = 1;  </syntaxhighlight>"),
            "code:\nx = 1;"
        );
    }

    #[test]
    fn test_line_breaks_and_lists() {
        assert_eq!(clean("a<br/>b"), "a\nb");
        assert_eq!(clean("<ul><li>one</li><li>two</li></ul>"), "one\ntwo");
    }

    #[test]
    fn test_html_stripping_toggle() {
        assert_eq!(clean("<b>bold</b>"), "bold");
        let kept = clean_value_with_options("<b>bold</b><noinclude/>", CleanOptions::raw_html());
        assert_eq!(kept, "<b>bold</b>");
    }

    #[test]
    fn test_no_strip_keeps_outer_whitespace() {
        assert_eq!(clean_value_with_options(" a ", CleanOptions::no_strip()), " a ");
        assert_eq!(clean(" a "), "a");
    }

    #[test]
    fn test_external_links_and_edit_links() {
        assert_eq!(clean("[https://example.org Example site]"), "Example site");
        assert_eq!(clean("text [//en.wiktionary.org/w/x edit]"), "text");
        assert_eq!(clean("word^([//example.org])"), "word");
        assert_eq!(clean("a [...] b"), "a … b");
    }

    #[test]
    fn test_entities_and_invisible_characters() {
        assert_eq!(clean("a&nbsp;b &amp; c&#x2014;d"), "a b & c—d");
        assert_eq!(clean("a\u{200b}b\u{feff}"), "ab");
        assert_eq!(clean("a \t\u{2002} b"), "a b");
        assert_eq!(clean("a  \n\n\nb"), "a\nb");
        assert_eq!(clean("[ … ]"), "[…]");
    }

    #[test]
    fn test_nfc_normalization() {
        assert_eq!(clean("e\u{301}"), "\u{e9}");
    }

    #[test]
    fn test_idempotent_on_clean_output() {
        for input in [
            "[[foo|bar]] baz",
            "''a'' '''b'''",
            "x<sup>2</sup> &amp; y",
            "<ul><li>one</li><li>two</li></ul>",
        ] {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_entity_encoded_tags_survive_one_pass_only() {
        // entities are decoded after tag stripping
        let once = clean("&lt;b&gt;x");
        assert_eq!(once, "<b>x");
        assert_eq!(clean(&once), "x");
    }

    #[test]
    fn test_unbalanced_input_terminates() {
        let inputs = [
            "{|".repeat(300),
            "[[".repeat(300) + &"]]".repeat(150),
            "<div class=\"floatright\">".repeat(100),
            "[http://a ".repeat(100),
        ];
        for input in inputs {
            let _ = clean(&input);
        }
    }

    #[test]
    fn test_diagnostics_reach_sink() {
        let sink = CollectingSink::new();
        let cleaner = Cleaner::default();
        let out = cleaner.clean_with_sink(r"<math>\frac</math>", CleanOptions::default(), &sink);
        assert_eq!(out, r"\frac");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_cleaner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cleaner>();
    }

    #[test]
    fn test_patterns_compiled_once() {
        let cleaner = Cleaner::default();
        assert!(cleaner.patterns.get().is_none());
        cleaner.clean("[[a]]", CleanOptions::default());
        let first = cleaner.patterns() as *const LinkPatterns;
        cleaner.clean("[[b]]", CleanOptions::default());
        assert_eq!(first, cleaner.patterns() as *const LinkPatterns);
    }

    #[test]
    fn test_localized_category_with_custom_cleaner() {
        let cleaner = Cleaner::new(NamespaceConfig::new(["Fichier"], ["Catégorie"]));
        let text = cleaner.clean(
            "chat [[Catégorie:Animaux]] [[Fichier:Chat.jpg|vignette|Un chat]]",
            CleanOptions::default(),
        );
        assert_eq!(text, "chat");
    }
}
