//! Wiki link and external link resolution
//!
//! `[[...]]` links nest (an image caption may hold links) and their labels may
//! contain single-bracket external links, so they are matched with a scanner
//! that tracks both `[[` frames and single-bracket depth. Innermost links are
//! resolved first; a link whose content has no recognized shape stays as
//! literal text.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::constants::{starts_with_url_scheme, NON_INLINE_IMAGE_PARAMS};
use crate::data::namespaces::NamespaceConfig;

lazy_static! {
    /// `[[Target]]`, `[[:Target]]`, `[[Target#section]]`
    static ref PLAIN_LINK: Regex =
        Regex::new(r"(?s)^\s*:?([^\]|#<>:&]+?)\s*(#[^\[\]|<>]*?)?$").unwrap();
    /// `[[ns:Target]]`, optionally followed by a single pipe
    static ref NAMESPACED_LINK: Regex =
        Regex::new(r"(?s)^\s*(([\w\d]+)\s*:)?\s*([^\[\]#|<>]+?)\s*(#[^\[\]|]*?)?\|?$").unwrap();
    static ref PIPED_TARGET: Regex = Regex::new(r"(?s)^\s*[^\[\]|<>]+?\s*$").unwrap();
    static ref ALT_PARAM: Regex = Regex::new(r"(?s)^\s*alt\s*=(.+)$").unwrap();
    static ref EXTERNAL_LINK: Regex =
        Regex::new(r"\[\s*((?:https?:|mailto:)?//[^\[\]]+?)\s*\]").unwrap();
}

/// Interwiki prefixes whose target is shown without the prefix
const STRIPPED_PREFIXES: &[&str] = &["w", "s"];

/// Namespace-dependent patterns, compiled once per [`Cleaner`](super::Cleaner)
#[derive(Debug)]
pub struct LinkPatterns {
    file_prefix: Regex,
    category_link: Regex,
}

impl LinkPatterns {
    pub fn compile(config: &NamespaceConfig) -> Self {
        let files = alternation(config.file_names());
        let categories = alternation(config.category_names());
        log::debug!(
            "compiling link patterns for {} file and {} category names",
            config.file_names().len(),
            config.category_names().len()
        );
        LinkPatterns {
            file_prefix: Regex::new(&format!(r"(?i)^\s*(?:{})\s*:", files))
                .expect("escaped namespace names form a valid pattern"),
            category_link: Regex::new(&format!(r"(?is)^\s*(?:{})\s*:\s*[^\]]+?\s*$", categories))
                .expect("escaped namespace names form a valid pattern"),
        }
    }

    fn is_file(&self, target: &str) -> bool {
        self.file_prefix.is_match(target)
    }
}

fn alternation(names: &[String]) -> String {
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

/// What to do with the content of one `[[...]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Replace the link (brackets included) with this text
    Replace(String),
    /// Drop the link and any whitespace before it
    Drop,
    /// Leave the link as literal text
    Keep,
}

/// Classify link content (the text between `[[` and `]]`).
///
/// `clean` is applied to any text that survives; it receives raw label text
/// and must return it cleaned.
pub fn classify_link(
    content: &str,
    patterns: &LinkPatterns,
    clean: &dyn Fn(&str) -> String,
) -> LinkAction {
    if patterns.category_link.is_match(content) {
        return LinkAction::Drop;
    }

    if let Some(caps) = PLAIN_LINK.captures(content) {
        return LinkAction::Replace(clean(&caps[1]));
    }

    if let Some(caps) = NAMESPACED_LINK.captures(content) {
        if let Some(prefix) = caps.get(1) {
            if patterns.is_file(prefix.as_str()) {
                return LinkAction::Replace(String::new());
            }
        }
        let text = match caps.get(2) {
            Some(ns) if STRIPPED_PREFIXES.contains(&ns.as_str()) => caps[3].to_string(),
            _ => {
                let whole = content.trim_matches(|c| c == ' ' || c == '[' || c == ']');
                let target = whole.split('|').next().unwrap_or(whole);
                target.strip_prefix(':').unwrap_or(target).to_string()
            }
        };
        return LinkAction::Replace(clean(&text));
    }

    classify_piped(content, patterns, clean)
}

/// `[[Target|Label|...]]`, including image links with parameters
fn classify_piped(
    content: &str,
    patterns: &LinkPatterns,
    clean: &dyn Fn(&str) -> String,
) -> LinkAction {
    let segments = split_top_level_pipes(content);
    let (target, params) = match segments.split_first() {
        Some((target, params)) if !params.is_empty() => (*target, params),
        _ => return LinkAction::Keep,
    };
    if !PIPED_TARGET.is_match(target) {
        return LinkAction::Keep;
    }
    if params.iter().any(|p| p.contains("[[") || p.contains("]]")) {
        return LinkAction::Keep;
    }

    if patterns.is_file(target) {
        let inline = !params
            .iter()
            .any(|p| NON_INLINE_IMAGE_PARAMS.contains(&p.trim()));
        let alt = params
            .iter()
            .find_map(|p| ALT_PARAM.captures(p).map(|caps| caps[1].trim().to_string()));
        return match alt {
            Some(alt) if inline && !alt.is_empty() => {
                LinkAction::Replace(format!("[Alt: {}]", clean(&alt)))
            }
            _ => LinkAction::Replace(String::new()),
        };
    }

    match params.iter().rev().map(|p| p.trim()).find(|p| !p.is_empty()) {
        Some(label) => LinkAction::Replace(clean(label)),
        None => LinkAction::Keep,
    }
}

/// Split on `|` outside single-bracket groups
fn split_top_level_pipes(content: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in content.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                segments.push(&content[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&content[start..]);
    segments
}

/// One pass over the text, resolving every complete `[[...]]`, innermost
/// first. Returns the text unchanged when nothing was resolved.
pub fn resolve_links_once(text: &str, resolve: &dyn Fn(&str) -> LinkAction) -> String {
    struct Frame {
        /// Output offset of the opening `[[`
        start: usize,
        /// Unclosed single `[` in the label part of this link
        brackets: usize,
        /// A top-level `|` has been seen
        piped: bool,
    }

    let mut out = String::with_capacity(text.len());
    let mut frames: Vec<Frame> = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("[[") {
            frames.push(Frame {
                start: out.len(),
                brackets: 0,
                piped: false,
            });
            out.push_str("[[");
            rest = &rest[2..];
            continue;
        }

        let closes = rest.starts_with("]]") && frames.last().is_some_and(|f| f.brackets == 0);
        if closes {
            if let Some(frame) = frames.pop() {
                let content = out[frame.start + 2..].to_string();
                match resolve(&content) {
                    LinkAction::Replace(replacement) => {
                        out.truncate(frame.start);
                        out.push_str(&replacement);
                    }
                    LinkAction::Drop => {
                        out.truncate(frame.start);
                        let kept = out.trim_end().len();
                        out.truncate(kept);
                    }
                    LinkAction::Keep => out.push_str("]]"),
                }
            }
            rest = &rest[2..];
            continue;
        }

        if let Some(frame) = frames.last_mut() {
            match c {
                '|' if frame.brackets == 0 => frame.piped = true,
                '[' if frame.piped => frame.brackets += 1,
                ']' => frame.brackets = frame.brackets.saturating_sub(1),
                _ => {}
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Resolve links until nothing changes. Each useful pass removes at least
/// one `[[`, so the number of passes is bounded by their initial count.
pub fn resolve_links(text: &str, resolve: &dyn Fn(&str) -> LinkAction) -> String {
    let max_passes = text.matches("[[").count() + 1;
    let mut text = text.to_string();
    for pass in 0..max_passes {
        let next = resolve_links_once(&text, resolve);
        if next == text {
            break;
        }
        if pass > 0 {
            log::debug!("link resolution pass {}", pass + 1);
        }
        text = next;
    }
    text
}

/// Resolve `[url label]` to its label. Every pass removes a bracket pair,
/// so the loop ends.
pub fn resolve_external_links(text: &str) -> String {
    let mut text = text.to_string();
    while EXTERNAL_LINK.is_match(&text) {
        text = EXTERNAL_LINK
            .replace_all(&text, |caps: &Captures| external_link_text(&caps[1]))
            .into_owned();
    }
    text
}

/// Drop leading URL tokens, always keeping the last token
fn external_link_text(link: &str) -> String {
    let tokens: Vec<&str> = link.split_whitespace().collect();
    let mut first = 0;
    while first + 1 < tokens.len() && starts_with_url_scheme(tokens[first]) {
        first += 1;
    }
    tokens[first..].join(" ")
}
