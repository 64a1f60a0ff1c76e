//! Bold/italic marker removal
//!
//! Wiki emphasis is written with apostrophe runs: `''` toggles italic,
//! `'''` toggles bold and `'''''` both. A run of three is ambiguous inside
//! italic text (`''a'''b''` closes italic and leaves an apostrophe, while
//! `''a'''b'''c''` opens bold), so the resolver looks ahead on the same line.
//!
//! Runs of other lengths are handled by matching the longest canonical
//! prefix (5, then 3, then 2) and emitting the remaining apostrophes as text.
//! A run of four is therefore a bold marker followed by a literal apostrophe.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref APOSTROPHE_RUN: Regex = Regex::new(r"''+").unwrap();
}

/// Emphasis open at the current position of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisState {
    None,
    Italic,
    Bold,
    Both,
}

impl EmphasisState {
    /// Apply one apostrophe run. Returns the new state and the number of
    /// apostrophes that form the marker; the rest of the run is literal.
    fn advance(self, run_len: usize, bold_follows: bool) -> (EmphasisState, usize) {
        use EmphasisState::*;
        if run_len >= 5 {
            let next = match self {
                Italic => Bold,
                Bold => Italic,
                Both => None,
                None => Both,
            };
            (next, 5)
        } else if run_len >= 3 {
            match self {
                Italic if bold_follows => (Both, 3),
                Italic => (None, 2),
                Bold => (None, 3),
                Both => (Italic, 3),
                None => (Bold, 3),
            }
        } else {
            let next = match self {
                Italic => None,
                Bold => Both,
                Both => Bold,
                None => Italic,
            };
            (next, 2)
        }
    }
}

/// Remove all bold/italic markers, keeping every other character
pub fn strip_emphasis(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // split_inclusive keeps the separators, so output line structure is exact
    for line in text.split_inclusive('\n') {
        strip_line(line, &mut out);
    }
    out
}

fn strip_line(line: &str, out: &mut String) {
    let runs: Vec<(usize, usize)> = APOSTROPHE_RUN
        .find_iter(line)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut state = EmphasisState::None;
    let mut last = 0;
    for (i, &(start, end)) in runs.iter().enumerate() {
        out.push_str(&line[last..start]);
        let run_len = end - start;
        let (next, consumed) = state.advance(run_len, bold_follows(&runs[i + 1..]));
        state = next;
        // apostrophes are one byte each
        out.push_str(&line[start + consumed..end]);
        last = end;
    }
    out.push_str(&line[last..]);
}

/// Whether a later run on the line could close or open bold
fn bold_follows(rest: &[(usize, usize)]) -> bool {
    rest.iter().any(|&(start, end)| end - start >= 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italic() {
        assert_eq!(strip_emphasis("''italic''"), "italic");
    }

    #[test]
    fn test_bold() {
        assert_eq!(strip_emphasis("'''bold'''"), "bold");
    }

    #[test]
    fn test_both() {
        assert_eq!(strip_emphasis("'''''both'''''"), "both");
    }

    #[test]
    fn test_nested_bold_in_italic() {
        assert_eq!(strip_emphasis("''a '''b''' c''"), "a b c");
    }

    #[test]
    fn test_three_closing_italic_leaves_apostrophe() {
        assert_eq!(strip_emphasis("''l'''s"), "l's");
    }

    #[test]
    fn test_run_of_four() {
        // bold marker plus a literal apostrophe
        assert_eq!(strip_emphasis("''''x'''"), "'x");
    }

    #[test]
    fn test_run_of_six() {
        assert_eq!(strip_emphasis("''''''x'''''"), "'x");
    }

    #[test]
    fn test_single_apostrophe_is_text() {
        assert_eq!(strip_emphasis("don't"), "don't");
    }

    #[test]
    fn test_five_switches_open_emphasis() {
        assert_eq!(strip_emphasis("''a'''''b'''"), "ab");
    }

    #[test]
    fn test_state_resets_per_line() {
        assert_eq!(strip_emphasis("''open\n'''bold'''"), "open\nbold");
        assert_eq!(strip_emphasis("a\n\nb\n"), "a\n\nb\n");
    }

    #[test]
    fn test_state_transitions() {
        use EmphasisState::*;
        assert_eq!(None.advance(2, false), (Italic, 2));
        assert_eq!(Bold.advance(2, false), (Both, 2));
        assert_eq!(Italic.advance(3, true), (Both, 3));
        assert_eq!(Italic.advance(3, false), (None, 2));
        assert_eq!(Both.advance(3, false), (Italic, 3));
        assert_eq!(Both.advance(5, false), (None, 5));
        assert_eq!(Italic.advance(4, false), (None, 2));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(strip_emphasis("''日本語'' '''ü'''"), "日本語 ü");
    }
}
