//! Wiki table removal
//!
//! Tables (`{| ... |}`) nest freely, so they are removed with a depth-counting
//! scan rather than a pattern. Each complete table, including any tables
//! inside it, becomes a single newline. Delimiters without a partner stay
//! in the text.

/// Remove every complete `{| ... |}` block in one linear pass
pub fn remove_tables(text: &str) -> String {
    if !text.contains("{|") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    // output offsets where each open table started
    let mut open: Vec<usize> = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{|") {
            open.push(out.len());
            out.push_str("{|");
            rest = &rest[2..];
        } else if rest.starts_with("|}") && !open.is_empty() {
            if let Some(start) = open.pop() {
                out.truncate(start);
            }
            out.push('\n');
            rest = &rest[2..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}
