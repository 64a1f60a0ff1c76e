//! LaTeX formula to Unicode rendering
//!
//! Formulas found in `<math>` tags are approximated with Unicode symbols,
//! super/subscripts and slash fractions. The renderer is not a TeX parser:
//!
//! 1. Innermost non-empty `{...}` groups are rendered recursively and replaced
//!    by a single [`Atom::Group`] placeholder, repeated until no group is left.
//!    Nesting of any depth therefore ends up as a flat atom sequence.
//! 2. The flat sequence is split into tokens by ordered matchers
//!    (whitespace, `\frac`-like, multi-command idioms, prefixed items).
//! 3. Each token is rendered and the parts are joined, with a space between a
//!    letter or digit and a following digit so numbers do not run together.
//!
//! ## Example
//!
//! ```rust
//! use wikiclean::render_math;
//!
//! assert_eq!(render_math(r"\frac{1}{2}"), "1/2");
//! assert_eq!(render_math(r"\alpha^2"), "α²");
//! assert_eq!(render_math(r"\mathbb{R}"), "ℝ");
//! ```

use crate::core::scripts::{to_subscript, to_superscript};
use crate::data::alphabets::MathAlphabet;
use crate::data::symbols::{lookup_symbol, MATH_IDIOMS};
use crate::utils::diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, LogSink};

/// Render a formula, reporting unparseable fractions through `log`
pub fn render_math(formula: &str) -> String {
    render_math_with_sink(formula, &LogSink)
}

/// Render a formula, reporting unparseable fractions to `sink`
pub fn render_math_with_sink(formula: &str, sink: &dyn DiagnosticSink) -> String {
    let atoms = formula.chars().map(Atom::Char).collect();
    let mut renderer = MathRenderer::new(sink);
    renderer.render(atoms)
}

/// One element of a formula after group flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Char(char),
    /// Index into the group table
    Group(usize),
}

/// Rendered brace groups addressed by [`Atom::Group`]
///
/// Entries are final strings, so expanding a placeholder never yields
/// another placeholder.
#[derive(Debug, Default)]
struct GroupTable {
    /// Source text of each group, without the outer braces
    raw: Vec<String>,
    rendered: Vec<String>,
}

impl GroupTable {
    fn push(&mut self, raw: String, rendered: String) -> usize {
        self.raw.push(raw);
        self.rendered.push(rendered);
        self.rendered.len() - 1
    }
}

fn raw_text(atoms: &[Atom], groups: &GroupTable) -> String {
    let mut out = String::new();
    for atom in atoms {
        match *atom {
            Atom::Char(c) => out.push(c),
            Atom::Group(k) => {
                out.push('{');
                out.push_str(&groups.raw[k]);
                out.push('}');
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FracOp {
    Frac,
    Binom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Sub,
    Sup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Prefix {
    Alphabet(MathAlphabet),
    Text,
    /// `\begin` / `\end`
    Environment,
    Pmod,
    /// `\sqrt` with its optional `[degree]`
    Sqrt(Option<Vec<Atom>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Unit {
    Command(String),
    Escaped(char),
    Word(String),
    Char(char),
    Group(usize),
    Idiom(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Whitespace,
    Frac { op: FracOp, num: Unit, den: Unit },
    /// `\frac` or `\binom` without two arguments; holds the source text
    BrokenFrac(String),
    Idiom(&'static str),
    Item {
        prefix: Option<Prefix>,
        script: Option<Script>,
        unit: Unit,
    },
}

struct MathRenderer<'s> {
    groups: GroupTable,
    sink: &'s dyn DiagnosticSink,
}

impl<'s> MathRenderer<'s> {
    fn new(sink: &'s dyn DiagnosticSink) -> Self {
        Self {
            groups: GroupTable::default(),
            sink,
        }
    }

    fn render(&mut self, mut atoms: Vec<Atom>) -> String {
        while self.collapse_innermost(&mut atoms) {}

        let tokens = Tokenizer::new(&atoms, &self.groups).collect::<Vec<_>>();
        log::trace!("math tokens: {:?}", tokens);

        let mut out = String::new();
        for token in tokens {
            let part = self.expand(token);
            if part.is_empty() {
                continue;
            }
            let needs_space = match (out.chars().last(), part.chars().next()) {
                (Some(prev), Some(next)) => {
                    next.is_ascii_digit() && (prev.is_alphabetic() || prev.is_ascii_digit())
                }
                _ => false,
            };
            if needs_space {
                out.push(' ');
            }
            out.push_str(&part);
        }
        out
    }

    /// Replace every innermost non-empty `{...}` by a group placeholder.
    /// Returns whether anything was replaced.
    fn collapse_innermost(&mut self, atoms: &mut Vec<Atom>) -> bool {
        let mut spans = Vec::new();
        let mut open = None;
        for (i, atom) in atoms.iter().enumerate() {
            match atom {
                Atom::Char('{') => open = Some(i),
                Atom::Char('}') => {
                    if let Some(o) = open.take() {
                        if i > o + 1 {
                            spans.push((o, i));
                        }
                    }
                }
                _ => {}
            }
        }
        if spans.is_empty() {
            return false;
        }

        let mut flattened = Vec::with_capacity(atoms.len());
        let mut last = 0;
        for (o, c) in spans {
            flattened.extend_from_slice(&atoms[last..o]);
            let inner = atoms[o + 1..c].to_vec();
            let raw = raw_text(&inner, &self.groups);
            let rendered = self.render(inner).trim().to_string();
            let index = self.groups.push(raw, rendered);
            flattened.push(Atom::Group(index));
            last = c + 1;
        }
        flattened.extend_from_slice(&atoms[last..]);
        *atoms = flattened;
        true
    }

    fn expand(&mut self, token: Token) -> String {
        match token {
            Token::Whitespace => String::new(),
            Token::Idiom(symbol) => symbol.to_string(),
            Token::Frac { op, num, den } => {
                let a = parenthesize(self.render_unit(&num).trim());
                let b = parenthesize(self.render_unit(&den).trim());
                match op {
                    FracOp::Frac => format!("{}/{}", a, b),
                    FracOp::Binom => format!("binom({}, {})", a, b),
                }
            }
            Token::BrokenFrac(raw) => {
                self.sink.report(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        "cannot find two arguments for fraction or binomial",
                    )
                    .with_source(raw.clone())
                    .with_suggestion("write the arguments as {numerator}{denominator}"),
                );
                raw
            }
            Token::Item {
                prefix,
                script,
                unit,
            } => self.expand_item(prefix, script, &unit),
        }
    }

    fn expand_item(&mut self, prefix: Option<Prefix>, script: Option<Script>, unit: &Unit) -> String {
        match prefix {
            None => {
                let body = self.render_unit(unit);
                match script {
                    Some(Script::Sub) => to_subscript(&body),
                    Some(Script::Sup) => to_superscript(&body),
                    None => body,
                }
            }
            Some(Prefix::Alphabet(alphabet)) => {
                let body = literal_script(script) + &self.render_unit(unit);
                alphabet.apply(body.trim())
            }
            Some(Prefix::Text) => literal_script(script) + &self.render_unit(unit),
            Some(Prefix::Environment) => String::new(),
            Some(Prefix::Pmod) => {
                let body = self.expand_item(None, script, unit);
                format!("(mod {})", body.trim())
            }
            Some(Prefix::Sqrt(degree)) => {
                let degree = degree.map(|atoms| self.render(atoms).trim().to_string());
                let mut out = match degree.as_deref() {
                    None | Some("") | Some("2") => "√".to_string(),
                    Some("3") => "∛".to_string(),
                    Some("4") => "∜".to_string(),
                    Some(d) => to_superscript(d) + "√",
                };
                let arg = self.expand_item(None, script, unit);
                out.push_str(&parenthesize(arg.trim()));
                out
            }
        }
    }

    fn render_unit(&self, unit: &Unit) -> String {
        match unit {
            Unit::Command(name) => match lookup_symbol(name) {
                Some(symbol) => symbol.to_string(),
                // keep unknown commands legible
                None => format!(" {} ", name),
            },
            Unit::Escaped(c) => {
                let mut buf = [0u8; 4];
                let key: &str = c.encode_utf8(&mut buf);
                match lookup_symbol(key) {
                    Some(symbol) => symbol.to_string(),
                    None if c.is_alphanumeric() => format!(" {} ", c),
                    None => c.to_string(),
                }
            }
            Unit::Word(word) => word.clone(),
            Unit::Char(c) => match c {
                '&' | '\\' => String::new(),
                c if c.is_whitespace() => String::new(),
                c => c.to_string(),
            },
            Unit::Group(k) => self.groups.rendered[*k].clone(),
            Unit::Idiom(symbol) => symbol.to_string(),
        }
    }
}

/// Wrap in parentheses when longer than one character
fn parenthesize(text: &str) -> String {
    if text.chars().count() > 1 {
        format!("({})", text)
    } else {
        text.to_string()
    }
}

fn literal_script(script: Option<Script>) -> String {
    match script {
        Some(Script::Sub) => "_".to_string(),
        Some(Script::Sup) => "^".to_string(),
        None => String::new(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Splits a flattened formula into tokens, trying matchers in priority order
struct Tokenizer<'a> {
    atoms: &'a [Atom],
    groups: &'a GroupTable,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(atoms: &'a [Atom], groups: &'a GroupTable) -> Self {
        Self {
            atoms,
            groups,
            pos: 0,
        }
    }

    fn char_at(&self, i: usize) -> Option<char> {
        match self.atoms.get(i) {
            Some(Atom::Char(c)) => Some(*c),
            _ => None,
        }
    }

    fn skip_ws(&self, mut i: usize) -> usize {
        while self.char_at(i).is_some_and(char::is_whitespace) {
            i += 1;
        }
        i
    }

    /// `\letters` starting at `i`: the name and the index after it
    fn command_at(&self, i: usize) -> Option<(String, usize)> {
        if self.char_at(i) != Some('\\') {
            return None;
        }
        let mut end = i + 1;
        let mut name = String::new();
        while let Some(c) = self.char_at(end).filter(char::is_ascii_alphabetic) {
            name.push(c);
            end += 1;
        }
        if name.is_empty() {
            None
        } else {
            Some((name, end))
        }
    }

    /// Match one of the multi-command idioms at `i`
    fn idiom_at(&self, i: usize) -> Option<(&'static str, usize)> {
        'idioms: for idiom in MATH_IDIOMS {
            let mut rest: &str = idiom;
            let mut j = i;
            while !rest.is_empty() {
                match self.atoms.get(j) {
                    Some(Atom::Char(c)) if rest.starts_with(*c) => {
                        rest = &rest[c.len_utf8()..];
                    }
                    Some(Atom::Group(k)) => {
                        let spelled = format!("{{{}}}", self.groups.raw[*k]);
                        match rest.strip_prefix(spelled.as_str()) {
                            Some(r) => rest = r,
                            None => continue 'idioms,
                        }
                    }
                    _ => continue 'idioms,
                }
                j += 1;
            }
            // `\not\in` must not match the start of `\not\infty`
            let ends_in_letter = idiom.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
            if ends_in_letter && self.char_at(j).is_some_and(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let symbol = lookup_symbol(&idiom[1..])?;
            return Some((symbol, j));
        }
        None
    }

    /// One argument unit starting at `i`
    fn unit_at(&self, i: usize, words: bool, absorb_ws: bool) -> Option<(Unit, usize)> {
        match *self.atoms.get(i)? {
            Atom::Group(k) => Some((Unit::Group(k), i + 1)),
            Atom::Char('\\') => {
                if let Some((name, end)) = self.command_at(i) {
                    let end = if absorb_ws { self.skip_ws(end) } else { end };
                    return Some((Unit::Command(name), end));
                }
                match self.atoms.get(i + 1) {
                    Some(Atom::Char(c)) => Some((Unit::Escaped(*c), i + 2)),
                    // an escaped group renders as the group
                    Some(Atom::Group(k)) => Some((Unit::Group(*k), i + 2)),
                    None => Some((Unit::Char('\\'), i + 1)),
                }
            }
            Atom::Char(c) if words && is_word_char(c) => {
                let mut end = i;
                let mut word = String::new();
                while let Some(c) = self.char_at(end).filter(|c| is_word_char(*c)) {
                    word.push(c);
                    end += 1;
                }
                Some((Unit::Word(word), end))
            }
            Atom::Char(c) => Some((Unit::Char(c), i + 1)),
        }
    }

    fn frac_unit(&self, i: usize) -> Option<(Unit, usize)> {
        if let Some((symbol, end)) = self.idiom_at(i) {
            return Some((Unit::Idiom(symbol), end));
        }
        self.unit_at(i, false, false)
    }

    fn frac(&mut self) -> Option<Token> {
        let (name, cmd_end) = self.command_at(self.pos)?;
        let op = match name.as_str() {
            "frac" | "dfrac" | "tfrac" => FracOp::Frac,
            "binom" => FracOp::Binom,
            _ => return None,
        };

        let arguments = self.frac_unit(self.skip_ws(cmd_end)).and_then(|(num, end)| {
            self.frac_unit(self.skip_ws(end))
                .map(|(den, end)| (num, den, end))
        });
        match arguments {
            Some((num, den, end)) => {
                self.pos = end;
                Some(Token::Frac { op, num, den })
            }
            None => {
                let raw = raw_text(&self.atoms[self.pos..cmd_end], self.groups);
                self.pos = self.skip_ws(cmd_end);
                Some(Token::BrokenFrac(raw))
            }
        }
    }

    fn prefix_at(&self, i: usize) -> Option<(Prefix, usize)> {
        let (name, end) = self.command_at(i)?;
        let prefix = match name.as_str() {
            "text" => Prefix::Text,
            "begin" | "end" => Prefix::Environment,
            "pmod" => Prefix::Pmod,
            "sqrt" => {
                if self.char_at(end) == Some('[') {
                    let close = (end + 1..self.atoms.len()).find(|&j| self.char_at(j) == Some(']'));
                    if let Some(close) = close {
                        let degree = self.atoms[end + 1..close].to_vec();
                        return Some((Prefix::Sqrt(Some(degree)), self.skip_ws(close + 1)));
                    }
                }
                Prefix::Sqrt(None)
            }
            other => Prefix::Alphabet(MathAlphabet::from_command(other)?),
        };
        Some((prefix, self.skip_ws(end)))
    }

    /// Optional `_`/`^` followed by a unit
    fn scripted_unit(&self, i: usize) -> Option<(Option<Script>, Unit, usize)> {
        let script = match self.char_at(i) {
            Some('_') => Some(Script::Sub),
            Some('^') => Some(Script::Sup),
            _ => None,
        };
        if script.is_some() {
            if let Some((unit, end)) = self.unit_at(i + 1, true, true) {
                return Some((script, unit, end));
            }
        }
        self.unit_at(i, true, true)
            .map(|(unit, end)| (None, unit, end))
    }

    fn item(&mut self) -> Option<Token> {
        if let Some((prefix, after)) = self.prefix_at(self.pos) {
            if let Some((script, unit, end)) = self.scripted_unit(after) {
                self.pos = end;
                return Some(Token::Item {
                    prefix: Some(prefix),
                    script,
                    unit,
                });
            }
        }
        let (script, unit, end) = self.scripted_unit(self.pos)?;
        self.pos = end;
        Some(Token::Item {
            prefix: None,
            script,
            unit,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos >= self.atoms.len() {
            return None;
        }

        let ws_end = self.skip_ws(self.pos);
        if ws_end > self.pos {
            self.pos = ws_end;
            return Some(Token::Whitespace);
        }

        if let Some(token) = self.frac() {
            return Some(token);
        }

        if let Some((symbol, end)) = self.idiom_at(self.pos) {
            self.pos = end;
            return Some(Token::Idiom(symbol));
        }

        self.item()
    }
}
