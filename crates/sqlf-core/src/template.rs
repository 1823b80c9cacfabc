//! The two substitution passes of a query.
//!
//! Composition happens in two separate steps:
//!
//! 1. [`expand`] scans a printf-style template once, replacing every verb with
//!    either a [`Fragment::Slot`] (plain value) or the fragments of an embedded
//!    query. `%%` collapses to a literal `%` here, and only here.
//! 2. [`bind`] walks the resulting fragments and asks a [`Dialect`] for the
//!    placeholder of each slot.
//!
//! Because the expanded pattern is kept as fragments rather than re-parsed
//! text, literal `%` characters need no second round of escaping before
//! [`bind`]. [`pattern_text`] produces the escaped template form when a
//! string is needed.

use crate::arg::Arg;
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::value::SqlValue;

/// A piece of an expanded pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal SQL text.
    Text(String),
    /// A neutral marker for one bound argument.
    Slot,
}

/// Fragment list that keeps adjacent text merged.
#[derive(Debug, Default)]
pub(crate) struct FragmentBuf {
    fragments: Vec<Fragment>,
}

impl FragmentBuf {
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(Fragment::Text(last)) => last.push_str(text),
            _ => self.fragments.push(Fragment::Text(String::from(text))),
        }
    }

    pub(crate) fn push_slot(&mut self) {
        self.fragments.push(Fragment::Slot);
    }

    pub(crate) fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            match fragment {
                Fragment::Text(text) => self.push_text(&text),
                Fragment::Slot => self.push_slot(),
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<Fragment> {
        self.fragments
    }
}

/// A lexical piece of a template.
#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    /// `%%`
    Percent,
    /// `%` + flags + verb, starting at `position`.
    Verb { position: usize },
}

/// Splits a template into text, escapes and verbs.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn next_piece(&mut self) -> Result<Option<Piece<'a>>> {
        let input = self.input;
        let start = self.pos;
        let rest = &input[start..];
        if rest.is_empty() {
            return Ok(None);
        }

        if !rest.starts_with('%') {
            let len = rest.find('%').unwrap_or(rest.len());
            self.pos += len;
            return Ok(Some(Piece::Text(&rest[..len])));
        }

        self.advance(); // %
        if self.peek() == Some('%') {
            self.advance();
            return Ok(Some(Piece::Percent));
        }

        // Flags, width and precision are accepted but carry no meaning.
        self.skip_while(|c| matches!(c, '+' | '-' | '#' | ' ' | '0'));
        self.skip_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.advance();
            self.skip_while(|c| c.is_ascii_digit());
        }

        match self.advance() {
            Some(c) if c.is_ascii_alphabetic() => Ok(Some(Piece::Verb { position: start })),
            Some(c) => Err(Error::malformed(
                start,
                format!("expected a verb after '%', found '{c}'"),
            )),
            None => Err(Error::malformed(start, "template ends with an incomplete verb")),
        }
    }
}

/// Expands `format` against `args`.
///
/// Each verb consumes the next argument: a plain value becomes one
/// [`Fragment::Slot`], an embedded [`Query`](crate::Query) is spliced in
/// place. Returns the flat fragment list together with the arguments of
/// every slot, in order.
///
/// # Errors
///
/// Returns [`Error::MalformedTemplate`] when a `%` is not followed by a verb,
/// or when the number of verbs differs from the number of arguments.
pub fn expand<I>(format: &str, args: I) -> Result<(Vec<Fragment>, Vec<SqlValue>)>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let mut args = args.into_iter();
    let mut buf = FragmentBuf::default();
    let mut values = Vec::new();
    let mut verbs = 0_usize;

    let mut scanner = Scanner::new(format);
    while let Some(piece) = scanner.next_piece()? {
        match piece {
            Piece::Text(text) => buf.push_text(text),
            Piece::Percent => buf.push_text("%"),
            Piece::Verb { position } => {
                verbs += 1;
                let Some(arg) = args.next() else {
                    return Err(Error::malformed(
                        position,
                        format!("verb {verbs} has no matching argument"),
                    ));
                };
                match arg.into() {
                    Arg::Value(value) => {
                        buf.push_slot();
                        values.push(value);
                    }
                    Arg::Query(query) => {
                        let (fragments, nested) = query.into_parts();
                        buf.extend(fragments);
                        values.extend(nested);
                    }
                }
            }
        }
    }

    let extra = args.count();
    if extra > 0 {
        return Err(Error::malformed(
            format.len(),
            format!("{extra} argument(s) left over after {verbs} verb(s)"),
        ));
    }

    Ok((buf.finish(), values))
}

/// Renders fragments with `dialect`'s placeholders.
///
/// The `i`-th slot becomes `dialect.bind_var(i)`.
#[must_use]
pub fn bind<D: Dialect + ?Sized>(fragments: &[Fragment], dialect: &D) -> String {
    let mut out = String::new();
    let mut index = 0;
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Slot => {
                out.push_str(&dialect.bind_var(index));
                index += 1;
            }
        }
    }
    out
}

/// Renders fragments with each slot replaced by the literal form of its value.
///
/// Debug output only; see [`SqlValue::to_sql_inline`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if a value has no literal form, and
/// [`Error::MalformedTemplate`] if `values` does not have one entry per slot.
pub fn inline(fragments: &[Fragment], values: &[SqlValue]) -> Result<String> {
    let mut out = String::new();
    let mut values = values.iter();
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Slot => {
                let value = values
                    .next()
                    .ok_or_else(|| Error::malformed(out.len(), "slot has no matching value"))?;
                out.push_str(&value.to_sql_inline()?);
            }
        }
    }
    if values.next().is_some() {
        return Err(Error::malformed(out.len(), "more values than slots"));
    }
    Ok(out)
}

/// Returns the textual template for `fragments`: `%s` for each slot and `%%`
/// for each literal `%`.
///
/// Expanding the result again with the same arguments yields the same
/// fragments.
#[must_use]
pub fn pattern_text(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(&text.replace('%', "%%")),
            Fragment::Slot => out.push_str("%s"),
        }
    }
    out
}
