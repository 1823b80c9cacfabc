//! Composed queries.

use tracing::trace;

use crate::arg::Arg;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::template::{self, Fragment};
use crate::value::SqlValue;

/// A SQL statement with its bound arguments.
///
/// A `Query` holds a flattened pattern, where every argument position is a
/// neutral slot, and one argument per slot in left-to-right order. Embedded
/// queries are fully spliced in at composition time, so the slot count
/// always equals [`Query::args`]`.len()`.
///
/// The placeholder syntax is only chosen by [`Query::render`]:
///
/// ```rust
/// use sqlf_core::dialect::{ORACLE, POSTGRES};
/// use sqlf_core::sqlf;
///
/// let query = sqlf!("SELECT name FROM users WHERE age > %d", 21).unwrap();
/// assert_eq!(query.render(&POSTGRES), "SELECT name FROM users WHERE age > $1");
/// assert_eq!(query.render(&ORACLE), "SELECT name FROM users WHERE age > :1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    fragments: Vec<Fragment>,
    args: Vec<SqlValue>,
}

impl Query {
    /// Composes a query from a printf-style template.
    ///
    /// Each verb (`%s`, `%d`, `%v`, ...) consumes one argument, whatever its
    /// letter. Plain values become bind parameters. A [`Query`] argument is
    /// spliced in place of its verb and its arguments are appended at that
    /// position, so nesting flattens to a single level. `%%` is a literal `%`.
    ///
    /// See the [`sqlf!`](crate::sqlf) macro for a shorter form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTemplate`](crate::Error::MalformedTemplate) if
    /// the number of verbs and arguments differ, or a `%` is not followed by
    /// a verb.
    pub fn compose<I>(format: &str, args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let (fragments, args) = template::expand(format, args)?;
        let query = Self { fragments, args };
        trace!(
            slots = query.slot_count(),
            args = query.args.len(),
            "composed query"
        );
        Ok(query)
    }

    /// Creates a query from literal SQL with no arguments.
    ///
    /// The text is taken as-is: `%` is not interpreted.
    pub fn raw(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        let fragments = if sql.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::Text(sql)]
        };
        Self {
            fragments,
            args: Vec::new(),
        }
    }

    pub(crate) const fn from_parts(fragments: Vec<Fragment>, args: Vec<SqlValue>) -> Self {
        Self { fragments, args }
    }

    /// Renders the statement with `dialect`'s placeholders.
    ///
    /// The `i`-th placeholder corresponds to `self.args()[i]`. Rendering does
    /// not modify the query and may be repeated with other dialects.
    #[must_use]
    pub fn render<D: Dialect + ?Sized>(&self, dialect: &D) -> String {
        template::bind(&self.fragments, dialect)
    }

    /// Returns the bound arguments, in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Renders the statement and returns it together with its arguments.
    ///
    /// The pair is what a driver expects; keep the two together.
    #[must_use]
    pub fn build<D: Dialect + ?Sized>(&self, dialect: &D) -> (String, Vec<SqlValue>) {
        (self.render(dialect), self.args.clone())
    }

    /// Returns the textual pattern: `%s` for each slot, `%%` for each literal `%`.
    ///
    /// Composing the pattern again with [`Query::args`] gives an equal query.
    #[must_use]
    pub fn pattern(&self) -> String {
        template::pattern_text(&self.fragments)
    }

    /// Returns the pattern fragments.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the number of argument slots in the pattern.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Slot))
            .count()
    }

    /// Returns whether the query has no text and no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Consumes the query, returning its fragments and arguments.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Fragment>, Vec<SqlValue>) {
        (self.fragments, self.args)
    }

    /// Renders the statement with every argument inlined as a SQL literal.
    ///
    /// **Debug output only.** Text is quoted with `'` doubled, but the result
    /// is not safe against SQL injection for attacker-controlled input and
    /// must never be executed. Use [`Query::render`] with [`Query::args`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType) if an
    /// argument has no literal form.
    pub fn to_sql_inline(&self) -> Result<String> {
        template::inline(&self.fragments, &self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{ORACLE, POSTGRES, SIMPLE, SQL_SERVER};
    use crate::error::Error;

    #[test]
    fn test_compose_plain_values() {
        let q = Query::compose("a = %s AND b = %d", [Arg::from("foo"), Arg::from(1)]).unwrap();
        assert_eq!(q.render(&POSTGRES), "a = $1 AND b = $2");
        assert_eq!(
            q.args(),
            [SqlValue::Text(String::from("foo")), SqlValue::Int(1)]
        );
        assert_eq!(q.slot_count(), 2);
    }

    #[test]
    fn test_compose_embeds_query() {
        let inner = Query::compose("b = %d", [1]).unwrap();
        let q = Query::compose("a = (%s)", [inner]).unwrap();
        assert_eq!(q.render(&POSTGRES), "a = (b = $1)");
        assert_eq!(q.args(), [SqlValue::Int(1)]);
        assert_eq!(q.fragments().len(), 3);
    }

    #[test]
    fn test_render_every_dialect() {
        let q = Query::compose("x = %s OR y = %s", ["a", "b"]).unwrap();
        assert_eq!(q.render(&SIMPLE), "x = ? OR y = ?");
        assert_eq!(q.render(&POSTGRES), "x = $1 OR y = $2");
        assert_eq!(q.render(&ORACLE), "x = :1 OR y = :2");
        assert_eq!(q.render(&SQL_SERVER), "x = @p1 OR y = @p2");
    }

    #[test]
    fn test_render_does_not_change_query() {
        let q = Query::compose("a = %s", [1]).unwrap();
        let before = q.clone();
        let _ = q.render(&POSTGRES);
        let _ = q.render(&ORACLE);
        assert_eq!(q, before);
    }

    #[test]
    fn test_build_pairs_sql_and_args() {
        let q = Query::compose("a = %s", ["x"]).unwrap();
        let (sql, args) = q.build(&SIMPLE);
        assert_eq!(sql, "a = ?");
        assert_eq!(args, vec![SqlValue::Text(String::from("x"))]);
    }

    #[test]
    fn test_raw_keeps_percent() {
        let q = Query::raw("name LIKE 'a%'");
        assert_eq!(q.render(&POSTGRES), "name LIKE 'a%'");
        assert_eq!(q.pattern(), "name LIKE 'a%%'");
        assert!(q.args().is_empty());
        assert!(Query::raw("").is_empty());
    }

    #[test]
    fn test_pattern_recomposes() {
        let q = Query::compose("a <<%% %s AND b = %d", [Arg::from("foo"), Arg::from(1)]).unwrap();
        assert_eq!(q.pattern(), "a <<%% %s AND b = %s");
        let again = Query::compose(&q.pattern(), q.args().iter().cloned()).unwrap();
        assert_eq!(again, q);
    }

    #[test]
    fn test_to_sql_inline() {
        let q = Query::compose("name = %s AND age = %d", [Arg::from("it's"), Arg::from(3)])
            .unwrap();
        assert_eq!(q.to_sql_inline().unwrap(), "name = 'it''s' AND age = 3");

        let q = Query::compose("tags = %s", [SqlValue::array(["a"])]).unwrap();
        assert_eq!(
            q.to_sql_inline().unwrap_err(),
            Error::UnsupportedType { kind: "array" }
        );
    }

    #[test]
    fn test_compose_mismatch_is_error() {
        assert!(matches!(
            Query::compose("a = %s AND b = %s", [1]),
            Err(Error::MalformedTemplate { .. })
        ));
        assert!(matches!(
            Query::compose("a = 1", [1]),
            Err(Error::MalformedTemplate { .. })
        ));
    }
}
