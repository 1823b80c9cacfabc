//! Joining queries with a separator.

use tracing::trace;

use crate::query::Query;
use crate::template::FragmentBuf;

/// Joins `queries` into one, with `" " + separator + " "` between each pair.
///
/// Arguments are concatenated in the same order. The separator is literal
/// text. Joining nothing yields an empty query with no arguments.
///
/// ```rust
/// use sqlf_core::dialect::POSTGRES;
/// use sqlf_core::{join, sqlf};
///
/// let conds = vec![
///     sqlf!("x = %d", 1).unwrap(),
///     sqlf!("y = %d", 2).unwrap(),
/// ];
/// let q = join(conds, "OR");
/// assert_eq!(q.render(&POSTGRES), "x = $1 OR y = $2");
/// ```
pub fn join<I>(queries: I, separator: &str) -> Query
where
    I: IntoIterator<Item = Query>,
{
    let glue = format!(" {separator} ");
    let mut buf = FragmentBuf::default();
    let mut args = Vec::new();
    let mut count = 0_usize;

    for query in queries {
        if count > 0 {
            buf.push_text(&glue);
        }
        let (fragments, query_args) = query.into_parts();
        buf.extend(fragments);
        args.extend(query_args);
        count += 1;
    }

    trace!(queries = count, args = args.len(), separator, "joined queries");
    Query::from_parts(buf.finish(), args)
}

impl Query {
    /// Joins `queries` with `separator`. See [`join`].
    pub fn join<I>(queries: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        join(queries, separator)
    }
}
