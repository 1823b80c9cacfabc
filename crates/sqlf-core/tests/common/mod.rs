#![allow(dead_code)]

use sqlf_core::dialect::{Dialect, DialectKind, POSTGRES};
use sqlf_core::{Query, SqlValue};

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

pub fn int(n: i64) -> SqlValue {
    SqlValue::Int(n)
}

/// Asserts the Postgres rendering and the argument list of `query`.
pub fn assert_postgres(query: &Query, sql: &str, args: &[SqlValue]) {
    assert_eq!(query.render(&POSTGRES), sql, "rendered SQL");
    assert_eq!(query.args(), args, "arguments");
    assert_placeholders_match(query);
}

/// Counts the placeholders a dialect produced for `query`.
pub fn placeholder_count(query: &Query, dialect: DialectKind) -> usize {
    let sql = query.render(&dialect);
    match dialect {
        DialectKind::Simple => sql.matches('?').count(),
        _ => {
            let marker = dialect.bind_var(0);
            let prefix = marker.trim_end_matches('1');
            sql.matches(prefix).count()
        }
    }
}

/// Every built-in dialect renders exactly one placeholder per argument.
pub fn assert_placeholders_match(query: &Query) {
    for dialect in DialectKind::ALL {
        assert_eq!(
            placeholder_count(query, dialect),
            query.args().len(),
            "placeholder count for {dialect}"
        );
    }
}
