//! Product Search - Composing Queries Example
//!
//! This example builds a search query from optional filters:
//! - a sub-query for products that sold in volume
//! - a variable number of name filters joined with OR
//! - the same statement rendered for every built-in dialect
//!
//! Run with: cargo run --example product_search

use sqlf_core::dialect::DialectKind;
use sqlf_core::{Query, join, sqlf};

fn search(min_quantity: i64, names: &[&str]) -> sqlf_core::Result<Query> {
    let sold = sqlf!(
        "SELECT product_id FROM order_item WHERE quantity > %d",
        min_quantity
    )?;

    let conds = names
        .iter()
        .map(|name| sqlf!("name LIKE %s", format!("%{name}%")))
        .collect::<sqlf_core::Result<Vec<_>>>()?;

    if conds.is_empty() {
        return sqlf!("SELECT name FROM product WHERE id IN (%s)", sold);
    }
    sqlf!(
        "SELECT name FROM product WHERE id IN (%s) AND (%s)",
        sold,
        join(conds, "OR")
    )
}

fn main() -> sqlf_core::Result<()> {
    let query = search(100, &["apple", "orange", "coffee"])?;

    for dialect in DialectKind::ALL {
        println!("{dialect:>9}: {}", query.render(&dialect));
    }
    println!("     args: {:?}", query.args());
    println!("    debug: {}", query.to_sql_inline()?);

    Ok(())
}
