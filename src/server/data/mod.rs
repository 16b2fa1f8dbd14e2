//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entity types out of the service layer.

use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Func, LikeExpr},
    Condition,
};

use crate::server::model::pagination::LIKE_ESCAPE;

pub mod assignment;
pub mod retailer;
pub mod sales_rep;
pub mod taxonomy;
pub mod user;

#[cfg(test)]
mod test;

/// Upper bound on bind parameters per statement, below SQLite's historical limit of 999.
pub(crate) const MAX_BIND_PARAMS: usize = 900;

/// Condition matching rows whose lowercased `table.column` is `LIKE` the given pattern.
///
/// The pattern is expected to come from `like_pattern`: lowercased, with wildcards in the
/// search term escaped by `LIKE_ESCAPE`.
pub(crate) fn lower_like(table: &str, column: &str, pattern: &str) -> Condition {
    Condition::all().add(
        lower_column(table, column).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
    )
}

/// Condition matching rows whose `table.column` equals `value` ignoring case.
pub(crate) fn lower_eq(table: &str, column: &str, value: &str) -> Condition {
    Condition::all().add(lower_column(table, column).eq(value.to_lowercase()))
}

fn lower_column(table: &str, column: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col((
        Alias::new(table),
        Alias::new(column),
    ))))
}
