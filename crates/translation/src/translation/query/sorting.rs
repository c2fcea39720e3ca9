//! Handle ordering-spec translation.

use quill_schema::projection::{Direction, Sort};
use quill_sql::sql::ast::{OrderBy, OrderByDirection, OrderByElement};
use quill_sql::sql::helpers::column;

/// Convert an ordering spec to an ORDER BY clause.
pub fn translate(order_by: &[Sort]) -> OrderBy {
    OrderBy {
        elements: order_by
            .iter()
            .map(|sort| OrderByElement {
                target: column(&sort.keyword),
                direction: match sort.direction {
                    Direction::Ascending => OrderByDirection::Asc,
                    Direction::Descending => OrderByDirection::Desc,
                },
            })
            .collect(),
    }
}
