//! Walkthrough of the fluent query builder.

use luq::prelude::*;

fn main() -> Result<(), SyntaxError> {
    // A compound expression: one nested group, an exact term, a must clause.
    let recent = QueryBuilder::new()
        .term("status", "open")
        .or_terms("status", ["triaged", "blocked"])?;

    let query = QueryBuilder::new()
        .exact_term("project", "search core")
        .and_query(&recent)?
        .and()?
        .must("assignee", "nobody")
        .check()?;

    println!("compact: {}", query.render());
    println!("pretty:{}", query.render_pretty());

    // Structural mistakes surface as typed errors.
    let err = QueryBuilder::new().term("t", "v").end().unwrap_err();
    println!("closing an unopened group: {}", err);

    Ok(())
}
