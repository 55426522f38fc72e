//! # LUQ — Lucene Query Builder
//!
//! > Stop concatenating query strings. Chain them.
//!
//! LUQ assembles Lucene-style boolean query expressions through a fluent,
//! validating builder: parenthesized groups, `AND`/`OR` operators,
//! `field:(value)` terms, exact matches, must/not modifiers. Structural
//! mistakes surface as typed errors, eagerly where possible and at
//! [`check`](builder::QueryBuilder::check) time otherwise.
//!
//! ## Quick Example
//!
//! ```rust
//! use luq::prelude::*;
//!
//! fn build() -> SyntaxResult<String> {
//!     let query = QueryBuilder::new()
//!         .term("title", "rust")
//!         .and()?
//!         .begin()
//!         .exact_term("topic", "query syntax")
//!         .end()?
//!         .check()?;
//!     Ok(query.render())
//! }
//!
//! assert_eq!(build().unwrap(), r#"title:(rust) AND (topic:("query syntax"))"#);
//! ```
//!
//! Reserved characters in values are escaped automatically, and
//! [`render_pretty`](builder::QueryBuilder::render_pretty) lays the same
//! expression out one element per line, indented to its group depth.

pub mod builder;
pub mod error;
pub mod escape;
pub mod log;
pub mod value;

pub use builder::QueryBuilder;

pub mod prelude {
    pub use crate::builder::{Op, QueryBuilder};
    pub use crate::error::{SyntaxError, SyntaxResult};
    pub use crate::log::{Level, QueryLog, TracingLog};
    pub use crate::value::Value;
}
