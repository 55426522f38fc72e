//! Stateful builder for boolean query expressions.
//!
//! [`QueryBuilder`] accumulates query text fragment by fragment and validates
//! structural well-formedness as it goes: parenthesis depth, operator/term
//! sequencing, and reserved-character escaping. The finished expression
//! renders either compact (the wire form) or pretty (one element per line,
//! indented to its group depth).

use serde::{Deserialize, Serialize};

use crate::error::{SyntaxError, SyntaxResult};
use crate::escape::escape;
use crate::log::{Level, QueryLog};
use crate::value::Value;

const BEGIN: &str = "(";
const END: &str = ")";
const FIELD_SEP: &str = ":";
const EXACT: &str = "\"";
const INDENT: &str = "\t";

/// Boolean operator joining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    And,
    Or,
}

impl Op {
    /// Canonical rendered token, surrounding spaces included.
    pub const fn token(self) -> &'static str {
        match self {
            Op::And => " AND ",
            Op::Or => " OR ",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// One appended element and the group depth it was appended at.
///
/// The depth is the only structural marker the buffer keeps; the pretty
/// renderer materializes it as indentation, the compact renderer ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Segment {
    indent: usize,
    text: String,
}

/// Fluent builder for a single boolean query expression.
///
/// Methods chain by value; fallible steps return
/// [`SyntaxResult`](crate::error::SyntaxResult) so chains compose with `?`.
/// A builder is a plain mutable value with no interior sharing: callers that
/// need one across threads must synchronize it themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryBuilder {
    segments: Vec<Segment>,
    open_depth: i64,
    pending_op: bool,
}

impl QueryBuilder {
    /// New empty builder: depth 0, no pending operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups currently open at the append position.
    fn indent(&self) -> usize {
        self.open_depth.max(0) as usize
    }

    fn push(&mut self, indent: usize, text: impl Into<String>) {
        self.segments.push(Segment {
            indent,
            text: text.into(),
        });
    }

    fn op(mut self, op: Op) -> SyntaxResult<Self> {
        if self.pending_op {
            return Err(SyntaxError::DanglingOperator);
        }
        self.push(self.indent(), op.token());
        self.pending_op = true;
        Ok(self)
    }

    /// Append the `AND` operator.
    ///
    /// Fails eagerly with [`SyntaxError::DanglingOperator`] if another
    /// operator is still waiting for its term.
    pub fn and(self) -> SyntaxResult<Self> {
        self.op(Op::And)
    }

    /// Append the `OR` operator.
    ///
    /// Fails eagerly with [`SyntaxError::DanglingOperator`] if another
    /// operator is still waiting for its term.
    pub fn or(self) -> SyntaxResult<Self> {
        self.op(Op::Or)
    }

    /// Open a group.
    ///
    /// Legal while an operator is pending: an operator may be followed
    /// directly by a parenthesized operand.
    pub fn begin(mut self) -> Self {
        // The open marker renders at the outer depth; its matching close
        // comes back to the same depth in end().
        self.push(self.indent(), BEGIN);
        self.open_depth += 1;
        self
    }

    /// Close the innermost open group.
    ///
    /// Fails eagerly with [`SyntaxError::UnopenedGroup`] when no group is
    /// open.
    pub fn end(mut self) -> SyntaxResult<Self> {
        self.open_depth -= 1;
        if self.open_depth < 0 {
            return Err(SyntaxError::UnopenedGroup {
                count: self.open_depth.unsigned_abs(),
            });
        }
        self.push(self.indent(), END);
        Ok(self)
    }

    /// Append `name:(value)`, escaping the value.
    pub fn term(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.pending_op = false;
        let text = format!(
            "{name}{FIELD_SEP}{BEGIN}{}{END}",
            escape(&value.into().to_string())
        );
        self.push(self.indent(), text);
        self
    }

    /// Append a bare token verbatim, with no field name and no escaping.
    pub fn literal(mut self, token: &str) -> Self {
        self.pending_op = false;
        self.push(self.indent(), token);
        self
    }

    /// Append `name:("value")`: an exact (quoted) match, value escaped.
    pub fn exact_term(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.pending_op = false;
        let text = format!(
            "{name}{FIELD_SEP}{BEGIN}{EXACT}{}{EXACT}{END}",
            escape(&value.into().to_string())
        );
        self.push(self.indent(), text);
        self
    }

    /// Append `+(name:(value))`: the term must match.
    pub fn must(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.pending_op = false;
        let text = format!(
            "+{BEGIN}{name}{FIELD_SEP}{BEGIN}{}{END}{END}",
            escape(&value.into().to_string())
        );
        self.push(self.indent(), text);
        self
    }

    /// Append `-(name:(value))`: the term must not match.
    pub fn not(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.pending_op = false;
        let text = format!(
            "-{BEGIN}{name}{FIELD_SEP}{BEGIN}{}{END}{END}",
            escape(&value.into().to_string())
        );
        self.push(self.indent(), text);
        self
    }

    /// Append `AND name:(value)` for every value, in argument order.
    pub fn and_terms<V: Into<Value>>(
        self,
        name: &str,
        values: impl IntoIterator<Item = V>,
    ) -> SyntaxResult<Self> {
        let mut builder = self;
        for value in values {
            builder = builder.and()?.term(name, value);
        }
        Ok(builder)
    }

    /// Append `OR name:(value)` for every value, in argument order.
    pub fn or_terms<V: Into<Value>>(
        self,
        name: &str,
        values: impl IntoIterator<Item = V>,
    ) -> SyntaxResult<Self> {
        let mut builder = self;
        for value in values {
            builder = builder.or()?.term(name, value);
        }
        Ok(builder)
    }

    /// Append `AND token`: shorthand for [`and`](Self::and) then
    /// [`literal`](Self::literal).
    pub fn and_literal(self, token: &str) -> SyntaxResult<Self> {
        Ok(self.and()?.literal(token))
    }

    /// Conjoin a fully-formed sub-expression as a parenthesized operand:
    /// `AND ( other )`.
    pub fn and_query(self, other: &QueryBuilder) -> SyntaxResult<Self> {
        self.and()?.begin().include(other).end()
    }

    /// Copy another builder's rendered content in at the current position.
    ///
    /// Composition is by value: the segments are copied, re-based at the
    /// current group depth, and never re-escaped. The other builder's own
    /// completeness is not validated here; that stays deferred to
    /// [`check`](Self::check) on whoever renders last.
    pub fn include(mut self, other: &QueryBuilder) -> Self {
        self.pending_op = false;
        let base = self.indent();
        for seg in &other.segments {
            self.push(base + seg.indent, seg.text.clone());
        }
        self
    }

    /// Whether the expression is terminally well-formed as it stands.
    ///
    /// Pure predicate: no side effects, never fails.
    pub fn is_valid(&self) -> bool {
        self.open_depth == 0 && !self.pending_op
    }

    fn validate(&self) -> SyntaxResult<()> {
        if self.open_depth > 0 {
            return Err(SyntaxError::UnclosedGroup {
                count: self.open_depth as u64,
            });
        }
        if self.open_depth < 0 {
            return Err(SyntaxError::UnopenedGroup {
                count: self.open_depth.unsigned_abs(),
            });
        }
        if self.pending_op {
            return Err(SyntaxError::MissingTermAfterOperator);
        }
        Ok(())
    }

    /// Validate terminal state, passing the builder through unchanged.
    ///
    /// Checked in order: unclosed groups, excess closes, pending operator.
    pub fn check(self) -> SyntaxResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// [`check`](Self::check) that, on failure, best-effort emits the
    /// malformed pretty text to the error channel before returning the
    /// error.
    pub fn check_logged(self, log: &dyn QueryLog) -> SyntaxResult<Self> {
        if let Err(err) = self.validate() {
            if log.enabled(Level::Error) {
                log.emit(Level::Error, &self.render_pretty());
            }
            return Err(err);
        }
        Ok(self)
    }

    /// Compact single-line rendering: tokens, operators and punctuation
    /// only. This is the wire form consumers parse.
    pub fn render(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Pretty rendering for inspection: every structural element on its own
    /// line, one tab per group open at the point it was appended.
    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            out.push('\n');
            for _ in 0..seg.indent {
                out.push_str(INDENT);
            }
            out.push_str(&seg.text);
        }
        out
    }

    /// Emit the compact rendering to `log` if `level` is enabled, passing
    /// the builder through unchanged.
    pub fn log(self, log: &dyn QueryLog, level: Level) -> Self {
        if log.enabled(level) {
            log.emit(level, &self.render());
        }
        self
    }

    /// Emit the compact rendering at debug level.
    pub fn log_debug(self, log: &dyn QueryLog) -> Self {
        self.log(log, Level::Debug)
    }

    /// Emit the compact rendering at info level.
    pub fn log_info(self, log: &dyn QueryLog) -> Self {
        self.log(log, Level::Info)
    }

    /// Emit the compact rendering at warn level.
    pub fn log_warn(self, log: &dyn QueryLog) -> Self {
        self.log(log, Level::Warn)
    }

    /// Emit the compact rendering at error level.
    pub fn log_error(self, log: &dyn QueryLog) -> Self {
        self.log(log, Level::Error)
    }

    /// Print the pretty rendering to the console, passing the builder
    /// through unchanged.
    pub fn print(self) -> Self {
        println!("{}", self.render_pretty());
        self
    }
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
