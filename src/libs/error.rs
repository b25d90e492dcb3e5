//! Error types shared by the planner core.
//!
//! Two kinds of failure exist in playplan. Business-rule failures (a child
//! outside the supported age range, a duplicate activity title, an unknown
//! child) are ordinary return values: `false`, `None` or an empty list.
//! The types here cover the other kind: caller mistakes that should never
//! reach the managers, and malformed data files read in strict mode.

use thiserror::Error;

/// Contract violations detected by the managers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A child name argument was empty or whitespace.
    #[error("Child name cannot be empty")]
    BlankName,

    /// An activity title argument was empty or whitespace.
    #[error("Activity title cannot be empty")]
    BlankTitle,

    /// An activity duration was negative.
    #[error("Activity duration cannot be negative")]
    NegativeDuration,
}

/// Errors raised by the text codec when decoding in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A field value could not be parsed.
    #[error("line {line}: invalid {key} value '{value}'")]
    InvalidField { line: usize, key: String, value: String },

    /// A block start token appeared while a block it cannot nest in was
    /// open: a child inside a child or an activity, or an activity inside
    /// an activity.
    #[error("line {line}: {token} found inside an open block")]
    NestedBlock { line: usize, token: &'static str },

    /// An activity block was opened outside of a child block.
    #[error("line {line}: ACTIVITY_START found outside of a child block")]
    OrphanActivity { line: usize },

    /// The input ended while a block was still open.
    #[error("unexpected end of data: {token} is missing")]
    UnterminatedBlock { token: &'static str },
}
