//! Error types for script construction.

/// Broad category of a [`ScriptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A stream or query name was registered twice.
    DuplicateName,
    /// An insert or expectation refers to something never declared.
    UnknownReference,
    /// An operation needed a previous entry that does not exist.
    OutOfRange,
    /// A required name or text argument was empty.
    EmptyArgument,
}

/// Errors raised by [`ScriptBuilder`](crate::ScriptBuilder) and its scopes.
///
/// All of them are usage errors in fixture-authoring code. They are returned
/// from the offending call and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A stream with this name is already defined.
    #[error("duplicate stream {0}")]
    DuplicateStream(String),

    /// A query with this name is already registered.
    #[error("duplicate query {0}")]
    DuplicateQuery(String),

    /// An insert targets a stream that is not in the definitions.
    #[error("unknown target {0}; must occur in the definitions")]
    UnknownTarget(String),

    /// An expectation refers to a query that was never registered.
    #[error("unknown query {0}")]
    UnknownQuery(String),

    /// `not_null()` was called before any column was added.
    #[error("no previous column in stream {stream}")]
    NoPreviousColumn {
        /// Stream whose column list is empty.
        stream: String,
    },

    /// A required argument was empty.
    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),
}

impl ScriptError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateStream(_) | Self::DuplicateQuery(_) => ErrorKind::DuplicateName,
            Self::UnknownTarget(_) | Self::UnknownQuery(_) => ErrorKind::UnknownReference,
            Self::NoPreviousColumn { .. } => ErrorKind::OutOfRange,
            Self::EmptyArgument(_) => ErrorKind::EmptyArgument,
        }
    }
}

/// Result type for script construction.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Fails with [`ScriptError::EmptyArgument`] when `value` is empty.
pub(crate) fn require(value: &str, what: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(ScriptError::EmptyArgument(what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            ScriptError::DuplicateStream("S1".into()).to_string(),
            "duplicate stream S1"
        );
        assert_eq!(
            ScriptError::DuplicateQuery("Q1".into()).to_string(),
            "duplicate query Q1"
        );
        assert_eq!(
            ScriptError::UnknownTarget("X".into()).to_string(),
            "unknown target X; must occur in the definitions"
        );
        assert_eq!(
            ScriptError::UnknownQuery("Q".into()).to_string(),
            "unknown query Q"
        );
        assert_eq!(
            ScriptError::EmptyArgument("query name").to_string(),
            "query name must not be empty"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            ScriptError::DuplicateQuery("Q".into()).kind(),
            ErrorKind::DuplicateName
        );
        assert_eq!(
            ScriptError::UnknownQuery("Q".into()).kind(),
            ErrorKind::UnknownReference
        );
        assert_eq!(
            ScriptError::NoPreviousColumn {
                stream: "S".into()
            }
            .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            ScriptError::EmptyArgument("x").kind(),
            ErrorKind::EmptyArgument
        );
    }

    #[test]
    fn test_require() {
        assert!(require("S", "stream name").is_ok());
        assert_eq!(
            require("", "stream name"),
            Err(ScriptError::EmptyArgument("stream name"))
        );
    }
}
