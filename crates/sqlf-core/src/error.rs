//! Error types for query composition.

/// Errors returned while composing or rendering a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The template's verbs do not line up with the supplied arguments, or a
    /// `%` is not followed by a verb.
    #[error("Malformed template at byte {position}: {message}")]
    MalformedTemplate {
        /// Byte offset into the template where the problem was found.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// A value cannot be represented by the requested rendering or driver.
    #[error("Unsupported value type: {kind}")]
    UnsupportedType {
        /// The offending value's kind, as reported by [`SqlValue::kind`](crate::SqlValue::kind).
        kind: &'static str,
    },

    /// A dialect name did not match any built-in dialect.
    #[error("Unknown dialect '{0}'")]
    UnknownDialect(String),
}

impl Error {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            position,
            message: message.into(),
        }
    }
}

/// Result type for composition operations.
pub type Result<T> = std::result::Result<T, Error>;
