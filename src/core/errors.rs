/*!
 * Error Types
 * Centralized codec error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Boxed engine error carried as the `source` of format failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for all codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Wire format a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    Json,
    Xml,
}

impl WireFormat {
    /// Media type emitted for this format (always UTF-8, never BOM-prefixed)
    pub const fn content_type(self) -> &'static str {
        match self {
            WireFormat::Json => "application/json; charset=utf-8",
            WireFormat::Xml => "application/xml; charset=utf-8",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Json => f.write_str("json"),
            WireFormat::Xml => f.write_str("xml"),
        }
    }
}

/// Coarse failure taxonomy callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Serialization,
    Deserialization,
    Io,
    Cancelled,
}

/// Codec operation errors
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum CodecError {
    #[error("{format} serialization failed: {context}")]
    #[diagnostic(
        code(codec::serialization),
        help("The value graph contains a shape the engine cannot represent.")
    )]
    Serialization {
        format: WireFormat,
        context: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("{format} deserialization failed: {context}")]
    #[diagnostic(
        code(codec::deserialization),
        help("The payload is malformed or does not match the requested type.")
    )]
    Deserialization {
        format: WireFormat,
        context: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("stream payload exceeds limit of {limit} bytes")]
    #[diagnostic(
        code(codec::payload_too_large),
        help("Raise `max_stream_bytes` in the codec options or reject the request upstream.")
    )]
    PayloadTooLarge { limit: usize },

    #[error("stream I/O failed: {0}")]
    #[diagnostic(code(codec::io))]
    Io(#[from] std::io::Error),

    #[error("stream operation cancelled")]
    #[diagnostic(
        code(codec::cancelled),
        help("Partially written output is left on the stream as-is.")
    )]
    Cancelled,
}

impl CodecError {
    #[inline]
    pub(crate) fn serialization<E>(format: WireFormat, context: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        CodecError::Serialization {
            format,
            context,
            source: source.into(),
        }
    }

    #[inline]
    pub(crate) fn deserialization<E>(format: WireFormat, context: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        CodecError::Deserialization {
            format,
            context,
            source: source.into(),
        }
    }

    /// Map this error onto the four-way taxonomy
    pub const fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Serialization { .. } => ErrorKind::Serialization,
            CodecError::Deserialization { .. } | CodecError::PayloadTooLarge { .. } => {
                ErrorKind::Deserialization
            }
            CodecError::Io(_) => ErrorKind::Io,
            CodecError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Wire format involved, if the failure was a format failure
    pub const fn format(&self) -> Option<WireFormat> {
        match self {
            CodecError::Serialization { format, .. }
            | CodecError::Deserialization { format, .. } => Some(*format),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, CodecError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = CodecError::serialization(WireFormat::Json, "test", "boom");
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert_eq!(err.format(), Some(WireFormat::Json));

        let err = CodecError::PayloadTooLarge { limit: 16 };
        assert_eq!(err.kind(), ErrorKind::Deserialization);
        assert_eq!(err.format(), None);

        let err = CodecError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.kind(), ErrorKind::Io);

        assert!(CodecError::Cancelled.is_cancelled());
    }

    #[test]
    fn test_display_includes_format_and_context() {
        let err = CodecError::deserialization(WireFormat::Xml, "document parse", "bad tag");
        assert_eq!(err.to_string(), "xml deserialization failed: document parse");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("bad tag"));
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic;

        let err = CodecError::serialization(WireFormat::Json, "test", "boom");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("codec::serialization"));
        assert!(err.help().is_some());

        let err = CodecError::PayloadTooLarge { limit: 1 };
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("codec::payload_too_large"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(WireFormat::Json.content_type(), "application/json; charset=utf-8");
        assert_eq!(WireFormat::Xml.content_type(), "application/xml; charset=utf-8");
    }
}
