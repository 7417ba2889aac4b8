//! Error types for gemtext

use std::sync::Arc;

use thiserror::Error;

use crate::LineKind;

/// Terminal failure reported by the line scanner.
///
/// Once a scanner has produced one of these it stops permanently and
/// keeps reporting the same error. The type is cheap to clone so that
/// callers can carry it away while the scanner keeps its copy.
#[derive(Error, Debug, Clone)]
pub enum ScanError {
    /// The underlying byte source failed
    #[error("error reading source: {0}")]
    SourceRead(Arc<std::io::Error>),

    /// A physical line did not fit in the maximum buffer size
    #[error("line {line} is longer than the maximum line size of {max} bytes")]
    LineTooLarge {
        /// Number of the line that was being read
        line: usize,
        /// Configured maximum line size
        max: usize,
    },
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::SourceRead(Arc::new(err))
    }
}

/// Main error type for gemtext operations
#[derive(Error, Debug)]
pub enum GemtextError {
    /// The scanner stopped with an error while rendering
    #[error("scan error converting to HTML: {0}")]
    Scan(#[from] ScanError),

    /// The renderer received a line kind it has no rule for
    #[error("line {line}: no rule for writing {kind} line")]
    UnsupportedLineKind {
        /// Line number being rendered
        line: usize,
        /// Kind that could not be rendered
        kind: LineKind,
    },

    /// The renderer was built without a scanner
    #[error("programmer error: scanner not initialized for renderer")]
    MisconfiguredRenderer,

    /// Writing to the output sink failed
    #[error("line {line}: error writing {kind}: {source}")]
    Write {
        /// Line number being rendered
        line: usize,
        /// Kind of the line being rendered
        kind: LineKind,
        /// Underlying write error
        #[source]
        source: std::io::Error,
    },

    /// The renderer already failed and will not read further lines
    #[error("line {line}: renderer stopped after an earlier error")]
    Halted {
        /// Line number the renderer stopped at
        line: usize,
    },

    /// IO error outside of rendering (files, config)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gemtext operations
pub type Result<T> = std::result::Result<T, GemtextError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_write_error_message() {
        let err = GemtextError::Write {
            line: 7,
            kind: LineKind::Link,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert_eq!(err.to_string(), "line 7: error writing Link: pipe closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_scan_error_wraps() {
        let err: GemtextError = ScanError::LineTooLarge { line: 3, max: 25 }.into();
        assert_eq!(
            err.to_string(),
            "scan error converting to HTML: line 3 is longer than the maximum line size of 25 bytes"
        );
    }

    #[test]
    fn test_halted_message() {
        let err = GemtextError::Halted { line: 2 };
        assert_eq!(err.to_string(), "line 2: renderer stopped after an earlier error");
    }

    #[test]
    fn test_source_read_is_cloneable() {
        let err = ScanError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        let copy = err.clone();
        assert_eq!(err.to_string(), copy.to_string());
        assert_eq!(copy.to_string(), "error reading source: boom");
    }
}
