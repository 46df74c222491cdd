//! Typed search errors.
//!
//! An unreachable goal is not an error: it yields a result with an empty
//! path. `SearchError` covers invalid caller input, reported before any
//! search step runs, and the internal fault raised by the path cycle guard.

use std::fmt;

use pathgrid_core::{Cell, GridError};

/// Failure of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid dimensions or an endpoint were rejected.
    InvalidArgument(GridError),
    /// Path reconstruction revisited `cell` while following parent links.
    ///
    /// The engines only ever link a cell to an already-expanded predecessor,
    /// so this indicates a malformed parent map.
    InternalInconsistency { cell: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Self::InternalInconsistency { cell } => {
                write!(f, "internal inconsistency: parent links cycle through {cell}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::InternalInconsistency { .. } => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::InvalidArgument(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn grid_errors_become_invalid_argument() {
        let err: SearchError = GridError::InvalidDimensions { rows: 0, cols: 2 }.into();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid argument: grid dimensions must be positive, got 0x2"
        );
    }

    #[test]
    fn inconsistency_message_names_cell() {
        let err = SearchError::InternalInconsistency {
            cell: Cell::new(1, 2),
        };
        assert!(err.to_string().contains("(1, 2)"));
        assert!(err.source().is_none());
    }
}
