//! Catalog error types.

use std::fmt;

use thiserror::Error;

/// The three record families held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Artist,
    Album,
    Song,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Artist => "Artist",
            ResourceKind::Album => "Album",
            ResourceKind::Song => "Song",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{kind} not found")]
    NotFound { kind: ResourceKind, id: u64 },

    #[error("{0}")]
    Validation(String),
}

impl CatalogError {
    pub fn not_found(kind: ResourceKind, id: u64) -> Self {
        CatalogError::NotFound { kind, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Display messages ──────────────────────────────────────────────

    #[test]
    fn test_display_not_found() {
        let err = CatalogError::not_found(ResourceKind::Artist, 99);
        assert_eq!(err.to_string(), "Artist not found");
    }

    #[test]
    fn test_display_not_found_keeps_id() {
        let err = CatalogError::not_found(ResourceKind::Song, 7);
        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: ResourceKind::Song,
                id: 7
            }
        ));
        assert_eq!(err.to_string(), "Song not found");
    }

    #[test]
    fn test_display_validation() {
        let err = CatalogError::Validation("title must not be blank".into());
        assert_eq!(err.to_string(), "title must not be blank");
    }

    // ── Error trait source chain ──────────────────────────────────────

    #[test]
    fn test_error_has_no_source() {
        use std::error::Error;
        let err = CatalogError::not_found(ResourceKind::Album, 1);
        assert!(err.source().is_none());
    }
}
