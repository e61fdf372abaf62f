//! Error-related types for a [`Resource`](crate::resource::Resource).

use std::error::Error;
use std::sync::Arc;

/// Alias for `Result<T, ResourceError>`.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Possible errors for a [`Resource`](crate::resource::Resource) operation.
///
/// The taxonomy is deliberately closed and small, mirroring HTTP semantics
/// (see [`ResourceError::http_status`]); callers are expected to branch on
/// the kind, e.g. to distinguish DRM-locked content from missing content.
///
/// Transformation layers never introduce kinds of their own: a proxy passes
/// the wrapped resource's result through unchanged, and derived operations
/// wrap processing failures as [`ResourceError::Other`].
#[derive(thiserror::Error, Clone, Debug)]
pub enum ResourceError {
    /// The requested content does not exist.
    #[error("resource not found")]
    NotFound,

    /// Access to the content is not allowed, such as DRM-locked content.
    #[error("access to the resource is forbidden")]
    Forbidden,

    /// The content exists although cannot currently be served,
    /// such as a closed or exhausted underlying handle.
    #[error("the resource is unavailable")]
    Unavailable,

    /// Reading or processing the content failed for any other reason,
    /// such as I/O failures or undecodable structured content.
    ///
    /// The cause is reference-counted so results containing it stay
    /// cloneable; a [`FailureResource`](crate::resource::FailureResource)
    /// yields its fixed error on every call.
    #[error("resource processing failed: {0}")]
    Other(Arc<dyn Error + Send + Sync + 'static>),
}

impl ResourceError {
    /// Wraps an arbitrary cause as [`ResourceError::Other`].
    ///
    /// An existing [`ResourceError`] must be propagated as-is instead of
    /// re-wrapped; this constructor is for foreign causes only.
    pub fn other(cause: impl Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(cause))
    }

    /// The HTTP status code equivalent of this error kind, for boundaries
    /// exposing resources over an HTTP-like surface:
    ///
    /// | Kind                               | Status |
    /// |------------------------------------|--------|
    /// | [`NotFound`](Self::NotFound)       | `404`  |
    /// | [`Forbidden`](Self::Forbidden)     | `403`  |
    /// | [`Unavailable`](Self::Unavailable) | `503`  |
    /// | [`Other`](Self::Other)             | `500`  |
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::Unavailable => 503,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        let io = std::io::Error::other("broken pipe");

        assert_eq!(404, ResourceError::NotFound.http_status());
        assert_eq!(403, ResourceError::Forbidden.http_status());
        assert_eq!(503, ResourceError::Unavailable.http_status());
        assert_eq!(500, ResourceError::other(io).http_status());
    }

    #[test]
    fn test_other_display_includes_cause() {
        let error = ResourceError::other(std::io::Error::other("broken pipe"));
        assert_eq!("resource processing failed: broken pipe", error.to_string());
    }

    #[test]
    fn test_clone_preserves_kind() {
        let error = ResourceError::other(std::io::Error::other("io"));
        assert!(matches!(error.clone(), ResourceError::Other(_)));
    }
}
