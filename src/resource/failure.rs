use crate::link::Link;
use crate::resource::Resource;
use crate::resource::errors::{ResourceError, ResourceResult};
use std::ops::Range;

/// A [`Resource`] that always fails with a fixed [`ResourceError`].
///
/// Stands in for content a producer knows upfront it cannot serve, such
/// as a DRM-locked entry ([`ResourceError::Forbidden`]) or a manifest item
/// missing from the container ([`ResourceError::NotFound`]).
/// [`close`](Resource::close) is a no-op.
///
/// # Examples
/// ```
/// # use rsource::resource::errors::ResourceError;
/// # use rsource::resource::{FailureResource, Resource};
/// let locked = FailureResource::new("chapter1.xhtml", ResourceError::Forbidden);
///
/// assert!(matches!(locked.length(), Err(ResourceError::Forbidden)));
/// assert!(matches!(locked.read(None), Err(ResourceError::Forbidden)));
/// ```
pub struct FailureResource {
    link: Link,
    error: ResourceError,
}

impl FailureResource {
    /// Creates a resource yielding `error` for every fallible operation.
    pub fn new(link: impl Into<Link>, error: ResourceError) -> Self {
        Self {
            link: link.into(),
            error,
        }
    }
}

impl Resource for FailureResource {
    fn link(&self) -> Link {
        self.link.clone()
    }

    fn length(&self) -> ResourceResult<u64> {
        Err(self.error.clone())
    }

    fn read(&self, _range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
        Err(self.error.clone())
    }

    fn close(&self) {}
}
