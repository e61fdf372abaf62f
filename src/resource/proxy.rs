use crate::link::Link;
use crate::resource::errors::ResourceResult;
use crate::resource::Resource;
use std::ops::Range;

/// The decorator base for [`Resource`] wrappers: owns exactly one wrapped
/// resource and forwards every operation to it unchanged.
///
/// A decorator embeds a `ResourceProxy` and delegates to it for the
/// operations it does not intercept, overriding only what it needs,
/// most commonly [`read`](Resource::read), transforming the bytes the
/// wrapped resource returned. Delegating [`close`](Resource::close) is
/// not optional: it is how handle-release propagates through arbitrarily
/// deep decorator chains.
///
/// # Examples
/// - A decorator reporting a corrected media type:
/// ```
/// # use rsource::link::Link;
/// # use rsource::resource::errors::ResourceResult;
/// # use rsource::resource::{DataResource, Resource, ResourceProxy};
/// # use std::ops::Range;
/// struct TypedResource {
///     proxy: ResourceProxy,
///     media_type: &'static str,
/// }
///
/// impl Resource for TypedResource {
///     // The intercepted operation:
///     fn link(&self) -> Link {
///         self.proxy.link().with_media_type(self.media_type)
///     }
///
///     // Everything else forwards:
///     fn length(&self) -> ResourceResult<u64> {
///         self.proxy.length()
///     }
///     fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
///         self.proxy.read(range)
///     }
///     fn close(&self) {
///         self.proxy.close();
///     }
/// }
///
/// let raw = DataResource::new("toc.ncx", b"<ncx/>".to_vec());
/// let typed = TypedResource {
///     proxy: ResourceProxy::new(Box::new(raw)),
///     media_type: "application/x-dtbncx+xml",
/// };
///
/// // The corrected type is visible; reads pass through untouched.
/// assert_eq!("application/x-dtbncx+xml", typed.link().media_type().as_str());
/// assert_eq!(b"<ncx/>", typed.read(None).unwrap().as_slice());
/// ```
pub struct ResourceProxy {
    inner: Box<dyn Resource>,
}

impl ResourceProxy {
    /// Wraps `inner`, forwarding every operation to it.
    pub fn new(inner: Box<dyn Resource>) -> Self {
        Self { inner }
    }

    /// The wrapped resource.
    pub fn inner(&self) -> &dyn Resource {
        self.inner.as_ref()
    }

    /// Unwraps this proxy, returning the wrapped resource.
    pub fn into_inner(self) -> Box<dyn Resource> {
        self.inner
    }
}

impl Resource for ResourceProxy {
    fn link(&self) -> Link {
        self.inner.link()
    }

    fn length(&self) -> ResourceResult<u64> {
        self.inner.length()
    }

    fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
        self.inner.read(range)
    }

    fn close(&self) {
        self.inner.close();
    }
}

impl From<Box<dyn Resource>> for ResourceProxy {
    fn from(inner: Box<dyn Resource>) -> Self {
        Self::new(inner)
    }
}
