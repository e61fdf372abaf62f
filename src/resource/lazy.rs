use crate::link::Link;
use crate::resource::errors::{ResourceError, ResourceResult};
use crate::resource::Resource;
use crate::util::sync::Lock;
use log::debug;
use std::ops::Range;

#[cfg(feature = "threadsafe")]
type ResourceFactory = Box<dyn Fn() -> Box<dyn Resource> + Send + Sync>;
#[cfg(not(feature = "threadsafe"))]
type ResourceFactory = Box<dyn Fn() -> Box<dyn Resource>>;

enum State {
    /// The factory has not been invoked yet.
    Pending,
    Open(Box<dyn Resource>),
    Closed,
}

/// A [`Resource`] deferring creation of an underlying resource to
/// first access.
///
/// The [`Link`] metadata is known upfront (a container manifest declares it
/// before any entry is opened), while the factory runs on the first call to
/// [`length`](Resource::length) or [`read`](Resource::read). After
/// [`close`](Resource::close), subsequent reads report
/// [`ResourceError::Unavailable`].
///
/// # Examples
/// - Deferring an expensive resource until a read occurs:
/// ```
/// # use rsource::link::Link;
/// # use rsource::resource::{DataResource, LazyResource, Resource};
/// let lazy = LazyResource::new(Link::from("cover.jpg"), || {
///     // Runs once, on first access
///     Box::new(DataResource::new("cover.jpg", vec![0xFF, 0xD8]))
/// });
///
/// assert_eq!(vec![0xFF, 0xD8], lazy.read(None).unwrap());
/// lazy.close();
/// assert!(lazy.read(None).is_err());
/// ```
pub struct LazyResource {
    link: Link,
    factory: ResourceFactory,
    state: Lock<State>,
}

impl LazyResource {
    /// Creates a resource that invokes `factory` on first access.
    #[cfg(feature = "threadsafe")]
    pub fn new(link: Link, factory: impl Fn() -> Box<dyn Resource> + Send + Sync + 'static) -> Self {
        Self {
            link,
            factory: Box::new(factory),
            state: Lock::new(State::Pending),
        }
    }

    /// Creates a resource that invokes `factory` on first access.
    #[cfg(not(feature = "threadsafe"))]
    pub fn new(link: Link, factory: impl Fn() -> Box<dyn Resource> + 'static) -> Self {
        Self {
            link,
            factory: Box::new(factory),
            state: Lock::new(State::Pending),
        }
    }

    /// Runs `operation` against the materialized resource,
    /// invoking the factory beforehand when still pending.
    fn with_resource<T>(
        &self,
        operation: impl FnOnce(&dyn Resource) -> ResourceResult<T>,
    ) -> ResourceResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ResourceError::Unavailable)?;

        match &*state {
            State::Pending => {
                debug!("materializing lazy resource: {}", self.link);
                let resource = (self.factory)();
                let result = operation(resource.as_ref());
                *state = State::Open(resource);
                result
            }
            State::Open(resource) => operation(resource.as_ref()),
            State::Closed => Err(ResourceError::Unavailable),
        }
    }
}

impl Resource for LazyResource {
    fn link(&self) -> Link {
        self.link.clone()
    }

    fn length(&self) -> ResourceResult<u64> {
        self.with_resource(|resource| resource.length())
    }

    fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
        self.with_resource(|resource| resource.read(range))
    }

    fn close(&self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if let State::Open(resource) = &*state {
            resource.close();
        }
        // A pending factory is dropped unused; closing before any
        // read must not materialize the resource.
        *state = State::Closed;
    }
}
