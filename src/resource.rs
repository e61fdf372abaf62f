//! The [`Resource`] capability trait and its reference implementations.
//!
//! # Overview
//! A [`Resource`] is an addressable, range-readable source of bytes with
//! associated [`Link`] metadata. Producers (such as a container reader)
//! construct raw resources; zero or more decorator layers may then wrap
//! them before a consumer reads byte ranges.
//!
//! ## Core Components
//! - [`errors`]: Resource-related error types.
//! - [`DataResource`]: An immutable in-memory resource.
//! - [`FailureResource`]: A resource that always fails with a fixed error.
//! - [`LazyResource`]: A resource deferring creation to first access.
//! - [`ResourceProxy`]: The decorator base, forwarding by default.
//! - [`ResourceTransformer`]: The `Resource -> Resource` pipeline contract.

pub mod errors;

mod data;
mod failure;
mod lazy;
mod proxy;
mod transform;

pub use self::data::DataResource;
pub use self::failure::FailureResource;
pub use self::lazy::LazyResource;
pub use self::proxy::ResourceProxy;
pub use self::transform::{ResourceTransformer, TransformChain};
pub use crate::util::sync::SendAndSync;

use crate::link::Link;
use crate::resource::errors::{ResourceError, ResourceResult};
use crate::util::encoding;
use std::ops::Range;

/// An addressable, range-readable source of bytes with associated
/// [`Link`] metadata.
///
/// # Lifecycle
/// A resource is constructed by a producer, optionally wrapped zero or more
/// times by [proxies](ResourceProxy)/[transformers](ResourceTransformer),
/// read zero or more times (reads are idempotent and may be repeated), and
/// explicitly [closed](Resource::close) to release any underlying handle.
///
/// # Concurrency
/// Under the `threadsafe` feature (default), every implementation is
/// [`Send`] + [`Sync`], and reads for different, possibly overlapping
/// ranges may be issued concurrently against the same instance.
///
/// # Examples
/// - Reading a byte range from an in-memory resource:
/// ```
/// # use rsource::resource::{DataResource, Resource};
/// let resource = DataResource::new("greeting.txt", b"hello world".to_vec());
///
/// assert_eq!(b"hello", resource.read(Some(0..5)).unwrap().as_slice());
/// // Out-of-bounds bounds are clamped, not rejected:
/// assert_eq!(b"world", resource.read(Some(6..999)).unwrap().as_slice());
/// resource.close();
/// ```
pub trait Resource: SendAndSync {
    /// The current [`Link`] metadata of this resource.
    ///
    /// Decorators may enrich the returned link, such as reporting a
    /// corrected media type, but must retain the remaining fields.
    fn link(&self) -> Link;

    /// An advisory length hint, in bytes.
    ///
    /// The true length is only guaranteed by reading all bytes; decorators
    /// that change the content length may be unable to correct this hint.
    ///
    /// # Errors
    /// Any [`ResourceError`] from the underlying source.
    fn length(&self) -> ResourceResult<u64>;

    /// Reads the half-open byte range `[start, end)`, or the entire
    /// content when `range` is [`None`].
    ///
    /// Bounds exceeding the available length are clamped silently; a
    /// range that is empty after clamping yields an empty byte vector.
    /// A read never fails solely because of an out-of-bounds range.
    ///
    /// # Errors
    /// Any [`ResourceError`] from the underlying source.
    fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>>;

    /// Releases any underlying handle.
    ///
    /// Closing is idempotent, safe to call when no read ever occurred,
    /// and propagates through every decorator layer to the innermost
    /// resource.
    fn close(&self);

    /// Reads the entire content as a string.
    ///
    /// The encoding is resolved from `charset` when given, else from the
    /// [`charset`](crate::mediatype::MediaType::charset) declared by the
    /// link's media type, else UTF-8. Content that cannot be decoded
    /// degrades to an empty string rather than failing.
    ///
    /// # Errors
    /// Any [`ResourceError`] from [`Resource::read`].
    fn read_string(&self, charset: Option<&str>) -> ResourceResult<String> {
        let bytes = self.read(None)?;
        let link = self.link();
        let charset = charset.or_else(|| link.media_type().charset());

        Ok(encoding::decode(bytes, charset))
    }

    /// Reads and parses the entire content as JSON.
    ///
    /// # Errors
    /// - Any [`ResourceError`] from [`Resource::read`], unchanged.
    /// - [`ResourceError::Other`]: When the content is not valid JSON.
    fn read_json(&self) -> ResourceResult<serde_json::Value> {
        serde_json::from_slice(&self.read(None)?).map_err(ResourceError::other)
    }
}

/// Clamps an optional requested range to `[0, length)`.
///
/// An inverted range collapses to the empty range at its clamped start.
pub(crate) fn clamp_range(range: Option<Range<u64>>, length: u64) -> Range<u64> {
    match range {
        None => 0..length,
        Some(range) => {
            let start = range.start.min(length);
            start..range.end.min(length).max(start)
        }
    }
}
