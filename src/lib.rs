//! # rsource
//!
//! A lazy, range-addressable resource layer for packaged ebooks, with
//! transparent EPUB font deobfuscation.
//!
//! ## Overview
//! `rsource` provides the plumbing between a container reader and a
//! renderer or parser:
//! - [`resource`]: The [`Resource`](resource::Resource) capability trait
//!   (range-readable bytes with HTTP-like error semantics), its reference
//!   implementations, the [`ResourceProxy`](resource::ResourceProxy)
//!   decorator base, and the
//!   [`ResourceTransformer`](resource::ResourceTransformer) pipeline
//!   contract.
//! - [`obfuscation`]: Transparent removal of the IDPF and Adobe EPUB
//!   font-obfuscation schemes.
//! - [`link`] / [`mediatype`]: The metadata a resource carries.
//!
//! ## Examples
//! Reading ranges from a resource:
//! ```
//! use rsource::resource::{DataResource, Resource};
//!
//! let resource = DataResource::new(
//!     ("chapter1.xhtml", "application/xhtml+xml; charset=UTF-8"),
//!     "<p>Call me Ishmael.</p>",
//! );
//!
//! // Ranges are half-open and clamped, never out of bounds:
//! assert_eq!(b"<p>", resource.read(Some(0..3)).unwrap().as_slice());
//! assert_eq!("<p>Call me Ishmael.</p>", resource.read_string(None).unwrap());
//! resource.close();
//! ```
//! Deobfuscating a mangled font through a transformation pipeline:
//! ```
//! use rsource::link::{Encryption, Link};
//! use rsource::obfuscation::EpubDeobfuscator;
//! use rsource::resource::{DataResource, Resource, ResourceTransformer};
//!
//! // As declared by the container's META-INF/encryption.xml:
//! let link = Link::new("fonts/title.otf", "font/otf")
//!     .with_encryption(Encryption::new("http://www.idpf.org/2008/embedding"));
//! let raw = DataResource::new(link, vec![0u8; 2048]);
//!
//! let deobfuscator = EpubDeobfuscator::new("urn:uuid:891a2dc5-a262-4af4-8f18-94c1d8742f06");
//! let font = deobfuscator.transform(Box::new(raw));
//!
//! // The first 1040 bytes are unmasked on every read;
//! // the tail passes through untouched.
//! assert_eq!(vec![0u8; 8], font.read(Some(1040..1048)).unwrap());
//! ```

pub mod link;
pub mod mediatype;
pub mod obfuscation;
pub mod resource;

mod util;

/// Convenient re-exports of the most commonly used types.
///
/// ```
/// use rsource::prelude::*;
///
/// let resource = DataResource::new("a.txt", "abc");
/// assert_eq!(3, resource.length().unwrap());
/// ```
#[cfg(feature = "prelude")]
pub mod prelude {
    pub use crate::link::{Encryption, Link};
    pub use crate::mediatype::MediaType;
    pub use crate::obfuscation::{EpubDeobfuscator, ObfuscationAlgorithm};
    pub use crate::resource::errors::{ResourceError, ResourceResult};
    pub use crate::resource::{
        DataResource, FailureResource, LazyResource, Resource, ResourceProxy,
        ResourceTransformer, TransformChain,
    };
}
