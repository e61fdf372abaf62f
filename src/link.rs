//! [`Link`] metadata describing where a [`Resource`](crate::resource::Resource)
//! points and how its content is encoded.

use crate::mediatype::MediaType;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Metadata associated with a [`Resource`](crate::resource::Resource).
///
/// Each link consists of:
/// 1. An `href` locating the data within the container,
///    such as a relative path (`"OEBPS/fonts/chapter.otf"`).
/// 2. A [`MediaType`], indicating the data's kind, such as
///    determining if it's an `OTF` font.
/// 3. [`Properties`], carrying container-declared details such as
///    [`Encryption`] information.
///
/// # Examples
/// - Creating a [`Link`] for an obfuscated font:
/// ```
/// # use rsource::link::{Encryption, Link};
/// let link = Link::new("OEBPS/fonts/title.otf", "font/otf")
///     .with_encryption(Encryption::new("http://www.idpf.org/2008/embedding"));
///
/// assert_eq!("OEBPS/fonts/title.otf", link.href());
/// assert!(link.media_type().is_font());
/// assert_eq!(
///     Some("http://www.idpf.org/2008/embedding"),
///     link.encryption().map(Encryption::algorithm),
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    href: String,
    media_type: MediaType<'static>,
    properties: Properties,
}

impl Link {
    /// Creates a new link from an `href` and a [`MediaType`].
    pub fn new(href: impl Into<String>, media_type: impl Into<MediaType<'static>>) -> Self {
        Self {
            href: href.into(),
            media_type: media_type.into(),
            properties: Properties::default(),
        }
    }

    /// The raw `href`, possibly containing percent-escapes.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The `href` with percent-escapes decoded
    /// (`"fonts/front%20matter.otf"` → `"fonts/front matter.otf"`).
    pub fn decoded_href(&self) -> Cow<'_, str> {
        percent_encoding::percent_decode_str(&self.href).decode_utf8_lossy()
    }

    /// The [`MediaType`], indicating if a resource is an `XHTML` file,
    /// `OTF` font, `CSS` stylesheet, etc.
    ///
    /// Decorators may report a corrected media type here without the
    /// underlying link being aware; see [`Link::with_media_type`].
    pub fn media_type(&self) -> &MediaType<'static> {
        &self.media_type
    }

    /// Container-declared [`Properties`], such as encryption details.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Shorthand for [`Properties::encryption`].
    pub fn encryption(&self) -> Option<&Encryption> {
        self.properties.encryption()
    }

    /// Returns this link with the given corrected [`MediaType`],
    /// retaining every other field.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<MediaType<'static>>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Returns this link with the given [`Encryption`] properties,
    /// retaining every other field.
    #[must_use]
    pub fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.properties.encryption = Some(encryption);
        self
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.media_type, self.href)
    }
}

impl<Href: Into<String>, Kind: Into<MediaType<'static>>> From<(Href, Kind)> for Link {
    fn from((href, media_type): (Href, Kind)) -> Self {
        Self::new(href, media_type)
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Self::new(href, MediaType::UNSPECIFIED)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Self::new(href, MediaType::UNSPECIFIED)
    }
}

/// Additional container-declared properties of a [`Link`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    encryption: Option<Encryption>,
}

impl Properties {
    /// The declared [`Encryption`] information, [`None`] when the
    /// content is stored in the clear.
    pub fn encryption(&self) -> Option<&Encryption> {
        self.encryption.as_ref()
    }
}

/// Encryption information declared for a single resource, typically parsed
/// from an OCF `META-INF/encryption.xml` entry.
///
/// Only [`algorithm`](Encryption::algorithm) participates in deobfuscation;
/// the remaining fields are retained for consumers that need to undo
/// compression or recognize a DRM scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct Encryption {
    algorithm: String,
    compression: Option<String>,
    original_length: Option<u64>,
    scheme: Option<String>,
}

impl Encryption {
    /// Creates encryption properties from an algorithm identifier URI.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            compression: None,
            original_length: None,
            scheme: None,
        }
    }

    /// The URI identifying the algorithm applied to the content,
    /// compared by exact, case-sensitive match.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The name of the compression applied before encryption, if any.
    pub fn compression(&self) -> Option<&str> {
        self.compression.as_deref()
    }

    /// The declared length of the content before encryption/compression.
    pub fn original_length(&self) -> Option<u64> {
        self.original_length
    }

    /// The URI identifying the DRM scheme protecting the content, if any.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns these properties with the given compression name.
    #[must_use]
    pub fn with_compression(mut self, compression: impl Into<String>) -> Self {
        self.compression = Some(compression.into());
        self
    }

    /// Returns these properties with the given pre-encryption length.
    #[must_use]
    pub fn with_original_length(mut self, original_length: u64) -> Self {
        self.original_length = Some(original_length);
        self
    }

    /// Returns these properties with the given DRM scheme URI.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}
