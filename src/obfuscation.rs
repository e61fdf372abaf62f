//! Removal of the EPUB OCF font-obfuscation schemes.
//!
//! # Overview
//! An EPUB container may mask the first bytes of specific resources
//! (typically embedded fonts) with a keystream derived from the
//! publication identifier, deterring casual copying without being
//! encryption. [`EpubDeobfuscator`] undoes this transparently: given a
//! [`Resource`] whose [`Link`] declares a known algorithm, it returns a
//! decorator that XORs the obfuscated prefix back on every read.
//!
//! Unknown or absent schemes are passthrough, never errors; an
//! unrecognized scheme should not make the rest of a publication
//! unreadable.

use crate::link::{Encryption, Link};
use crate::resource::errors::ResourceResult;
use crate::resource::{Resource, ResourceProxy, ResourceTransformer};
use log::{debug, warn};
use sha1::{Digest, Sha1};
use std::ops::Range;

/// The two obfuscation schemes specified for EPUB OCF containers.
///
/// Each algorithm is a pure, stateless strategy: an identifying URI, a
/// fixed obfuscated-prefix length, and a key derivation from a publication
/// identifier. The set is closed by specification and not extensible.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum ObfuscationAlgorithm {
    /// The IDPF font-mangling algorithm
    /// (`http://www.idpf.org/2008/embedding`): the first 1040 bytes are
    /// XORed with the 20-byte raw SHA-1 digest of the publication
    /// identifier.
    Idpf,

    /// The Adobe font-mangling algorithm
    /// (`http://ns.adobe.com/pdf/enc#RC`): the first 1024 bytes are XORed
    /// with the publication UUID decoded into its 16 raw bytes.
    Adobe,
}

impl ObfuscationAlgorithm {
    /// Every available algorithm strategy.
    pub const ALL: [ObfuscationAlgorithm; 2] = [Self::Idpf, Self::Adobe];

    /// The URI identifying this algorithm within container metadata,
    /// such as an OCF `encryption.xml` entry.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Idpf => "http://www.idpf.org/2008/embedding",
            Self::Adobe => "http://ns.adobe.com/pdf/enc#RC",
        }
    }

    /// The length, in bytes, of the obfuscated prefix.
    ///
    /// Bytes at offsets at or beyond this length are never transformed.
    pub fn obfuscated_length(self) -> u64 {
        match self {
            Self::Idpf => 1040,
            Self::Adobe => 1024,
        }
    }

    /// Returns the algorithm matching `identifier` by exact,
    /// case-sensitive comparison, otherwise [`None`].
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.identifier() == identifier)
    }

    /// Derives the obfuscation key from a publication identifier.
    ///
    /// Derivation is pure and total: the same identifier yields the same
    /// key on every call, and a malformed identifier produces a
    /// best-effort key rather than failing.
    ///
    /// - [`Idpf`](Self::Idpf): the raw 20-byte SHA-1 digest of the
    ///   identifier (not its hex text).
    /// - [`Adobe`](Self::Adobe): the identifier with the literal prefix
    ///   `urn:uuid:` and all hyphens removed, hex-decoded into raw bytes
    ///   (16 for a well-formed UUID). Non-hex characters are skipped and
    ///   a trailing unpaired digit is truncated.
    pub fn derive_key(self, publication_id: &str) -> Vec<u8> {
        match self {
            Self::Idpf => Sha1::digest(publication_id.as_bytes()).to_vec(),
            Self::Adobe => {
                let mut hex_text: String = publication_id
                    .replace("urn:uuid:", "")
                    .chars()
                    .filter(char::is_ascii_hexdigit)
                    .collect();
                // Two hex characters per output byte
                hex_text.truncate(hex_text.len() & !1);

                hex::decode(hex_text).unwrap_or_default()
            }
        }
    }
}

/// A [`ResourceTransformer`] undoing EPUB font obfuscation.
///
/// Holds the publication identifier, normalized once at construction by
/// stripping every XML whitespace code point.
/// [`deobfuscate`](EpubDeobfuscator::deobfuscate) inspects a resource's
/// declared encryption algorithm and wraps the resource in a
/// deobfuscating decorator when the algorithm is recognized.
///
/// # Examples
/// - Deobfuscating an IDPF-mangled font:
/// ```
/// # use rsource::link::{Encryption, Link};
/// # use rsource::obfuscation::{EpubDeobfuscator, ObfuscationAlgorithm};
/// # use rsource::resource::{DataResource, Resource};
/// let publication_id = "urn:uuid:1234";
/// let key = ObfuscationAlgorithm::Idpf.derive_key(publication_id);
///
/// // An obfuscated font: every masked byte is `original ^ keystream`.
/// let obfuscated: Vec<u8> = b"OTTO rest of a font file"
///     .iter()
///     .enumerate()
///     .map(|(i, byte)| byte ^ key[i % key.len()])
///     .collect();
/// let link = Link::new("fonts/title.otf", "font/otf")
///     .with_encryption(Encryption::new("http://www.idpf.org/2008/embedding"));
///
/// let deobfuscator = EpubDeobfuscator::new(publication_id);
/// let font = deobfuscator.deobfuscate(Box::new(DataResource::new(link, obfuscated)));
///
/// assert_eq!(b"OTTO", font.read(Some(0..4)).unwrap().as_slice());
/// ```
pub struct EpubDeobfuscator {
    publication_id: String,
}

impl EpubDeobfuscator {
    /// Creates a deobfuscator for the publication identified by
    /// `publication_id`.
    ///
    /// XML whitespace code points (space, tab, carriage return, line
    /// feed) are stripped from the identifier here, exactly once, before
    /// any key derivation.
    pub fn new(publication_id: impl AsRef<str>) -> Self {
        let publication_id = publication_id
            .as_ref()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect();

        Self { publication_id }
    }

    /// Wraps `resource` in a deobfuscating decorator when its [`Link`]
    /// declares a recognized encryption algorithm, otherwise returns the
    /// input unchanged.
    ///
    /// This operation never fails: absent encryption metadata and unknown
    /// algorithm identifiers are transparent passthrough. Unknown schemes
    /// simply remain obfuscated, which keeps conforming content readable.
    pub fn deobfuscate(&self, resource: Box<dyn Resource>) -> Box<dyn Resource> {
        let link = resource.link();
        let Some(identifier) = link.encryption().map(Encryption::algorithm) else {
            return resource;
        };
        let Some(algorithm) = ObfuscationAlgorithm::from_identifier(identifier) else {
            warn!("unrecognized encryption scheme for {link}: {identifier}");
            return resource;
        };

        // Derived once; reused across every read of the returned resource
        let key = algorithm.derive_key(&self.publication_id);
        if key.is_empty() {
            warn!("empty obfuscation key for {link}; leaving content obfuscated");
            return resource;
        }
        debug!("deobfuscating {link} via {:?}", algorithm);

        Box::new(DeobfuscatingResource {
            proxy: ResourceProxy::new(resource),
            algorithm,
            key,
        })
    }
}

impl ResourceTransformer for EpubDeobfuscator {
    fn transform(&self, resource: Box<dyn Resource>) -> Box<dyn Resource> {
        self.deobfuscate(resource)
    }
}

/// Decorator XORing the obfuscated prefix of the wrapped resource
/// back into the clear on every read.
struct DeobfuscatingResource {
    proxy: ResourceProxy,
    algorithm: ObfuscationAlgorithm,
    /// Non-empty; established before construction.
    key: Vec<u8>,
}

impl Resource for DeobfuscatingResource {
    fn link(&self) -> Link {
        self.proxy.link()
    }

    fn length(&self) -> ResourceResult<u64> {
        self.proxy.length()
    }

    fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
        // The keystream cycles over the absolute offset within the
        // resource, independent of which sub-range was requested.
        let start = range.as_ref().map_or(0, |range| range.start);
        let mut bytes = self.proxy.read(range)?;

        let end = start + bytes.len() as u64;
        let prefix_end = self.algorithm.obfuscated_length().min(end);

        for position in start..prefix_end {
            bytes[(position - start) as usize] ^=
                self.key[(position % self.key.len() as u64) as usize];
        }

        Ok(bytes)
    }

    fn close(&self) {
        self.proxy.close();
    }
}
