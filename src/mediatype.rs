//! MIME-based [`MediaType`] handling for [`Link`](crate::link::Link) metadata.

use crate::util::str::StringExt;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The media type of a [`Resource`](crate::resource::Resource) based on
/// [`MIME`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/MIME_types),
/// useful for inferring if a resource is an `XHTML` file, obfuscated font, etc.
///
/// MIME structure: `maintype/subtype[+suffix][;params]`
///
/// # Equality
/// Media types are compared by their components:
/// - Type components ([`maintype`](MediaType::maintype), [`subtype`](MediaType::subtype),
///   and [`suffix`](MediaType::suffix)) are case-insensitive.
/// - Parameter order does not matter, although parameter keys are
///   case-insensitive and values are case-sensitive.
/// - Within parameters, extra semicolons (`;`) and surrounding whitespace
///   are ignored.
///
/// # Examples
/// - A stylesheet with a declared charset:
/// ```
/// # use rsource::mediatype::MediaType;
/// let css = MediaType::from("text/css; charset=UTF-8");
///
/// assert!(css.is_text());
/// assert_eq!("text", css.maintype());
/// assert_eq!("css", css.subtype());
/// assert_eq!(Some("UTF-8"), css.charset());
/// ```
#[derive(Clone, Debug, Hash, Eq)]
pub struct MediaType<'a>(Cow<'a, str>);

impl MediaType<'_> {
    const _UNSPECIFIED: &'static str = "";
    const _APPLICATION: &'static str = "application";
    const _FONT: &'static str = "font";
    const _IMAGE: &'static str = "image";
    const _TEXT: &'static str = "text";

    /// An unspecified or unknown media type.
    ///
    /// This constant has nothing (e.g., no maintype, subtype, etc.), primarily
    /// for resources whose kind is not declared by the container manifest.
    pub const UNSPECIFIED: MediaType<'static> = Self::borrowed(Self::_UNSPECIFIED);

    /// Maintype-only `application` wildcard, matching any `application/*`.
    pub const APPLICATION: MediaType<'static> = Self::borrowed(Self::_APPLICATION);

    /// Maintype-only `font` wildcard, matching any `font/*`.
    pub const FONT: MediaType<'static> = Self::borrowed(Self::_FONT);

    /// Maintype-only `image` wildcard, matching any `image/*`.
    pub const IMAGE: MediaType<'static> = Self::borrowed(Self::_IMAGE);

    /// Maintype-only `text` wildcard, matching any `text/*`.
    pub const TEXT: MediaType<'static> = Self::borrowed(Self::_TEXT);

    const fn borrowed(static_str: &str) -> MediaType<'_> {
        MediaType(Cow::Borrowed(static_str))
    }

    /// The raw underlying string of a media type, implicitly trimmed.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// The maintype of a media type, such as `application` within
    /// `application/xhtml+xml;charset=UTF-8`.
    pub fn maintype(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// The subtype, immediately after the [`maintype`](Self::maintype)
    /// separated by a forward slash (`/`), such as `xhtml` within
    /// `application/xhtml+xml;charset=UTF-8`.
    pub fn subtype(&self) -> &str {
        self.0.split(['/', '+', ';']).nth(1).unwrap_or_default()
    }

    /// The suffix, after the [`subtype`](Self::subtype) separated by a plus
    /// symbol (`+`). Depending on the type, a suffix may not be applicable:
    /// - Present: `application/xhtml+xml`
    /// - Not Present: `application/xml`
    pub fn suffix(&self) -> Option<&str> {
        // Remove parameters as it can conflict with finding the suffix
        let base_type = self.0.split(';').next()?;
        base_type.rfind('+').map(|index| &base_type[index + 1..])
    }

    /// The raw parameters string of a media type, such as `charset=UTF-8`
    /// within `application/xhtml+xml;charset=UTF-8`.
    pub fn params(&self) -> Option<&str> {
        self.0.find(';').map(|index| self.0[index + 1..].trim())
    }

    /// Returns an iterator over all `(key, value)` parameters contained
    /// within a media type.
    ///
    /// # Examples
    /// - Iterating over all the parameters:
    /// ```
    /// # use rsource::mediatype::MediaType;
    /// let kind = MediaType::from("audio/ogg; codecs=opus; other_param=value");
    /// let mut iterator = kind.params_iter();
    ///
    /// assert_eq!(Some(("codecs", "opus")), iterator.next());
    /// assert_eq!(Some(("other_param", "value")), iterator.next());
    /// assert_eq!(None, iterator.next());
    /// ```
    pub fn params_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params()
            .unwrap_or_default()
            .split(';')
            .filter_map(|param| param.split_once('='))
            .map(|(key, value)| (key.trim(), value.trim()))
    }

    /// Returns the parameter value associated with the given key if present,
    /// otherwise [`None`]. Keys are case-insensitive.
    pub fn get_param(&self, param_key: &str) -> Option<&str> {
        self.params_iter()
            .find_map(|(key, value)| key.eq_ignore_ascii_case(param_key).then_some(value))
    }

    /// The declared `charset` parameter if present, otherwise [`None`].
    ///
    /// Resolves the text encoding for
    /// [`Resource::read_string`](crate::resource::Resource::read_string)
    /// when no explicit override is given.
    pub fn charset(&self) -> Option<&str> {
        self.get_param("charset")
    }

    /// Returns `true` if the maintype or subtype is **not** present,
    /// which holds for all the wildcard constants such as [`MediaType::FONT`].
    pub fn is_unspecified(&self) -> bool {
        self.subtype().is_empty() || self.maintype().is_empty()
    }

    /// Returns `true` if the media type is a font.
    ///
    /// `true` is returned if the [`maintype`](Self::maintype) equals `font`
    /// or the [`subtype`](Self::subtype) matches one of the following:
    /// - `font-` (starts with)
    /// - `x-font` (starts with)
    /// - `vnd.ms-fontobject` (equals)
    /// - `vnd.ms-opentype` (equals)
    ///
    /// Operations are case-insensitive; capitalization has no effect.
    pub fn is_font(&self) -> bool {
        if self.maintype().eq_ignore_ascii_case(Self::_FONT) {
            return true;
        }

        let subtype = self.subtype();
        // Legacy/obsolete MIME handling
        starts_with_ignore_case(subtype, "font-")
            || starts_with_ignore_case(subtype, "x-font")
            // Special cases regarding EPUB core media
            || subtype.eq_ignore_ascii_case("vnd.ms-fontobject")
            || subtype.eq_ignore_ascii_case("vnd.ms-opentype")
    }

    /// Returns `true` if the [`maintype`](Self::maintype) equals
    /// case-insensitive `image`.
    pub fn is_image(&self) -> bool {
        self.maintype().eq_ignore_ascii_case(Self::_IMAGE)
    }

    /// Returns `true` if the [`maintype`](Self::maintype) equals
    /// case-insensitive `text`.
    pub fn is_text(&self) -> bool {
        self.maintype().eq_ignore_ascii_case(Self::_TEXT)
    }
}

fn starts_with_ignore_case(value: &str, start: &str) -> bool {
    value.len() >= start.len() && value[..start.len()].eq_ignore_ascii_case(start)
}

impl PartialEq for MediaType<'_> {
    fn eq(&self, other: &Self) -> bool {
        fn extract_type<'a>(kind: &'a MediaType) -> (&'a str, bool) {
            let mut split = kind.0.split(';');
            let full_type = split.next().unwrap().trim(); // Split guarantees at least one entry
            let has_params = split.next().is_some();
            (full_type, has_params)
        }

        let (self_type, self_has_params) = extract_type(self);
        let (other_type, other_has_params) = extract_type(other);

        // - Params must match
        // - Types must match (main, sub, and suffix)
        if self_has_params != other_has_params || !self_type.eq_ignore_ascii_case(other_type) {
            return false;
        }
        // If neither has parameters at this point, they're identical.
        if !self_has_params && !other_has_params {
            return true;
        }

        // Compare parameters
        let mut self_params = self.params_iter().collect::<Vec<_>>();
        let mut other_params = other.params_iter().collect::<Vec<_>>();

        if self_params.len() != other_params.len() {
            return false;
        }

        // Sort from [A-z] to ensure proper order (KEY_A == key_a)
        self_params.sort_unstable_by_key(|(k, _)| k.to_ascii_lowercase());
        other_params.sort_unstable_by_key(|(k, _)| k.to_ascii_lowercase());

        // Compare key (case-insensitive) and value (case-sensitive)
        self_params
            .iter()
            .zip(other_params)
            .all(|(&(k1, v1), (k2, v2))| k1.eq_ignore_ascii_case(k2) && v1.eq(v2))
    }
}

impl Display for MediaType<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for MediaType<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'a> From<&'a str> for MediaType<'a> {
    fn from(value: &'a str) -> Self {
        Self(value.trim().into())
    }
}

impl From<String> for MediaType<'_> {
    fn from(mut value: String) -> Self {
        value.trim_in_place();
        Self(value.into())
    }
}

impl<'a> From<Cow<'a, str>> for MediaType<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        match value {
            Cow::Borrowed(borrowed) => Self::from(borrowed),
            Cow::Owned(owned) => Self::from(owned),
        }
    }
}

impl<'a> From<&'a Self> for MediaType<'a> {
    fn from(value: &'a Self) -> Self {
        Self(Cow::Borrowed(value.0.as_ref()))
    }
}
