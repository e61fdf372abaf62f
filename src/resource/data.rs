use crate::link::Link;
use crate::resource::errors::ResourceResult;
use crate::resource::{self, Resource};
use std::ops::Range;

/// A [`Resource`] serving an immutable in-memory buffer.
///
/// Construction is infallible; a string constructs as its UTF-8 bytes.
/// [`length`](Resource::length) and [`read`](Resource::read) always
/// succeed, and [`close`](Resource::close) is a no-op as no underlying
/// handle exists.
///
/// # Examples
/// - Serving a stylesheet from memory:
/// ```
/// # use rsource::resource::{DataResource, Resource};
/// let css = DataResource::new(
///     ("styles.css", "text/css"),
///     "p { margin: 0; }",
/// );
///
/// assert_eq!(16, css.length().unwrap());
/// assert_eq!("p { margin: 0; }", css.read_string(None).unwrap());
/// ```
pub struct DataResource {
    link: Link,
    data: Vec<u8>,
}

impl DataResource {
    /// Creates a resource serving `data` under the given link metadata.
    pub fn new(link: impl Into<Link>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            link: link.into(),
            data: data.into(),
        }
    }
}

impl Resource for DataResource {
    fn link(&self) -> Link {
        self.link.clone()
    }

    fn length(&self) -> ResourceResult<u64> {
        Ok(self.data.len() as u64)
    }

    fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
        let range = resource::clamp_range(range, self.data.len() as u64);

        Ok(self.data[range.start as usize..range.end as usize].to_vec())
    }

    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> DataResource {
        DataResource::new("data.bin", b"0123456789".to_vec())
    }

    #[test]
    fn test_full_read() {
        assert_eq!(b"0123456789", resource().read(None).unwrap().as_slice());
        assert_eq!(10, resource().length().unwrap());
    }

    #[test]
    fn test_range_read_clamps() {
        let resource = resource();

        assert_eq!(b"234", resource.read(Some(2..5)).unwrap().as_slice());
        assert_eq!(b"89", resource.read(Some(8..400)).unwrap().as_slice());
        assert!(resource.read(Some(400..500)).unwrap().is_empty());
        assert!(resource.read(Some(5..5)).unwrap().is_empty());
        assert!(resource.read(Some(7..3)).unwrap().is_empty());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let resource = resource();

        assert_eq!(resource.read(Some(1..4)).unwrap(), resource.read(Some(1..4)).unwrap());
        // Close holds no handle; reads remain valid
        resource.close();
        resource.close();
        assert_eq!(b"123", resource.read(Some(1..4)).unwrap().as_slice());
    }

    #[test]
    fn test_from_str_content() {
        let resource = DataResource::new(("note.txt", "text/plain"), "déjà-vu");

        assert_eq!("déjà-vu", resource.read_string(None).unwrap());
        assert_eq!("déjà-vu".len() as u64, resource.length().unwrap());
    }
}
