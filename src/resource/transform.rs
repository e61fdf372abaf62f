use crate::resource::{Resource, SendAndSync};

/// A function-shaped `Resource -> Resource` contract, the seam where
/// pipelines of decorators are built: decryption, content injection,
/// markup correction, and so on.
///
/// Any matching closure is a transformer; dedicated types (such as
/// [`EpubDeobfuscator`](crate::obfuscation::EpubDeobfuscator)) implement
/// the trait directly. A transformer never fails and never discards the
/// input: content it does not apply to is returned unchanged.
pub trait ResourceTransformer: SendAndSync {
    /// Transforms `resource`, typically by wrapping it in a decorator,
    /// or returns it unchanged when not applicable.
    fn transform(&self, resource: Box<dyn Resource>) -> Box<dyn Resource>;
}

#[cfg(feature = "threadsafe")]
impl<F> ResourceTransformer for F
where
    F: Fn(Box<dyn Resource>) -> Box<dyn Resource> + Send + Sync,
{
    fn transform(&self, resource: Box<dyn Resource>) -> Box<dyn Resource> {
        self(resource)
    }
}

#[cfg(not(feature = "threadsafe"))]
impl<F> ResourceTransformer for F
where
    F: Fn(Box<dyn Resource>) -> Box<dyn Resource>,
{
    fn transform(&self, resource: Box<dyn Resource>) -> Box<dyn Resource> {
        self(resource)
    }
}

/// An ordered pipeline of [`ResourceTransformer`]s, applied first-to-last.
///
/// A chain is itself a transformer, so pipelines compose.
///
/// # Examples
/// - Deobfuscating, then stamping a corrected media type:
/// ```
/// # use rsource::obfuscation::EpubDeobfuscator;
/// # use rsource::resource::{DataResource, Resource, ResourceTransformer, TransformChain};
/// let chain = TransformChain::new()
///     .with(EpubDeobfuscator::new("urn:uuid:1234"))
///     // A markup-correction stage would wrap here; identity for brevity.
///     .with(|resource: Box<dyn Resource>| resource);
///
/// let raw = DataResource::new("fonts/body.otf", vec![0u8; 4]);
/// let transformed = chain.transform(Box::new(raw));
///
/// // No declared encryption: both stages pass the bytes through.
/// assert_eq!(vec![0u8; 4], transformed.read(None).unwrap());
/// ```
#[derive(Default)]
pub struct TransformChain {
    transformers: Vec<Box<dyn ResourceTransformer>>,
}

impl TransformChain {
    /// Creates an empty chain, which transforms by identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this chain with `transformer` appended.
    #[must_use]
    pub fn with(mut self, transformer: impl ResourceTransformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// The number of transformers in this chain.
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// Returns `true` if this chain contains no transformers.
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl ResourceTransformer for TransformChain {
    fn transform(&self, resource: Box<dyn Resource>) -> Box<dyn Resource> {
        self.transformers
            .iter()
            .fold(resource, |resource, transformer| {
                transformer.transform(resource)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;
    use crate::resource::errors::ResourceResult;
    use crate::resource::{DataResource, ResourceProxy};
    use std::ops::Range;

    struct ShoutingResource(ResourceProxy);

    impl Resource for ShoutingResource {
        fn link(&self) -> Link {
            self.0.link()
        }

        fn length(&self) -> ResourceResult<u64> {
            self.0.length()
        }

        fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
            let mut bytes = self.0.read(range)?;
            bytes.make_ascii_uppercase();
            Ok(bytes)
        }

        fn close(&self) {
            self.0.close();
        }
    }

    fn shout(resource: Box<dyn Resource>) -> Box<dyn Resource> {
        Box::new(ShoutingResource(ResourceProxy::new(resource)))
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let resource = TransformChain::new()
            .transform(Box::new(DataResource::new("a.txt", "abc")));

        assert_eq!(b"abc", resource.read(None).unwrap().as_slice());
    }

    #[test]
    fn test_chain_applies_in_order() {
        struct Prefixing(ResourceProxy);

        impl Resource for Prefixing {
            fn link(&self) -> Link {
                self.0.link()
            }

            fn length(&self) -> ResourceResult<u64> {
                self.0.length()
            }

            fn read(&self, range: Option<Range<u64>>) -> ResourceResult<Vec<u8>> {
                let mut bytes = b"a>".to_vec();
                bytes.extend(self.0.read(range)?);
                Ok(bytes)
            }

            fn close(&self) {
                self.0.close();
            }
        }

        let chain = TransformChain::new().with(shout).with(
            |resource: Box<dyn Resource>| -> Box<dyn Resource> {
                Box::new(Prefixing(ResourceProxy::new(resource)))
            },
        );
        let resource = chain.transform(Box::new(DataResource::new("a.txt", "abc")));

        assert_eq!(2, chain.len());
        // The prefix stage wraps last, so its marker escapes the shouter
        assert_eq!(b"a>ABC", resource.read(None).unwrap().as_slice());
    }

    #[test]
    fn test_closure_is_a_transformer() {
        let transformer = |resource: Box<dyn Resource>| -> Box<dyn Resource> {
            Box::new(ShoutingResource(ResourceProxy::new(resource)))
        };
        let resource = transformer.transform(Box::new(DataResource::new("a.txt", "abc")));

        assert_eq!("ABC", resource.read_string(None).unwrap());
        assert_eq!(Link::from("a.txt"), resource.link());
    }
}
