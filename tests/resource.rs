use rsource::link::Link;
use rsource::mediatype::MediaType;
use rsource::resource::errors::ResourceError;
use rsource::resource::{DataResource, FailureResource, Resource, ResourceProxy};
use std::ops::Range;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen_test::wasm_bindgen_test;

#[test]
#[wasm_bindgen_test]
fn test_media_type_components() {
    let kind = MediaType::from(" application/xhtml+xml; charset=UTF-8 ");

    assert_eq!("application", kind.maintype());
    assert_eq!("xhtml", kind.subtype());
    assert_eq!(Some("xml"), kind.suffix());
    assert_eq!(Some("UTF-8"), kind.charset());
}

#[test]
#[wasm_bindgen_test]
fn test_media_type_eq() {
    let a = MediaType::from("example/test;param=XYZ;param2=ABC");
    let b = MediaType::from("  example/TEST; PARAM2 = ABC;param = XYZ;;;   ");
    assert_eq!(a, b);

    let c = MediaType::from("  example/test; param3 = ABC;param = XYZ;;;   ");
    assert_ne!(b, c);

    let d = MediaType::from("example/test");
    assert_ne!(a, d);
}

#[test]
#[wasm_bindgen_test]
fn test_media_type_font_detection() {
    assert!(MediaType::from("font/woff").is_font());
    // Legacy/obsolete MIME variants
    assert!(MediaType::from("application/FONT-WOFF").is_font());
    assert!(MediaType::from("application/x-font-truetype").is_font());
    assert!(MediaType::from("application/vnd.ms-opentype").is_font());
    assert!(!MediaType::from("application/xhtml+xml").is_font());
}

#[test]
#[wasm_bindgen_test]
fn test_link_decoded_href() {
    let link = Link::from("fonts/front%20matter.otf");

    assert_eq!("fonts/front%20matter.otf", link.href());
    assert_eq!("fonts/front matter.otf", link.decoded_href());
}

#[test]
#[wasm_bindgen_test]
fn test_read_clamps_instead_of_failing() {
    let resource = DataResource::new("data.bin", b"0123456789".to_vec());

    assert_eq!(b"0123456789", resource.read(None).unwrap().as_slice());
    assert_eq!(b"56789", resource.read(Some(5..1_000)).unwrap().as_slice());
    assert!(resource.read(Some(10..20)).unwrap().is_empty());
    assert!(resource.read(Some(u64::MAX - 1..u64::MAX)).unwrap().is_empty());
}

#[test]
#[wasm_bindgen_test]
fn test_read_string_resolves_charset() {
    // UTF-16LE content with a BOM, declared by the media type
    let utf16 = b"\xFF\xFE\x55\x00\x54\x00\x46\x00\x2D\x00\x38\x00".to_vec();
    let declared = DataResource::new(("a.txt", "text/plain; charset=utf-16"), utf16.clone());
    let undeclared = DataResource::new(("a.txt", "text/plain"), b"plain".to_vec());

    assert_eq!("UTF-8", declared.read_string(None).unwrap());
    // An explicit override wins over the declared charset
    assert_eq!("UTF-8", declared.read_string(Some("utf-16le")).unwrap());
    assert_eq!("plain", undeclared.read_string(None).unwrap());
}

#[test]
#[wasm_bindgen_test]
fn test_read_string_degrades_to_empty() {
    let invalid = DataResource::new(("a.txt", "text/plain"), vec![0xC0, 0x80]);

    assert_eq!("", invalid.read_string(None).unwrap());
}

#[test]
#[wasm_bindgen_test]
fn test_read_json() {
    let resource = DataResource::new(
        ("metadata.json", "application/json"),
        r#"{"identifier": "urn:uuid:1234"}"#,
    );

    let value = resource.read_json().unwrap();
    assert_eq!("urn:uuid:1234", value["identifier"].as_str().unwrap());

    // Parse failures surface as `Other`, mapped to HTTP 500
    let broken = DataResource::new(("metadata.json", "application/json"), "{not json");
    let error = broken.read_json().unwrap_err();
    assert!(matches!(error, ResourceError::Other(_)));
    assert_eq!(500, error.http_status());
}

#[test]
#[wasm_bindgen_test]
fn test_failure_resource_maps_to_http_statuses() {
    let cases = [
        (ResourceError::NotFound, 404),
        (ResourceError::Forbidden, 403),
        (ResourceError::Unavailable, 503),
    ];

    for (error, status) in cases {
        let resource = FailureResource::new("entry.xhtml", error);
        assert_eq!(status, resource.read(None).unwrap_err().http_status());
        assert_eq!(status, resource.length().unwrap_err().http_status());
    }
}

/// Decorator counting how often `close` reaches it.
struct CloseCounting {
    proxy: ResourceProxy,
    closes: Arc<AtomicUsize>,
}

impl Resource for CloseCounting {
    fn link(&self) -> Link {
        self.proxy.link()
    }

    fn length(&self) -> rsource::resource::errors::ResourceResult<u64> {
        self.proxy.length()
    }

    fn read(&self, range: Option<Range<u64>>) -> rsource::resource::errors::ResourceResult<Vec<u8>> {
        self.proxy.read(range)
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.proxy.close();
    }
}

#[test]
fn test_close_propagates_through_decorator_chains() {
    let outer_closes = Arc::new(AtomicUsize::new(0));
    let inner_closes = Arc::new(AtomicUsize::new(0));

    let inner = CloseCounting {
        proxy: ResourceProxy::new(Box::new(DataResource::new("a.bin", vec![1, 2, 3]))),
        closes: Arc::clone(&inner_closes),
    };
    let outer = CloseCounting {
        proxy: ResourceProxy::new(Box::new(inner)),
        closes: Arc::clone(&outer_closes),
    };

    assert_eq!(vec![1, 2, 3], outer.read(None).unwrap());

    outer.close();
    outer.close();

    assert_eq!(2, outer_closes.load(Ordering::SeqCst));
    assert_eq!(2, inner_closes.load(Ordering::SeqCst));
}

#[test]
fn test_proxy_forwards_unchanged() {
    let proxy = ResourceProxy::new(Box::new(DataResource::new(
        ("a.txt", "text/plain"),
        "content",
    )));

    assert_eq!("a.txt", proxy.link().href());
    assert_eq!(7, proxy.length().unwrap());
    assert_eq!(b"ont", proxy.read(Some(1..4)).unwrap().as_slice());
    assert_eq!("content", proxy.into_inner().read_string(None).unwrap());
}
