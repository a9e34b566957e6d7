/*!
 * XML Codec Tests
 */

use content_codec::core::has_bom;
use content_codec::{ErrorKind, QuickXmlCodec, WireFormat, XmlCodec, XmlOptions};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Catalog {
    title: String,
    entry: Vec<Person>,
}

fn catalog() -> Catalog {
    Catalog {
        title: "Pioneers & <friends>".to_string(),
        entry: vec![
            Person {
                id: 1,
                name: "Ada".to_string(),
            },
            Person {
                id: 2,
                name: "Grace".to_string(),
            },
        ],
    }
}

#[test]
fn test_recommended_output_shape() {
    let codec = QuickXmlCodec::default();
    let text = codec
        .serialize_to_string(&Person {
            id: 1,
            name: "Ada".to_string(),
        })
        .unwrap();

    assert_eq!(
        text,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Person>\n  <id>1</id>\n  <name>Ada</name>\n</Person>"
    );
    assert_eq!(codec.content_type(), "application/xml; charset=utf-8");
    assert_eq!(codec.name(), "quick-xml");
}

#[test]
fn test_nested_round_trip_with_escaping() {
    let codec = QuickXmlCodec::default();
    let bytes = codec.serialize(&catalog()).unwrap();
    assert!(!has_bom(&bytes));

    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("&amp;"));
    assert!(text.contains("&lt;friends"));

    assert_eq!(codec.deserialize_bytes::<Catalog>(&bytes).unwrap(), catalog());
    assert_eq!(codec.deserialize::<Catalog>(&text).unwrap(), catalog());
}

#[test]
fn test_compact_without_declaration() {
    let codec = QuickXmlCodec::new(XmlOptions::COMPACT);
    let text = codec.serialize_to_string(&catalog()).unwrap();
    assert!(text.starts_with("<Catalog><title>"));
    assert!(!text.contains("<?xml"));
    assert_eq!(codec.deserialize::<Catalog>(&text).unwrap(), catalog());
}

#[test]
fn test_malformed_documents() {
    #[derive(Debug, Deserialize)]
    struct A {
        #[allow(dead_code)]
        b: String,
    }

    let codec = QuickXmlCodec::default();
    let err = codec.deserialize::<A>("<a><b></a>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
    assert_eq!(err.format(), Some(WireFormat::Xml));

    let err = codec.deserialize::<Person>("<Person><id>one</id><name>Ada</name></Person>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);

    let err = codec.deserialize_bytes::<Person>(&[b'<', 0xFF, b'>']).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

#[test]
fn test_shared_codec_across_threads() {
    let codec = Arc::new(QuickXmlCodec::default());
    let before = *codec.options();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                let person = Person {
                    id: i,
                    name: format!("person-{}", i),
                };
                for _ in 0..50 {
                    let text = codec.serialize_to_string(&person).unwrap();
                    assert_eq!(codec.deserialize::<Person>(&text).unwrap(), person);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(*codec.options(), before);
}
