/*!
 * quick-xml Adapter
 * serde-driven XML text, synchronous only
 */

use super::XmlOptions;
use crate::core::{CodecError, CodecResult, WireFormat};
use crate::serialization::traits::XmlCodec;
use quick_xml::se::Serializer;
use serde::{de::DeserializeOwned, Serialize};

const BOM_CHAR: char = '\u{FEFF}';

/// quick-xml backed codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickXmlCodec {
    options: XmlOptions,
}

impl QuickXmlCodec {
    pub const RECOMMENDED: XmlOptions = XmlOptions::INDENTED;

    pub const fn new(options: XmlOptions) -> Self {
        Self { options }
    }

    fn render<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        let mut out = String::with_capacity(256);
        if self.options.declaration {
            out.push_str(r#"<?xml version="1.0" encoding=""#);
            out.push_str(self.options.encoding.label());
            out.push_str(r#""?>"#);
            if self.options.indent.is_some() {
                out.push('\n');
            }
        }

        let mut ser = match self.options.root {
            Some(root) => Serializer::with_root(&mut out, Some(root))
                .map_err(|e| encode_error("root element name", e))?,
            None => Serializer::new(&mut out),
        };
        if let Some(width) = self.options.indent {
            ser.indent(' ', width);
        }
        value
            .serialize(ser)
            .map_err(|e| encode_error("quick-xml encode", e))?;

        tracing::trace!(bytes = out.len(), "xml document rendered");
        Ok(out)
    }
}

impl Default for QuickXmlCodec {
    fn default() -> Self {
        Self::new(Self::RECOMMENDED)
    }
}

fn encode_error<E>(context: &'static str, source: E) -> CodecError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CodecError::serialization(WireFormat::Xml, context, source)
}

impl XmlCodec for QuickXmlCodec {
    fn name(&self) -> &'static str {
        "quick-xml"
    }

    fn options(&self) -> &XmlOptions {
        &self.options
    }

    fn serialize<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        self.render(value).map(String::into_bytes)
    }

    fn serialize_to_string<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        self.render(value)
    }

    fn deserialize<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let text = text.strip_prefix(BOM_CHAR).unwrap_or(text);
        quick_xml::de::from_str(text)
            .map_err(|e| CodecError::deserialization(WireFormat::Xml, "quick-xml decode", e))
    }
}
