/*!
 * Fast JSON Adapter
 * Byte-oriented JSON with adaptive SIMD acceleration
 *
 * # Features
 * - Adaptive SIMD threshold based on CPU capabilities
 * - Thread-local buffer pooling for the in-place parser copy
 * - Incremental stream reads (stops at the document boundary)
 *
 * # Performance
 * - Standard path: serde_json for small payloads (<threshold)
 * - SIMD path: simd-json, 2-4x faster for large payloads
 */

use super::{decode_error, encode_error, JsonOptions};
use crate::core::simd::would_use_simd;
use crate::core::{strip_bom, CodecResult, PooledBuffer};
use crate::serialization::naming;
use crate::serialization::stream;
use crate::serialization::traits::{JsonCodec, StreamingMode};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};

/// simd-json backed codec; the default choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastJsonCodec {
    options: JsonOptions,
}

impl FastJsonCodec {
    /// camelCase, compact, case-sensitive
    pub const RECOMMENDED: JsonOptions = JsonOptions::CAMEL_CASE;

    pub const fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    fn encode<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let rules = self.options.field_rules();
        if rules.is_identity() {
            return self.write(value);
        }
        let tree = naming::to_value(value, rules).map_err(encode_error("field mapping"))?;
        self.write(&tree)
    }

    fn write<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let encoded = if self.options.indented {
            simd_json::serde::to_vec_pretty(value)
        } else {
            simd_json::serde::to_vec(value)
        };
        encoded.map_err(encode_error("simd-json encode"))
    }

    fn decode<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = strip_bom(bytes);
        let rules = self.options.field_rules();

        if would_use_simd(bytes.len()) {
            tracing::trace!(bytes = bytes.len(), "simd-json parse path");
            // simd-json parses in place
            let mut buf = PooledBuffer::copy_of(bytes);
            if rules.is_identity() {
                return simd_json::from_slice(buf.as_mut_slice())
                    .map_err(decode_error("simd-json decode"));
            }
            let tree: Value =
                simd_json::from_slice(buf.as_mut_slice()).map_err(decode_error("simd-json decode"))?;
            return naming::from_value(tree, rules).map_err(decode_error("field mapping"));
        }

        if rules.is_identity() {
            return serde_json::from_slice(bytes).map_err(decode_error("standard decode"));
        }
        let tree: Value = serde_json::from_slice(bytes).map_err(decode_error("standard decode"))?;
        naming::from_value(tree, rules).map_err(decode_error("field mapping"))
    }
}

impl Default for FastJsonCodec {
    fn default() -> Self {
        Self::new(Self::RECOMMENDED)
    }
}

#[async_trait]
impl JsonCodec for FastJsonCodec {
    fn name(&self) -> &'static str {
        "simd-json"
    }

    fn streaming(&self) -> StreamingMode {
        StreamingMode::Incremental
    }

    fn options(&self) -> &JsonOptions {
        &self.options
    }

    fn serialize_to_string<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        let bytes = self.encode(value)?;
        String::from_utf8(bytes).map_err(encode_error("engine produced invalid UTF-8"))
    }

    fn serialize_to_bytes<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        self.encode(value)
    }

    async fn serialize_to_stream<T, W>(&self, value: &T, writer: &mut W) -> CodecResult<()>
    where
        T: Serialize + Sync + ?Sized,
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let payload = self.encode(value)?;
        stream::write_chunked(writer, &payload).await
    }

    fn deserialize_text<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        self.decode(text.as_bytes())
    }

    fn deserialize_bytes<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        self.decode(bytes)
    }

    async fn deserialize_from_stream<T, R>(&self, reader: &mut R) -> CodecResult<T>
    where
        T: DeserializeOwned + Send,
        R: AsyncRead + Unpin + Send + ?Sized,
    {
        let document = stream::read_document(reader, self.options.max_stream_bytes).await?;
        self.decode(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::serialization::naming::NamingPolicy;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        id: u64,
        user_name: String,
        values: Vec<u8>,
    }

    fn small() -> TestData {
        TestData {
            id: 42,
            user_name: "test".to_string(),
            values: vec![1, 2, 3],
        }
    }

    fn large() -> TestData {
        TestData {
            values: vec![7u8; 8192], // above every adaptive threshold
            ..small()
        }
    }

    #[test]
    fn test_small_payload_round_trip() {
        let codec = FastJsonCodec::default();
        let text = codec.serialize_to_string(&small()).unwrap();
        assert!(text.contains("\"userName\":\"test\""));
        let back: TestData = codec.deserialize_text(&text).unwrap();
        assert_eq!(back, small());
    }

    #[test]
    fn test_large_payload_takes_simd_path() {
        let codec = FastJsonCodec::default();
        let bytes = codec.serialize_to_bytes(&large()).unwrap();
        assert!(would_use_simd(bytes.len()));
        let back: TestData = codec.deserialize_bytes(&bytes).unwrap();
        assert_eq!(back, large());

        let preserve = FastJsonCodec::new(JsonOptions::PRESERVE);
        let bytes = preserve.serialize_to_bytes(&large()).unwrap();
        let back: TestData = preserve.deserialize_bytes(&bytes).unwrap();
        assert_eq!(back, large());
    }

    #[test]
    fn test_preserve_naming() {
        let codec = FastJsonCodec::new(JsonOptions::PRESERVE);
        let text = codec.serialize_to_string(&small()).unwrap();
        assert!(text.contains("\"user_name\""));
    }

    #[test]
    fn test_custom_policy() {
        let codec =
            FastJsonCodec::new(FastJsonCodec::RECOMMENDED.with_naming(NamingPolicy::KebabCase));
        let text = codec.serialize_to_string(&small()).unwrap();
        assert!(text.contains("\"user-name\""));
        let back: TestData = codec.deserialize_text(&text).unwrap();
        assert_eq!(back, small());
    }

    #[test]
    fn test_pretty_print() {
        let codec = FastJsonCodec::new(FastJsonCodec::RECOMMENDED.indented(true));
        let text = codec.serialize_to_string(&small()).unwrap();
        assert!(text.contains('\n'));
        let back: TestData = codec.deserialize_text(&text).unwrap();
        assert_eq!(back, small());
    }

    #[test]
    fn test_bom_prefixed_input() {
        let codec = FastJsonCodec::default();
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend(codec.serialize_to_bytes(&small()).unwrap());
        let back: TestData = codec.deserialize_bytes(&bytes).unwrap();
        assert_eq!(back, small());
    }

    #[test]
    fn test_error_handling() {
        let codec = FastJsonCodec::default();
        let err = codec.deserialize_bytes::<TestData>(b"{ invalid json }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);

        let mut huge_invalid = vec![b'['; 8192];
        huge_invalid.push(b'x');
        let err = codec.deserialize_bytes::<Vec<u8>>(&huge_invalid).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[tokio::test]
    async fn test_stream_matches_bytes() {
        let codec = FastJsonCodec::default();
        let mut sink = Vec::new();
        codec.serialize_to_stream(&large(), &mut sink).await.unwrap();
        assert_eq!(sink, codec.serialize_to_bytes(&large()).unwrap());

        let mut reader: &[u8] = &sink;
        let back: TestData = codec.deserialize_from_stream(&mut reader).await.unwrap();
        assert_eq!(back, large());
    }
}
