/*!
 * Platform JSON Adapter
 * serde_json, the ecosystem's general-purpose engine
 */

use super::{decode_error, encode_error, JsonOptions};
use crate::core::{strip_bom, CodecResult};
use crate::serialization::naming;
use crate::serialization::stream;
use crate::serialization::traits::{JsonCodec, StreamingMode};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};

/// serde_json backed codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformJsonCodec {
    options: JsonOptions,
}

impl PlatformJsonCodec {
    /// Web defaults: camelCase out, case-insensitive field matching in
    pub const RECOMMENDED: JsonOptions = JsonOptions::CAMEL_CASE.case_insensitive(true);

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
        let mut out = Vec::with_capacity(128);
        let written = if self.options.indented {
            serde_json::to_writer_pretty(&mut out, value)
        } else {
            serde_json::to_writer(&mut out, value)
        };
        written.map_err(encode_error("serde_json encode"))?;
        Ok(out)
    }

    fn decode<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = strip_bom(bytes);
        let rules = self.options.field_rules();
        if rules.is_identity() {
            return serde_json::from_slice(bytes).map_err(decode_error("serde_json decode"));
        }
        let tree: Value = serde_json::from_slice(bytes).map_err(decode_error("serde_json decode"))?;
        naming::from_value(tree, rules).map_err(decode_error("field mapping"))
    }
}

impl Default for PlatformJsonCodec {
    fn default() -> Self {
        Self::new(Self::RECOMMENDED)
    }
}

#[async_trait]
impl JsonCodec for PlatformJsonCodec {
    fn name(&self) -> &'static str {
        "serde_json"
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
