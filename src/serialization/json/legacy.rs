/*!
 * Legacy JSON Adapter
 *
 * Document-tree codec for payloads produced by older tree-walking JSON
 * libraries: every value passes through a `serde_json::Value` and its text
 * form. Stream operations are emulated on top of the text path.
 *
 * # Streaming
 * - Writes render the full text before the first byte goes out
 * - Reads drain the stream to EOF, then parse
 *
 * Prefer `FastJsonCodec` or `PlatformJsonCodec` for large payloads.
 */

use super::{decode_error, encode_error, JsonOptions};
use crate::core::{strip_bom, CodecError, CodecResult, WireFormat};
use crate::serialization::naming;
use crate::serialization::stream;
use crate::serialization::traits::{JsonCodec, StreamingMode};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::instrument;

const BOM_CHAR: char = '\u{FEFF}';

/// Tree-walking codec with buffered stream emulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyJsonCodec {
    options: JsonOptions,
}

impl LegacyJsonCodec {
    pub const RECOMMENDED: JsonOptions = JsonOptions::CAMEL_CASE.case_insensitive(true);

    pub const fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    fn render<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        let tree = naming::to_value(value, self.options.field_rules())
            .map_err(encode_error("document tree"))?;
        let text = if self.options.indented {
            serde_json::to_string_pretty(&tree)
        } else {
            serde_json::to_string(&tree)
        };
        text.map_err(encode_error("document text"))
    }

    fn parse<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let text = text.strip_prefix(BOM_CHAR).unwrap_or(text);
        let tree: Value = serde_json::from_str(text).map_err(decode_error("document text"))?;
        naming::from_value(tree, self.options.field_rules()).map_err(decode_error("document tree"))
    }
}

impl Default for LegacyJsonCodec {
    fn default() -> Self {
        Self::new(Self::RECOMMENDED)
    }
}

#[async_trait]
impl JsonCodec for LegacyJsonCodec {
    fn name(&self) -> &'static str {
        "legacy-tree"
    }

    fn streaming(&self) -> StreamingMode {
        StreamingMode::Buffered
    }

    fn options(&self) -> &JsonOptions {
        &self.options
    }

    fn serialize_to_string<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        self.render(value)
    }

    fn serialize_to_bytes<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        self.render(value).map(String::into_bytes)
    }

    #[instrument(level = "trace", skip_all, fields(codec = "legacy-tree"))]
    async fn serialize_to_stream<T, W>(&self, value: &T, writer: &mut W) -> CodecResult<()>
    where
        T: Serialize + Sync + ?Sized,
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let text = self.render(value)?;
        tracing::trace!(bytes = text.len(), "buffered document written");
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    fn deserialize_text<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        self.parse(text)
    }

    fn deserialize_bytes<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let text = std::str::from_utf8(strip_bom(bytes)).map_err(|e| {
            CodecError::deserialization(WireFormat::Json, "payload is not UTF-8", e)
        })?;
        self.parse(text)
    }

    async fn deserialize_from_stream<T, R>(&self, reader: &mut R) -> CodecResult<T>
    where
        T: DeserializeOwned + Send,
        R: AsyncRead + Unpin + Send + ?Sized,
    {
        let payload = stream::read_to_end(reader, self.options.max_stream_bytes).await?;
        self.deserialize_bytes(&payload)
    }
}
