/*!
 * Serializer Interfaces
 * Capability sets the HTTP layer programs against; never a concrete engine
 */

use super::json::JsonOptions;
use super::stream::cancel;
use super::xml::XmlOptions;
use crate::core::{strip_bom, CodecError, CodecResult, WireFormat};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};

/// How an adapter drives caller-supplied streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamingMode {
    /// Reads stop as soon as one complete document is buffered; output goes
    /// straight from the engine into a byte buffer and out in bounded chunks
    Incremental,
    /// The whole payload is materialized as text first, and input is drained
    /// to EOF before parsing. Memory and latency grow with payload size.
    Buffered,
}

/// JSON codec capability set
///
/// String and byte operations are synchronous. Only the stream operations
/// suspend, and they never shut down the stream they are handed.
#[async_trait]
pub trait JsonCodec: Send + Sync {
    /// Engine label for diagnostics
    fn name(&self) -> &'static str;

    fn content_type(&self) -> &'static str {
        WireFormat::Json.content_type()
    }

    fn streaming(&self) -> StreamingMode;

    fn options(&self) -> &JsonOptions;

    fn serialize_to_string<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized;

    /// UTF-8 without byte-order mark
    fn serialize_to_bytes<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized;

    async fn serialize_to_stream<T, W>(&self, value: &T, writer: &mut W) -> CodecResult<()>
    where
        T: Serialize + Sync + ?Sized,
        W: AsyncWrite + Unpin + Send + ?Sized;

    fn deserialize_text<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned;

    /// Bytes are UTF-8 JSON; a leading byte-order mark is skipped
    fn deserialize_bytes<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned;

    async fn deserialize_from_stream<T, R>(&self, reader: &mut R) -> CodecResult<T>
    where
        T: DeserializeOwned + Send,
        R: AsyncRead + Unpin + Send + ?Sized;

    /// `serialize_to_stream` that fails with `Cancelled` once `signal` resolves
    async fn serialize_to_stream_until<T, W, S>(
        &self,
        value: &T,
        writer: &mut W,
        signal: S,
    ) -> CodecResult<()>
    where
        T: Serialize + Sync + ?Sized,
        W: AsyncWrite + Unpin + Send + ?Sized,
        S: Future<Output = ()> + Send,
    {
        cancel::until(self.serialize_to_stream(value, writer), signal).await
    }

    /// `deserialize_from_stream` that fails with `Cancelled` once `signal` resolves
    async fn deserialize_from_stream_until<T, R, S>(&self, reader: &mut R, signal: S) -> CodecResult<T>
    where
        T: DeserializeOwned + Send,
        R: AsyncRead + Unpin + Send + ?Sized,
        S: Future<Output = ()> + Send,
    {
        cancel::until(self.deserialize_from_stream(reader), signal).await
    }

    async fn serialize_to_stream_timeout<T, W>(
        &self,
        value: &T,
        writer: &mut W,
        deadline: Duration,
    ) -> CodecResult<()>
    where
        T: Serialize + Sync + ?Sized,
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        cancel::within(self.serialize_to_stream(value, writer), deadline).await
    }

    async fn deserialize_from_stream_timeout<T, R>(
        &self,
        reader: &mut R,
        deadline: Duration,
    ) -> CodecResult<T>
    where
        T: DeserializeOwned + Send,
        R: AsyncRead + Unpin + Send + ?Sized,
    {
        cancel::within(self.deserialize_from_stream(reader), deadline).await
    }
}

/// XML codec capability set; no streaming entry points
pub trait XmlCodec: Send + Sync {
    fn name(&self) -> &'static str;

    fn content_type(&self) -> &'static str {
        WireFormat::Xml.content_type()
    }

    fn options(&self) -> &XmlOptions;

    /// UTF-8 without byte-order mark
    fn serialize<T>(&self, value: &T) -> CodecResult<Vec<u8>>
    where
        T: Serialize + ?Sized;

    fn serialize_to_string<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized;

    fn deserialize<T>(&self, text: &str) -> CodecResult<T>
    where
        T: DeserializeOwned;

    /// Bytes are UTF-8 XML; a leading byte-order mark is skipped
    fn deserialize_bytes<T>(&self, bytes: &[u8]) -> CodecResult<T>
    where
        T: DeserializeOwned,
    {
        let text = std::str::from_utf8(strip_bom(bytes))
            .map_err(|e| CodecError::deserialization(WireFormat::Xml, "payload is not UTF-8", e))?;
        self.deserialize(text)
    }
}
