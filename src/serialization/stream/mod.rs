/*!
 * Stream Plumbing
 *
 * Reading and writing caller-owned tokio streams. Streams are never shut
 * down here; writers are flushed once the payload is out.
 */

pub mod cancel;
pub mod scanner;

pub use scanner::DocumentScanner;

use crate::core::limits::{STREAM_READ_CHUNK, STREAM_WRITE_CHUNK};
use crate::core::{CodecError, CodecResult};
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::instrument;

/// Read until the first complete JSON document is buffered, or EOF
///
/// Bytes of the final chunk past the document end are discarded.
#[instrument(level = "trace", skip(reader))]
pub async fn read_document<R>(reader: &mut R, limit: usize) -> CodecResult<Bytes>
where
    R: AsyncRead + Unpin + Send + ?Sized,
{
    let mut buf = BytesMut::with_capacity(STREAM_READ_CHUNK);
    let mut scanner = DocumentScanner::new();

    loop {
        buf.reserve(STREAM_READ_CHUNK);
        let before = buf.len();
        if reader.read_buf(&mut buf).await? == 0 {
            let end = scanner.finish().unwrap_or(buf.len());
            tracing::trace!(bytes = end, "stream ended before document boundary");
            buf.truncate(end);
            return Ok(buf.freeze());
        }

        if let Some(end) = scanner.feed(&buf[before..]) {
            if end > limit {
                return Err(CodecError::PayloadTooLarge { limit });
            }
            tracing::trace!(bytes = end, buffered = buf.len(), "document boundary found");
            buf.truncate(end);
            return Ok(buf.freeze());
        }

        if buf.len() > limit {
            return Err(CodecError::PayloadTooLarge { limit });
        }
    }
}

/// Drain the stream to EOF
#[instrument(level = "trace", skip(reader))]
pub async fn read_to_end<R>(reader: &mut R, limit: usize) -> CodecResult<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + ?Sized,
{
    let mut buf = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    (&mut *reader).take(cap).read_to_end(&mut buf).await?;
    if buf.len() > limit {
        return Err(CodecError::PayloadTooLarge { limit });
    }
    tracing::trace!(bytes = buf.len(), "stream drained");
    Ok(buf)
}

/// Write `payload` in bounded chunks, then flush
#[instrument(level = "trace", skip(writer, payload), fields(bytes = payload.len()))]
pub async fn write_chunked<W>(writer: &mut W, payload: &[u8]) -> CodecResult<()>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    for chunk in payload.chunks(STREAM_WRITE_CHUNK) {
        writer.write_all(chunk).await?;
    }
    writer.flush().await?;
    Ok(())
}
