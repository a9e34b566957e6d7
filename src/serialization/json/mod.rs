/*!
 * JSON Codec Adapters
 *
 * Three engines behind one `JsonCodec` contract:
 * - **FastJsonCodec**: simd-json, adaptive SIMD threshold, incremental streams
 * - **PlatformJsonCodec**: serde_json, incremental streams
 * - **LegacyJsonCodec**: document-tree driven and text first, buffered streams
 *
 * All three default to camelCase wire names through `JsonOptions`.
 */

pub mod fast;
pub mod legacy;
pub mod options;
pub mod platform;

pub use fast::FastJsonCodec;
pub use legacy::LegacyJsonCodec;
pub use options::JsonOptions;
pub use platform::PlatformJsonCodec;

use crate::core::{CodecError, WireFormat};

#[inline]
fn encode_error<E>(context: &'static str) -> impl FnOnce(E) -> CodecError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |source| CodecError::serialization(WireFormat::Json, context, source)
}

#[inline]
fn decode_error<E>(context: &'static str) -> impl FnOnce(E) -> CodecError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |source| CodecError::deserialization(WireFormat::Json, context, source)
}
