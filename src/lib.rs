/*!
 * Content Codec Library
 *
 * Pluggable JSON and XML serialization for an HTTP content layer. Callers
 * program against `JsonCodec` / `XmlCodec`; engines sit behind adapters:
 *
 * - `FastJsonCodec`: simd-json with an adaptive SIMD threshold (default)
 * - `PlatformJsonCodec`: serde_json
 * - `LegacyJsonCodec`: document-tree codec with buffered streams
 * - `QuickXmlCodec`: quick-xml
 */

pub mod core;
pub mod monitoring;
pub mod serialization;

// Re-exports
pub use crate::core::{CodecError, CodecResult, ErrorKind, WireFormat};
pub use monitoring::init_tracing;
pub use serialization::{
    FastJsonCodec, FieldRules, JsonCodec, JsonOptions, LegacyJsonCodec, NamingPolicy,
    PlatformJsonCodec, QuickXmlCodec, StreamingMode, TextEncoding, XmlCodec, XmlOptions,
};
