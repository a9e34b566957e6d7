/*!
 * Serialization Module
 *
 * Codec contracts and their engine adapters:
 * - **traits**: `JsonCodec` / `XmlCodec` capability sets
 * - **json**: simd-json, serde_json and document-tree adapters
 * - **xml**: quick-xml adapter
 * - **naming**: wire field-name policies
 * - **stream**: async stream plumbing, document scanning and cancellation
 */

pub mod json;
pub mod naming;
pub mod stream;
pub mod traits;
pub mod xml;

// Re-export for convenience
pub use json::{FastJsonCodec, JsonOptions, LegacyJsonCodec, PlatformJsonCodec};
pub use naming::{FieldRules, NamingPolicy};
pub use traits::{JsonCodec, StreamingMode, XmlCodec};
pub use xml::{QuickXmlCodec, TextEncoding, XmlOptions};
