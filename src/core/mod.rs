/*!
 * Core Module
 * Error types, limits, buffer pooling and CPU detection shared by all codecs
 */

pub mod errors;
pub mod limits;
pub mod pool;
pub mod simd;

// Re-export for convenience
pub use errors::*;
pub use pool::PooledBuffer;
pub use simd::{simd_capabilities, simd_threshold, SimdCapabilities};

use limits::UTF8_BOM;

/// Strip a leading UTF-8 byte-order mark, if any
#[inline]
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes)
}

/// Check if `bytes` starts with a UTF-8 byte-order mark
#[inline]
pub fn has_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&UTF8_BOM)
}
