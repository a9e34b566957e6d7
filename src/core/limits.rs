/*!
 * Codec Limits and Constants
 *
 * Centralized location for thresholds, buffer sizes and stream limits.
 * Performance-critical constants are marked with [PERF]
 * Security-critical constants are marked with [SECURITY]
 */

// =============================================================================
// JSON ENGINE SELECTION
// =============================================================================

/// Fallback SIMD threshold (1KB) used when CPU detection is unavailable
/// Payloads above this size are parsed with simd-json, below with serde_json
/// [PERF] simd-json setup cost dominates for small documents
pub const JSON_SIMD_THRESHOLD: usize = 1024;

/// Environment variable overriding the adaptive SIMD threshold
pub const JSON_SIMD_THRESHOLD_ENV: &str = "CODEC_JSON_SIMD_THRESHOLD";

// =============================================================================
// STREAM I/O
// =============================================================================

/// Chunk size for reads from caller-supplied streams (8KB)
/// [PERF] Matches tokio's default BufReader capacity
pub const STREAM_READ_CHUNK: usize = 8 * 1024;

/// Chunk size for writes to caller-supplied streams (16KB)
/// Cancellation is observed between chunks
pub const STREAM_WRITE_CHUNK: usize = 16 * 1024;

/// Default upper bound for a single streamed document (32MB)
/// [SECURITY] Prevents unbounded buffering of hostile request bodies
pub const DEFAULT_MAX_STREAM_BYTES: usize = 32 * 1024 * 1024;

// =============================================================================
// BUFFER POOLS
// =============================================================================

/// Small pooled buffer (1KB)
pub const POOL_SMALL_SIZE: usize = 1024;

/// Medium pooled buffer (16KB)
pub const POOL_MEDIUM_SIZE: usize = 16 * 1024;

/// Large pooled buffer (64KB); larger requests are not pooled
pub const POOL_LARGE_SIZE: usize = 64 * 1024;

/// Maximum buffers retained per pool tier per thread
pub const POOL_MAX_RETAINED: usize = 16;

// =============================================================================
// XML
// =============================================================================

/// Default indentation width for XML output
pub const XML_INDENT_WIDTH: usize = 2;

/// UTF-8 byte-order mark, never emitted, skipped on input
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
