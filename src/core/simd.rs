/*!
 * SIMD Capability Detection
 * Runtime CPU feature detection feeding the adaptive JSON parser threshold
 */

use super::limits::{JSON_SIMD_THRESHOLD, JSON_SIMD_THRESHOLD_ENV};
use std::sync::OnceLock;

/// SIMD instruction sets relevant to simd-json
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimdCapabilities {
    /// SSE2 support (x86/x86_64)
    pub sse2: bool,
    /// AVX2 support (x86/x86_64)
    pub avx2: bool,
    /// AVX-512 foundation + byte/word support (x86/x86_64)
    pub avx512: bool,
    /// NEON support (ARM)
    pub neon: bool,
}

impl SimdCapabilities {
    /// Detect available SIMD instruction sets
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            SimdCapabilities {
                sse2: is_x86_feature_detected!("sse2"),
                avx2: is_x86_feature_detected!("avx2"),
                avx512: is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw"),
                neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            SimdCapabilities {
                neon: std::arch::is_aarch64_feature_detected!("neon"),
                ..Default::default()
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdCapabilities::default()
        }
    }

    /// Payload size above which SIMD parsing pays for its setup cost
    ///
    /// - AVX-512: 2KB (benefits from larger batches)
    /// - AVX2: 1KB
    /// - SSE2/NEON: 512B
    /// - No SIMD: 4KB (only worth the overhead for very large payloads)
    pub const fn optimal_threshold(&self) -> usize {
        if self.avx512 {
            2048
        } else if self.avx2 {
            JSON_SIMD_THRESHOLD
        } else if self.sse2 || self.neon {
            512
        } else {
            4096
        }
    }
}

static CAPABILITIES: OnceLock<SimdCapabilities> = OnceLock::new();
static ADAPTIVE_SIMD_THRESHOLD: OnceLock<usize> = OnceLock::new();

/// Process-wide detected capabilities (detected once)
#[inline]
pub fn simd_capabilities() -> &'static SimdCapabilities {
    CAPABILITIES.get_or_init(SimdCapabilities::detect)
}

/// Adaptive SIMD threshold, resolved once per process
///
/// Resolution order: environment override, compile-time constant
/// (`custom_limits` feature), CPU capabilities.
#[inline]
pub fn simd_threshold() -> usize {
    *ADAPTIVE_SIMD_THRESHOLD.get_or_init(|| {
        if let Some(value) = std::env::var(JSON_SIMD_THRESHOLD_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            return value;
        }

        #[cfg(feature = "custom_limits")]
        {
            JSON_SIMD_THRESHOLD
        }

        #[cfg(not(feature = "custom_limits"))]
        {
            simd_capabilities().optimal_threshold()
        }
    })
}

/// Pin the SIMD threshold (tuning and tests)
///
/// Returns false if the threshold was already resolved.
pub fn set_simd_threshold(threshold: usize) -> bool {
    ADAPTIVE_SIMD_THRESHOLD.set(threshold).is_ok()
}

/// Check if a payload of `size` bytes takes the SIMD path
#[inline]
pub fn would_use_simd(size: usize) -> bool {
    size > simd_threshold()
}
