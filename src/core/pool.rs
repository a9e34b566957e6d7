/*!
 * Buffer Pooling for Parser Hot Paths
 *
 * simd-json parses in place and needs a mutable copy of its input. The copy
 * buffers are recycled through tiered thread-local pools.
 */

use super::limits::{POOL_LARGE_SIZE, POOL_MAX_RETAINED, POOL_MEDIUM_SIZE, POOL_SMALL_SIZE};
use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

thread_local! {
    static SMALL_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
    static MEDIUM_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
    static LARGE_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Small,
    Medium,
    Large,
    Unpooled,
}

impl Tier {
    const fn for_size(size_hint: usize) -> Self {
        if size_hint <= POOL_SMALL_SIZE {
            Tier::Small
        } else if size_hint <= POOL_MEDIUM_SIZE {
            Tier::Medium
        } else if size_hint <= POOL_LARGE_SIZE {
            Tier::Large
        } else {
            Tier::Unpooled
        }
    }

    const fn capacity(self) -> usize {
        match self {
            Tier::Small => POOL_SMALL_SIZE,
            Tier::Medium => POOL_MEDIUM_SIZE,
            Tier::Large => POOL_LARGE_SIZE,
            Tier::Unpooled => 0,
        }
    }

    fn with_pool<R>(self, f: impl FnOnce(&mut Vec<Vec<u8>>) -> R) -> Option<R> {
        let pool = match self {
            Tier::Small => &SMALL_POOL,
            Tier::Medium => &MEDIUM_POOL,
            Tier::Large => &LARGE_POOL,
            Tier::Unpooled => return None,
        };
        // try_with: the pool may already be gone during thread teardown
        pool.try_with(|cell| f(&mut cell.borrow_mut())).ok()
    }
}

/// Pooled byte buffer that returns to its thread-local pool on drop
pub struct PooledBuffer {
    inner: Vec<u8>,
    tier: Tier,
}

impl PooledBuffer {
    /// Get a cleared buffer able to hold at least `size_hint` bytes
    #[inline]
    pub fn get(size_hint: usize) -> Self {
        let tier = Tier::for_size(size_hint);
        let inner = tier
            .with_pool(|pool| pool.pop())
            .flatten()
            .map(|mut vec| {
                vec.clear();
                vec
            })
            .unwrap_or_else(|| Vec::with_capacity(tier.capacity().max(size_hint)));

        Self { inner, tier }
    }

    /// Pooled copy of `bytes`
    #[inline]
    pub fn copy_of(bytes: &[u8]) -> Self {
        let mut buf = Self::get(bytes.len());
        buf.extend_from_slice(bytes);
        buf
    }

    /// Take ownership of the inner Vec; it will not return to the pool
    #[inline]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.tier = Tier::Unpooled;
        std::mem::take(&mut self.inner)
    }
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PooledBuffer {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        // Only return appropriately-sized buffers to pool
        if self.inner.capacity() > self.tier.capacity() * 2 {
            return;
        }
        let mut vec = std::mem::take(&mut self.inner);
        vec.clear();
        self.tier.with_pool(|pool| {
            if pool.len() < POOL_MAX_RETAINED {
                pool.push(vec);
            }
        });
    }
}
