//! Counter-based pseudo-random values.
//!
//! Per-pixel texture (sparkle, flicker) must not depend on a shared generator:
//! every value is a pure function of `(frame, index, salt)`, so pixels can be
//! evaluated in any order and repeated queries agree.

/// SplitMix64-style mixing, folded down to u32.
#[inline]
pub const fn hash(x: u64) -> u32 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        (z ^ (z >> 31)) as u32
    }
}

/// Hash of a `(frame, index, salt)` triple
#[inline]
pub const fn hash3(frame: u64, index: u32, salt: u32) -> u32 {
    let key = ((index as u64) << 32) | salt as u64;
    hash(hash(frame) as u64 ^ key.rotate_left(17) ^ key)
}

/// Uniform value in `[0, 1)` for a `(frame, index, salt)` triple
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn noise(frame: u64, index: u32, salt: u32) -> f32 {
    // Top 24 bits fit the f32 mantissa exactly.
    (hash3(frame, index, salt) >> 8) as f32 / 16_777_216.0
}
