//! 8-bit integer helpers used by the output stage.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Calculate progress (0-255) of `elapsed` frames out of `duration` frames
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: u32, duration: u32) -> u8 {
    if duration == 0 {
        return 255;
    }
    if elapsed >= duration {
        return 255;
    }

    ((elapsed as u64 * 255) / duration as u64) as u8
}

/// Convert a unit float (0.0-1.0) into an 8-bit channel, clamping out-of-range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
