pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb, Rgbf},
    math8::{blend8, unit_to_u8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert unit hue/saturation/value into a float color.
///
/// Hue wraps around the color wheel. The conversion itself is done by
/// `smart_leds` at full value; `val` is applied afterwards in float so dim
/// pixels keep their precision.
pub fn hsv_to_rgbf(hue: f32, sat: f32, val: f32) -> Rgbf {
    let mut hue = libm::fmodf(hue, 1.0);
    if hue < 0.0 {
        hue += 1.0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hue8 = (hue * 256.0) as u32 as u8;
    let rgb = hsv2rgb(Hsv {
        hue: hue8,
        sat: unit_to_u8(sat),
        val: 255,
    });
    let val = if val.is_nan() { 0.0 } else { val.clamp(0.0, 1.0) };
    Rgbf::from_rgb(rgb).scale(val)
}
