mod float;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use float::Rgbf;
pub use palette::{
    COMET_PALETTES, CometPalette, FIREWORK_PALETTES, FireworkPalette, HuePalette, sample_palette,
};
pub use utils::{blend_colors, hsv_to_rgbf, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
