//! Named palettes used by the entity effects.
//!
//! Lookups by name never fail: unknown names resolve to the documented default.

use rand::Rng;

use super::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

const FALLBACK_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Hue-only palettes for saturated balls (hues on the 0.0-1.0 circle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HuePalette {
    Rainbow,
    Warm,
    Cool,
    #[default]
    Fire,
    Ocean,
    /// Grayscale: every pick has zero saturation
    White,
}

const HUES_RAINBOW: [f32; 6] = [0.0, 0.15, 0.33, 0.5, 0.66, 0.83];
const HUES_WARM: [f32; 4] = [0.0, 0.05, 0.1, 0.15];
const HUES_COOL: [f32; 4] = [0.5, 0.55, 0.6, 0.7];
const HUES_FIRE: [f32; 5] = [0.0, 0.05, 0.08, 0.12, 0.15];
const HUES_OCEAN: [f32; 4] = [0.45, 0.5, 0.55, 0.6];
const HUES_WHITE: [f32; 1] = [0.0];

impl HuePalette {
    pub const ALL: [Self; 6] = [
        Self::Rainbow,
        Self::Warm,
        Self::Cool,
        Self::Fire,
        Self::Ocean,
        Self::White,
    ];

    pub const fn hues(self) -> &'static [f32] {
        match self {
            Self::Rainbow => &HUES_RAINBOW,
            Self::Warm => &HUES_WARM,
            Self::Cool => &HUES_COOL,
            Self::Fire => &HUES_FIRE,
            Self::Ocean => &HUES_OCEAN,
            Self::White => &HUES_WHITE,
        }
    }

    /// Saturation given to balls colored from this palette
    pub const fn saturation(self) -> f32 {
        match self {
            Self::White => 0.0,
            _ => 1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::White => "white",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|palette| palette.as_str() == s)
    }

    /// Parse a palette name, falling back to [`HuePalette::Fire`]
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or_default()
    }

    /// Pick a random hue from the palette
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        let hues = self.hues();
        match hues.len() {
            0 => 0.0,
            1 => hues[0],
            len => hues[rng.random_range(0..len)],
        }
    }
}

/// Gradient palette for trailing entities, ordered tail → head
#[derive(Debug, Clone, Copy)]
pub struct CometPalette {
    pub name: &'static str,
    pub colors: &'static [Rgb],
}

const COMET_FIRE: [Rgb; 3] = hex_palette![0xFF0000, 0xFF6400, 0xFFC800];
const COMET_ICE: [Rgb; 3] = hex_palette![0x0064FF, 0x00C8FF, 0xC8FFFF];
const COMET_TOXIC: [Rgb; 3] = hex_palette![0x00FF00, 0x64FF00, 0xC8FF64];
const COMET_PURPLE: [Rgb; 3] = hex_palette![0x8000FF, 0xC800FF, 0xFF64FF];
const COMET_SUNSET: [Rgb; 3] = hex_palette![0xFF0064, 0xFF6400, 0xFFC800];
const COMET_OCEAN: [Rgb; 3] = hex_palette![0x003264, 0x0064C8, 0x00C8FF];
#[allow(clippy::unreadable_literal)]
const COMET_RAINBOW: [Rgb; 7] = hex_palette![
    0xFF0000, 0xFF7F00, 0xFFFF00, 0x00FF00, 0x0000FF, 0x4B0082, 0x9400D3,
];
const COMET_WHITE: [Rgb; 3] = hex_palette![0x9696FF, 0xC8C8FF, 0xFFFFFF];

pub static COMET_PALETTES: [CometPalette; 8] = [
    CometPalette {
        name: "fire",
        colors: &COMET_FIRE,
    },
    CometPalette {
        name: "ice",
        colors: &COMET_ICE,
    },
    CometPalette {
        name: "toxic",
        colors: &COMET_TOXIC,
    },
    CometPalette {
        name: "purple",
        colors: &COMET_PURPLE,
    },
    CometPalette {
        name: "sunset",
        colors: &COMET_SUNSET,
    },
    CometPalette {
        name: "ocean",
        colors: &COMET_OCEAN,
    },
    CometPalette {
        name: "rainbow",
        colors: &COMET_RAINBOW,
    },
    CometPalette {
        name: "white",
        colors: &COMET_WHITE,
    },
];

impl CometPalette {
    /// Look up a palette by name, falling back to `fire`
    pub fn by_name(name: &str) -> &'static Self {
        COMET_PALETTES
            .iter()
            .find(|palette| palette.name == name)
            .unwrap_or(&COMET_PALETTES[0])
    }
}

/// Firework palette: launch trail color plus burst particle colors
#[derive(Debug, Clone, Copy)]
pub struct FireworkPalette {
    pub trail: Rgb,
    pub particles: &'static [Rgb],
}

const BURST_GOLD: [Rgb; 4] = hex_palette![0xFFC800, 0xFF9600, 0xFF6400, 0xC83200];
const BURST_PINK: [Rgb; 4] = hex_palette![0xFF0096, 0xFF3264, 0xC80064, 0x960032];
const BURST_CYAN: [Rgb; 4] = hex_palette![0x0096FF, 0x00C8FF, 0x00FFFF, 0x32C8FF];
const BURST_GREEN: [Rgb; 4] = hex_palette![0x00FF96, 0x32FF64, 0x64FF32, 0x96C800];
const BURST_MAGENTA: [Rgb; 4] = hex_palette![0xFF00FF, 0xC832FF, 0x9600C8, 0xFF0096];
const BURST_SILVER: [Rgb; 4] = hex_palette![0xFFFFFF, 0xC8C8FF, 0x9696C8, 0x646496];
const BURST_HALLOWEEN: [Rgb; 4] = hex_palette![0xFF8C00, 0xC800C8, 0x960096, 0xFF3200];
const BURST_RAINBOW: [Rgb; 5] = hex_palette![0xFF0000, 0x00FF00, 0x0000FF, 0xFF00FF, 0x00FFFF];

pub static FIREWORK_PALETTES: [FireworkPalette; 8] = [
    FireworkPalette {
        trail: rgb_from_u32(0xFFA500),
        particles: &BURST_GOLD,
    },
    FireworkPalette {
        trail: rgb_from_u32(0xFF0064),
        particles: &BURST_PINK,
    },
    FireworkPalette {
        trail: rgb_from_u32(0x0064FF),
        particles: &BURST_CYAN,
    },
    FireworkPalette {
        trail: rgb_from_u32(0x00FF64),
        particles: &BURST_GREEN,
    },
    FireworkPalette {
        trail: rgb_from_u32(0xC800FF),
        particles: &BURST_MAGENTA,
    },
    FireworkPalette {
        trail: rgb_from_u32(0xC8C8FF),
        particles: &BURST_SILVER,
    },
    FireworkPalette {
        trail: rgb_from_u32(0xFF6400),
        particles: &BURST_HALLOWEEN,
    },
    FireworkPalette {
        trail: rgb_from_u32(0xFFFF00),
        particles: &BURST_RAINBOW,
    },
];

impl FireworkPalette {
    /// Pick a random particle color; an empty list yields the trail color
    pub fn pick_particle<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        match self.particles.len() {
            0 => self.trail,
            len => self.particles[rng.random_range(0..len)],
        }
    }
}

/// Sample a palette at position `t` (0.0 = first entry, 1.0 = last entry)
///
/// Entries are not blended: the position selects a bucket. An empty palette
/// is treated as a flat white.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_palette(palette: &[Rgb], t: f32) -> Rgb {
    let Some(last) = palette.len().checked_sub(1) else {
        return FALLBACK_COLOR;
    };
    if last == 0 || t.is_nan() {
        return palette[0];
    }
    let index = (t.clamp(0.0, 1.0) * last as f32) as usize;
    palette[index.min(last)]
}
