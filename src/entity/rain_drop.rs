use rand::Rng;

/// Binary glyph carried by a drop; a zero renders its tail at half intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropGlyph {
    Zero,
    One,
}

impl DropGlyph {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::One
        } else {
            Self::Zero
        }
    }

    pub const fn intensity(self) -> f32 {
        match self {
            Self::Zero => 0.5,
            Self::One => 1.0,
        }
    }
}

/// Falling code drop: a blinking head followed by a green tail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    /// Head pixel
    pub head: i64,
    /// Tail length in pixels
    pub length: u32,
    /// Frames per one-pixel step
    pub step_frames: u32,
    pub glyph: DropGlyph,
    /// 0.5-1.0
    pub intensity: f32,
}

impl RainDrop {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            head: 0,
            length: rng.random_range(3..=8),
            step_frames: rng.random_range(2..=4),
            glyph: DropGlyph::random(rng),
            intensity: rng.random_range(0.5..1.0_f32),
        }
    }

    /// Step forward on frames that are a multiple of the drop's pace
    ///
    /// Returns `true` if the drop moved.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, frame: u64) -> bool {
        if frame % u64::from(self.step_frames.max(1)) != 0 {
            return false;
        }
        self.head += 1;
        if rng.random_bool(0.1) {
            self.glyph = DropGlyph::random(rng);
        }
        true
    }

    /// Whole drop has fallen past the end of the track
    #[allow(clippy::cast_possible_wrap)]
    pub fn is_done(&self, track_len: usize) -> bool {
        self.head > track_len as i64 + i64::from(self.length)
    }

    /// Tail brightness `distance` pixels behind the head
    #[allow(clippy::cast_precision_loss)]
    pub fn tail_brightness(&self, distance: u32) -> f32 {
        if self.length == 0 {
            return 0.0;
        }
        let fade = 1.0 - distance as f32 / self.length as f32;
        libm::powf(fade.max(0.0), 1.5) * self.glyph.intensity() * self.intensity
    }
}
