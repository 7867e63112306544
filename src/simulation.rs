//! Per-entity motion laws and track boundary handling.
//!
//! Every law advances exactly one frame. Units are pixels and frames.

/// What happens to an entity that reaches either end of the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Circular strip: leaving one end re-enters at the other
    #[default]
    Wraparound,
    /// Solid ends: entities bounce back
    Wall,
}

impl Boundary {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wraparound => "wraparound",
            Self::Wall => "wall",
        }
    }
}

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    Start,
    End,
}

/// Wrap a position into `[0, track_len)`
pub fn wrap(position: f32, track_len: f32) -> f32 {
    if track_len <= 0.0 {
        return 0.0;
    }
    let mut wrapped = libm::fmodf(position, track_len);
    if wrapped < 0.0 {
        wrapped += track_len;
    }
    // `-tiny + len` rounds up to `len`
    if wrapped >= track_len { 0.0 } else { wrapped }
}

/// Keep an entity of the given `extent` between the walls.
///
/// On contact the position is clamped to exactly `extent / 2` from the wall and
/// the velocity is pointed away from it.
pub fn bounce_off_walls(
    position: &mut f32,
    velocity: &mut f32,
    extent: f32,
    track_len: f32,
) -> WallContact {
    let half = extent / 2.0;
    if *position - half <= 0.0 {
        *position = half;
        *velocity = libm::fabsf(*velocity);
        WallContact::Start
    } else if *position + half >= track_len {
        *position = track_len - half;
        *velocity = -libm::fabsf(*velocity);
        WallContact::End
    } else {
        WallContact::None
    }
}

/// Constant-velocity step followed by the boundary policy
pub fn advance_constant(
    position: &mut f32,
    velocity: &mut f32,
    extent: f32,
    track_len: f32,
    boundary: Boundary,
) -> WallContact {
    *position += *velocity;
    match boundary {
        Boundary::Wraparound => {
            *position = wrap(*position, track_len);
            WallContact::None
        }
        Boundary::Wall => bounce_off_walls(position, velocity, extent, track_len),
    }
}

/// Ballistic step with multiplicative speed decay
pub fn advance_ballistic(position: &mut f32, speed: &mut f32, decay: f32) {
    *speed *= decay;
    *position += *speed;
}

/// Gravity parameters for bouncing entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Velocity lost per frame
    pub acceleration: f32,
    /// Fraction of speed kept on each bounce
    pub dampening: f32,
    /// Bounces slower than this recharge the entity at the top of the track
    pub min_bounce: f32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            acceleration: 0.15,
            dampening: 0.90,
            min_bounce: 0.5,
        }
    }
}

/// Result of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceOutcome {
    Airborne,
    Bounced,
    /// Lost too much energy and was moved back to the top
    Recharged,
}

/// Gravity step with a floor at 0 and a recharge at `top`
pub fn advance_gravity(
    height: &mut f32,
    velocity: &mut f32,
    gravity: &Gravity,
    top: f32,
) -> BounceOutcome {
    *velocity -= gravity.acceleration;
    *height += *velocity;

    if *height > 0.0 {
        return BounceOutcome::Airborne;
    }

    *height = 0.0;
    *velocity = -*velocity * gravity.dampening;
    if libm::fabsf(*velocity) < gravity.min_bounce {
        *height = top;
        *velocity = 0.0;
        return BounceOutcome::Recharged;
    }
    BounceOutcome::Bounced
}

/// Displacement after `age` frames under logarithmic drag
///
/// Fast initial spread that decelerates smoothly, without a velocity state.
#[allow(clippy::cast_precision_loss)]
pub fn drag_displacement(launch_speed: f32, age: u64) -> f32 {
    launch_speed * libm::logf(1.0 + age as f32)
}
