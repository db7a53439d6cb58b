use super::vec2::Vec2;

/// Circular body integrated with position Verlet.
///
/// Velocity is never stored: it is implied by `pos - prev_pos`. Radius and mass
/// are fixed at construction, only the positions and the accumulated
/// acceleration change afterwards.
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// World position (center)
    pub pos: Vec2,
    /// Position one sub-step ago
    pub prev_pos: Vec2,
    /// Acceleration accumulated since the last integration
    pub acceleration: Vec2,

    // === Shape / Material ===
    radius: f32,
    mass: f32,
    inv_mass: f32,
    /// Display color (0xRRGGBB), carried for the presentation layer
    pub color: u32,
}

/// Zero, negative or non-finite masses fall back to 1.
pub fn sanitize_mass(mass: f32) -> f32 {
    if mass.is_finite() && mass > 0.0 {
        mass
    } else {
        1.0
    }
}

impl Body {
    /// Create a body at rest. `radius` must be positive and finite; callers
    /// taking host input check it first (see `SimError::InvalidRadius`).
    pub fn new(pos: Vec2, radius: f32, mass: f32, color: u32) -> Self {
        debug_assert!(radius.is_finite() && radius > 0.0, "body radius must be positive, got {radius}");
        let mass = sanitize_mass(mass);
        Self {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
            mass,
            inv_mass: 1.0 / mass,
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Implicit velocity (displacement per sub-step).
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Accumulate a force. Stored pre-divided by mass so `integrate` needs no division.
    #[inline]
    pub fn accumulate(&mut self, force: Vec2) {
        self.acceleration += force * self.inv_mass;
    }

    /// One position-Verlet step of size `dt` (the sub-step, not the frame).
    pub fn integrate(&mut self, dt: f32, damping: f32) {
        let velocity = self.velocity() * damping;
        self.prev_pos = self.pos;
        self.pos += velocity + self.acceleration * (dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Pin the body in place: zero implicit velocity.
    #[inline]
    pub fn halt(&mut self) {
        self.prev_pos = self.pos;
    }
}
