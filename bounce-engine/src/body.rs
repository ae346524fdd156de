use crate::{ Bounds, Disk };

use glam::Vec2;

/// Walls touched by a body during a single integration step
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    /// Both axes reflected in the same step
    pub fn is_corner(self) -> bool {
        (self.left || self.right) && (self.top || self.bottom)
    }
}

/// A circular rigid body.
///
/// The radius is derived from the mass (`radius = √mass`) once at construction
/// and both stay fixed for the lifetime of the body. Only position and velocity
/// ever change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    mass: f32,
    radius: f32,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
}

impl Body {
    pub fn new(mass: f32, position: Vec2, velocity: Vec2) -> Self {
        debug_assert!(mass > 0., "body mass must be strictly positive (got {mass})");
        Self {
            mass,
            radius: mass.sqrt(),
            position,
            velocity,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// What a display needs to draw this body
    pub fn disk(&self) -> Disk {
        Disk {
            center: self.position,
            radius: self.radius,
        }
    }

    /// Advances the body by `dt` seconds (explicit Euler) then reflects it off
    /// any wall it went through.
    ///
    /// Each axis is checked independently, so a corner hit reflects both
    /// velocity components in the same step. Reflection is perfectly elastic.
    pub fn integrate(&mut self, dt: f32, bounds: Bounds) -> WallHits {
        debug_assert!(dt >= 0., "negative time step ({dt})");

        let r = self.radius;
        let mut pos = self.position + self.velocity * dt;
        let mut hits = WallHits::default();

        if pos.x - r < 0. {
            pos.x = r;
            self.velocity.x *= -1.;
            hits.left = true;
        }
        if pos.x + r > bounds.width() {
            pos.x = bounds.width() - r;
            self.velocity.x *= -1.;
            hits.right = true;
        }
        if pos.y - r < 0. {
            pos.y = r;
            self.velocity.y *= -1.;
            hits.top = true;
        }
        if pos.y + r > bounds.height() {
            pos.y = bounds.height() - r;
            self.velocity.y *= -1.;
            hits.bottom = true;
        }

        self.position = pos;
        hits
    }
}
