use crate::{ Body, distance, impulse_magnitude };

use glam::Vec2;

/// Perfectly elastic
pub const DEFAULT_RESTITUTION: f32 = 1.;

/// Extra gap left between two bodies after de-penetration so that rounding
/// can't leave them touching
const CONTACT_SLOP: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Both centers are at the exact same spot, there is no contact normal
    CoincidentCenters,
    /// `dot(velA - velB, n) > 0` where `n` points from A to B
    Separating,
}

/// Outcome of [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Skipped(SkipReason),
    Resolved {
        /// Unit vector from A's center to B's center
        normal: Vec2,
        /// Signed magnitude of the impulse applied to A along `normal`
        /// (B receives the opposite)
        impulse: f32,
        /// Penetration depth before correction, zero or negative if the bodies
        /// were only touching
        overlap: f32,
    },
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Whether the two disks touch or overlap
pub fn are_colliding(a: &Body, b: &Body) -> bool {
    distance(a, b) <= a.radius() + b.radius()
}

/// Applies an impulse along the contact normal then pushes both bodies apart
/// so they no longer overlap.
///
/// Linear momentum is conserved by the impulse. With `restitution == 1` so is
/// the kinetic energy.
pub fn resolve(a: &mut Body, b: &mut Body, restitution: f32) -> Resolution {
    let delta_pos = b.position - a.position;
    let dist = delta_pos.length();
    if dist == 0. {
        return Resolution::Skipped(SkipReason::CoincidentCenters);
    }
    let normal = delta_pos / dist;

    let vn = (a.velocity - b.velocity).dot(normal);
    if vn > 0. {
        return Resolution::Skipped(SkipReason::Separating);
    }

    let j = impulse_magnitude(vn, a.mass(), b.mass(), restitution);
    let impulse = normal * j;
    a.velocity += impulse / a.mass();
    b.velocity -= impulse / b.mass();

    let overlap = (a.radius() + b.radius()) - dist;
    if overlap > 0. {
        let correction = normal * ((overlap + CONTACT_SLOP) / 2.);
        a.position -= correction;
        b.position += correction;
    }

    Resolution::Resolved {
        normal,
        impulse: j,
        overlap,
    }
}

/// [`resolve`] with [`DEFAULT_RESTITUTION`]
pub fn resolve_elastic(a: &mut Body, b: &mut Body) -> Resolution {
    resolve(a, b, DEFAULT_RESTITUTION)
}
