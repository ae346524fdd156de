use crate::Body;

use glam::Vec2;
use rand::Rng;
use serde::Deserialize;

/// Closed interval `[min, max]` values are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Where the initial state of the two bodies is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnRanges {
    pub mass: Span,
    /// Distance from the center of the domain, per axis
    pub offset: Span,
    /// Per velocity component, in units per second
    pub velocity: Span,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            mass: Span::new(500., 2000.),
            offset: Span::new(50., 200.),
            velocity: Span::new(-100., 100.),
        }
    }
}

impl SpawnRanges {
    fn spawn_one(&self, center: Vec2, quadrant: Vec2, rng: &mut impl Rng) -> Body {
        let mass = self.mass.sample(rng);
        let offset = Vec2::new(self.offset.sample(rng), self.offset.sample(rng));
        let velocity = Vec2::new(self.velocity.sample(rng), self.velocity.sample(rng));
        Body::new(mass, center + quadrant * offset, velocity)
    }
}

/// Creates the two bodies of a run: the first one up and left of `center`, the
/// second one down and right of it (with y pointing down).
pub fn spawn_pair(ranges: &SpawnRanges, center: Vec2, rng: &mut impl Rng) -> [Body; 2] {
    let first = ranges.spawn_one(center, Vec2::NEG_ONE, rng);
    let second = ranges.spawn_one(center, Vec2::ONE, rng);
    [first, second]
}
