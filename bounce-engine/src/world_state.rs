use crate::{
    Body, Bounds, DEFAULT_RESTITUTION, Resolution, SimulationConfig, WallHits,
    are_colliding, default, resolve, spawn_pair, total_kinetic_energy, total_momentum,
};

use glam::Vec2;
use log::{ debug, info };
use rand::Rng;

/// What happened during one call to [`WorldState::step`]
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub wall_hits: [WallHits; 2],
    /// `None` when the bodies were not touching (or collisions are disabled)
    pub collision: Option<Resolution>,
}

/// The two bodies of the simulation and how they interact.
///
/// With collisions disabled the bodies only bounce off the walls and go through
/// each other.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub(crate) bodies: [Body; 2],
    pub(crate) collisions_enabled: bool,
    pub(crate) restitution: f32,
}

impl WorldState {
    pub fn new(bodies: [Body; 2]) -> Self {
        Self {
            bodies,
            collisions_enabled: true,
            restitution: DEFAULT_RESTITUTION,
        }
    }

    /// Spawns the two bodies around the center of `bounds`
    pub fn from_config(config: &SimulationConfig, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let bodies = spawn_pair(&config.spawn, bounds.center(), rng);
        Self::new(bodies)
            .with_collisions(config.collisions)
            .with_restitution(config.restitution)
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.collisions_enabled = enabled;
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    pub fn total_momentum(&self) -> Vec2 {
        total_momentum(&self.bodies)
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        total_kinetic_energy(&self.bodies)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Both bodies are integrated independently first, then the pair is tested
    /// for contact and resolved.
    pub fn step(&mut self, dt: f32, bounds: Bounds) -> StepReport {
        let restitution = self.restitution;
        let [a, b] = &mut self.bodies;

        let mut report = StepReport {
            wall_hits: [a.integrate(dt, bounds), b.integrate(dt, bounds)],
            ..default()
        };
        for (idx, hits) in report.wall_hits.iter().enumerate() {
            if hits.any() {
                debug!("body {idx} bounced off {hits:?}");
            }
        }

        if self.collisions_enabled && are_colliding(a, b) {
            let resolution = resolve(a, b, restitution);
            match resolution {
                Resolution::Resolved { .. } => {
                    let p = self.total_momentum();
                    info!("total momentum after collision: ({:.3}, {:.3})", p.x, p.y);
                }
                Resolution::Skipped(reason) => debug!("contact left unresolved ({reason:?})"),
            }
            report.collision = Some(resolution);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkipReason;

    use approx::assert_relative_eq;
    use rand::{ SeedableRng, rngs::SmallRng };

    fn bounds() -> Bounds {
        Bounds::new(800., 600.)
    }

    #[test]
    fn test_step_without_contact() {
        let mut world = WorldState::new([
            Body::new(900., Vec2::new(100., 100.), Vec2::new(10., 0.)),
            Body::new(900., Vec2::new(500., 400.), Vec2::new(0., 10.)),
        ]);
        let report = world.step(1., bounds());

        assert_eq!(report, StepReport::default());
        assert_eq!(world.bodies()[0].position(), Vec2::new(110., 100.));
        assert_eq!(world.bodies()[1].position(), Vec2::new(500., 410.));
    }

    #[test]
    fn test_step_resolves_after_integration() {
        // After a 0.1s step the centers are 50 apart, with vn = -20
        let mut world = WorldState::new([
            Body::new(1000., Vec2::new(201., 300.), Vec2::new(-10., 0.)),
            Body::new(1000., Vec2::new(249., 300.), Vec2::new(10., 0.)),
        ]);
        let momentum = world.total_momentum();
        let report = world.step(0.1, bounds());

        let Some(Resolution::Resolved { normal, .. }) = report.collision
        else { panic!("expected a resolved collision, got {report:?}") };
        assert_eq!(normal, Vec2::X);
        assert!(world.bodies()[0].velocity().abs_diff_eq(Vec2::new(10., 0.), 1e-3));
        assert!(world.bodies()[1].velocity().abs_diff_eq(Vec2::new(-10., 0.), 1e-3));
        assert!(world.total_momentum().abs_diff_eq(momentum, 1e-2));

        let [a, b] = world.bodies();
        assert!(!are_colliding(a, b));
    }

    #[test]
    fn test_step_reports_skipped_contact() {
        let mut world = WorldState::new([
            Body::new(1000., Vec2::new(100., 100.), Vec2::new(50., 0.)),
            Body::new(1000., Vec2::new(150., 100.), Vec2::new(-50., 0.)),
        ]);
        let report = world.step(0., bounds());
        assert_eq!(report.collision, Some(Resolution::Skipped(SkipReason::Separating)));
    }

    #[test]
    fn test_disabled_collisions_pass_through() {
        let bodies = [
            Body::new(1000., Vec2::new(201., 300.), Vec2::new(-10., 0.)),
            Body::new(1000., Vec2::new(249., 300.), Vec2::new(10., 0.)),
        ];
        let mut world = WorldState::new(bodies).with_collisions(false);
        let report = world.step(0.1, bounds());

        assert_eq!(report.collision, None);
        assert_eq!(world.bodies()[0].velocity(), Vec2::new(-10., 0.));
        assert_eq!(world.bodies()[1].velocity(), Vec2::new(10., 0.));

        world.set_collisions_enabled(true);
        assert!(world.step(0., bounds()).collision.is_some());
    }

    #[test]
    fn test_from_config_is_deterministic() {
        let config = SimulationConfig {
            collisions: false,
            restitution: 0.5,
            ..default()
        };
        let a = WorldState::from_config(&config, bounds(), &mut SmallRng::seed_from_u64(4444));
        let b = WorldState::from_config(&config, bounds(), &mut SmallRng::seed_from_u64(4444));

        assert_eq!(a, b);
        assert!(!a.collisions_enabled());
        assert_eq!(a.restitution(), 0.5);

        let [first, second] = a.bodies();
        assert!(first.position().x < 400. && first.position().y < 300.);
        assert!(second.position().x > 400. && second.position().y > 300.);
    }

    #[test]
    fn test_long_run_is_elastic() {
        let config = SimulationConfig::default();
        for seed in 0..20 {
            let mut world = WorldState::from_config(&config, bounds(), &mut SmallRng::seed_from_u64(seed));
            let energy = world.total_kinetic_energy();

            for _ in 0..5_000 {
                world.step(1. / 60., bounds());
            }

            assert_relative_eq!(world.total_kinetic_energy(), energy, max_relative = 5e-3);
            for body in world.bodies() {
                assert_eq!(body.radius(), body.mass().sqrt());
            }
        }
    }
}
