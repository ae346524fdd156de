use bounce_engine as be;
use macroquad::prelude::Vec2;
use rand::rngs::SmallRng;

pub trait Scene {
    fn name(&self) -> &'static str;
    fn create_world_state(&self, config: &be::SimulationConfig, bounds: be::Bounds, rng: &mut SmallRng) -> be::WorldState;
}

/// Two random bodies in opposite quadrants, as described by the configuration
pub struct RandomPair;

impl Scene for RandomPair {
    fn name(&self) -> &'static str {
        "Random pair"
    }

    fn create_world_state(&self, config: &be::SimulationConfig, bounds: be::Bounds, rng: &mut SmallRng) -> be::WorldState {
        be::WorldState::from_config(config, bounds, rng)
    }
}

/// Random pair that only bounces off the walls
pub struct WallsOnly;

impl Scene for WallsOnly {
    fn name(&self) -> &'static str {
        "Walls only"
    }

    fn create_world_state(&self, config: &be::SimulationConfig, bounds: be::Bounds, rng: &mut SmallRng) -> be::WorldState {
        be::WorldState::from_config(config, bounds, rng)
            .with_collisions(false)
    }
}

/// Heavy and light body on the same horizontal line moving toward each other
pub struct HeadOn;

impl Scene for HeadOn {
    fn name(&self) -> &'static str {
        "Head-on"
    }

    fn create_world_state(&self, config: &be::SimulationConfig, bounds: be::Bounds, _rng: &mut SmallRng) -> be::WorldState {
        let center = bounds.center();
        let spawn = &config.spawn;
        be::WorldState::new([
            be::Body::new(spawn.mass.max, center - Vec2::new(spawn.offset.max, 0.), Vec2::new(spawn.velocity.max, 0.)),
            be::Body::new(spawn.mass.min, center + Vec2::new(spawn.offset.max, 0.), Vec2::new(spawn.velocity.min, 0.)),
        ])
            .with_collisions(config.collisions)
            .with_restitution(config.restitution)
    }
}

/// Equal masses whose paths cross off-center
pub struct Glancing;

impl Scene for Glancing {
    fn name(&self) -> &'static str {
        "Glancing"
    }

    fn create_world_state(&self, config: &be::SimulationConfig, bounds: be::Bounds, _rng: &mut SmallRng) -> be::WorldState {
        let center = bounds.center();
        let spawn = &config.spawn;
        let mass = (spawn.mass.min + spawn.mass.max) / 2.;
        let side = mass.sqrt();
        be::WorldState::new([
            be::Body::new(mass, center + Vec2::new(-spawn.offset.max, -side), Vec2::new(spawn.velocity.max, 0.)),
            be::Body::new(mass, center + Vec2::new(spawn.offset.max, side), Vec2::new(-spawn.velocity.max, 0.)),
        ])
            .with_collisions(config.collisions)
            .with_restitution(config.restitution)
    }
}

pub fn get_all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(RandomPair),
        Box::new(HeadOn),
        Box::new(Glancing),
        Box::new(WallsOnly),
    ]
}
