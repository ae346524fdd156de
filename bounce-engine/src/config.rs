//! Run configuration.
//!
//! Every field has a default so an empty document is a valid configuration.
//! A full YAML file looks like:
//!
//! ```yaml
//! window:
//!   width: 800
//!   height: 600
//!   title: "Two Balls"
//! collisions: true
//! restitution: 1.0
//! seed: 4444
//! spawn:
//!   mass: { min: 500.0, max: 2000.0 }
//!   offset: { min: 50.0, max: 200.0 }
//!   velocity: { min: -100.0, max: 100.0 }
//! ```

use crate::{ Bounds, DEFAULT_RESTITUTION, Span, SpawnRanges };

use serde::Deserialize;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} range is empty or not finite ({min}..={max})")]
    InvalidSpan { name: &'static str, min: f32, max: f32 },
    #[error("masses must be strictly positive (minimum is {0})")]
    NonPositiveMass(f32),
    #[error("restitution must be within [0, 1] (got {0})")]
    InvalidRestitution(f32),
    #[error("a {width}x{height} window cannot hold a body of diameter {diameter}")]
    WindowTooSmall { width: u32, height: u32, diameter: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Two Balls".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub window: WindowConfig,
    /// When disabled bodies only bounce off the walls and go through each other
    pub collisions: bool,
    pub restitution: f32,
    /// Seed of the random source used at startup, `None` picks one at random
    pub seed: Option<u64>,
    pub spawn: SpawnRanges,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            collisions: true,
            restitution: DEFAULT_RESTITUTION,
            seed: None,
            spawn: Default::default(),
        }
    }
}

impl SimulationConfig {
    /// Bounds of the domain when the window has its configured size
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.window.width as f32, self.window.height as f32)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let spans: [(&'static str, Span); 3] = [
            ("mass", self.spawn.mass),
            ("offset", self.spawn.offset),
            ("velocity", self.spawn.velocity),
        ];
        for (name, span) in spans {
            if !span.is_valid() {
                return Err(ConfigError::InvalidSpan { name, min: span.min, max: span.max });
            }
        }

        if self.spawn.mass.min <= 0. {
            return Err(ConfigError::NonPositiveMass(self.spawn.mass.min));
        }

        if !(0. ..=1.).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }

        let diameter = 2. * self.spawn.mass.max.sqrt();
        let bounds = self.bounds();
        if diameter > bounds.width().min(bounds.height()) {
            return Err(ConfigError::WindowTooSmall {
                width: self.window.width,
                height: self.window.height,
                diameter,
            });
        }

        Ok(())
    }
}
