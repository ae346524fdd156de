use glam::Vec2;

/// Axis aligned rectangle `[0, width] × [0, height]` the bodies live in.
///
/// Owned by whoever displays the simulation and handed over on every step,
/// so it may change between two steps (e.g. on window resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.
    }

    /// Whether a disk fits entirely inside the domain (touching a wall counts)
    pub fn contains_disk(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= 0.
            && center.y - radius >= 0.
            && center.x + radius <= self.width
            && center.y + radius <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let bounds = Bounds::new(800., 600.);
        assert_eq!(bounds.center(), Vec2::new(400., 300.));
        assert_eq!(bounds.size(), Vec2::new(800., 600.));
    }

    #[test]
    fn test_contains_disk() {
        let bounds = Bounds::new(800., 600.);
        assert!(bounds.contains_disk(Vec2::new(400., 300.), 30.));
        assert!(bounds.contains_disk(Vec2::new(30., 30.), 30.));
        assert!(!bounds.contains_disk(Vec2::new(29., 300.), 30.));
        assert!(!bounds.contains_disk(Vec2::new(400., 590.), 30.));
    }
}
