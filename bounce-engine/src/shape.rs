use glam::Vec2;

/// Filled circle as seen by a display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Vec2,
    pub radius: f32,
}

impl Disk {
    /// Approximates the disk with a regular polygon, counter-clockwise
    pub fn polygon(&self, num_segments: u32) -> Vec<Vec2> {
        let angle_step = std::f32::consts::TAU / num_segments as f32;
        (0..num_segments)
            .map(|i| self.center + Vec2::from_angle(angle_step * i as f32) * self.radius)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_points_on_circle() {
        let disk = Disk { center: Vec2::new(100., 50.), radius: 30. };
        let points = disk.polygon(30);

        assert_eq!(points.len(), 30);
        assert!(points[0].abs_diff_eq(Vec2::new(130., 50.), 1e-4));
        for p in points {
            assert!((p.distance(disk.center) - 30.).abs() < 1e-3);
        }
    }
}
