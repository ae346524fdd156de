use crate::Body;

use glam::Vec2;

pub fn distance(a: &Body, b: &Body) -> f32 {
    a.position().distance(b.position())
}

/// Sum of `mass * velocity`
pub fn total_momentum<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Vec2 {
    bodies.into_iter().map(Body::momentum).sum()
}

pub fn total_kinetic_energy<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> f32 {
    bodies.into_iter().map(Body::kinetic_energy).sum()
}

/// Magnitude of the impulse exchanged along the contact normal.
///
/// `vn` is the relative velocity `velA - velB` projected on the normal.
pub fn impulse_magnitude(vn: f32, mass_a: f32, mass_b: f32, restitution: f32) -> f32 {
    -(1. + restitution) * vn / (1. / mass_a + 1. / mass_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Body::new(1., Vec2::new(0., 0.), Vec2::ZERO);
        let b = Body::new(1., Vec2::new(3., 4.), Vec2::ZERO);
        assert_eq!(distance(&a, &b), 5.);
        assert_eq!(distance(&b, &a), 5.);
    }

    #[test]
    fn test_totals() {
        let bodies = [
            Body::new(2., Vec2::ZERO, Vec2::new(1., 0.)),
            Body::new(4., Vec2::ZERO, Vec2::new(0., -3.)),
        ];
        assert_eq!(total_momentum(&bodies), Vec2::new(2., -12.));
        assert_relative_eq!(total_kinetic_energy(&bodies), 1. + 18.);
    }

    #[test]
    fn test_impulse_magnitude() {
        // Equal masses at restitution 1 exchange their normal velocities
        assert_relative_eq!(impulse_magnitude(-100., 1000., 1000., 1.), 100_000.);
        assert_relative_eq!(impulse_magnitude(-100., 1000., 1000., 0.), 50_000.);
        assert_eq!(impulse_magnitude(0., 3., 5., 1.), 0.);
    }
}
