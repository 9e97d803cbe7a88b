/*
 * Particle Module
 *
 * This module defines a single animated point of the field. A particle is
 * seeded once with a random position, a constant drift velocity, a radius
 * and an opacity, and from then on only moves by its own velocity with
 * wrap-around at the field edges.
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: pt2(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            velocity: vec2(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
            radius: rng.gen_range(1.0..4.0),
            opacity: rng.gen_range(0.2..0.7),
        }
    }

    // Advance the particle one step and wrap it against the field edges
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }
}

// Wrap rule: past the far edge re-enter at 0, below 0 re-enter at the far
// edge. Each axis wraps independently. Never clamp, never bounce.
pub fn wrap(coord: f32, dim: f32) -> f32 {
    if coord >= dim {
        0.0
    } else if coord < 0.0 {
        dim
    } else {
        coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_crosses_far_edge_to_zero() {
        // x = width - 0.1 with vx = 1 must land on 0, not width + 0.9
        let mut p = Particle {
            position: pt2(99.9, 50.0),
            velocity: vec2(1.0, 0.0),
            radius: 2.0,
            opacity: 0.5,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.position.x, 0.0);
        assert_eq!(p.position.y, 50.0);
    }

    #[test]
    fn wrap_crosses_near_edge_to_far_edge() {
        let mut p = Particle {
            position: pt2(50.0, 0.1),
            velocity: vec2(0.0, -1.0),
            radius: 2.0,
            opacity: 0.5,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.position.y, 100.0);
        // and the following step re-enters the interior
        p.advance(100.0, 100.0);
        assert!(p.position.y < 100.0 && p.position.y >= 0.0);
    }

    #[test]
    fn wrap_axes_are_independent() {
        let mut p = Particle {
            position: pt2(99.9, 0.1),
            velocity: vec2(1.0, -1.0),
            radius: 2.0,
            opacity: 0.5,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.position.x, 0.0);
        assert_eq!(p.position.y, 100.0);
    }

    #[test]
    fn wrap_leaves_interior_coordinates_alone() {
        assert_eq!(wrap(42.5, 100.0), 42.5);
        assert_eq!(wrap(0.0, 100.0), 0.0);
    }

    #[test]
    fn new_particle_attributes_are_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::new(&mut rng, 800.0, 600.0);
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.velocity.x >= -0.25 && p.velocity.x < 0.25);
            assert!(p.velocity.y >= -0.25 && p.velocity.y < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        }
    }
}
