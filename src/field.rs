/*
 * Field Module
 *
 * This module defines the Field struct that owns the particle collection
 * and the viewport dimensions. The field advances every particle once per
 * physics step and computes the connection pass: for every unordered pair
 * of particles closer than the link threshold, a line is drawn with opacity
 * falling off linearly with distance.
 *
 * The connection pass is O(n²) per frame. At the default 60-80 particles
 * that is well under the cost of a spatial index, so all pairs are checked
 * directly.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::particle::Particle;

// A proximity line between two particles, by index into the field
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

pub struct Field {
    pub width: f32,
    pub height: f32,
    particles: Vec<Particle>,
}

impl Field {
    pub fn new(width: f32, height: f32, count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::new(rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // One simulation step: drift every particle and wrap it against the
    // current dimensions
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    // Update the dimensions only. Particle positions are not rescaled; a
    // particle left outside the new bounds re-enters on its next wrap.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // Re-seed the field with `count` fresh particles
    pub fn reset(&mut self, count: usize, rng: &mut impl Rng) {
        let (width, height) = (self.width, self.height);
        self.particles.clear();
        self.particles
            .resize_with(count, || Particle::new(rng, width, height));
    }

    // Connection pass: one link per unordered pair under the threshold
    pub fn links(&self, threshold: f32, dim: f32) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let d = self.particles[i]
                    .position
                    .distance(self.particles[j].position);
                if d < threshold {
                    links.push(Link {
                        a: i,
                        b: j,
                        opacity: link_opacity(d, threshold, dim),
                    });
                }
            }
        }
        links
    }
}

// Linear falloff: full `dim` at distance 0, zero at the threshold
pub fn link_opacity(distance: f32, threshold: f32, dim: f32) -> f32 {
    (1.0 - distance / threshold) * dim
}
