/*
 * Burst Module
 *
 * Transient celebration effects. A burst is a radial volley of short-lived
 * sparks spawned at a point: each spark flies outward, is pulled down by
 * gravity, slows under drag and fades with its remaining life. A finished
 * burst is removed by the app; burst sparks live outside the Field, so the
 * field's particle count invariant is untouched.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

pub const SPARKS_PER_BURST: usize = 36;
// Lifetime in physics steps (1.5s at 60 steps per second)
pub const SPARK_LIFE: u32 = 90;
const SPARK_SPEED_MIN: f32 = 1.2;
const SPARK_SPEED_MAX: f32 = 3.0;
const SPARK_GRAVITY: f32 = 0.04;
const SPARK_DRAG: f32 = 0.985;

#[derive(Clone, Debug)]
pub struct Spark {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
    pub life: u32,
}

impl Spark {
    // Fade with remaining life
    pub fn alpha(&self) -> f32 {
        self.life as f32 / SPARK_LIFE as f32
    }
}

pub struct Burst {
    sparks: Vec<Spark>,
}

impl Burst {
    pub fn new(origin: Point2, rng: &mut impl Rng) -> Self {
        let sparks = (0..SPARKS_PER_BURST)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(SPARK_SPEED_MIN..SPARK_SPEED_MAX);
                Spark {
                    position: origin,
                    velocity: vec2(angle.cos(), angle.sin()) * speed,
                    radius: rng.gen_range(1.5..3.5),
                    life: SPARK_LIFE,
                }
            })
            .collect();
        Self { sparks }
    }

    // One physics step; expired sparks are dropped
    pub fn advance(&mut self) {
        for spark in &mut self.sparks {
            // field space has y growing downward, so gravity is positive y
            spark.velocity.y += SPARK_GRAVITY;
            spark.velocity *= SPARK_DRAG;
            spark.position += spark.velocity;
            spark.life -= 1;
        }
        self.sparks.retain(|spark| spark.life > 0);
    }

    pub fn finished(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_burst_spawns_full_volley_at_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let burst = Burst::new(pt2(100.0, 100.0), &mut rng);
        assert_eq!(burst.sparks().len(), SPARKS_PER_BURST);
        for spark in burst.sparks() {
            assert_eq!(spark.position, pt2(100.0, 100.0));
            assert!(spark.velocity.length() > 0.0);
        }
    }

    #[test]
    fn burst_finishes_after_spark_lifetime() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = Burst::new(pt2(0.0, 0.0), &mut rng);
        for _ in 0..SPARK_LIFE - 1 {
            burst.advance();
            assert!(!burst.finished());
        }
        burst.advance();
        assert!(burst.finished());
    }

    #[test]
    fn spark_alpha_fades_with_life() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = Burst::new(pt2(0.0, 0.0), &mut rng);
        let fresh = burst.sparks()[0].alpha();
        assert!((fresh - 1.0).abs() < 1e-6);
        for _ in 0..SPARK_LIFE / 2 {
            burst.advance();
        }
        let aged = burst.sparks()[0].alpha();
        assert!(aged < fresh);
        assert!(aged > 0.0);
    }

    #[test]
    fn gravity_pulls_sparks_downward() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = Burst::new(pt2(0.0, 0.0), &mut rng);
        let before: f32 = burst.sparks().iter().map(|s| s.velocity.y).sum();
        burst.advance();
        let after: f32 = burst.sparks().iter().map(|s| s.velocity.y).sum();
        assert!(after > before);
    }
}
