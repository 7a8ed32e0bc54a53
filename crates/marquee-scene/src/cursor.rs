//! Decorative cursor trail.
//!
//! Pointer movement sparsely spawns small dots at the cursor position;
//! each dot fades out and grows over its lifetime, then disappears. The
//! spawn roll is random but the trail is testable: construct it with a
//! fixed seed and every roll is reproducible.

use marquee_config::TrailConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Scale a dot grows to by the end of its life.
const END_SCALE: f64 = 3.0;
/// Opacity a dot starts at.
const START_OPACITY: f32 = 0.6;

/// One live trail dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
    pub age_ms: u64,
}

impl TrailDot {
    /// Fade progress over `lifetime_ms`, `0.0..=1.0`.
    fn progress(&self, lifetime_ms: u32) -> f64 {
        (self.age_ms as f64 / lifetime_ms.max(1) as f64).min(1.0)
    }

    /// Current opacity: starts faint and fades to nothing.
    pub fn opacity(&self, lifetime_ms: u32) -> f32 {
        START_OPACITY * (1.0 - self.progress(lifetime_ms)) as f32
    }

    /// Current scale: grows from full size toward the end scale.
    pub fn scale(&self, lifetime_ms: u32) -> f64 {
        1.0 + (END_SCALE - 1.0) * self.progress(lifetime_ms)
    }
}

/// Spawns and ages trail dots from pointer movement.
#[derive(Debug)]
pub struct CursorTrail {
    config: TrailConfig,
    rng: StdRng,
    dots: Vec<TrailDot>,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic trail for tests.
    pub fn with_seed(config: TrailConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: TrailConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            dots: Vec::new(),
        }
    }

    /// Handle a pointer move. Rolls the spawn chance and, on a hit, adds
    /// a dot at the pointer. Returns whether a dot was spawned.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        if !self.config.enabled {
            return false;
        }
        if self.rng.random::<f64>() >= self.config.spawn_probability {
            return false;
        }
        self.dots.push(TrailDot { x, y, age_ms: 0 });
        true
    }

    /// Age every dot and drop the ones past their lifetime.
    pub fn advance(&mut self, dt_ms: u64) {
        let lifetime = self.config.lifetime_ms as u64;
        for dot in &mut self.dots {
            dot.age_ms += dt_ms;
        }
        self.dots.retain(|dot| dot.age_ms < lifetime);
    }

    /// Live dots, oldest first.
    pub fn dots(&self) -> &[TrailDot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dot_size_px(&self) -> f64 {
        self.config.dot_size_px
    }

    pub fn lifetime_ms(&self) -> u32 {
        self.config.lifetime_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(seed: u64) -> CursorTrail {
        CursorTrail::with_seed(TrailConfig::default(), seed)
    }

    #[test]
    fn spawn_rate_tracks_the_probability() {
        let mut trail = trail(7);
        let mut spawned = 0;
        for i in 0..1000 {
            if trail.pointer_moved(i as f64, 0.0) {
                spawned += 1;
            }
        }
        // p = 0.15 over 1000 rolls; a wide band to keep this stable
        assert!((80..=220).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn same_seed_same_trail() {
        let mut a = trail(42);
        let mut b = trail(42);
        for i in 0..50 {
            assert_eq!(
                a.pointer_moved(i as f64, i as f64),
                b.pointer_moved(i as f64, i as f64)
            );
        }
        assert_eq!(a.dots(), b.dots());
    }

    #[test]
    fn dots_fade_and_grow_then_expire() {
        let mut trail = trail(1);
        while !trail.pointer_moved(10.0, 20.0) {}
        let dot = trail.dots()[0];
        assert_eq!(dot.opacity(800), 0.6);
        assert_eq!(dot.scale(800), 1.0);

        trail.advance(400);
        let dot = trail.dots()[0];
        assert!((dot.opacity(800) - 0.3).abs() < 1e-5);
        assert!((dot.scale(800) - 2.0).abs() < 1e-9);

        trail.advance(400);
        assert!(trail.is_empty());
    }

    #[test]
    fn disabled_trail_never_spawns() {
        let config = TrailConfig {
            enabled: false,
            ..TrailConfig::default()
        };
        let mut trail = CursorTrail::with_seed(config, 3);
        for i in 0..200 {
            assert!(!trail.pointer_moved(i as f64, 0.0));
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn certain_probability_always_spawns() {
        let config = TrailConfig {
            spawn_probability: 1.0,
            ..TrailConfig::default()
        };
        let mut trail = CursorTrail::with_seed(config, 9);
        for _ in 0..10 {
            assert!(trail.pointer_moved(0.0, 0.0));
        }
        assert_eq!(trail.len(), 10);
    }
}
