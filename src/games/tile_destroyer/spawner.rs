use rand::Rng;

use super::enemy::{Enemy, Tier};

/// Source of the random choices made when an enemy spawns.
pub trait SpawnSource: Send {
    /// Tier index in `[0, Tier::COUNT)`.
    fn tier_index(&mut self) -> usize;
    /// Horizontal offset in `[0, max)`; `max == 0` yields 0.
    fn offset(&mut self, max: u32) -> u32;
}

#[derive(Debug, Clone)]
pub struct RandomSpawns<R> {
    rng: R,
}

impl<R: Rng + Send> RandomSpawns<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> SpawnSource for RandomSpawns<R> {
    fn tier_index(&mut self) -> usize {
        self.rng.gen_range(0..Tier::COUNT)
    }

    fn offset(&mut self, max: u32) -> u32 {
        if max == 0 {
            0
        } else {
            self.rng.gen_range(0..max)
        }
    }
}

/// Builds a new enemy at the top edge, fully inside the playfield horizontally.
pub fn spawn_enemy(source: &mut impl SpawnSource, playfield_width: f32) -> Enemy {
    let tier = Tier::from_index(source.tier_index());
    let max_offset = (playfield_width - tier.size()).max(0.0) as u32;
    let x = source.offset(max_offset) as f32;
    Enemy::new(tier, x, 0.0)
}

/// Frame-counted spawn delay. Starts full so the first eligible frame spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    elapsed: f32,
    max: f32,
}

impl SpawnTimer {
    pub fn new(max: f32) -> Self {
        Self { elapsed: max, max }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns true and resets when due; otherwise advances by one frame.
    pub fn tick(&mut self) -> bool {
        if self.elapsed >= self.max {
            self.elapsed = 0.0;
            true
        } else {
            self.elapsed += 1.0;
            false
        }
    }
}
