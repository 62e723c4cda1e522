//! Per-series color assignment
//!
//! Colors are picked at random the first time a series name is seen and never
//! change afterwards, even if the series is removed and added back later.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::debug;

pub type Rgb = [u8; 3];

pub struct ColorAllocator<R: Rng = StdRng> {
    rng: R,
    assigned: HashMap<String, Rgb>,
}

impl ColorAllocator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic allocator, used by tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ColorAllocator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorAllocator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            assigned: HashMap::new(),
        }
    }

    /// Color for `name`, assigning a random one on first request
    pub fn color_for(&mut self, name: &str) -> Rgb {
        if let Some(color) = self.assigned.get(name) {
            return *color;
        }
        let color: Rgb = [self.rng.gen(), self.rng.gen(), self.rng.gen()];
        debug!("Assigned color {:?} to series '{}'", color, name);
        self.assigned.insert(name.to_string(), color);
        color
    }

    /// Color already assigned to `name`, without allocating one
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.assigned.get(name).copied()
    }
}
