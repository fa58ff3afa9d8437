//! Seeded shuffle and selection
//!
//! The generator is the classic `(s * 9301 + 49297) mod 233280` LCG. Orderings
//! must match other implementations bit for bit, so the constants and the
//! backward Fisher–Yates swap order are fixed.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

/// Linear-congruential generator producing draws in `[0, 1)`
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Reducing the seed modulo the LCG modulus up front gives the same sequence
    /// as exact integer arithmetic on the raw seed.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(MODULUS as i64) as u64,
        }
    }

    pub fn next_draw(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

/// Deterministic permutation of `items` for the given seed
pub fn shuffle<T>(mut items: Vec<T>, seed: i64) -> Vec<T> {
    if items.len() < 2 {
        return items;
    }

    let mut rng = SeededRng::new(seed);
    for i in (1..items.len()).rev() {
        let j = (rng.next_draw() * (i + 1) as f64) as usize;
        items.swap(i, j);
    }

    items
}

/// `seed mod n` with negative seeds normalised; `None` for an empty set
pub fn select_index(n: usize, seed: i64) -> Option<usize> {
    if n == 0 {
        return None;
    }
    Some(seed.rem_euclid(n as i64) as usize)
}

/// One of `variants` prompt phrasings for the seed
pub fn variation(seed: i64, variants: usize) -> usize {
    select_index(variants, seed).unwrap_or(0)
}
