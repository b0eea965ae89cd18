use rand::Rng;

use crate::config::SimConfig;

/// One compound state: `num_set` 1-based bit positions.
///
/// Positions are meant to be distinct, but initialization samples the filler
/// positions with replacement, so duplicates are tolerated rather than
/// rejected. Mutation never introduces new duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    positions: Vec<u32>,
}

impl Fingerprint {
    /// Builds a weakly active lead compound: one position from the active zone,
    /// the rest drawn with replacement from between the active and kill zones.
    pub fn initialize<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        let (filler_lo, filler_hi) = config.filler_range();
        let mut positions = Vec::with_capacity(config.num_set as usize);
        positions.push(rng.gen_range(1..=config.n_active_bits));
        for _ in 1..config.num_set {
            positions.push(rng.gen_range(filler_lo..=filler_hi));
        }
        Self { positions }
    }

    pub fn from_positions(positions: Vec<u32>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: u32) -> bool {
        self.positions.contains(&position)
    }

    /// Overwrites the slot at `index`, returning the position it held.
    pub fn replace(&mut self, index: usize, position: u32) -> u32 {
        std::mem::replace(&mut self.positions[index], position)
    }

    pub fn distinct_count(&self) -> usize {
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    }

    /// Dense `'0'`/`'1'` rendering of the first `bit_vector_length` positions.
    pub fn bits(&self, bit_vector_length: u32) -> Vec<u8> {
        let mut bits = vec![b'0'; bit_vector_length as usize];
        for &position in &self.positions {
            bits[(position - 1) as usize] = b'1';
        }
        bits
    }
}
