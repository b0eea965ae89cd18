use rand::Rng;

use crate::fingerprint::Fingerprint;

/// One applied mutation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub index: usize,
    pub removed: u32,
    pub inserted: u32,
}

/// Rejection-samples a position in `1..=bit_vector_length` that the fingerprint
/// does not hold. Terminates only while the fingerprint leaves a position free,
/// which `SimConfig::validate` guarantees.
pub fn pick_replacement_value<R: Rng + ?Sized>(
    fingerprint: &Fingerprint,
    bit_vector_length: u32,
    rng: &mut R,
) -> u32 {
    loop {
        let candidate = rng.gen_range(1..=bit_vector_length);
        if !fingerprint.contains(candidate) {
            return candidate;
        }
    }
}

/// Rejection-samples a slot whose current value is not the protected position.
/// Protection is by value, so every slot holding that value is skipped.
pub fn pick_target_index<R: Rng + ?Sized>(
    fingerprint: &Fingerprint,
    protected: u32,
    rng: &mut R,
) -> usize {
    let positions = fingerprint.positions();
    loop {
        let index = rng.gen_range(0..positions.len());
        if positions[index] != protected {
            return index;
        }
    }
}

/// Draws the replacement value, then the target slot, and applies the overwrite.
pub fn mutate<R: Rng + ?Sized>(
    fingerprint: &mut Fingerprint,
    protected: u32,
    bit_vector_length: u32,
    rng: &mut R,
) -> Mutation {
    let inserted = pick_replacement_value(fingerprint, bit_vector_length, rng);
    let index = pick_target_index(fingerprint, protected, rng);
    let removed = fingerprint.replace(index, inserted);
    Mutation {
        index,
        removed,
        inserted,
    }
}
