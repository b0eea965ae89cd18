use serde::Serialize;

use crate::fingerprint::Fingerprint;

/// The bit position currently holding the highest cumulative score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProtectedPosition {
    pub position: u32,
    pub score: u64,
}

/// Running per-position activity totals for one project, indexed 1..=length.
#[derive(Clone, Debug)]
pub struct PositionScores {
    scores: Vec<u64>,
}

impl PositionScores {
    pub fn new(bit_vector_length: u32) -> Self {
        Self {
            scores: vec![0; bit_vector_length as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, position: u32) -> u64 {
        self.scores[(position - 1) as usize]
    }

    pub fn reset(&mut self) {
        self.scores.fill(0);
    }

    /// Credits `activity` to every slot of the fingerprint. Duplicate
    /// positions are credited once per slot.
    pub fn accumulate(&mut self, fingerprint: &Fingerprint, activity: u32) {
        for &position in fingerprint.positions() {
            self.scores[(position - 1) as usize] += u64::from(activity);
        }
    }

    /// Lowest-indexed position holding the maximum score. Position 1 wins when
    /// every score is zero.
    pub fn select_protected(&self) -> ProtectedPosition {
        let mut best = ProtectedPosition {
            position: 1,
            score: self.scores[0],
        };
        for (index, &score) in self.scores.iter().enumerate().skip(1) {
            if score > best.score {
                best = ProtectedPosition {
                    position: index as u32 + 1,
                    score,
                };
            }
        }
        best
    }
}
