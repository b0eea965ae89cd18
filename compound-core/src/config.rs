use serde::{Deserialize, Serialize};

use crate::constants::{
    BIT_VECTOR_LENGTH, CENSOR, NUM_SET, N_ACTIVE_BITS, N_KILL_BITS, N_PROJECTS, PROJECT_SIZE,
};
use crate::error::ConfigError;

/// Immutable parameters for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub bit_vector_length: u32,
    pub n_active_bits: u32,
    pub num_set: u32,
    pub n_kill_bits: u32,
    pub censor: f64,
    pub n_projects: u32,
    pub project_size: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bit_vector_length: BIT_VECTOR_LENGTH,
            n_active_bits: N_ACTIVE_BITS,
            num_set: NUM_SET,
            n_kill_bits: N_KILL_BITS,
            censor: CENSOR,
            n_projects: N_PROJECTS,
            project_size: PROJECT_SIZE,
        }
    }
}

impl SimConfig {
    /// First position of the kill zone. Lies past the vector when there are no kill bits.
    pub fn kill_cutoff(&self) -> u32 {
        self.bit_vector_length - self.n_kill_bits + 1
    }

    /// Inclusive range the non-lead initial positions are drawn from.
    pub fn filler_range(&self) -> (u32, u32) {
        (
            self.n_active_bits + 1,
            self.bit_vector_length - self.n_kill_bits - 1,
        )
    }

    /// Rejects configurations under which initialization or either mutation
    /// draw could never complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_set < 2 {
            return Err(ConfigError::NumSetTooSmall {
                num_set: self.num_set,
            });
        }
        if self.num_set >= self.bit_vector_length {
            return Err(ConfigError::NumSetTooLarge {
                num_set: self.num_set,
                bit_vector_length: self.bit_vector_length,
            });
        }
        if self.n_active_bits == 0 {
            return Err(ConfigError::NoActiveZone);
        }
        // Checked in u64 so oversized zone widths cannot wrap.
        if u64::from(self.n_active_bits) + u64::from(self.n_kill_bits) + 2
            > u64::from(self.bit_vector_length)
        {
            return Err(ConfigError::NoFillerZone {
                n_active_bits: self.n_active_bits,
                n_kill_bits: self.n_kill_bits,
                bit_vector_length: self.bit_vector_length,
            });
        }
        if !self.censor.is_finite() || !(0.0..=1.0).contains(&self.censor) {
            return Err(ConfigError::InvalidCensor {
                censor: self.censor,
            });
        }
        Ok(())
    }
}
