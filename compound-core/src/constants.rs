//! Default campaign parameters.
//!
//! Bit positions are 1-based throughout; the active zone sits at the low end of
//! the vector and the kill zone at the high end.

pub const BIT_VECTOR_LENGTH: u32 = 256;
pub const N_ACTIVE_BITS: u32 = 15;
pub const NUM_SET: u32 = 40;
pub const N_KILL_BITS: u32 = 5; // kill cutoff = 256 - 5 + 1 = 252

// Per-step probability that a post-lead compound is written out.
pub const CENSOR: f64 = 0.1;

pub const N_PROJECTS: u32 = 100;
pub const PROJECT_SIZE: u32 = 1000;
