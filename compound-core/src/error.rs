use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NumSetTooSmall {
        num_set: u32,
    },
    NumSetTooLarge {
        num_set: u32,
        bit_vector_length: u32,
    },
    NoActiveZone,
    NoFillerZone {
        n_active_bits: u32,
        n_kill_bits: u32,
        bit_vector_length: u32,
    },
    InvalidCensor {
        censor: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumSetTooSmall { num_set } => {
                write!(f, "num_set must be at least 2, got {num_set}")
            }
            Self::NumSetTooLarge {
                num_set,
                bit_vector_length,
            } => write!(
                f,
                "num_set ({num_set}) must be smaller than bit_vector_length ({bit_vector_length})"
            ),
            Self::NoActiveZone => write!(f, "n_active_bits must be at least 1"),
            Self::NoFillerZone {
                n_active_bits,
                n_kill_bits,
                bit_vector_length,
            } => write!(
                f,
                "no room between active and kill zones: n_active_bits={n_active_bits}, \
                 n_kill_bits={n_kill_bits}, bit_vector_length={bit_vector_length}"
            ),
            Self::InvalidCensor { censor } => {
                write!(f, "censor must be a probability in [0, 1], got {censor}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
