use rand::Rng;

/// Decides which simulation steps are written out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordingPolicy {
    censor: f64,
}

impl RecordingPolicy {
    pub fn new(censor: f64) -> Self {
        Self { censor }
    }

    pub fn censor(&self) -> f64 {
        self.censor
    }

    /// Step 0 is always recorded and consumes no randomness. Later steps are
    /// recorded with probability `censor`, so a larger censor records more often.
    pub fn should_record<R: Rng + ?Sized>(&self, step: u64, rng: &mut R) -> bool {
        if step == 0 {
            return true;
        }
        rng.gen::<f64>() < self.censor
    }
}
