use serde::Serialize;

use crate::config::SimConfig;
use crate::fingerprint::Fingerprint;

/// Activity of one compound, with and without kill suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub activity: u32,
    pub activity_no_kill: u32,
}

impl Activity {
    /// True when a kill-zone bit zeroed out a non-zero active count.
    pub fn is_killed(&self) -> bool {
        self.activity == 0 && self.activity_no_kill > 0
    }
}

/// Counts active-zone positions, then zeroes the result if any position sits in
/// the kill zone.
pub fn measure(fingerprint: &Fingerprint, config: &SimConfig) -> Activity {
    let activity_no_kill = fingerprint
        .positions()
        .iter()
        .filter(|&&p| (1..=config.n_active_bits).contains(&p))
        .count() as u32;
    let kill_cutoff = config.kill_cutoff();
    let killed = fingerprint.positions().iter().any(|&p| p >= kill_cutoff);

    Activity {
        activity: if killed { 0 } else { activity_no_kill },
        activity_no_kill,
    }
}
