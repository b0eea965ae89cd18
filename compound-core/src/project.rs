use rand::Rng;
use serde::Serialize;

use crate::activity::{measure, Activity};
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::fingerprint::Fingerprint;
use crate::mutation::mutate;
use crate::recording::RecordingPolicy;
use crate::scores::{PositionScores, ProtectedPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectState {
    AwaitingFirstMeasurement,
    Evolving,
    Done,
}

/// Snapshot of one recorded compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRow {
    pub project_id: u32,
    pub activity: Activity,
    /// 1-based count of rows recorded so far in this project.
    pub seq: u32,
    /// Simulation step the row was taken at, counting from 0.
    pub step: u64,
    pub fingerprint: Fingerprint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project_id: u32,
    pub simulated_steps: u64,
    pub recorded_rows: u32,
    pub best_activity: u32,
    pub best_activity_seq: u32,
    pub final_activity: u32,
    pub killed_rows: u32,
    pub protected: ProtectedPosition,
}

/// Evolves one project from its lead compound until `project_size` rows have
/// been recorded. Iterating yields the recorded rows in sequence order.
pub struct ProjectDriver<R> {
    project_id: u32,
    config: SimConfig,
    policy: RecordingPolicy,
    rng: R,
    fingerprint: Fingerprint,
    scores: PositionScores,
    state: ProjectState,
    step: u64,
    recorded: u32,
    best: Option<(u32, u32)>,
    final_activity: u32,
    killed_rows: u32,
    protected: ProtectedPosition,
}

impl<R: Rng> ProjectDriver<R> {
    pub fn new(project_id: u32, config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(project_id, config, rng))
    }

    /// Builds the lead compound for an already validated config.
    pub(crate) fn start(project_id: u32, config: SimConfig, mut rng: R) -> Self {
        let fingerprint = Fingerprint::initialize(&config, &mut rng);
        let scores = PositionScores::new(config.bit_vector_length);
        let protected = scores.select_protected();
        let state = if config.project_size == 0 {
            ProjectState::Done
        } else {
            ProjectState::AwaitingFirstMeasurement
        };

        Self {
            project_id,
            config,
            policy: RecordingPolicy::new(config.censor),
            rng,
            fingerprint,
            scores,
            state,
            step: 0,
            recorded: 0,
            best: None,
            final_activity: 0,
            killed_rows: 0,
            protected,
        }
    }

    pub fn project_id(&self) -> u32 {
        self.project_id
    }

    pub fn state(&self) -> ProjectState {
        self.state
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn scores(&self) -> &PositionScores {
        &self.scores
    }

    pub fn simulated_steps(&self) -> u64 {
        self.step
    }

    pub fn recorded_rows(&self) -> u32 {
        self.recorded
    }

    /// Runs one simulation step: measure, maybe record, score, protect, mutate.
    /// Returns the row when this step was recorded. No-op once done.
    pub fn step(&mut self) -> Option<RecordedRow> {
        if self.state == ProjectState::Done {
            return None;
        }

        let activity = measure(&self.fingerprint, &self.config);
        let row = if self.policy.should_record(self.step, &mut self.rng) {
            self.recorded += 1;
            self.note_recorded(activity);
            Some(RecordedRow {
                project_id: self.project_id,
                activity,
                seq: self.recorded,
                step: self.step,
                fingerprint: self.fingerprint.clone(),
            })
        } else {
            None
        };

        self.scores.accumulate(&self.fingerprint, activity.activity);
        self.protected = self.scores.select_protected();
        mutate(
            &mut self.fingerprint,
            self.protected.position,
            self.config.bit_vector_length,
            &mut self.rng,
        );
        self.step += 1;

        self.state = if self.recorded >= self.config.project_size {
            ProjectState::Done
        } else {
            ProjectState::Evolving
        };
        row
    }

    pub fn summary(&self) -> ProjectSummary {
        let (best_activity, best_activity_seq) = self.best.unwrap_or((0, 0));
        ProjectSummary {
            project_id: self.project_id,
            simulated_steps: self.step,
            recorded_rows: self.recorded,
            best_activity,
            best_activity_seq,
            final_activity: self.final_activity,
            killed_rows: self.killed_rows,
            protected: self.protected,
        }
    }

    fn note_recorded(&mut self, activity: Activity) {
        if self.best.map_or(true, |(best, _)| activity.activity > best) {
            self.best = Some((activity.activity, self.recorded));
        }
        if activity.is_killed() {
            self.killed_rows += 1;
        }
        self.final_activity = activity.activity;
    }
}

impl<R: Rng> Iterator for ProjectDriver<R> {
    type Item = RecordedRow;

    fn next(&mut self) -> Option<RecordedRow> {
        while self.state != ProjectState::Done {
            if let Some(row) = self.step() {
                return Some(row);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config(censor: f64, project_size: u32) -> SimConfig {
        SimConfig {
            censor,
            project_size,
            n_projects: 1,
            ..SimConfig::default()
        }
    }

    #[test]
    fn starts_awaiting_first_measurement() {
        let driver = ProjectDriver::new(1, small_config(0.1, 5), StdRng::seed_from_u64(1))
            .expect("valid config");
        assert_eq!(driver.state(), ProjectState::AwaitingFirstMeasurement);
        assert_eq!(driver.fingerprint().len(), 40);
        assert_eq!(driver.scores().select_protected().score, 0);
    }

    #[test]
    fn first_step_is_always_recorded_as_seq_one() {
        let mut driver = ProjectDriver::new(3, small_config(0.0, 5), StdRng::seed_from_u64(2))
            .expect("valid config");
        let row = driver.step().expect("first step recorded");
        assert_eq!(row.seq, 1);
        assert_eq!(row.step, 0);
        assert_eq!(row.project_id, 3);
        assert!(row.activity.activity >= 1);
        assert_eq!(driver.state(), ProjectState::Evolving);
    }

    #[test]
    fn full_censor_records_every_step() {
        let mut driver = ProjectDriver::new(1, small_config(1.0, 50), StdRng::seed_from_u64(3))
            .expect("valid config");
        let rows: Vec<RecordedRow> = driver.by_ref().collect();
        assert_eq!(rows.len(), 50);
        assert_eq!(driver.simulated_steps(), 50);
        assert_eq!(driver.state(), ProjectState::Done);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.seq as usize, i + 1);
            assert_eq!(row.step as usize, i);
        }
    }

    #[test]
    fn zero_censor_stalls_after_first_row() {
        let mut driver = ProjectDriver::new(1, small_config(0.0, 2), StdRng::seed_from_u64(4))
            .expect("valid config");
        assert!(driver.step().is_some());
        for _ in 0..500 {
            assert!(driver.step().is_none());
        }
        assert_eq!(driver.recorded_rows(), 1);
        assert_eq!(driver.state(), ProjectState::Evolving);
    }

    #[test]
    fn scores_accrue_on_unrecorded_steps() {
        let mut driver = ProjectDriver::new(1, small_config(0.0, 2), StdRng::seed_from_u64(5))
            .expect("valid config");
        let first = driver.step().expect("first row");
        let lead = first.fingerprint.positions()[0];
        assert!(driver.scores().get(lead) >= u64::from(first.activity.activity));
        let after_first = driver.scores().select_protected().score;
        for _ in 0..20 {
            driver.step();
        }
        assert!(driver.scores().select_protected().score >= after_first);
    }

    #[test]
    fn zero_project_size_is_immediately_done() {
        let mut driver = ProjectDriver::new(1, small_config(0.5, 0), StdRng::seed_from_u64(6))
            .expect("valid config");
        assert_eq!(driver.state(), ProjectState::Done);
        assert!(driver.next().is_none());
        assert_eq!(driver.simulated_steps(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SimConfig {
            num_set: 300,
            ..SimConfig::default()
        };
        assert!(ProjectDriver::new(1, config, StdRng::seed_from_u64(7)).is_err());
    }

    #[test]
    fn summary_tracks_best_and_final_activity() {
        let mut driver = ProjectDriver::new(9, small_config(0.5, 40), StdRng::seed_from_u64(8))
            .expect("valid config");
        let rows: Vec<RecordedRow> = driver.by_ref().collect();
        let summary = driver.summary();

        let best = rows.iter().map(|r| r.activity.activity).max().unwrap();
        let best_seq = rows
            .iter()
            .find(|r| r.activity.activity == best)
            .map(|r| r.seq)
            .unwrap();
        assert_eq!(summary.project_id, 9);
        assert_eq!(summary.recorded_rows, 40);
        assert_eq!(summary.best_activity, best);
        assert_eq!(summary.best_activity_seq, best_seq);
        assert_eq!(summary.final_activity, rows.last().unwrap().activity.activity);
        assert_eq!(
            summary.killed_rows as usize,
            rows.iter().filter(|r| r.activity.is_killed()).count()
        );
        assert!(summary.simulated_steps >= 40);
    }
}
