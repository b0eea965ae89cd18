pub mod activity;
pub mod config;
pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod mutation;
pub mod output;
pub mod project;
pub mod recording;
pub mod rng;
pub mod run;
pub mod scores;

pub use activity::{measure, Activity};
pub use config::SimConfig;
pub use error::ConfigError;
pub use fingerprint::Fingerprint;
pub use project::{ProjectDriver, ProjectState, ProjectSummary, RecordedRow};
pub use run::RunDriver;
pub use scores::{PositionScores, ProtectedPosition};
