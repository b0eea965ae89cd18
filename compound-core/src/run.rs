use std::io::{self, Write};

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::output::{header_line, write_row};
use crate::project::{ProjectDriver, ProjectSummary};
use crate::rng::project_rng;

/// Iterates independent projects `1..=n_projects` under one run seed.
#[derive(Clone, Copy, Debug)]
pub struct RunDriver {
    config: SimConfig,
    seed: u64,
}

impl RunDriver {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.censor == 0.0 && config.project_size > 1 {
            warn!(
                project_size = config.project_size,
                "censor is 0: projects will never record past their first row"
            );
        }
        Ok(Self { config, seed })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn project_ids(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.config.n_projects
    }

    /// Fresh driver for one project, seeded independently of every other project.
    pub fn project(&self, project_id: u32) -> ProjectDriver<StdRng> {
        ProjectDriver::start(project_id, self.config, project_rng(self.seed, project_id))
    }

    /// Streams the header and every project's rows in project-major order.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<Vec<ProjectSummary>> {
        writeln!(out, "{}", header_line(&self.config))?;
        let mut summaries = Vec::with_capacity(self.config.n_projects as usize);
        for project_id in self.project_ids() {
            summaries.push(self.write_project(project_id, out)?);
        }
        Ok(summaries)
    }

    /// Runs one project to completion, writing its rows (without header).
    pub fn write_project<W: Write>(
        &self,
        project_id: u32,
        out: &mut W,
    ) -> io::Result<ProjectSummary> {
        let mut driver = self.project(project_id);
        for row in driver.by_ref() {
            write_row(out, &self.config, &row)?;
        }
        let summary = driver.summary();
        debug!(
            project = project_id,
            steps = summary.simulated_steps,
            best_activity = summary.best_activity,
            "project finished"
        );
        Ok(summary)
    }
}
