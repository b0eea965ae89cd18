pub mod util;

use anyhow::{Context, Result};
use compound_core::output::header_line;
use compound_core::{ProjectSummary, RunDriver, SimConfig};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::util::seed_to_hex;

#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub config: SimConfig,
    pub seed: u64,
    /// Worker threads; 1 streams rows as they are produced.
    pub jobs: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub seed_hex: String,
    pub config: SimConfig,
    pub jobs: usize,
    pub total_rows: u64,
    pub total_steps: u64,
    pub elapsed_ms: u128,
    pub projects: Vec<ProjectSummary>,
}

impl RunReport {
    /// Mean number of simulated steps behind each recorded row.
    pub fn steps_per_row(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.total_steps as f64 / self.total_rows as f64
    }
}

/// Runs every project and writes the CSV table to `out`. Output is identical
/// for a given seed whatever the job count.
pub fn run_to_writer<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunReport> {
    let driver = RunDriver::new(options.config, options.seed).context("invalid configuration")?;
    let started = Instant::now();
    info!(
        seed = %seed_to_hex(options.seed),
        projects = options.config.n_projects,
        project_size = options.config.project_size,
        censor = options.config.censor,
        jobs = options.jobs,
        "starting run"
    );

    let projects = if options.jobs <= 1 {
        driver
            .write_table(out)
            .context("failed writing simulation rows")?
    } else {
        run_parallel(&driver, options.jobs, out)?
    };

    let report = RunReport {
        seed: options.seed,
        seed_hex: seed_to_hex(options.seed),
        config: options.config,
        jobs: options.jobs.max(1),
        total_rows: projects.iter().map(|p| u64::from(p.recorded_rows)).sum(),
        total_steps: projects.iter().map(|p| p.simulated_steps).sum(),
        elapsed_ms: started.elapsed().as_millis(),
        projects,
    };
    info!(
        rows = report.total_rows,
        steps = report.total_steps,
        elapsed_ms = report.elapsed_ms as u64,
        "run finished"
    );
    Ok(report)
}

fn run_parallel<W: Write>(
    driver: &RunDriver,
    jobs: usize,
    out: &mut W,
) -> Result<Vec<ProjectSummary>> {
    let ids: Vec<u32> = driver.project_ids().collect();
    let run_one = |&project_id: &u32| -> Result<(Vec<u8>, ProjectSummary)> {
        let mut buffer = Vec::new();
        let summary = driver
            .write_project(project_id, &mut buffer)
            .with_context(|| format!("failed rendering project {project_id}"))?;
        Ok((buffer, summary))
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("failed to build rayon threadpool")?;
    let results: Vec<Result<(Vec<u8>, ProjectSummary)>> =
        pool.install(|| ids.par_iter().map(run_one).collect());

    writeln!(out, "{}", header_line(driver.config())).context("failed writing header")?;
    let mut summaries = Vec::with_capacity(results.len());
    for result in results {
        let (buffer, summary) = result?;
        out.write_all(&buffer)
            .context("failed writing simulation rows")?;
        summaries.push(summary);
    }
    Ok(summaries)
}
