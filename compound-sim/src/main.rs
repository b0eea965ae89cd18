use anyhow::{Context, Result};
use clap::Parser;
use compound_core::constants::{
    BIT_VECTOR_LENGTH, CENSOR, NUM_SET, N_ACTIVE_BITS, N_KILL_BITS, N_PROJECTS, PROJECT_SIZE,
};
use compound_core::SimConfig;
use compound_sim::util::{parse_seed, seed_to_hex, write_file};
use compound_sim::{run_to_writer, RunOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "compound-sim")]
#[command(about = "Simulate iterative compound optimization campaigns over binary fingerprints")]
struct Cli {
    /// Fingerprint length in bits
    #[arg(long, default_value_t = BIT_VECTOR_LENGTH)]
    bit_vector_length: u32,
    /// Width of the active zone at the start of the vector
    #[arg(long, default_value_t = N_ACTIVE_BITS)]
    n_active_bits: u32,
    /// Positions set in every fingerprint
    #[arg(long, default_value_t = NUM_SET)]
    num_set: u32,
    /// Width of the kill zone at the end of the vector
    #[arg(long, default_value_t = N_KILL_BITS)]
    n_kill_bits: u32,
    /// Probability that a step after the lead compound is recorded
    #[arg(long, default_value_t = CENSOR)]
    censor: f64,
    #[arg(long, default_value_t = N_PROJECTS)]
    n_projects: u32,
    /// Recorded rows per project
    #[arg(long, default_value_t = PROJECT_SIZE)]
    project_size: u32,
    /// Run seed (decimal or 0x-hex); random when omitted
    #[arg(long)]
    seed: Option<String>,
    /// CSV destination; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
    /// Write a JSON run report here
    #[arg(long)]
    summary: Option<PathBuf>,
    #[arg(long, default_value_t = 1)]
    jobs: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let seed = match cli.seed.as_deref() {
        Some(raw) => parse_seed(raw)?,
        None => rand::random::<u64>(),
    };
    let options = RunOptions {
        config: SimConfig {
            bit_vector_length: cli.bit_vector_length,
            n_active_bits: cli.n_active_bits,
            num_set: cli.num_set,
            n_kill_bits: cli.n_kill_bits,
            censor: cli.censor,
            n_projects: cli.n_projects,
            project_size: cli.project_size,
        },
        seed,
        jobs: cli.jobs,
    };

    let report = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let report = run_to_writer(&options, &mut out)?;
            out.flush()
                .with_context(|| format!("failed flushing {}", path.display()))?;
            report
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let report = run_to_writer(&options, &mut out)?;
            out.flush().context("failed flushing stdout")?;
            report
        }
    };

    if let Some(path) = &cli.summary {
        let encoded = serde_json::to_vec_pretty(&report)?;
        write_file(path, &encoded)?;
        eprintln!("summary={}", path.display());
    }
    eprintln!("seed={}", seed_to_hex(report.seed));
    eprintln!("projects={}", report.projects.len());
    eprintln!("rows={}", report.total_rows);
    eprintln!("steps={}", report.total_steps);
    eprintln!("steps_per_row={:.2}", report.steps_per_row());
    Ok(())
}
