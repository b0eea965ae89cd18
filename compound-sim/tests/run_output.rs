use anyhow::Result;
use compound_core::SimConfig;
use compound_sim::util::write_file;
use compound_sim::{run_to_writer, RunOptions};
use std::fs;

fn options(jobs: usize) -> RunOptions {
    RunOptions {
        config: SimConfig {
            n_projects: 6,
            project_size: 25,
            censor: 0.25,
            ..SimConfig::default()
        },
        seed: 0x5EED,
        jobs,
    }
}

#[test]
fn parallel_output_matches_sequential_output() -> Result<()> {
    let mut sequential = Vec::new();
    let seq_report = run_to_writer(&options(1), &mut sequential)?;
    let mut parallel = Vec::new();
    let par_report = run_to_writer(&options(4), &mut parallel)?;

    assert_eq!(sequential, parallel);
    assert_eq!(seq_report.projects, par_report.projects);
    assert_eq!(seq_report.total_rows, 6 * 25);
    Ok(())
}

#[test]
fn table_has_header_and_well_formed_rows() -> Result<()> {
    let mut out = Vec::new();
    run_to_writer(&options(1), &mut out)?;
    let text = String::from_utf8(out)?;
    let mut lines = text.lines();

    let header = lines.next().expect("header line");
    let header_fields: Vec<&str> = header.split(',').collect();
    assert_eq!(header_fields.len(), 4 + 256 + 1);
    assert_eq!(header_fields[..4], ["prj", "activity", "activity_no_kill", "seq"]);
    assert_eq!(header_fields.last(), Some(&"null"));

    let mut rows = 0;
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4 + 256);
        assert!(fields[0].starts_with('p'));
        let activity: u32 = fields[1].parse()?;
        let no_kill: u32 = fields[2].parse()?;
        assert!(no_kill >= activity);
        assert!(fields[4..].iter().all(|bit| *bit == "0" || *bit == "1"));
        let ones = fields[4..].iter().filter(|bit| **bit == "1").count();
        assert!(ones <= 40);
        if fields[4 + 251..].contains(&"1") {
            assert_eq!(activity, 0);
        }
        rows += 1;
    }
    assert_eq!(rows, 6 * 25);
    Ok(())
}

#[test]
fn invalid_configuration_fails_before_writing() {
    let mut bad = options(1);
    bad.config.num_set = 512;
    let mut out = Vec::new();
    let err = run_to_writer(&bad, &mut out).expect_err("config must be rejected");
    assert!(format!("{err:#}").contains("num_set"));
    assert!(out.is_empty());
}

#[test]
fn report_serializes_to_summary_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut out = Vec::new();
    let report = run_to_writer(&options(2), &mut out)?;
    assert!(report.steps_per_row() >= 1.0);

    let path = dir.path().join("reports").join("summary.json");
    write_file(&path, &serde_json::to_vec_pretty(&report)?)?;
    let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&path)?)?;
    assert_eq!(parsed["seed"], 0x5EED);
    assert_eq!(parsed["projects"].as_array().map(Vec::len), Some(6));
    assert_eq!(parsed["config"]["censor"], 0.25);
    Ok(())
}
