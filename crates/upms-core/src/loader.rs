//! CSV instance loader.
//!
//! # CSV format
//!
//! The job table has a header row and one row per job, already sorted by
//! arrival time.  Every column after `due_date` is a per-machine processing
//! time, so the machine count is the column count minus two.
//!
//! ```csv
//! arrival_time,due_date,p_0,p_1,p_2
//! 3,78.5,12,40,55
//! 3,120.0,80,61,9
//! 17,66.0,20,33,41
//! ```
//!
//! The setup matrix is a headerless N×N table; row = predecessor job,
//! column = successor job.
//!
//! ```csv
//! 0,4,11
//! 7,0,3
//! 19,2,0
//! ```
//!
//! Unlike [`Instance::new`], loading validates the input: arrival times must
//! be non-decreasing, all durations non-negative, the matrix square with
//! side N and a zero diagonal.  Due dates before arrival are accepted.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CoreError, CoreResult, Instance, JobSpec, SetupMatrix};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct JobRecord {
    arrival_time: f64,
    due_date:     f64,
    /// Remaining columns, one per machine.
    processing:   Vec<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate an instance from a job-table file and a setup-matrix file.
pub fn load_instance(jobs_csv: &Path, setup_csv: &Path) -> CoreResult<Instance> {
    let jobs = std::fs::File::open(jobs_csv)?;
    let setup = std::fs::File::open(setup_csv)?;
    load_instance_readers(jobs, setup)
}

/// Like [`load_instance`] but accepts any `Read` sources.
pub fn load_instance_readers<J: Read, S: Read>(jobs: J, setup: S) -> CoreResult<Instance> {
    let (machine_count, specs) = read_jobs(jobs)?;
    let rows = read_setup(setup)?;
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != rows.len()) {
        return Err(CoreError::Invalid(format!(
            "setup row {i} has {} entries, expected {}",
            row.len(),
            rows.len()
        )));
    }
    let matrix = SetupMatrix::from_rows(rows);
    validate(&specs, &matrix)?;
    Ok(Instance::new(machine_count, specs, matrix))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_jobs<R: Read>(reader: R) -> CoreResult<(usize, Vec<JobSpec>)> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let width = rdr.headers()?.len();
    if width < 3 {
        return Err(CoreError::Parse(format!(
            "job table needs arrival_time, due_date and at least one processing column, got {width} columns"
        )));
    }
    let machine_count = width - 2;

    let mut specs = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        // Positional: the processing columns are named per machine.
        let r: JobRecord = record?
            .deserialize(None)
            .map_err(|e| CoreError::Parse(format!("job row {row}: {e}")))?;
        specs.push(JobSpec::new(r.arrival_time, r.processing, r.due_date));
    }
    Ok((machine_count, specs))
}

fn read_setup<R: Read>(reader: R) -> CoreResult<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.deserialize::<Vec<f64>>()
        .enumerate()
        .map(|(row, result)| {
            result.map_err(|e| CoreError::Parse(format!("setup row {row}: {e}")))
        })
        .collect()
}

fn validate(jobs: &[JobSpec], setup: &SetupMatrix) -> CoreResult<()> {
    for (i, pair) in jobs.windows(2).enumerate() {
        if pair[1].arrival_time < pair[0].arrival_time {
            return Err(CoreError::Invalid(format!(
                "job {} arrives at {} before job {} at {}",
                i + 1,
                pair[1].arrival_time,
                i,
                pair[0].arrival_time
            )));
        }
    }
    for (i, job) in jobs.iter().enumerate() {
        if job.arrival_time < 0.0 || job.processing.iter().any(|&p| p < 0.0) {
            return Err(CoreError::Invalid(format!("job {i} has a negative time")));
        }
    }

    if setup.size() != jobs.len() || !setup.is_square() {
        return Err(CoreError::Invalid(format!(
            "setup matrix must be {n}x{n}",
            n = jobs.len()
        )));
    }
    for (from, row) in setup.rows().iter().enumerate() {
        for (to, &s) in row.iter().enumerate() {
            if s < 0.0 {
                return Err(CoreError::Invalid(format!("negative setup time at ({from}, {to})")));
            }
            if from == to && s != 0.0 {
                return Err(CoreError::Invalid(format!("setup diagonal ({from}, {from}) is {s}, expected 0")));
            }
        }
    }
    Ok(())
}
