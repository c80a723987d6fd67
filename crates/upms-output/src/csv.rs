//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `schedule.csv`
//! - `trace.csv`
//! - `steps.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ScheduleRow, StepRow, TraceRow};

pub struct CsvWriter {
    schedule: Writer<File>,
    trace:    Writer<File>,
    steps:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut schedule = Writer::from_path(dir.join("schedule.csv"))?;
        schedule.write_record(["machine_id", "job_id", "start_time", "duration", "due_date"])?;

        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["time", "kind", "job_id", "machine_id"])?;

        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(["step", "action", "reward", "done", "incremental_reward"])?;

        Ok(Self {
            schedule,
            trace,
            steps,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.step.to_string(),
            row.action.to_string(),
            row.reward.to_string(),
            (row.done as u8).to_string(),
            row.incremental_reward.to_string(),
        ])?;
        Ok(())
    }

    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> OutputResult<()> {
        for row in rows {
            self.schedule.write_record(&[
                row.machine_id.to_string(),
                row.job_id.to_string(),
                row.start_time.to_string(),
                row.duration.to_string(),
                row.due_date.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.time.to_string(),
                row.kind.to_string(),
                row.job_id.to_string(),
                row.machine_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.schedule.flush()?;
        self.trace.flush()?;
        self.steps.flush()?;
        Ok(())
    }
}
