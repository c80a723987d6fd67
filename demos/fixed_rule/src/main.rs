//! fixed_rule — run one scheduling episode with a single dispatch rule.
//!
//! ```text
//! fixed_rule [RULE] [--jobs JOBS.csv --setup SETUP.csv] [--config CONFIG.json] [--out DIR]
//! ```
//!
//! `RULE` is a rule name (`fifo`, `spt`, `edd`, ...) or action code 0–6;
//! default `spt`.  Without `--jobs`/`--setup` a small embedded instance is
//! used.  Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=upms_sim=debug`).

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use upms_core::{Instance, SimConfig, load_instance, load_instance_readers};
use upms_dispatch::DispatchRule;
use upms_output::{CsvWriter, EpisodeOutputObserver, OutputWriter};
use upms_sim::{EpisodeSummary, Factory, FixedRule, ScheduleRecord, SimObserver, StepOutcome, TraceEvent, run_episode};

// ── Embedded instance ─────────────────────────────────────────────────────────

// 8 jobs, 3 machines.  Jobs 1–2 and 5–6 arrive together.
const JOBS_CSV: &str = "\
arrival_time,due_date,p_0,p_1,p_2\n\
0,40.0,12,30,18\n\
4,52.5,25,9,31\n\
4,38.0,7,14,22\n\
11,60.0,19,27,8\n\
15,71.0,33,12,16\n\
22,64.5,10,21,28\n\
22,90.0,26,17,11\n\
30,85.0,14,24,20\n\
";

const SETUP_CSV: &str = "\
0,4,6,3,8,2,5,7\n\
5,0,3,6,2,7,4,1\n\
2,7,0,5,4,3,6,8\n\
6,3,8,0,5,1,2,4\n\
4,5,2,7,0,6,3,5\n\
3,8,5,2,6,0,7,4\n\
7,2,4,6,3,5,0,2\n\
5,6,7,4,2,8,3,0\n\
";

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    rule:   DispatchRule,
    jobs:   Option<PathBuf>,
    setup:  Option<PathBuf>,
    config: Option<PathBuf>,
    out:    PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        rule:   DispatchRule::Spt,
        jobs:   None,
        setup:  None,
        config: None,
        out:    PathBuf::from("output/fixed_rule"),
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = || it.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--jobs" => args.jobs = Some(value()?.into()),
            "--setup" => args.setup = Some(value()?.into()),
            "--config" => args.config = Some(value()?.into()),
            "--out" => args.out = value()?.into(),
            other => args.rule = parse_rule(other)?,
        }
    }
    Ok(args)
}

fn parse_rule(s: &str) -> Result<DispatchRule> {
    match s.parse::<i64>() {
        Ok(code) => Ok(DispatchRule::try_from(code)?),
        Err(_) => Ok(s.parse()?),
    }
}

fn load(args: &Args) -> Result<Instance> {
    let instance = match (&args.jobs, &args.setup) {
        (Some(jobs), Some(setup)) => load_instance(jobs, setup)
            .with_context(|| format!("loading {} / {}", jobs.display(), setup.display()))?,
        (None, None) => load_instance_readers(Cursor::new(JOBS_CSV), Cursor::new(SETUP_CSV))?,
        _ => bail!("--jobs and --setup must be given together"),
    };
    Ok(instance)
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Observer wrapper to print progress ───────────────────────────────────────

struct PrintingObserver<W: OutputWriter> {
    inner:     EpisodeOutputObserver<W>,
    decisions: usize,
}

impl<W: OutputWriter> SimObserver for PrintingObserver<W> {
    fn on_step(&mut self, step: u64, rule: DispatchRule, outcome: &StepOutcome) {
        self.decisions += 1;
        println!(
            "  step {step:>3}  t={:<6}  queued={:<2}  reward={}",
            outcome.observation.now,
            outcome.observation.queued.len(),
            outcome.reward,
        );
        self.inner.on_step(step, rule, outcome);
    }

    fn on_episode_end(
        &mut self,
        summary:  &EpisodeSummary,
        schedule: &[ScheduleRecord],
        trace:    &[TraceEvent],
    ) {
        self.inner.on_episode_end(summary, schedule, trace);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let instance = load(&args)?;

    println!("=== fixed_rule — upms scheduling episode ===");
    println!(
        "Jobs: {}  |  Machines: {}  |  Rule: {}",
        instance.job_count(),
        instance.machine_count,
        args.rule
    );
    println!();

    std::fs::create_dir_all(&args.out)?;
    let writer = CsvWriter::new(&args.out)?;
    let mut obs = PrintingObserver {
        inner:     EpisodeOutputObserver::new(writer),
        decisions: 0,
    };

    let mut factory = Factory::new(config);
    let t0 = Instant::now();
    let summary = run_episode(&mut factory, instance, &mut FixedRule(args.rule), &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Episode complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    match summary.makespan {
        Some(t) => println!("  makespan     : {t}"),
        None => println!("  makespan     : (not reached)"),
    }
    println!("  decisions    : {}", obs.decisions);
    println!("  total reward : {:.4}", summary.total_reward);
    println!("  output       : {}", args.out.display());
    info!(makespan = ?summary.makespan, steps = summary.steps, "done");
    println!();

    // Gantt table, processing intervals only.
    println!("{:<8} {:<6} {:>8} {:>8} {:>8}", "Machine", "Job", "Start", "End", "Due");
    println!("{}", "-".repeat(42));
    for r in factory.schedule().iter().filter(|r| !r.is_setup()) {
        println!(
            "{:<8} {:<6} {:>8} {:>8} {:>8}",
            r.machine.0,
            r.job_code(),
            r.start,
            r.end(),
            r.due_code(),
        );
    }

    Ok(())
}
