//! Selection functions, one per rule.
//!
//! Score-based rules share [`argmin_by`]: lower score wins, and only a
//! strictly lower score displaces the current best, so ties resolve to the
//! earliest buffer position.

use upms_core::Job;

use crate::RuleContext;

/// First buffer entry whose score is strictly minimal.
fn argmin_by<F>(buffer: &[Job], score: F) -> Option<&Job>
where
    F: Fn(&Job) -> f64,
{
    let mut best: Option<(&Job, f64)> = None;
    for job in buffer {
        let s = score(job);
        if best.is_none_or(|(_, b)| s < b) {
            best = Some((job, s));
        }
    }
    best.map(|(job, _)| job)
}

pub fn fifo(buffer: &[Job]) -> Option<&Job> {
    buffer.first()
}

pub fn lifo(buffer: &[Job]) -> Option<&Job> {
    buffer.last()
}

pub fn spt<'a>(buffer: &'a [Job], ctx: &RuleContext) -> Option<&'a Job> {
    argmin_by(buffer, |j| j.processing_on(ctx.machine))
}

/// Minimum setup time.  A machine with no history has no setup to minimise,
/// so the rule degrades to FIFO.
pub fn mst<'a>(buffer: &'a [Job], ctx: &RuleContext) -> Option<&'a Job> {
    match ctx.last_completed {
        None => fifo(buffer),
        Some(prev) => argmin_by(buffer, |j| j.setup_after(prev)),
    }
}

pub fn edd(buffer: &[Job]) -> Option<&Job> {
    argmin_by(buffer, |j| j.due_date)
}

pub fn lst<'a>(buffer: &'a [Job], ctx: &RuleContext) -> Option<&'a Job> {
    argmin_by(buffer, |j| slack(j, ctx))
}

pub fn cr<'a>(buffer: &'a [Job], ctx: &RuleContext) -> Option<&'a Job> {
    argmin_by(buffer, |j| critical_ratio(j, ctx))
}

/// `due - now - processing` on the target machine.
pub fn slack(job: &Job, ctx: &RuleContext) -> f64 {
    job.due_date - ctx.now.0 - job.processing_on(ctx.machine)
}

/// `(due - now) / processing` on the target machine.
///
/// A zero processing time yields `+inf`: such a job is never preferred by CR
/// over a job with a finite ratio.
pub fn critical_ratio(job: &Job, ctx: &RuleContext) -> f64 {
    let p = job.processing_on(ctx.machine);
    if p == 0.0 {
        return f64::INFINITY;
    }
    (job.due_date - ctx.now.0) / p
}
