//! Unit tests for upms-dispatch.

use upms_core::{Job, JobId, MachineId, SimTime};

use crate::{DispatchError, DispatchRule, RuleContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Job with two machines and a 4-job setup column.
fn job(id: u32, p: [f64; 2], due: f64, setup: [f64; 4]) -> Job {
    Job {
        id:           JobId(id),
        arrival_time: SimTime::ZERO,
        processing:   p.to_vec(),
        due_date:     due,
        setup:        setup.to_vec(),
    }
}

/// Buffer in enqueue order 2, 0, 3.
fn buffer() -> Vec<Job> {
    vec![
        job(2, [6.0, 1.0], 40.0, [5.0, 2.0, 0.0, 9.0]),
        job(0, [4.0, 8.0], 25.0, [0.0, 7.0, 3.0, 2.0]),
        job(3, [4.0, 3.0], 12.0, [1.0, 2.0, 6.0, 0.0]),
    ]
}

fn ctx(now: f64, machine: u32, last: Option<u32>) -> RuleContext {
    RuleContext::new(SimTime(now), MachineId(machine), last.map(JobId))
}

fn pick(rule: DispatchRule, buf: &[Job], c: &RuleContext) -> u32 {
    rule.select(buf, c).expect("non-empty buffer").id.0
}

// ── Action codes ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod codes {
    use super::*;

    #[test]
    fn codes_match_positions() {
        for (i, rule) in DispatchRule::ALL.iter().enumerate() {
            assert_eq!(rule.code() as usize, i);
            assert_eq!(DispatchRule::try_from(i as i64).unwrap(), *rule);
        }
    }

    #[test]
    fn unknown_codes_fail() {
        assert_eq!(DispatchRule::try_from(7_i64), Err(DispatchError::UnknownAction(7)));
        assert_eq!(DispatchRule::try_from(-1_i64), Err(DispatchError::UnknownAction(-1)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("edd".parse::<DispatchRule>().unwrap(), DispatchRule::Edd);
        assert_eq!(" CR ".parse::<DispatchRule>().unwrap(), DispatchRule::Cr);
        assert!("ATC".parse::<DispatchRule>().is_err());
        assert_eq!(DispatchRule::Mst.to_string(), "MST");
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rules {
    use super::*;

    #[test]
    fn empty_buffer_selects_nothing() {
        for rule in DispatchRule::ALL {
            assert!(rule.select(&[], &ctx(0.0, 0, None)).is_none());
        }
    }

    #[test]
    fn fifo_and_lifo_follow_insertion_order() {
        let buf = buffer();
        let c = ctx(0.0, 0, None);
        assert_eq!(pick(DispatchRule::Fifo, &buf, &c), 2);
        assert_eq!(pick(DispatchRule::Lifo, &buf, &c), 3);
    }

    #[test]
    fn spt_uses_target_machine() {
        let buf = buffer();
        // Machine 0: 6, 4, 4 → tie between jobs 0 and 3, first occurrence wins.
        assert_eq!(pick(DispatchRule::Spt, &buf, &ctx(0.0, 0, None)), 0);
        // Machine 1: 1, 8, 3.
        assert_eq!(pick(DispatchRule::Spt, &buf, &ctx(0.0, 1, None)), 2);
    }

    #[test]
    fn mst_without_history_is_fifo() {
        let buf = buffer();
        let c = ctx(0.0, 1, None);
        assert_eq!(
            pick(DispatchRule::Mst, &buf, &c),
            pick(DispatchRule::Fifo, &buf, &c)
        );
    }

    #[test]
    fn mst_minimises_setup_after_last_job() {
        let buf = buffer();
        // After job 1: setups 2, 7, 2 → first occurrence (job 2).
        assert_eq!(pick(DispatchRule::Mst, &buf, &ctx(0.0, 0, Some(1))), 2);
        // After job 3: setups 9, 2, 0.
        assert_eq!(pick(DispatchRule::Mst, &buf, &ctx(0.0, 0, Some(3))), 3);
    }

    #[test]
    fn edd_picks_earliest_due() {
        assert_eq!(pick(DispatchRule::Edd, &buffer(), &ctx(0.0, 0, None)), 3);
    }

    #[test]
    fn lst_depends_on_clock_and_machine() {
        let buf = buffer();
        // Machine 0 at t=10: 40-10-6=24, 25-10-4=11, 12-10-4=-2.
        assert_eq!(pick(DispatchRule::Lst, &buf, &ctx(10.0, 0, None)), 3);
    }

    #[test]
    fn cr_picks_lowest_ratio() {
        let buf = vec![
            job(0, [10.0, 1.0], 30.0, [0.0; 4]), // (30-10)/10 = 2
            job(1, [2.0, 1.0], 14.0, [0.0; 4]),  // (14-10)/2  = 2
            job(2, [8.0, 1.0], 22.0, [0.0; 4]),  // (22-10)/8  = 1.5
        ];
        assert_eq!(pick(DispatchRule::Cr, &buf, &ctx(10.0, 0, None)), 2);
    }

    #[test]
    fn cr_treats_zero_processing_as_infinite() {
        let buf = vec![
            job(0, [0.0, 1.0], 5.0, [0.0; 4]),
            job(1, [3.0, 1.0], 90.0, [0.0; 4]),
        ];
        assert_eq!(pick(DispatchRule::Cr, &buf, &ctx(0.0, 0, None)), 1);
        // Every candidate infinite → first occurrence.
        let all_zero = vec![job(4, [0.0, 0.0], 5.0, [0.0; 4]), job(5, [0.0, 0.0], 1.0, [0.0; 4])];
        assert_eq!(pick(DispatchRule::Cr, &all_zero, &ctx(0.0, 0, None)), 4);
    }

    #[test]
    fn rules_do_not_mutate_buffer() {
        let buf = buffer();
        let before = buf.clone();
        for rule in DispatchRule::ALL {
            rule.select(&buf, &ctx(3.0, 1, Some(0)));
        }
        assert_eq!(buf, before);
    }
}
