//! Unit tests for upms-core primitives.

#[cfg(test)]
mod ids {
    use crate::{JobId, MachineId, job_code};

    #[test]
    fn index_roundtrip() {
        let id = JobId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(JobId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(MachineId(2).to_string(), "MachineId(2)");
    }

    #[test]
    fn job_code_uses_minus_one_for_none() {
        assert_eq!(job_code(None), -1.0);
        assert_eq!(job_code(Some(JobId(3))), 3.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, SimTime};

    #[test]
    fn arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 2.5, SimTime(12.5));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
    }

    #[test]
    fn infinity_orders_last() {
        let mut v = vec![SimTime::INFINITY, SimTime(3.0), SimTime::ZERO];
        v.sort();
        assert_eq!(v, vec![SimTime::ZERO, SimTime(3.0), SimTime::INFINITY]);
        assert!(!SimTime::INFINITY.is_finite());
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.terminal_reward_scale, 1000.0);
        assert!(cfg.record_trace);
        assert!(!cfg.record_transitions);
    }
}

#[cfg(test)]
mod instance {
    use crate::{Instance, JobId, JobSpec, MachineId, SetupMatrix, SimTime};

    fn three_jobs() -> Instance {
        Instance::new(
            2,
            vec![
                JobSpec::new(0.0, vec![5.0, 7.0], 20.0),
                JobSpec::new(0.0, vec![3.0, 9.0], 15.0),
                JobSpec::new(4.0, vec![6.0, 2.0], 30.0),
            ],
            SetupMatrix::from_rows(vec![
                vec![0.0, 4.0, 8.0],
                vec![1.0, 0.0, 6.0],
                vec![2.0, 3.0, 0.0],
            ]),
        )
    }

    #[test]
    fn build_job_takes_setup_column() {
        let inst = three_jobs();
        let job = inst.build_job(JobId(2));
        assert_eq!(job.setup, vec![8.0, 6.0, 0.0]);
        assert_eq!(job.setup_after(JobId(1)), 6.0);
        assert_eq!(job.arrival_time, SimTime(4.0));
        assert_eq!(job.processing_on(MachineId(1)), 2.0);
    }

    #[test]
    fn job_maxima() {
        let job = three_jobs().build_job(JobId(0));
        assert_eq!(job.max_processing(), 7.0);
        assert_eq!(job.max_setup(), 2.0);
    }

    #[test]
    fn arrival_past_end_is_infinite() {
        let inst = three_jobs();
        assert_eq!(inst.arrival_at(2), SimTime(4.0));
        assert_eq!(inst.arrival_at(3), SimTime::INFINITY);
    }

    #[test]
    fn matrix_rows_roundtrip() {
        let m = SetupMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(m.rows(), vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(m.get(JobId(1), JobId(0)), 2.0);
        assert!(SetupMatrix::zeros(3).is_square());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{CoreError, load_instance, load_instance_readers};

    const JOBS: &str = "\
arrival_time,due_date,p_0,p_1
0,10,5,6
0,12.5,3,8
4,30,7,2
";

    const SETUP: &str = "\
0,4,8
1,0,6
2,3,0
";

    #[test]
    fn loads_shapes() {
        let inst = load_instance_readers(Cursor::new(JOBS), Cursor::new(SETUP)).unwrap();
        assert_eq!(inst.machine_count, 2);
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.jobs[1].due_date, 12.5);
        assert_eq!(inst.jobs[2].processing, vec![7.0, 2.0]);
        assert_eq!(inst.setup.size(), 3);
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let jobs = dir.path().join("jobs.csv");
        let setup = dir.path().join("setup.csv");
        std::fs::write(&jobs, JOBS).unwrap();
        std::fs::write(&setup, SETUP).unwrap();
        let inst = load_instance(&jobs, &setup).unwrap();
        assert_eq!(inst.job_count(), 3);
    }

    #[test]
    fn rejects_unsorted_arrivals() {
        let jobs = "arrival_time,due_date,p_0\n5,10,1\n2,10,1\n";
        let setup = "0,1\n1,0\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)), "got {err}");
    }

    #[test]
    fn rejects_nonzero_diagonal() {
        let jobs = "arrival_time,due_date,p_0\n0,10,1\n2,10,1\n";
        let setup = "3,1\n1,0\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[test]
    fn rejects_wrong_matrix_size() {
        let jobs = "arrival_time,due_date,p_0\n0,10,1\n2,10,1\n";
        let setup = "0,1,1\n1,0,1\n1,1,0\n";
        assert!(load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).is_err());
    }

    #[test]
    fn rejects_ragged_matrix() {
        let jobs = "arrival_time,due_date,p_0\n0,10,1\n2,10,1\n";
        let setup = "0,1,1\n0\n";
        assert!(load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).is_err());
    }

    #[test]
    fn rejects_non_numeric_field() {
        let jobs = "arrival_time,due_date,p_0\n0,soon,1\n";
        let setup = "0\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn rejects_negative_processing() {
        let jobs = "arrival_time,due_date,p_0,p_1\n0,10,4,-2\n";
        let setup = "0\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(ref m) if m.contains("negative")), "got {err}");
    }

    #[test]
    fn rejects_negative_setup() {
        let jobs = "arrival_time,due_date,p_0\n0,10,1\n2,10,1\n";
        let setup = "0,-1\n1,0\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(ref m) if m.contains("(0, 1)")), "got {err}");
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let jobs = "arrival_time,due_date,p_0\n 0 , 10.5 , 3 \n";
        let setup = " 0 \n";
        let inst = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap();
        assert_eq!(inst.jobs[0].due_date, 10.5);
        assert_eq!(inst.jobs[0].processing, vec![3.0]);
    }

    #[test]
    fn rejects_non_numeric_setup_entry() {
        let jobs = "arrival_time,due_date,p_0\n0,10,1\n";
        let setup = "x\n";
        let err = load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)), "got {err}");
    }

    #[test]
    fn accepts_due_before_arrival() {
        let jobs = "arrival_time,due_date,p_0\n5,1,1\n";
        let setup = "0\n";
        assert!(load_instance_readers(Cursor::new(jobs), Cursor::new(setup)).is_ok());
    }
}
