/*!
 * Run Statistics
 * Aggregate metrics derived from the completed set
 */

use super::Simulation;
use crate::core::serde::{is_none, is_zero_usize};
use crate::core::types::Tick;
use crate::process::Process;
use serde::Serialize;

/// Summary of a run so far
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SummaryStats {
    pub total: usize,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub completed: usize,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    /// Latest completion tick, once anything has completed
    #[serde(skip_serializing_if = "is_none")]
    pub makespan: Option<Tick>,
}

impl Simulation {
    /// Compute summary metrics over the completed set
    ///
    /// Averages are 0.0 while nothing has completed.
    pub fn summary(&self) -> SummaryStats {
        let completed = self.completed_processes();
        let count = completed.len();

        let (waiting_sum, turnaround_sum) = completed.iter().fold((0u64, 0u64), |(w, t), p| {
            (
                w + u64::from(p.waiting_time.unwrap_or(0)),
                t + u64::from(p.turnaround_time.unwrap_or(0)),
            )
        });

        let average = |sum: u64| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };

        SummaryStats {
            total: self.processes().len(),
            completed: count,
            average_waiting_time: average(waiting_sum),
            average_turnaround_time: average(turnaround_sum),
            makespan: completed.iter().filter_map(|p| p.completion_time).max(),
        }
    }

    /// Completed processes sorted by completion tick, then pid
    pub fn completed_in_order(&self) -> Vec<Process> {
        let mut ordered = self.completed_processes().to_vec();
        ordered.sort_by_key(|p| (p.completion_time, p.pid));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;
    use crate::sim::Algorithm;

    fn spec(pid: u32, arrival: u32, duration: u32) -> ProcessSpec {
        ProcessSpec::new(Some(pid), arrival, duration)
    }

    #[test]
    fn test_summary_empty_run() {
        let sim = Simulation::with_processes(Algorithm::Fifo, &[spec(1, 1, 2)]);
        let summary = sim.summary();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.average_waiting_time, 0.0);
        assert_eq!(summary.average_turnaround_time, 0.0);
        assert_eq!(summary.makespan, None);
    }

    #[test]
    fn test_summary_after_full_run() {
        // FIFO: p1 is dispatched at tick 1 and completes at tick 4, p2
        // follows and completes at tick 6.
        let mut sim =
            Simulation::with_processes(Algorithm::Fifo, &[spec(1, 1, 3), spec(2, 1, 2)]);
        while sim.step_forward() {}

        let summary = sim.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 2);

        let p1 = sim.process(1).unwrap();
        let p2 = sim.process(2).unwrap();
        assert_eq!(p1.completion_time, Some(4));
        assert_eq!(p2.completion_time, Some(6));
        // turnaround: p1 = 3, p2 = 5; waiting: p1 = 0, p2 = 3
        assert_eq!(summary.average_turnaround_time, 4.0);
        assert_eq!(summary.average_waiting_time, 1.5);
        assert_eq!(summary.makespan, Some(6));
    }

    #[test]
    fn test_completed_in_order_sorts_by_completion() {
        let mut sim = Simulation::with_processes(
            Algorithm::Sjf,
            &[spec(1, 1, 4), spec(2, 1, 1), spec(3, 1, 2)],
        );
        while sim.step_forward() {}

        let ordered = sim.completed_in_order();
        let pids: Vec<u32> = ordered.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
        let completions: Vec<_> = ordered.iter().map(|p| p.completion_time).collect();
        let mut sorted = completions.clone();
        sorted.sort();
        assert_eq!(completions, sorted);
    }
}
