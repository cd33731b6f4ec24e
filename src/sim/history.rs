/*!
 * History Manager
 * Snapshot-based undo stack for backward stepping
 */

use super::{Algorithm, Simulation};
use crate::core::types::Tick;
use crate::process::Process;
use log::debug;
use serde::{Deserialize, Serialize};

/// Full copy of the aggregate at one tick, minus the history itself
///
/// Backward stepping replaces the live state with a snapshot verbatim, so a
/// backward step is an exact inverse of the forward step that pushed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snapshot {
    pub processes: Vec<Process>,
    pub ready_queue: Vec<Process>,
    pub current_process: Option<Process>,
    pub completed_processes: Vec<Process>,
    pub current_tick: Tick,
    pub algorithm: Algorithm,
}

impl Simulation {
    /// Capture the current aggregate as a snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            processes: self.processes.clone(),
            ready_queue: self.ready_queue.clone(),
            current_process: self.current_process.clone(),
            completed_processes: self.completed_processes.clone(),
            current_tick: self.current_tick,
            algorithm: self.algorithm,
        }
    }

    /// Replace the live aggregate with `snapshot`, history untouched
    fn restore(&mut self, snapshot: Snapshot) {
        self.processes = snapshot.processes;
        self.ready_queue = snapshot.ready_queue;
        self.current_process = snapshot.current_process;
        self.completed_processes = snapshot.completed_processes;
        self.current_tick = snapshot.current_tick;
        self.algorithm = snapshot.algorithm;
    }

    /// Take one forward step
    ///
    /// Pushes a snapshot of the pre-transition state, then advances. The
    /// terminal check comes before the push, so a terminal simulation
    /// accumulates no history. Returns whether a step was taken.
    pub fn step_forward(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.history.push(self.snapshot());
        self.advance();
        true
    }

    /// Undo the most recent forward step
    ///
    /// Pops the latest snapshot and replaces the state wholesale, with no
    /// recomputation. Returns whether a step was undone.
    pub fn step_backward(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                debug!("Rewinding to tick {}", snapshot.current_tick);
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn spec(pid: u32, arrival: u32, duration: u32) -> ProcessSpec {
        ProcessSpec::new(Some(pid), arrival, duration)
    }

    #[test]
    fn test_forward_then_backward_is_exact() {
        let mut sim = Simulation::with_processes(
            Algorithm::Sjf,
            &[spec(1, 1, 5), spec(2, 2, 3), spec(3, 1, 2)],
        );
        let before = sim.snapshot();

        assert!(sim.step_forward());
        assert!(sim.step_backward());

        assert_eq!(sim.snapshot(), before);
        assert_eq!(sim.history_len(), 0);
    }

    #[test]
    fn test_backward_with_empty_history_is_noop() {
        let mut sim = Simulation::with_processes(Algorithm::Fifo, &[spec(1, 1, 2)]);
        let before = sim.snapshot();
        assert!(!sim.step_backward());
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_history_len_tracks_net_steps() {
        let mut sim = Simulation::with_processes(Algorithm::Fifo, &[spec(1, 1, 4)]);
        sim.step_forward();
        sim.step_forward();
        sim.step_forward();
        assert_eq!(sim.history_len(), 3);
        sim.step_backward();
        assert_eq!(sim.history_len(), 2);
        sim.step_forward();
        assert_eq!(sim.history_len(), 3);
    }

    #[test]
    fn test_terminal_steps_push_no_history() {
        let mut sim = Simulation::with_processes(Algorithm::Fifo, &[spec(1, 1, 1)]);
        sim.step_forward(); // dispatch
        sim.step_forward(); // complete
        assert!(sim.is_terminal());
        let len = sim.history_len();
        let state = sim.snapshot();

        assert!(!sim.step_forward());
        assert!(!sim.step_forward());

        assert_eq!(sim.history_len(), len);
        assert_eq!(sim.snapshot(), state);
    }

    #[test]
    fn test_forward_after_backward_recomputes_identically() {
        let mut sim = Simulation::with_processes(
            Algorithm::Ljf,
            &[spec(1, 1, 3), spec(2, 1, 5), spec(3, 3, 2)],
        );
        for _ in 0..4 {
            sim.step_forward();
        }
        let at_four = sim.snapshot();

        sim.step_backward();
        sim.step_backward();
        sim.step_forward();
        sim.step_forward();

        assert_eq!(sim.snapshot(), at_four);
    }
}
