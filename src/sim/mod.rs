/*!
 * Simulation Module
 * The simulation-state aggregate and its externally-triggered transitions
 */

use crate::core::types::{Pid, Tick};
use crate::process::{Process, ProcessSpec};
use crate::source::{self, SourceError};
use log::info;
use serde::Serialize;
use std::path::Path;

mod history;
mod policy;
mod stats;
mod tick;

pub use history::Snapshot;
pub use policy::{order_queue, Algorithm};
pub use stats::SummaryStats;

/// Aggregate simulation state
///
/// `processes` is the canonical store of truth per pid; `ready_queue`,
/// `current_process`, and `completed_processes` mirror it and are replaced
/// wholesale on every transition. All transitions take `&mut self` and run
/// to completion synchronously.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Simulation {
    processes: Vec<Process>,
    ready_queue: Vec<Process>,
    current_process: Option<Process>,
    completed_processes: Vec<Process>,
    current_tick: Tick,
    algorithm: Algorithm,
    #[serde(skip)]
    history: Vec<Snapshot>,
}

impl Simulation {
    /// Create an empty simulation under the given algorithm
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            processes: Vec::new(),
            ready_queue: Vec::new(),
            current_process: None,
            completed_processes: Vec::new(),
            current_tick: 0,
            algorithm,
            history: Vec::new(),
        }
    }

    /// Create a simulation preloaded with the given definitions
    pub fn with_processes(algorithm: Algorithm, specs: &[ProcessSpec]) -> Self {
        let mut sim = Self::new(algorithm);
        sim.load_processes(specs);
        sim
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn ready_queue(&self) -> &[Process] {
        &self.ready_queue
    }

    pub fn current_process(&self) -> Option<&Process> {
        self.current_process.as_ref()
    }

    pub fn completed_processes(&self) -> &[Process] {
        &self.completed_processes
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of snapshots available for backward stepping
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Look up a process in the canonical store
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Whether the run has nothing left to do
    ///
    /// An empty process set counts as terminal, so stepping an unloaded
    /// simulation is a no-op and accumulates no history.
    pub fn is_terminal(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
            && self.current_process.is_none()
            && self.ready_queue.is_empty()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.is_terminal()
    }

    pub fn can_step_backward(&self) -> bool {
        !self.history.is_empty()
    }

    /// Select the scheduling algorithm
    ///
    /// With processes loaded this is a full reset: every process returns to
    /// its freshly-created shape and the clock, queues, and history are
    /// cleared. With nothing loaded only the algorithm field changes.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        if !self.processes.is_empty() {
            info!("Algorithm set to {}, resetting run", algorithm);
            self.reset_run();
        }
    }

    /// Replace the process set with freshly built entries and reset
    ///
    /// Absent pids fall back to the 1-based position in `specs`.
    pub fn load_processes(&mut self, specs: &[ProcessSpec]) {
        self.processes = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Process::from_spec(*spec, i as Pid + 1))
            .collect();
        self.reset_aggregate();
        info!(
            "Loaded {} processes ({} scheduling)",
            self.processes.len(),
            self.algorithm
        );
    }

    /// Generate and load `count` random processes
    pub fn generate_random(&mut self, count: usize) {
        let specs = source::generate(count);
        self.load_processes(&specs);
    }

    /// Seeded variant of [`generate_random`](Self::generate_random)
    pub fn generate_random_seeded(&mut self, count: usize, seed: u64) {
        let specs = source::generate_seeded(count, seed);
        self.load_processes(&specs);
    }

    /// Parse `text` permissively and load the result
    ///
    /// Returns the number of processes loaded. Text that parses to nothing
    /// (all-blank input) leaves the simulation untouched and returns 0.
    pub fn load_from_text(&mut self, text: &str) -> usize {
        let specs = source::parse_text(text);
        if specs.is_empty() {
            return 0;
        }
        self.load_processes(&specs);
        specs.len()
    }

    /// Read a file and load its contents via the text parser
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SourceError> {
        let specs = source::parse_file(path)?;
        if specs.is_empty() {
            return Ok(0);
        }
        self.load_processes(&specs);
        Ok(specs.len())
    }

    /// Reset every process to its initial shape and clear run state
    fn reset_run(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
        self.reset_aggregate();
    }

    fn reset_aggregate(&mut self) {
        self.current_tick = 0;
        self.current_process = None;
        self.ready_queue.clear();
        self.completed_processes.clear();
        self.history.clear();
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Algorithm::Fifo)
    }
}
