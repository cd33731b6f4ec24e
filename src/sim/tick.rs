/*!
 * Tick Transition
 * The forward state-transition function, one discrete time unit per call
 */

use super::policy::order_queue;
use super::Simulation;
use crate::process::{Process, ProcessState};
use log::{debug, info};

impl Simulation {
    /// Advance the simulation by one tick
    ///
    /// Deterministic and total: a terminal simulation is returned
    /// unchanged. Order of operations within the tick:
    ///
    /// 1. decrement the running process and record completion,
    /// 2. re-derive ready membership from scratch for every process,
    /// 3. order the ready set under the active algorithm,
    /// 4. dispatch the head if the processor is idle.
    ///
    /// The decrement happens before the dispatch check, so a freshly
    /// dispatched process always survives at least one further tick.
    pub(super) fn advance(&mut self) {
        if self.is_terminal() {
            return;
        }

        let new_tick = self.current_tick + 1;
        debug!("Advancing to tick {}", new_tick);

        // Service the occupant first.
        if let Some(mut running) = self.current_process.take() {
            running.remaining_time -= 1;
            self.write_back(&running);

            if running.remaining_time == 0 {
                self.complete(running, new_tick);
            } else {
                self.current_process = Some(running);
            }
        }

        // Re-derive ready membership from scratch. Total recomputation is
        // what keeps forward stepping consistent after a backward step.
        let current_pid = self.current_process.as_ref().map(|p| p.pid);
        let mut ready = Vec::new();
        for p in &mut self.processes {
            if p.state == ProcessState::Completed || Some(p.pid) == current_pid {
                continue;
            }
            if p.arrival_time <= new_tick {
                p.state = ProcessState::Ready;
                ready.push(p.clone());
            } else {
                p.state = ProcessState::Waiting;
            }
        }

        let mut ready = order_queue(&ready, self.algorithm);

        // Dispatch if the processor is idle.
        if self.current_process.is_none() && !ready.is_empty() {
            let mut next = ready.remove(0);
            next.state = ProcessState::Running;
            if next.start_time.is_none() {
                next.start_time = Some(new_tick);
            }
            info!("Dispatched process {} at tick {}", next.pid, new_tick);
            self.write_back(&next);
            self.current_process = Some(next);
        }

        self.ready_queue = ready;
        self.current_tick = new_tick;
    }

    /// Record completion bookkeeping for a process that just ran dry
    fn complete(&mut self, mut finished: Process, now: crate::core::types::Tick) {
        let turnaround = now - finished.arrival_time;
        let waiting = turnaround - finished.duration;
        finished.completion_time = Some(now);
        finished.turnaround_time = Some(turnaround);
        finished.waiting_time = Some(waiting);
        finished.state = ProcessState::Completed;

        info!(
            "Process {} completed at tick {} (turnaround {}, waiting {})",
            finished.pid, now, turnaround, waiting
        );

        if !self.completed_contains(finished.pid) {
            self.completed_processes.push(finished.clone());
        }
        self.write_back(&finished);
    }

    fn completed_contains(&self, pid: crate::core::types::Pid) -> bool {
        self.completed_processes.iter().any(|c| c.pid == pid)
    }

    /// Write a process back into the canonical store by pid
    fn write_back(&mut self, updated: &Process) {
        if let Some(slot) = self.processes.iter_mut().find(|p| p.pid == updated.pid) {
            *slot = updated.clone();
        }
    }
}
