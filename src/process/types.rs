/*!
 * Process Types
 * The schedulable unit of work and its lifecycle
 */

use crate::core::serde::is_none;
use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process lifecycle state
///
/// Lifecycle: `Waiting -> Ready -> Running -> Completed`. A running process
/// may drop back to `Ready` when the ready set is recomputed at a tick
/// boundary; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Not yet arrived
    Waiting,
    /// Arrived and eligible to run
    Ready,
    /// Occupying the processor
    Running,
    /// Finished all service
    Completed,
}

impl ProcessState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw process definition as supplied by a process source
///
/// `pid` is optional; callers that omit it get a 1-based sequential
/// fallback at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    #[serde(skip_serializing_if = "is_none")]
    pub pid: Option<Pid>,
    pub arrival_time: Tick,
    pub duration: u32,
}

impl ProcessSpec {
    pub fn new(pid: Option<Pid>, arrival_time: Tick, duration: u32) -> Self {
        Self {
            pid,
            arrival_time,
            duration,
        }
    }
}

/// One schedulable unit of work
///
/// `pid`, `arrival_time`, and `duration` are fixed at creation. The timing
/// fields are set exactly once: `start_time` at first dispatch,
/// `completion_time`/`turnaround_time`/`waiting_time` at the tick
/// `remaining_time` reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub duration: u32,
    pub remaining_time: u32,
    #[serde(skip_serializing_if = "is_none")]
    pub start_time: Option<Tick>,
    #[serde(skip_serializing_if = "is_none")]
    pub completion_time: Option<Tick>,
    #[serde(skip_serializing_if = "is_none")]
    pub turnaround_time: Option<u32>,
    #[serde(skip_serializing_if = "is_none")]
    pub waiting_time: Option<u32>,
    pub state: ProcessState,
}

impl Process {
    /// Build a process from a raw definition
    ///
    /// `duration` is clamped to at least 1, `arrival_time` to at least 1,
    /// and an absent pid is replaced by `fallback_pid` (1-based position in
    /// the loaded set). No side effects.
    pub fn from_spec(spec: ProcessSpec, fallback_pid: Pid) -> Self {
        let duration = spec.duration.max(1);
        Self {
            pid: spec.pid.unwrap_or(fallback_pid),
            arrival_time: spec.arrival_time.max(1),
            duration,
            remaining_time: duration,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            state: ProcessState::Waiting,
        }
    }

    /// Restore the freshly-created shape, keeping pid/arrival/duration
    pub fn reset(&mut self) {
        self.remaining_time = self.duration;
        self.start_time = None;
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
        self.state = ProcessState::Waiting;
    }

    /// Fraction of service already consumed, in [0, 1]
    pub fn progress(&self) -> f64 {
        let done = self.duration - self.remaining_time;
        done as f64 / self.duration as f64
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spec_defaults() {
        let p = Process::from_spec(ProcessSpec::new(Some(7), 3, 4), 1);
        assert_eq!(p.pid, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.duration, 4);
        assert_eq!(p.remaining_time, 4);
        assert_eq!(p.state, ProcessState::Waiting);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
    }

    #[test]
    fn test_from_spec_clamps_minimums() {
        let p = Process::from_spec(ProcessSpec::new(None, 0, 0), 3);
        assert_eq!(p.pid, 3);
        assert_eq!(p.arrival_time, 1);
        assert_eq!(p.duration, 1);
        assert_eq!(p.remaining_time, 1);
    }

    #[test]
    fn test_reset_clears_mutable_fields() {
        let mut p = Process::from_spec(ProcessSpec::new(Some(1), 1, 5), 1);
        p.remaining_time = 2;
        p.start_time = Some(1);
        p.completion_time = Some(6);
        p.turnaround_time = Some(5);
        p.waiting_time = Some(0);
        p.state = ProcessState::Completed;

        p.reset();

        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
        assert_eq!(p.turnaround_time, None);
        assert_eq!(p.waiting_time, None);
        assert_eq!(p.state, ProcessState::Waiting);
    }

    #[test]
    fn test_progress() {
        let mut p = Process::from_spec(ProcessSpec::new(Some(1), 1, 4), 1);
        assert_eq!(p.progress(), 0.0);
        p.remaining_time = 1;
        assert_eq!(p.progress(), 0.75);
        p.remaining_time = 0;
        assert_eq!(p.progress(), 1.0);
    }
}
