/*!
 * Scheduling Policy
 * Algorithm selection and the table-driven queue ordering comparator
 */

use crate::process::Process;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First In, First Out - earliest arrival runs first
    Fifo,
    /// Last In, First Out - latest arrival runs first
    Lifo,
    /// Shortest Job First - least remaining service runs first
    Sjf,
    /// Longest Job First - most remaining service runs first
    Ljf,
}

impl Algorithm {
    /// All supported algorithms, in presentation order
    pub const ALL: [Algorithm; 4] = [Self::Fifo, Self::Lifo, Self::Sjf, Self::Ljf];

    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "sjf" => Ok(Self::Sjf),
            "ljf" => Ok(Self::Ljf),
            _ => Err(format!("Invalid algorithm '{}'. Valid: fifo, lifo, sjf, ljf", s)),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Sjf => "sjf",
            Self::Ljf => "ljf",
        }
    }

    /// Total order over ready processes for this algorithm
    ///
    /// The final pid key makes the order deterministic for equal primary
    /// keys regardless of the underlying sort's stability:
    ///
    /// | Algorithm | Primary              | Then        | Then    |
    /// |-----------|----------------------|-------------|---------|
    /// | FIFO      | arrival asc          | pid asc     |         |
    /// | LIFO      | arrival desc         | pid desc    |         |
    /// | SJF       | remaining asc        | arrival asc | pid asc |
    /// | LJF       | remaining desc       | arrival asc | pid asc |
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        match self {
            Self::Fifo => a
                .arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.pid.cmp(&b.pid)),
            Self::Lifo => b
                .arrival_time
                .cmp(&a.arrival_time)
                .then_with(|| b.pid.cmp(&a.pid)),
            Self::Sjf => a
                .remaining_time
                .cmp(&b.remaining_time)
                .then_with(|| a.arrival_time.cmp(&b.arrival_time))
                .then_with(|| a.pid.cmp(&b.pid)),
            Self::Ljf => b
                .remaining_time
                .cmp(&a.remaining_time)
                .then_with(|| a.arrival_time.cmp(&b.arrival_time))
                .then_with(|| a.pid.cmp(&b.pid)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Order a ready queue under the given algorithm
///
/// Returns a newly allocated sequence; the input is not mutated.
pub fn order_queue(queue: &[Process], algorithm: Algorithm) -> Vec<Process> {
    let mut ordered = queue.to_vec();
    ordered.sort_by(|a, b| algorithm.compare(a, b));
    ordered
}
