/*!
 * Core Types
 * Common types used across the engine
 */

/// Process ID type
pub type Pid = u32;

/// Discrete simulation time, in ticks since load
pub type Tick = u32;
