/*!
 * Process Module
 * Process entity, lifecycle states, and creation from raw definitions
 */

pub mod types;

// Re-export for convenience
pub use types::{Process, ProcessSpec, ProcessState};
