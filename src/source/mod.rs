/*!
 * Process Sources
 * Boundary collaborators that supply raw process definitions
 */

use thiserror::Error;

pub mod random;
pub mod text;

// Re-export for convenience
pub use random::{generate, generate_seeded};
pub use text::{parse_file, parse_text};

/// Source operation result
pub type SourceResult<T> = Result<T, SourceError>;

/// Process source errors
///
/// Parsing itself is permissive and cannot fail; only the file boundary
/// can.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read process file: {0}")]
    Io(#[from] std::io::Error),
}
