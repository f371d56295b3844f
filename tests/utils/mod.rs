pub mod hand_builders;
pub mod setup;

// Re-export main utilities for use by test files
pub use hand_builders::HandsBuilder;
pub use setup::TestSetup;
