//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Positional score, always expressed from the root mover's point of view.
pub type Score = i32;
