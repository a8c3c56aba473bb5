// Domain layer - the sparse universe and its transition rule
pub mod domain;

// Application layer - scheduling, control flags, viewport math
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Coord, Life, Pattern, presets};
pub use application::{Controls, GameState, Settings, Viewport};
