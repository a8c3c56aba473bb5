mod coord;
mod life;
mod patterns;
pub mod rules;

pub use coord::Coord;
pub use life::Life;
pub use patterns::{Pattern, presets, random_soup};
