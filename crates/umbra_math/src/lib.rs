// Re-export glam for convenience
pub use glam::*;

// Umbra math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::{Ray, RayError};
pub use vector::{is_degenerate, unit_towards};
