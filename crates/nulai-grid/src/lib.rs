//! Orbital audience grid.
//!
//! A fixed catalog of labels is laid out on concentric, horizontally
//! stretched orbits around the screen center. The whole field revolves slowly
//! and labels near the pointer light up.
//!
//! Placement, rotation and highlighting are pure and work in world pixels.
//! The [`render`] module adapts them to a terminal: it measures labels in
//! cells, maps pointer cells to world pixels and draws into a ratatui buffer.

mod catalog;
mod grid;
mod highlight;
mod placement;
pub mod render;
mod rotation;
mod ticker;

pub use catalog::AUDIENCES;
pub use grid::{LabelMetrics, OrbitalGrid};
pub use highlight::{BASE_OPACITY, Glow, Highlight};
pub use placement::{
    Label, OrbitParams, Placement, Verdict, in_exclusion, orbit_offset, place, ring_capacity,
};
pub use rotation::Rotation;
pub use ticker::{Tick, Ticker};
