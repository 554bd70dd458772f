//! # life_engine
//!
//! Conway's Game of Life on a fixed-size grid with a fixed (non-wrapping) boundary,
//! rendered to the console one generation at a time.

pub mod animate;
pub mod config;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod render;
pub mod simulation;

pub use animate::animate;
pub use config::RunConfig;
pub use error::Error;
pub use error::Result;
pub use grid::CellState;
pub use grid::Coord;
pub use grid::Grid;
pub use simulation::step;
pub use simulation::FinishedReason;
pub use simulation::Simulation;

mod error;
