//! # rover-fleet
//!
//! A deterministic command interpreter for rovers on a bounded 2-D grid.
//!
//! A [`Rover`] is built from raw strings (identifier, `"x y heading"` pose and
//! `"edgeX edgeY"` edges), then driven by instruction sentences over the
//! alphabet `L` (turn left), `R` (turn right) and `M` (move forward). Moves that
//! would leave the grid are rejected before the pose changes. A [`Fleet`]
//! aggregates rovers sharing one grid and runs them in order.

pub mod error;
pub mod fleet;
pub mod heading;
pub mod instruction;
pub mod rover;

pub use error::*;
pub use fleet::*;
pub use heading::*;
pub use instruction::{Instruction, parse_sentence, render_sentence};
pub use rover::*;
