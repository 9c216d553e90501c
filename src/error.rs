//! Error types for rover construction, movement and fleet execution.

use crate::heading::Axis;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Construction errors
// ---------------------------------------------------------------------------

/// A rule violated while building a [`Rover`](crate::Rover) from raw strings.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("{0} is not a valid cardinal direction")]
    InvalidHeading(String),

    #[error("Rover Identificator length must be greater than 2")]
    IdentifierTooShort,

    #[error("Rover Identificator length must be lesser than 20")]
    IdentifierTooLong,

    #[error("Badly formatted initial coordinates")]
    MalformedPose,

    #[error("Axis must be numbers")]
    NonNumericAxis,

    #[error("Initial coordinates could not be greater than edges")]
    InitialPositionOutOfBounds,

    #[error("Initial coordinates could not be negative")]
    NegativeInitialPosition,

    #[error("Edges needs to be greater than 0")]
    NonPositiveEdge,
}

// ---------------------------------------------------------------------------
// Rover errors
// ---------------------------------------------------------------------------

/// Every fallible rover operation funnels into this type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoverError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// A move would leave the mapped grid. Position is untouched.
    #[error("Sorry, I can't go there. It's not mapped ({axis} = {value}, limit 0..={edge}).")]
    Boundary { axis: Axis, value: i32, edge: i32 },

    /// Offending instruction text; empty when the whole sentence was empty.
    #[error("Please, provide valid instructions: L, R or M (capitalized), got {0:?}")]
    InvalidInstruction(String),
}

// ---------------------------------------------------------------------------
// Fleet errors
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error(transparent)]
    Rover(#[from] RoverError),

    /// A rover failed while the whole fleet was executing.
    #[error("{identifier}: {source}")]
    Execution {
        identifier: String,
        #[source]
        source: RoverError,
    },

    #[error("Edges are locked while {0} rover(s) are deployed")]
    EdgesLocked(usize),
}
