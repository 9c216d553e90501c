//! The rover state machine: pose, grid edges and instruction execution.
//!
//! A [`Rover`] is built once from three raw strings (identifier, pose, edges),
//! validated eagerly, and afterwards only mutated by the turn and move
//! primitives dispatched from [`Instruction`]s.

use crate::error::{ConstructionError, RoverError};
use crate::heading::{Axis, Heading};
use crate::instruction::{Instruction, parse_sentence, render_sentence};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Exclusive bounds on identifier length, counted in characters.
const IDENTIFIER_MIN_EXCLUSIVE: usize = 2;
const IDENTIFIER_MAX_EXCLUSIVE: usize = 20;

/// Position and heading of a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Grid cell, always within `0..=edges` on both axes.
    pub position: IVec2,
    pub heading: Heading,
}

impl Pose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    fn coordinate(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.position.x,
            Axis::Y => self.position.y,
        }
    }

    fn set_coordinate(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.position.x = value,
            Axis::Y => self.position.y = value,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.heading
        )
    }
}

/// Notification that a move landed exactly on an edge.
///
/// Not an error: the move is committed. It is emitted as a `tracing` event and
/// handed back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeReached {
    pub axis: Axis,
}

impl fmt::Display for EdgeReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ohh, I'm in the edge. This is my {} axis limit.", self.axis)
    }
}

/// A rover on a bounded grid.
///
/// Edges are fixed at construction. Every mutation keeps
/// `0 <= position <= edges` on both axes; a rejected move leaves the rover
/// exactly as it was.
#[derive(Clone, Debug, Serialize)]
pub struct Rover {
    identifier: String,
    pose: Pose,
    edges: IVec2,
    /// Instructions stored by [`set_instructions`](Self::set_instructions).
    pending: Vec<Instruction>,
}

impl Rover {
    /// Builds a rover from an identifier, an `"x y heading"` pose and an
    /// `"edgeX edgeY"` bounds string.
    ///
    /// # Validation
    ///
    /// Rules are evaluated in this order and the first failing one is returned:
    /// 1. heading is one of `N`, `E`, `S`, `W`
    /// 2. identifier is longer than 2 characters
    /// 3. identifier is shorter than 20 characters
    /// 4. both pose coordinates are present
    /// 5. both coordinates and both edges parse as integers
    /// 6. the initial position lies within `0..=edges`
    /// 7. both edges are greater than 0
    ///
    /// Tokens are split on any whitespace; surplus tokens are ignored.
    pub fn new(
        identifier: impl Into<String>,
        initial_pose: &str,
        bounds: &str,
    ) -> Result<Self, ConstructionError> {
        let identifier = identifier.into();

        let mut pose_tokens = initial_pose.split_whitespace();
        let x = pose_tokens.next();
        let y = pose_tokens.next();
        let heading: Heading = pose_tokens.next().unwrap_or_default().parse()?;

        let id_len = identifier.chars().count();
        if id_len <= IDENTIFIER_MIN_EXCLUSIVE {
            return Err(ConstructionError::IdentifierTooShort);
        }
        if id_len >= IDENTIFIER_MAX_EXCLUSIVE {
            return Err(ConstructionError::IdentifierTooLong);
        }

        let (Some(x), Some(y)) = (x, y) else {
            return Err(ConstructionError::MalformedPose);
        };

        let mut edge_tokens = bounds.split_whitespace();
        let numeric = |token: Option<&str>| token.and_then(|t| t.parse::<i32>().ok());
        let (Some(x), Some(y), Some(edge_x), Some(edge_y)) = (
            numeric(Some(x)),
            numeric(Some(y)),
            numeric(edge_tokens.next()),
            numeric(edge_tokens.next()),
        ) else {
            return Err(ConstructionError::NonNumericAxis);
        };

        if x > edge_x || y > edge_y {
            return Err(ConstructionError::InitialPositionOutOfBounds);
        }
        if x < 0 || y < 0 {
            return Err(ConstructionError::NegativeInitialPosition);
        }
        if edge_x <= 0 || edge_y <= 0 {
            return Err(ConstructionError::NonPositiveEdge);
        }

        debug!(rover = %identifier, x, y, %heading, edge_x, edge_y, "rover deployed");

        Ok(Self {
            identifier,
            pose: Pose::new(x, y, heading),
            edges: IVec2::new(edge_x, edge_y),
            pending: Vec::new(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> IVec2 {
        self.pose.position
    }

    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    /// Upper grid limits `(edgeX, edgeY)`.
    pub fn edges(&self) -> IVec2 {
        self.edges
    }

    fn edge(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.edges.x,
            Axis::Y => self.edges.y,
        }
    }

    /// The instructions stored by [`set_instructions`](Self::set_instructions),
    /// as text. Empty until instructions are set.
    pub fn pending_instructions(&self) -> String {
        render_sentence(&self.pending)
    }

    /// Checks whether `value` is a reachable coordinate on `axis`.
    ///
    /// Values above the axis edge or below 0 are rejected with
    /// [`RoverError::Boundary`]. A value exactly on the edge is accepted and
    /// reported as [`EdgeReached`].
    pub fn check_if_axis_is_accessible(
        &self,
        value: i32,
        axis: Axis,
    ) -> Result<Option<EdgeReached>, RoverError> {
        let edge = self.edge(axis);

        if value > edge || value < 0 {
            warn!(rover = %self.identifier, %axis, value, edge, "move rejected, cell not mapped");
            return Err(RoverError::Boundary { axis, value, edge });
        }

        if value == edge {
            let reached = EdgeReached { axis };
            info!(rover = %self.identifier, %axis, "{reached}");
            return Ok(Some(reached));
        }

        Ok(None)
    }

    /// Heading after a left turn, without turning.
    pub fn counter_clockwise(&self) -> Heading {
        self.pose.heading.counter_clockwise()
    }

    /// Heading after a right turn, without turning.
    pub fn clockwise(&self) -> Heading {
        self.pose.heading.clockwise()
    }

    pub fn turn_left(&mut self) {
        self.pose.heading = self.counter_clockwise();
    }

    pub fn turn_right(&mut self) {
        self.pose.heading = self.clockwise();
    }

    /// Advances one cell along the current heading.
    ///
    /// The candidate coordinate is checked before anything is committed, so a
    /// failed move leaves the pose unchanged.
    pub fn move_forward(&mut self) -> Result<Option<EdgeReached>, RoverError> {
        let heading = self.pose.heading;
        let axis = heading.axis();
        let edge = self.edge(axis);
        let Some(candidate) = self.pose.coordinate(axis).checked_add(heading.step()) else {
            warn!(rover = %self.identifier, %axis, edge, "move rejected, coordinate overflow");
            return Err(RoverError::Boundary {
                axis,
                value: edge,
                edge,
            });
        };

        let reached = self.check_if_axis_is_accessible(candidate, axis)?;
        self.pose.set_coordinate(axis, candidate);

        Ok(reached)
    }

    /// Dispatches a single decoded instruction.
    pub fn execute_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<Option<EdgeReached>, RoverError> {
        trace!(rover = %self.identifier, %instruction, "executing");
        match instruction {
            Instruction::TurnLeft => {
                self.turn_left();
                Ok(None)
            }
            Instruction::TurnRight => {
                self.turn_right();
                Ok(None)
            }
            Instruction::MoveForward => self.move_forward(),
        }
    }

    /// Validates and executes a single instruction letter.
    pub fn execute(&mut self, token: char) -> Result<Option<EdgeReached>, RoverError> {
        let instruction = Instruction::try_from(token)?;
        self.execute_instruction(instruction)
    }

    /// Precondition check for an instruction sentence. Executes nothing and
    /// reads no rover state; same as the free [`crate::instruction::validate`].
    pub fn validate(&self, sentence: &str) -> Result<(), RoverError> {
        crate::instruction::validate(sentence)
    }

    /// Executes `sentence` left to right and returns the final pose as
    /// `"<x> <y> <heading>"`.
    ///
    /// Stops at the first failing instruction. Instructions already applied are
    /// not rolled back.
    pub fn execute_instruction_sentence(&mut self, sentence: &str) -> Result<String, RoverError> {
        debug!(rover = %self.identifier, sentence, "executing sentence");
        for token in sentence.chars() {
            self.execute(token)?;
        }
        Ok(self.pose.to_string())
    }

    /// Validates and stores `sentence` for [`execute_instructions`](Self::execute_instructions).
    ///
    /// On failure the previously stored instructions are kept.
    pub fn set_instructions(&mut self, sentence: &str) -> Result<(), RoverError> {
        self.pending = parse_sentence(sentence)?;
        Ok(())
    }

    /// Runs the stored instructions. Equivalent to
    /// `execute_instruction_sentence(&self.pending_instructions())`.
    pub fn execute_instructions(&mut self) -> Result<String, RoverError> {
        let sentence = self.pending_instructions();
        self.execute_instruction_sentence(&sentence)
    }

    /// Current pose as `"<x> <y> <heading>"`.
    pub fn initial_coordinate(&self) -> String {
        self.pose.to_string()
    }
}
