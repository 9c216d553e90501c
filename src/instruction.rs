//! Rover instruction alphabet and sentence validation.

use crate::error::RoverError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rover command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Rotate counter-clockwise in place (`L`).
    #[serde(rename = "L")]
    TurnLeft,
    /// Rotate clockwise in place (`R`).
    #[serde(rename = "R")]
    TurnRight,
    /// Advance one cell along the current heading (`M`).
    #[serde(rename = "M")]
    MoveForward,
}

impl Instruction {
    pub fn letter(self) -> char {
        match self {
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
            Instruction::MoveForward => 'M',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = RoverError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            'M' => Ok(Instruction::MoveForward),
            other => Err(RoverError::InvalidInstruction(other.to_string())),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Checks that `sentence` is made only of `L`, `R` and `M`.
///
/// Stops at the first offending character. An empty sentence is rejected.
pub fn validate(sentence: &str) -> Result<(), RoverError> {
    parse_sentence(sentence).map(|_| ())
}

/// Validates `sentence` and converts it into instructions, in order.
pub fn parse_sentence(sentence: &str) -> Result<Vec<Instruction>, RoverError> {
    if sentence.is_empty() {
        return Err(RoverError::InvalidInstruction(String::new()));
    }
    sentence.chars().map(Instruction::try_from).collect()
}

/// Inverse of [`parse_sentence`].
pub fn render_sentence(instructions: &[Instruction]) -> String {
    instructions.iter().map(|i| i.letter()).collect()
}
