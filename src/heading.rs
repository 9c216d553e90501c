//! Cardinal headings and the grid axes they drive.

use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed clockwise ordering used for every turn.
pub const CARDINAL_CYCLE: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// The direction a rover is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    fn cycle_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Next heading in [`CARDINAL_CYCLE`], wrapping `W` back to `N`.
    pub fn clockwise(self) -> Heading {
        CARDINAL_CYCLE[(self.cycle_index() + 1) % CARDINAL_CYCLE.len()]
    }

    /// Previous heading in [`CARDINAL_CYCLE`], wrapping `N` back to `W`.
    pub fn counter_clockwise(self) -> Heading {
        let len = CARDINAL_CYCLE.len();
        CARDINAL_CYCLE[(self.cycle_index() + len - 1) % len]
    }

    /// The axis a forward move changes: `N`/`S` move along Y, `E`/`W` along X.
    pub fn axis(self) -> Axis {
        match self {
            Heading::North | Heading::South => Axis::Y,
            Heading::East | Heading::West => Axis::X,
        }
    }

    /// Signed unit step of a forward move along [`axis`](Self::axis).
    pub fn step(self) -> i32 {
        match self {
            Heading::North | Heading::East => 1,
            Heading::South | Heading::West => -1,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Heading {
    type Err = ConstructionError;

    /// Case-sensitive; only the exact letters `N`, `E`, `S`, `W` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            other => Err(ConstructionError::InvalidHeading(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_walks_the_cardinal_cycle() {
        assert_eq!(Heading::North.clockwise(), Heading::East);
        assert_eq!(Heading::East.clockwise(), Heading::South);
        assert_eq!(Heading::South.clockwise(), Heading::West);
        assert_eq!(Heading::West.clockwise(), Heading::North);
    }

    #[test]
    fn counter_clockwise_walks_the_cycle_backwards() {
        assert_eq!(Heading::North.counter_clockwise(), Heading::West);
        assert_eq!(Heading::East.counter_clockwise(), Heading::North);
        assert_eq!(Heading::South.counter_clockwise(), Heading::East);
        assert_eq!(Heading::West.counter_clockwise(), Heading::South);
    }

    #[test]
    fn lowercase_letters_are_not_headings() {
        assert_eq!(
            "n".parse::<Heading>(),
            Err(ConstructionError::InvalidHeading("n".into()))
        );
        assert!("NE".parse::<Heading>().is_err());
        assert!("".parse::<Heading>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for heading in CARDINAL_CYCLE {
            assert_eq!(heading.to_string().parse::<Heading>(), Ok(heading));
        }
    }
}
