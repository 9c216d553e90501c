//! Batch execution of several rovers sharing one grid.
//!
//! The entry point is [`Fleet`]. Build it from a [`MissionConfig`] (which
//! deploys the default rover) or from a bare edges string, deploy rovers with
//! [`Fleet::add_rover`], then run everything with [`Fleet::execute_all`].

use crate::error::{FleetError, RoverError};
use crate::rover::Rover;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for a mission: the shared grid and the rover deployed first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Grid edges as `"edgeX edgeY"`.
    pub edges: String,
    /// Rover deployed when the fleet is created. `None` starts empty.
    pub default_rover: Option<RoverSpec>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            edges: "5 5".to_string(),
            default_rover: Some(RoverSpec {
                identifier: "BumbleBee".to_string(),
                initial_pose: "1 2 N".to_string(),
                instructions: "LMLMLMLMM".to_string(),
            }),
        }
    }
}

/// Raw strings describing one rover to deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverSpec {
    pub identifier: String,
    pub initial_pose: String,
    pub instructions: String,
}

/// An ordered collection of rovers on a shared grid.
#[derive(Clone, Debug, Serialize)]
pub struct Fleet {
    edges: String,
    rovers: Vec<Rover>,
}

impl Default for Fleet {
    /// An empty fleet on the default mission edges.
    fn default() -> Self {
        Self::new(MissionConfig::default().edges)
    }
}

impl Fleet {
    /// Creates an empty fleet on `edges`. The edges are validated when the first
    /// rover is deployed.
    pub fn new(edges: impl Into<String>) -> Self {
        Self {
            edges: edges.into(),
            rovers: Vec::new(),
        }
    }

    /// Creates a fleet and deploys the configured default rover, if any.
    pub fn from_config(config: &MissionConfig) -> Result<Self, FleetError> {
        let mut fleet = Self::new(config.edges.clone());
        if let Some(spec) = &config.default_rover {
            fleet.add_rover(&spec.identifier, &spec.initial_pose, &spec.instructions)?;
        }
        Ok(fleet)
    }

    pub fn edges(&self) -> &str {
        &self.edges
    }

    /// Replaces the grid edges. Only allowed while no rover is deployed.
    pub fn set_edges(&mut self, edges: impl Into<String>) -> Result<(), FleetError> {
        if !self.rovers.is_empty() {
            return Err(FleetError::EdgesLocked(self.rovers.len()));
        }
        self.edges = edges.into();
        Ok(())
    }

    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn len(&self) -> usize {
        self.rovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }

    /// Builds a rover on the fleet edges, stores its instructions and appends it.
    ///
    /// Nothing is added if construction or instruction validation fails.
    pub fn add_rover(
        &mut self,
        identifier: &str,
        initial_pose: &str,
        instructions: &str,
    ) -> Result<(), FleetError> {
        let mut rover =
            Rover::new(identifier, initial_pose, &self.edges).map_err(RoverError::from)?;
        rover.set_instructions(instructions)?;

        info!(rover = identifier, fleet_size = self.rovers.len() + 1, "rover added");
        self.rovers.push(rover);
        Ok(())
    }

    /// Removes every rover named `identifier` and returns how many were removed.
    pub fn remove_rover(&mut self, identifier: &str) -> usize {
        let before = self.rovers.len();
        self.rovers.retain(|r| r.identifier() != identifier);
        let removed = before - self.rovers.len();
        debug!(rover = identifier, removed, "rover removal");
        removed
    }

    /// Runs each rover's stored instructions in deployment order.
    ///
    /// Returns one `"<identifier>: <x> <y> <heading>"` line per rover, joined by
    /// newlines. Stops at the first failing rover; rovers that already ran keep
    /// their new pose.
    pub fn execute_all(&mut self) -> Result<String, FleetError> {
        let mut lines = Vec::with_capacity(self.rovers.len());
        for rover in &mut self.rovers {
            let pose = rover
                .execute_instructions()
                .map_err(|source| FleetError::Execution {
                    identifier: rover.identifier().to_string(),
                    source,
                })?;
            lines.push(format!("{}: {pose}", rover.identifier()));
        }
        Ok(lines.join("\n"))
    }
}
