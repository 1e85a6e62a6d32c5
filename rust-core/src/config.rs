// Constants and construction-time configuration

use serde::{Deserialize, Serialize};

use crate::phantom::{Phantom, PhantomBuilder};

// Phantom structure
pub const NUM_SECTIONS: usize = 6; // Always six wedges
pub const SECTION_ANGLE_DEG: f64 = 360.0 / NUM_SECTIONS as f64;

// Layout defaults
pub const DEFAULT_EDGE_CLEARANCE: f64 = 0.10; // Fraction of the phantom radius
pub const LABEL_RADIUS_FACTOR: f64 = 1.1; // Labels sit just outside the boundary
pub const DEFAULT_LENGTH_UNIT: &str = "mm";

// Export defaults
pub const DEFAULT_ENERGY_KEV: f64 = 511.0; // Annihilation photon
pub const DEFAULT_NUM_EVENTS: u64 = 1_000_000;

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-10;

/// Serializable description of a phantom's construction inputs.
///
/// Missing fields fall back to the reference phantom: radius 50 with feature sizes
/// 10, 8, 6, 4, 2 and 1 in the default length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhantomConfig {
    pub radius: f64,
    pub feature_sizes: Vec<f64>,
    pub depth: f64,
    pub length_unit: String,
    pub edge_clearance: f64,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            feature_sizes: vec![10.0, 8.0, 6.0, 4.0, 2.0, 1.0],
            depth: 0.0,
            length_unit: DEFAULT_LENGTH_UNIT.to_string(),
            edge_clearance: DEFAULT_EDGE_CLEARANCE,
        }
    }
}

impl PhantomConfig {
    /// Turn the configuration into a builder without validating it yet.
    pub fn to_builder(&self) -> PhantomBuilder {
        PhantomBuilder::new(self.radius)
            .with_feature_sizes(&self.feature_sizes)
            .with_depth(self.depth)
            .with_length_unit(&self.length_unit)
            .with_edge_clearance(self.edge_clearance)
    }

    /// Validate and build the phantom.
    pub fn build(&self) -> crate::Result<Phantom> {
        self.to_builder().build()
    }
}
