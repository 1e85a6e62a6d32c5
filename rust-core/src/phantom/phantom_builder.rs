use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{DEFAULT_EDGE_CLEARANCE, DEFAULT_LENGTH_UNIT, NUM_SECTIONS, SECTION_ANGLE_DEG};
use crate::error::DerenzoError;
use crate::phantom::phantom::Phantom;
use crate::phantom::section::Section;
use crate::Result;

/// Builder for constructing a [`Phantom`]
#[derive(Debug, Clone)]
pub struct PhantomBuilder {
    radius: f64,
    feature_sizes: Vec<f64>,
    depth: f64,
    length_unit: String,
    edge_clearance: f64,
}

impl PhantomBuilder {
    /// Create a new builder for a phantom of `radius`
    pub fn new(radius: f64) -> Self {
        PhantomBuilder {
            radius,
            feature_sizes: Vec::new(),
            depth: 0.0,
            length_unit: DEFAULT_LENGTH_UNIT.to_string(),
            edge_clearance: DEFAULT_EDGE_CLEARANCE,
        }
    }

    /// Set the six feature sizes in angular order
    pub fn with_feature_sizes(mut self, feature_sizes: &[f64]) -> Self {
        self.feature_sizes = feature_sizes.to_vec();
        self
    }

    /// Set the well depth; 0 keeps the phantom flat
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Set the length unit attached to exported values
    pub fn with_length_unit(mut self, unit: &str) -> Self {
        self.length_unit = unit.to_string();
        self
    }

    /// Set the edge clearance as a fraction of the radius
    pub fn with_edge_clearance(mut self, fraction: f64) -> Self {
        self.edge_clearance = fraction;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(DerenzoError::InvalidRadius(self.radius));
        }
        if self.feature_sizes.len() != NUM_SECTIONS {
            return Err(DerenzoError::WrongSectionCount {
                expected: NUM_SECTIONS,
                found: self.feature_sizes.len(),
            });
        }
        if let Some((index, &value)) = self
            .feature_sizes
            .iter()
            .enumerate()
            .find(|(_, f)| !(f.is_finite() && **f > 0.0))
        {
            return Err(DerenzoError::InvalidFeatureSize { index, value });
        }
        if !(self.depth.is_finite() && self.depth >= 0.0) {
            return Err(DerenzoError::InvalidDepth(self.depth));
        }
        if !(self.edge_clearance.is_finite() && self.edge_clearance >= 0.0) {
            return Err(DerenzoError::InvalidEdgeClearance(self.edge_clearance));
        }
        Ok(())
    }

    fn build_section(&self, index: usize, feature_size: f64) -> Result<Section> {
        Section::new(
            self.radius,
            feature_size,
            self.edge_clearance,
            index as f64 * SECTION_ANGLE_DEG,
        )
    }

    /// Validate the inputs and build the phantom
    ///
    /// Sections are laid out independently and assembled in input order. Nothing is
    /// returned unless every section was built.
    pub fn build(self) -> Result<Phantom> {
        self.validate()?;

        #[cfg(feature = "parallel")]
        let sections = self
            .feature_sizes
            .par_iter()
            .enumerate()
            .map(|(i, &f)| self.build_section(i, f))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let sections = self
            .feature_sizes
            .iter()
            .enumerate()
            .map(|(i, &f)| self.build_section(i, f))
            .collect::<Result<Vec<_>>>()?;

        let total_area = sections.iter().map(Section::total_area).sum();
        let total_well_count = sections.iter().map(Section::num_wells).sum();

        debug!(
            "built phantom: radius {} {}, {} wells, well area {}",
            self.radius, self.length_unit, total_well_count, total_area
        );

        Ok(Phantom {
            radius: self.radius,
            depth: self.depth,
            length_unit: self.length_unit,
            sections,
            total_area,
            total_well_count,
        })
    }
}
