use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometries::Circle;
use crate::phantom::phantom_builder::PhantomBuilder;
use crate::phantom::section::Section;
use crate::Result;

/// A Derenzo phantom: six sections of wells inside a circle of `radius`.
///
/// Built once by [`PhantomBuilder`] and read-only afterwards. Sections are stored in
/// input order; section `i` is rotated counterclockwise by `i * 60°`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phantom {
    pub(crate) radius: f64,
    /// Extrusion depth, 0 for a flat phantom
    pub(crate) depth: f64,
    pub(crate) length_unit: String,
    pub(crate) sections: Vec<Section>,
    pub(crate) total_area: f64,
    pub(crate) total_well_count: usize,
}

impl Phantom {
    /// Build a flat phantom with the default edge clearance and length unit.
    ///
    /// ```
    /// use derenzo_phantom::Phantom;
    ///
    /// let phantom = Phantom::new(50.0, &[10.0, 8.0, 6.0, 4.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(phantom.sections().len(), 6);
    /// ```
    pub fn new(radius: f64, feature_sizes: &[f64]) -> Result<Self> {
        PhantomBuilder::new(radius)
            .with_feature_sizes(feature_sizes)
            .build()
    }

    /// Start a builder for a phantom of `radius`.
    pub fn builder(radius: f64) -> PhantomBuilder {
        PhantomBuilder::new(radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Whether wells have a finite depth and export as cylinders
    pub fn is_volumetric(&self) -> bool {
        self.depth > 0.0
    }

    pub fn length_unit(&self) -> &str {
        &self.length_unit
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Feature sizes in section order
    pub fn feature_sizes(&self) -> Vec<f64> {
        self.sections.iter().map(Section::feature_size).collect()
    }

    /// Sum of the section well areas
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Sum of the section well counts
    pub fn total_well_count(&self) -> usize {
        self.total_well_count
    }

    /// Sections that could not fit more than one row, with their indices
    pub fn degraded_sections(&self) -> impl Iterator<Item = (usize, &Section)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_degraded())
    }

    /// Outer boundary of the phantom
    pub fn outline(&self) -> Circle {
        Circle::new(Vector2::zeros(), self.radius)
    }

    /// Every well center in export order: sections in phantom order, wells in layout order
    pub fn well_centers(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.well_centers().iter().copied())
    }
}
