use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::{LABEL_RADIUS_FACTOR, SECTION_ANGLE_DEG};
use crate::geometries::{Circle, Transform2D, Wedge};
use crate::phantom::section_layout::{LayoutStatus, SectionLayout};
use crate::Result;

/// One 60° wedge of a phantom, filled with wells of a single feature size.
///
/// All derived quantities are computed once at construction, so `num_wells` always
/// equals the length of `well_centers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    parent_radius: f64,
    /// Well diameter, also the lattice spacing parameter
    feature_size: f64,
    well_radius: f64,
    edge_clearance_fraction: f64,
    /// Buffer actually used after the fallback, in length units
    effective_offset: f64,
    row_height: f64,
    num_rows: usize,
    num_wells: usize,
    /// Area of a single well
    well_area: f64,
    /// Combined area of all wells in the section
    total_area: f64,
    /// Counterclockwise rotation from the -y bisector, degrees
    rotation_angle: f64,
    status: LayoutStatus,
    well_centers: Vec<Vector2<f64>>,
    label_position: Vector2<f64>,
}

impl Section {
    /// Lay out the section's lattice and rotate it into place.
    pub fn new(
        parent_radius: f64,
        feature_size: f64,
        edge_clearance_fraction: f64,
        rotation_angle: f64,
    ) -> Result<Self> {
        let layout = SectionLayout::compute(parent_radius, feature_size, edge_clearance_fraction)?;
        let well_radius = feature_size / 2.0;
        let well_area = PI * well_radius * well_radius;
        let num_wells = layout.num_wells();

        let unrotated = Section {
            parent_radius,
            feature_size,
            well_radius,
            edge_clearance_fraction,
            effective_offset: layout.effective_offset,
            row_height: layout.row_height,
            num_rows: layout.num_rows,
            num_wells,
            well_area,
            total_area: well_area * num_wells as f64,
            rotation_angle: 0.0,
            status: layout.status,
            well_centers: layout.well_centers,
            label_position: Vector2::new(0.0, -LABEL_RADIUS_FACTOR * parent_radius),
        };

        Ok(unrotated.rotated(rotation_angle))
    }

    /// Copy of the section rigidly rotated by a further `angle_deg` about the origin.
    pub fn rotated(&self, angle_deg: f64) -> Section {
        let rotation = Transform2D::rotation_degrees(angle_deg);
        Section {
            well_centers: self
                .well_centers
                .iter()
                .map(|&c| rotation.apply_to_point(c))
                .collect(),
            label_position: rotation.apply_to_point(self.label_position),
            rotation_angle: (self.rotation_angle + angle_deg).rem_euclid(360.0),
            ..self.clone()
        }
    }

    pub fn parent_radius(&self) -> f64 {
        self.parent_radius
    }

    pub fn feature_size(&self) -> f64 {
        self.feature_size
    }

    pub fn well_radius(&self) -> f64 {
        self.well_radius
    }

    pub fn edge_clearance_fraction(&self) -> f64 {
        self.edge_clearance_fraction
    }

    pub fn effective_offset(&self) -> f64 {
        self.effective_offset
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_wells(&self) -> usize {
        self.num_wells
    }

    pub fn well_area(&self) -> f64 {
        self.well_area
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Rotation in degrees, normalized to [0, 360)
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn status(&self) -> LayoutStatus {
        self.status
    }

    pub fn is_degraded(&self) -> bool {
        self.status == LayoutStatus::Degraded
    }

    pub fn well_centers(&self) -> &[Vector2<f64>] {
        &self.well_centers
    }

    pub fn label_position(&self) -> Vector2<f64> {
        self.label_position
    }

    /// Wells as circles, in layout order
    pub fn wells(&self) -> impl Iterator<Item = Circle> + '_ {
        self.well_centers
            .iter()
            .map(move |&c| Circle::new(c, self.well_radius))
    }

    /// The 60° sector this section occupies
    pub fn wedge(&self) -> Wedge {
        Wedge::new(
            Vector2::zeros(),
            self.parent_radius,
            -FRAC_PI_2 + self.rotation_angle.to_radians(),
            (SECTION_ANGLE_DEG / 2.0).to_radians(),
        )
    }
}
