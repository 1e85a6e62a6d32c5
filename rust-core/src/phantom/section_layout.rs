// Section layout engine: triangular well lattice inside one unrotated 60° wedge
//
// The wedge has its apex at the origin and its bisector along -y. Rows are stacked
// away from the apex; row n (1-based) holds n wells.

use log::{debug, warn};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::DerenzoError;
use crate::Result;

/// Outcome of fitting the lattice into a wedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStatus {
    /// More than one row fit with the requested edge clearance
    Nominal,
    /// More than one row only fit after dropping the edge clearance
    ClearanceRelaxed,
    /// At most one row fits even without edge clearance
    Degraded,
}

/// Unrotated lattice for one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    /// Buffer actually kept between the apex and the first row region
    pub effective_offset: f64,
    /// Vertical distance between consecutive rows
    pub row_height: f64,
    pub num_rows: usize,
    pub status: LayoutStatus,
    /// Row-major, apex row first, left to right within a row
    pub well_centers: Vec<Vector2<f64>>,
}

/// Row spacing of an equilateral lattice of wells with the given feature size.
pub fn row_height(feature_size: f64) -> f64 {
    feature_size * 3.0_f64.sqrt()
}

/// Triangular number n(n+1)/2: well count of a lattice with `num_rows` rows.
pub fn triangular_number(num_rows: usize) -> usize {
    num_rows * (num_rows + 1) / 2
}

/// Number of lattice rows that fit for the given buffer, clamped at zero.
pub fn rows_that_fit(parent_radius: f64, feature_size: f64, offset: f64) -> usize {
    let usable_height = parent_radius - (2.0 * offset + feature_size);
    let rows = (usable_height / row_height(feature_size)).floor();
    if rows > 0.0 {
        rows as usize
    } else {
        0
    }
}

/// Place the wells of `num_rows` rows below an apex buffer of `offset`.
///
/// Row `n` sits at `y = -(offset + n * row_height)` with its `n` wells at
/// `x = feature_size * k` for `k = -(n-1), -(n-3), ..., n-1`.
pub fn lattice_points(feature_size: f64, offset: f64, num_rows: usize) -> Vec<Vector2<f64>> {
    let height = row_height(feature_size);
    let mut points = Vec::with_capacity(triangular_number(num_rows));

    for n in 1..=num_rows {
        let y = -(offset + height * n as f64);
        let first = -(n as i64 - 1);
        for k in (first..n as i64).step_by(2) {
            points.push(Vector2::new(feature_size * k as f64, y));
        }
    }

    points
}

impl SectionLayout {
    /// Fit a lattice of wells with `feature_size` into a wedge of `parent_radius`.
    ///
    /// The first attempt keeps `edge_clearance_fraction * parent_radius` of buffer. If that
    /// leaves at most one row, the buffer is dropped and the rows are counted again. If the
    /// second attempt still fits at most one row the layout is kept as is and flagged
    /// [`LayoutStatus::Degraded`].
    pub fn compute(parent_radius: f64, feature_size: f64, edge_clearance_fraction: f64) -> Result<Self> {
        if !(parent_radius.is_finite() && parent_radius > 0.0) {
            return Err(DerenzoError::InvalidRadius(parent_radius));
        }
        if !(feature_size.is_finite() && feature_size > 0.0) {
            return Err(DerenzoError::InvalidFeatureSize {
                index: 0,
                value: feature_size,
            });
        }
        if !(edge_clearance_fraction.is_finite() && edge_clearance_fraction >= 0.0) {
            return Err(DerenzoError::InvalidEdgeClearance(edge_clearance_fraction));
        }

        let mut effective_offset = edge_clearance_fraction * parent_radius;
        let mut num_rows = rows_that_fit(parent_radius, feature_size, effective_offset);
        let mut status = LayoutStatus::Nominal;

        if num_rows <= 1 {
            effective_offset = 0.0;
            num_rows = rows_that_fit(parent_radius, feature_size, effective_offset);
            status = if num_rows <= 1 {
                warn!(
                    "cannot fit multiple features for this feature size: feature size {} in radius {} gives {} row(s)",
                    feature_size, parent_radius, num_rows
                );
                LayoutStatus::Degraded
            } else {
                LayoutStatus::ClearanceRelaxed
            };
        }

        let well_centers = lattice_points(feature_size, effective_offset, num_rows);
        debug!(
            "section layout: feature size {}, offset {}, {} rows, {} wells ({:?})",
            feature_size,
            effective_offset,
            num_rows,
            well_centers.len(),
            status
        );

        Ok(Self {
            effective_offset,
            row_height: row_height(feature_size),
            num_rows,
            status,
            well_centers,
        })
    }

    pub fn num_wells(&self) -> usize {
        self.well_centers.len()
    }
}
