// Rasterizer: stamps one filled disk per well into a square intensity image
//
// Pixel (row, col) has its centre at continuous pixel coordinates (col + 0.5, row + 0.5).
// Phantom space (x right, y up, origin at the centre) maps to pixel space (origin at the
// top-left corner, rows growing downwards) by x -> s (x + R), y -> s (R - y).

use log::debug;
use nalgebra::{DMatrix, Vector2};

use crate::error::DerenzoError;
use crate::export::allocation::{section_allocations, EventMode};
use crate::geometries::Transform2D;
use crate::phantom::Phantom;
use crate::Result;

/// Rasterized phantom
///
/// Pixels outside the phantom's circular boundary are masked and read back as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhantomImage {
    values: DMatrix<f64>,
    mask: DMatrix<bool>,
    px_per_unit: f64,
    to_pixel: Transform2D,
}

impl PhantomImage {
    pub fn side(&self) -> usize {
        self.values.nrows()
    }

    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }

    /// Intensity at a pixel, `None` when masked or out of range
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if self.is_masked(row, col) {
            None
        } else {
            Some(self.values[(row, col)])
        }
    }

    /// `true` outside the phantom, including pixels off the image
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        row >= self.side() || col >= self.side() || self.mask[(row, col)]
    }

    /// Raw accumulated values, masked pixels included
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// `true` where a pixel lies outside the phantom
    pub fn mask(&self) -> &DMatrix<bool> {
        &self.mask
    }

    /// Copy of the image with masked pixels set to NaN
    pub fn to_nan_filled(&self) -> DMatrix<f64> {
        self.values
            .zip_map(&self.mask, |v, masked| if masked { f64::NAN } else { v })
    }

    /// Sum over all unmasked pixels
    pub fn total_intensity(&self) -> f64 {
        self.values
            .iter()
            .zip(self.mask.iter())
            .filter(|(_, masked)| !**masked)
            .map(|(v, _)| v)
            .sum()
    }

    /// Pixel holding a phantom-space point, by nearest pixel centre (may lie off the image)
    pub fn pixel_of(&self, point: Vector2<f64>) -> (i64, i64) {
        let p = self.to_pixel.apply_to_point(point);
        ((p.y - 0.5).round() as i64, (p.x - 0.5).round() as i64)
    }

    /// Phantom-space position of a pixel centre
    pub fn pixel_center(&self, row: usize, col: usize) -> Vector2<f64> {
        let centre = Vector2::new(col as f64 + 0.5, row as f64 + 0.5);
        self.to_pixel
            .apply_inverse_to_point(centre)
            .unwrap_or_else(Vector2::zeros)
    }
}

/// Square stencil of odd side holding a disk of `radius_px` filled with `value`.
///
/// The side is the smallest odd integer not below `2 * radius_px`; a cell is filled
/// when its centre lies within `radius_px` of the stencil centre, so the centre cell
/// is always filled.
pub fn disk_stencil(radius_px: f64, value: f64) -> DMatrix<f64> {
    let mut side = (2.0 * radius_px).ceil().max(1.0) as usize;
    if side % 2 == 0 {
        side += 1;
    }
    let half = (side / 2) as f64;

    DMatrix::from_fn(side, side, |i, j| {
        let (di, dj) = (i as f64 - half, j as f64 - half);
        if (di * di + dj * dj).sqrt() <= radius_px {
            value
        } else {
            0.0
        }
    })
}

/// Image-space mapping for a phantom of `radius` drawn at `px_per_unit`
pub fn phantom_to_pixel_transform(radius: f64, px_per_unit: f64) -> Transform2D {
    Transform2D::scaling(Vector2::new(px_per_unit, -px_per_unit))
        .translate(Vector2::new(px_per_unit * radius, px_per_unit * radius))
}

/// Rasterization settings
#[derive(Debug, Clone, PartialEq)]
pub struct Rasterizer {
    side: usize,
    mode: EventMode,
    num_events: f64,
}

impl Rasterizer {
    /// Square image of `side` pixels, `equal_activity`, one event in total
    pub fn new(side: usize) -> Self {
        Self {
            side,
            mode: EventMode::EqualActivity,
            num_events: 1.0,
        }
    }

    pub fn with_mode(mut self, mode: EventMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse the mode name; unknown names fail like a macro export does
    pub fn with_mode_name(self, mode: &str) -> Result<Self> {
        Ok(self.with_mode(mode.parse()?))
    }

    /// Event budget shared across the wells before stamping
    pub fn with_num_events(mut self, num_events: f64) -> Self {
        self.num_events = num_events;
        self
    }

    /// Rasterize the phantom.
    ///
    /// Each well contributes a disk whose pixels all hold the well's event allocation.
    /// Overlapping disks add up without clamping; disk pixels falling outside the image
    /// are dropped.
    pub fn rasterize(&self, phantom: &Phantom) -> Result<PhantomImage> {
        if self.side == 0 {
            return Err(DerenzoError::InvalidImageSide(self.side));
        }
        if self.mode == EventMode::SubsectionArea {
            return Err(DerenzoError::UnsupportedRasterMode(self.mode));
        }

        let side = self.side;
        let radius = phantom.radius();
        let px_per_unit = side as f64 / (2.0 * radius);
        let to_pixel = phantom_to_pixel_transform(radius, px_per_unit);

        let centre = side as f64 / 2.0;
        let boundary_px = radius * px_per_unit;
        let mask = DMatrix::from_fn(side, side, |row, col| {
            let dx = col as f64 + 0.5 - centre;
            let dy = row as f64 + 0.5 - centre;
            (dx * dx + dy * dy).sqrt() > boundary_px
        });

        let mut image = PhantomImage {
            values: DMatrix::zeros(side, side),
            mask,
            px_per_unit,
            to_pixel,
        };

        let allocations = section_allocations(phantom, self.num_events, self.mode);
        for (section, allocation) in phantom.sections().iter().zip(&allocations) {
            if section.num_wells() == 0 {
                continue;
            }
            let stencil =
                disk_stencil(section.well_radius() * px_per_unit, allocation.events_per_well);

            debug!(
                "rasterizing section {}: {} wells, stencil {}x{}",
                allocation.section_index,
                section.num_wells(),
                stencil.nrows(),
                stencil.ncols()
            );

            for &center in section.well_centers() {
                let pixel = image.pixel_of(center);
                stamp(&mut image.values, &stencil, pixel);
            }
        }

        Ok(image)
    }
}

/// Add `stencil` centred on `pixel`, clipping at the image edges
pub(crate) fn stamp(values: &mut DMatrix<f64>, stencil: &DMatrix<f64>, (row, col): (i64, i64)) {
    let half = (stencil.nrows() / 2) as i64;
    let side = values.nrows() as i64;

    for i in 0..stencil.nrows() {
        let r = row - half + i as i64;
        if r < 0 || r >= side {
            continue;
        }
        for j in 0..stencil.ncols() {
            let c = col - half + j as i64;
            if c < 0 || c >= side {
                continue;
            }
            values[(r as usize, c as usize)] += stencil[(i, j)];
        }
    }
}

/// Rasterize `phantom` into a `side` x `side` image using the named event mode.
pub fn rasterize(phantom: &Phantom, side: usize, mode: &str) -> Result<PhantomImage> {
    Rasterizer::new(side).with_mode_name(mode)?.rasterize(phantom)
}

impl Phantom {
    /// See [`rasterize`].
    pub fn rasterize(&self, side: usize, mode: &str) -> Result<PhantomImage> {
        rasterize(self, side, mode)
    }
}
