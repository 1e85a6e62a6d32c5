use thiserror::Error;

use crate::export::EventMode;

/// Errors raised while constructing or exporting a phantom.
///
/// Every variant except [`DerenzoError::Io`] is an invalid-argument condition: it is detected
/// before any state is built or any file is touched, so a failing call never leaves a partially
/// constructed phantom or a partially written macro behind.
///
/// A section that cannot fit more than one lattice row is *not* an error. That condition is
/// reported through [`crate::LayoutStatus::Degraded`] and a logged warning.
#[derive(Error, Debug)]
pub enum DerenzoError {
    /// The phantom radius must be a positive, finite length.
    #[error("invalid phantom radius {0}: must be positive and finite")]
    InvalidRadius(f64),

    /// A feature size must be a positive, finite length.
    #[error("invalid feature size {value} at index {index}: must be positive and finite")]
    InvalidFeatureSize {
        /// Position of the offending entry in the feature-size sequence
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// The phantom is always built from exactly one feature size per section.
    #[error("expected {expected} feature sizes, found {found}")]
    WrongSectionCount {
        /// Number of sections in a phantom
        expected: usize,
        /// Number of feature sizes supplied
        found: usize,
    },

    /// The extrusion depth must be finite and non-negative.
    #[error("invalid depth {0}: must be finite and non-negative")]
    InvalidDepth(f64),

    /// The edge clearance fraction must be finite and non-negative.
    #[error("invalid edge clearance fraction {0}: must be finite and non-negative")]
    InvalidEdgeClearance(f64),

    /// The allocation policy name is not one of the recognized modes.
    #[error("unknown event mode '{0}': expected equal_activity, equal_counts or subsection_area")]
    UnknownEventMode(String),

    /// Rasterization only supports `equal_activity` and `equal_counts`.
    #[error("event mode '{0}' is not supported for rasterization")]
    UnsupportedRasterMode(EventMode),

    /// The raster side length must be at least one pixel.
    #[error("invalid image side {0}: must be at least 1 pixel")]
    InvalidImageSide(usize),

    /// Writing the macro file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DerenzoError {
    /// Whether the error belongs to the invalid-argument kind.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, DerenzoError::Io(_))
    }
}
