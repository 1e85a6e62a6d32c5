
//! Derenzo phantom geometry library
//!
//! Generates the layout of a Derenzo phantom: a circular calibration target split into six
//! 60° sections, each packed with a triangular lattice of wells of one characteristic size.
//! The composed geometry can be exported as Geant4 general particle source macros, rasterized
//! into an intensity image, or rendered as SVG.

pub mod config;
pub mod error;
pub mod export;
pub mod geometries;
pub mod phantom;
pub mod render;

pub use error::DerenzoError;
pub use export::{EventMode, MacroOptions, PhantomImage, WellRecord};
pub use phantom::{LayoutStatus, Phantom, PhantomBuilder, Section};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, DerenzoError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
