// Export module: event allocation, point-source records, Geant4 macros and raster images
// Everything here is a read-only projection of an already built phantom

// ======================== MODULE DECLARATIONS ========================
pub mod allocation;
pub mod gps_macro;
pub mod raster;
pub mod well_records;

mod _tests_raster;

// ======================== EVENT ALLOCATION ========================
pub use allocation::{
    EventMode,            // enum - equal_activity, equal_counts, subsection_area
    SectionAllocation,    // struct - real-valued per-section and per-well shares
    integer_event_counts, // fn(allocation, mode) -> Vec<u64>
    round_events,         // fn(events: f64) -> u64 - round half away from zero
    section_allocations,  // fn(phantom, num_events: f64, mode) -> Vec<SectionAllocation>
};

// ======================== WELL RECORDS & MACROS ========================
pub use well_records::{
    WellRecord,   // struct - (x, y, z, radius, energy, event count, depth) per well
    well_records, // fn(phantom, num_events: u64, energy, mode) -> Vec<WellRecord>
};

pub use gps_macro::{
    MacroOptions,         // struct - num_events, energy, mode
    to_gps_macro,         // fn(phantom, &MacroOptions) -> String
    write_gps_macro,      // fn(phantom, path, num_events, energy, mode: &str) -> Result<()>
    write_gps_macro_with, // fn(phantom, path, &MacroOptions) -> Result<()>
};

// ======================== RASTERIZATION ========================
pub use raster::{
    PhantomImage,               // struct - values + outside-phantom mask
    Rasterizer,                 // struct - side, mode, total intensity
    disk_stencil,               // fn(radius_px, value) -> DMatrix<f64>
    phantom_to_pixel_transform, // fn(radius, px_per_unit) -> Transform2D
    rasterize,                  // fn(phantom, side, mode: &str) -> Result<PhantomImage>
};
