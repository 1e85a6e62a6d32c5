// Phantom module: section lattice layout and phantom composition
// A phantom is six independently sized section lattices rotated into 60° wedges

// ======================== MODULE DECLARATIONS ========================
pub mod phantom;
pub mod phantom_builder;
pub mod section;
pub mod section_layout;

mod _tests_section;

// ======================== LAYOUT ENGINE ========================
pub use section_layout::{
    LayoutStatus,      // enum - Nominal, ClearanceRelaxed or Degraded
    SectionLayout,     // struct - unrotated lattice of one wedge
    lattice_points,    // fn(feature_size, offset, num_rows) -> Vec<Vector2<f64>>
    row_height,        // fn(feature_size) -> f64
    rows_that_fit,     // fn(parent_radius, feature_size, offset) -> usize
    triangular_number, // fn(num_rows) -> usize
};

// SectionLayout impl methods:
//   compute(parent_radius, feature_size, edge_clearance_fraction) -> Result<SectionLayout>
//   num_wells(&self) -> usize

// ======================== SECTIONS & PHANTOM ========================
pub use section::Section; // struct - one rotated wedge of wells
// Section impl methods:
//   new(parent_radius, feature_size, edge_clearance_fraction, rotation_deg) -> Result<Section>
//   rotated(&self, angle_deg) -> Section                      - rigidly rotated copy
//   well_centers / label_position / wells / wedge             - geometry
//   num_rows / num_wells / well_area / total_area / status    - cached derived values

pub use phantom::Phantom; // struct - immutable composed phantom
// Phantom impl methods:
//   new(radius, feature_sizes) -> Result<Phantom>
//   builder(radius) -> PhantomBuilder
//   sections / feature_sizes / total_area / total_well_count
//   degraded_sections / outline / well_centers

pub use phantom_builder::PhantomBuilder; // struct - builder with validation
// PhantomBuilder impl methods:
//   new(radius) -> Self
//   with_feature_sizes / with_depth / with_length_unit / with_edge_clearance
//   build(self) -> Result<Phantom>
