// Geometries module: 2D primitives describing the phantom outline, its wedges and wells,
// plus the affine transform used to rotate sections and map phantom space to pixels

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d;
pub mod geometry2d_bounding_box;
pub mod geometry2d_transform;

mod _tests_geometry2d_transform;

// ======================== CORE GEOMETRY TRAIT ========================
pub use geometry2d::Geometry2D; // trait - base trait for all 2D shapes
// Geometry2D trait methods:
//   contains_point(&self, point: Vector2<f64>) -> bool       - checks if point is inside geometry
//   bounding_box(&self) -> BoundingBox2D                     - returns axis-aligned bounding box

// ======================== PRIMITIVE GEOMETRY TYPES ========================
pub use geometry2d::{
    Circle, // struct - phantom outline and wells
    Wedge,  // struct - circular sector, one per phantom section
};

// Circle impl methods:
//   new(center: Vector2<f64>, radius: f64) -> Self           - creates circle with center and radius
//   area(&self) -> f64                                       - disk area

// Wedge impl methods:
//   new(apex, radius, bisector, half_angle) -> Self          - angles in radians
//   edge_endpoints(&self) -> (Vector2<f64>, Vector2<f64>)    - outer ends of the straight edges

// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min, max) -> Self                                    - creates bounding box from corners
//   from_points(points) -> Option<Self>                      - smallest box containing all points
//   union(&self, other) -> BoundingBox2D                     - union of two boxes
//   width / height                                           - extents
//   expand(&self, margin: f64) -> BoundingBox2D              - grows box by margin on every side

pub use geometry2d_transform::Transform2D; // struct - scale, rotation, translation
// Transform2D impl methods:
//   identity() / rotation(angle) / rotation_degrees(deg) / scaling(scale) - constructors
//   translate(offset)                                        - adds a translation
//   apply_to_point(&self, point) -> Vector2<f64>             - scale -> rotate -> translate
//   apply_inverse_to_point(&self, point) -> Option<Vector2<f64>> - None when not invertible
