use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::GEOMETRY_TOLERANCE;
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;

/// Base trait for the 2D shapes a phantom is made of
pub trait Geometry2D: std::fmt::Debug {
    /// Check if a point is inside the geometry (boundary included)
    fn contains_point(&self, point: Vector2<f64>) -> bool;

    /// Get the bounding box of the geometry
    fn bounding_box(&self) -> BoundingBox2D;
}

/// Circle geometry: the phantom outline and every well
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Geometry2D for Circle {
    fn contains_point(&self, point: Vector2<f64>) -> bool {
        (point - self.center).norm() <= self.radius + GEOMETRY_TOLERANCE
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D {
            min: self.center - Vector2::new(self.radius, self.radius),
            max: self.center + Vector2::new(self.radius, self.radius),
        }
    }
}

/// Circular sector with its apex at `apex`
///
/// The sector spans `half_angle` on either side of the bisector direction.
/// A phantom section is a wedge with apex at the origin, a half angle of 30°
/// and the phantom radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub apex: Vector2<f64>,
    pub radius: f64,
    /// Direction of the bisector in radians, counterclockwise from +x
    pub bisector: f64,
    /// Half of the opening angle in radians
    pub half_angle: f64,
}

impl Wedge {
    pub fn new(apex: Vector2<f64>, radius: f64, bisector: f64, half_angle: f64) -> Self {
        Self {
            apex,
            radius,
            bisector,
            half_angle,
        }
    }

    /// Point on the arc at `angle` (radians, absolute)
    fn arc_point(&self, angle: f64) -> Vector2<f64> {
        self.apex + self.radius * Vector2::new(angle.cos(), angle.sin())
    }

    /// Signed angular distance of `angle` from the bisector, wrapped to (-π, π]
    fn angle_from_bisector(&self, angle: f64) -> f64 {
        let mut diff = (angle - self.bisector) % (2.0 * PI);
        if diff > PI {
            diff -= 2.0 * PI;
        } else if diff <= -PI {
            diff += 2.0 * PI;
        }
        diff
    }

    /// The two straight edges' outer end points
    pub fn edge_endpoints(&self) -> (Vector2<f64>, Vector2<f64>) {
        (
            self.arc_point(self.bisector - self.half_angle),
            self.arc_point(self.bisector + self.half_angle),
        )
    }
}

impl Geometry2D for Wedge {
    fn contains_point(&self, point: Vector2<f64>) -> bool {
        let v = point - self.apex;
        let dist = v.norm();
        if dist > self.radius + GEOMETRY_TOLERANCE {
            return false;
        }
        if dist < GEOMETRY_TOLERANCE {
            return true;
        }
        self.angle_from_bisector(v.y.atan2(v.x)).abs() <= self.half_angle + GEOMETRY_TOLERANCE
    }

    fn bounding_box(&self) -> BoundingBox2D {
        let (start, end) = self.edge_endpoints();
        let mut points = vec![self.apex, start, end];

        // Axis-aligned extremes of the arc that fall inside the opening
        for k in 0..4 {
            let axis_angle = k as f64 * FRAC_PI_2;
            if self.angle_from_bisector(axis_angle).abs() <= self.half_angle {
                points.push(self.arc_point(axis_angle));
            }
        }

        BoundingBox2D::from_points(points)
            .unwrap_or_else(|| BoundingBox2D::new(self.apex, self.apex))
    }
}
