// 2D bounding box module: axis-aligned extents of circles and wedges

use nalgebra::Vector2;

/// 2D axis-aligned bounding box
///
/// Rectangular region defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner (bottom-left in phantom coordinates)
    pub min: Vector2<f64>,
    /// Maximum corner (top-right in phantom coordinates)
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "Minimum coordinates must be less than or equal to maximum coordinates"
        );
        Self { min, max }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut points_iter = points.into_iter();
        let first = points_iter.next()?;

        let (min, max) = points_iter.fold((first, first), |(min, max), p| {
            (
                Vector2::new(min.x.min(p.x), min.y.min(p.y)),
                Vector2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        Some(Self { min, max })
    }

    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow the box by `margin` on every side
    pub fn expand(&self, margin: f64) -> BoundingBox2D {
        let m = Vector2::new(margin, margin);
        BoundingBox2D {
            min: self.min - m,
            max: self.max + m,
        }
    }
}
