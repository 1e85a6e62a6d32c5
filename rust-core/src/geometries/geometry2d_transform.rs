// 2D transformation module: rigid rotations for section placement and the
// scale/flip/translate mapping from phantom space to pixel space

use nalgebra::{Rotation2, Vector2};

/// 2D affine transformation
///
/// Combination of per-axis scaling, rotation about the origin and translation.
/// Transformations are applied in the order: scale -> rotate -> translate.
/// A negative scale component mirrors that axis, which is how the rasterizer
/// flips the y axis into row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2D {
    /// Translation offset
    pub translation: Vector2<f64>,
    /// Rotation angle in radians (counterclockwise)
    pub rotation: f64,
    /// Scale factors for x and y axes
    pub scale: Vector2<f64>,
}

impl Transform2D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            translation: Vector2::zeros(),
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
        }
    }

    /// Create a rotation-only transformation
    ///
    /// # Arguments
    /// * `angle` - Rotation angle in radians (counterclockwise)
    pub fn rotation(angle: f64) -> Self {
        Self {
            rotation: angle,
            ..Self::identity()
        }
    }

    /// Create a rotation-only transformation from an angle in degrees
    pub fn rotation_degrees(angle_deg: f64) -> Self {
        Self::rotation(angle_deg.to_radians())
    }

    /// Create a scale-only transformation
    pub fn scaling(scale: Vector2<f64>) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    /// Add a translation to this transformation
    pub fn translate(mut self, offset: Vector2<f64>) -> Self {
        self.translation += offset;
        self
    }

    /// Apply the transformation to a point
    ///
    /// # Arguments
    /// * `point` - Point to transform
    ///
    /// # Returns
    /// The transformed point
    pub fn apply_to_point(&self, point: Vector2<f64>) -> Vector2<f64> {
        let scaled = point.component_mul(&self.scale);

        let rotated = if self.rotation == 0.0 {
            scaled
        } else {
            Rotation2::new(self.rotation) * scaled
        };

        rotated + self.translation
    }

    /// Apply the inverse transformation to a point
    ///
    /// Inverse operations are applied in reverse order: untranslate -> unrotate -> unscale.
    /// Returns `None` if either scale component is zero.
    pub fn apply_inverse_to_point(&self, point: Vector2<f64>) -> Option<Vector2<f64>> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return None;
        }

        let translated = point - self.translation;

        let rotated = if self.rotation == 0.0 {
            translated
        } else {
            Rotation2::new(-self.rotation) * translated
        };

        Some(rotated.component_div(&self.scale))
    }
}
