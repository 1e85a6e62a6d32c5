#[cfg(test)]
mod tests {
    use super::super::geometry2d_transform::Transform2D;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transformation() {
        let transform = Transform2D::identity();
        let point = Vector2::new(3.0, 4.0);

        assert_eq!(transform.apply_to_point(point), point);
    }

    #[test]
    fn test_rotation_is_counterclockwise() {
        let transform = Transform2D::rotation(PI / 2.0);
        let transformed = transform.apply_to_point(Vector2::new(1.0, 0.0));

        assert_abs_diff_eq!(transformed.x, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(transformed.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_degrees_matches_radians() {
        let point = Vector2::new(0.0, -55.0);
        let a = Transform2D::rotation_degrees(60.0).apply_to_point(point);
        let b = Transform2D::rotation(PI / 3.0).apply_to_point(point);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        // (0, -55) rotated 60° ccw lands at (55 sin60, -55 cos60)
        assert_abs_diff_eq!(a.x, 55.0 * (PI / 3.0).sin(), epsilon = 1e-10);
        assert_abs_diff_eq!(a.y, -27.5, epsilon = 1e-10);
    }

    #[test]
    fn test_six_sixty_degree_steps_return_home() {
        let step = Transform2D::rotation_degrees(60.0);
        let start = Vector2::new(3.0, -17.0);
        let mut p = start;
        for _ in 0..6 {
            p = step.apply_to_point(p);
        }
        assert_abs_diff_eq!(p.x, start.x, epsilon = 1e-10);
        assert_abs_diff_eq!(p.y, start.y, epsilon = 1e-10);
    }

    #[test]
    fn test_flip_scale_then_translate() {
        // Pixel mapping used by the rasterizer: x -> s(x + R), y -> s(R - y)
        let (s, r) = (2.0, 10.0);
        let transform = Transform2D::scaling(Vector2::new(s, -s)).translate(Vector2::new(s * r, s * r));

        let top_left = transform.apply_to_point(Vector2::new(-r, r));
        assert_abs_diff_eq!(top_left.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(top_left.y, 0.0, epsilon = 1e-12);

        let center = transform.apply_to_point(Vector2::zeros());
        assert_eq!(center, Vector2::new(20.0, 20.0));
    }

    #[test]
    fn test_inverse_transformation() {
        let transform = Transform2D {
            translation: Vector2::new(1.0, 5.0),
            rotation: PI / 6.0,
            scale: Vector2::new(2.0, -3.0),
        };

        let point = Vector2::new(-4.0, 7.5);
        let back = transform
            .apply_inverse_to_point(transform.apply_to_point(point))
            .unwrap();
        assert_abs_diff_eq!(back.x, point.x, epsilon = 1e-10);
        assert_abs_diff_eq!(back.y, point.y, epsilon = 1e-10);
    }

    #[test]
    fn test_inverse_of_degenerate_scale_is_none() {
        let transform = Transform2D::scaling(Vector2::new(0.0, 1.0));
        assert!(transform.apply_inverse_to_point(Vector2::new(1.0, 1.0)).is_none());
    }
}
