#[cfg(test)]
mod _tests_section {
    use super::super::section::Section;
    use super::super::section_layout::{triangular_number, LayoutStatus, SectionLayout};
    use crate::geometries::{Geometry2D, Transform2D};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_unrotated_section_matches_layout() {
        let section = Section::new(50.0, 4.0, 0.1, 0.0).unwrap();
        let layout = SectionLayout::compute(50.0, 4.0, 0.1).unwrap();

        assert_eq!(section.well_centers(), layout.well_centers.as_slice());
        assert_eq!(section.num_rows(), layout.num_rows);
        assert_eq!(section.status(), LayoutStatus::Nominal);
        assert_eq!(section.rotation_angle(), 0.0);
        assert_abs_diff_eq!(section.label_position().x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(section.label_position().y, -55.0, epsilon = TOL);
    }

    #[test]
    fn test_derived_quantities_are_consistent() {
        let section = Section::new(50.0, 2.0, 0.1, 120.0).unwrap();
        assert_eq!(section.num_wells(), section.well_centers().len());
        assert_eq!(section.num_wells(), triangular_number(section.num_rows()));
        assert_eq!(section.well_radius(), 1.0);
        assert_abs_diff_eq!(section.well_area(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(
            section.total_area(),
            PI * section.num_wells() as f64,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rotation_is_rigid_counterclockwise() {
        let base = Section::new(50.0, 6.0, 0.1, 0.0).unwrap();
        let turned = Section::new(50.0, 6.0, 0.1, 60.0).unwrap();
        let rotation = Transform2D::rotation_degrees(60.0);

        assert_eq!(turned.rotation_angle(), 60.0);
        for (a, b) in base.well_centers().iter().zip(turned.well_centers()) {
            let expected = rotation.apply_to_point(*a);
            assert_abs_diff_eq!(expected.x, b.x, epsilon = TOL);
            assert_abs_diff_eq!(expected.y, b.y, epsilon = TOL);
            assert_abs_diff_eq!(a.norm(), b.norm(), epsilon = TOL);
        }

        // Bisector label moves from -y towards +x
        assert!(turned.label_position().x > 0.0);
        assert_abs_diff_eq!(turned.label_position().norm(), 55.0, epsilon = TOL);
    }

    #[test]
    fn test_half_turn_label() {
        let section = Section::new(50.0, 6.0, 0.1, 180.0).unwrap();
        assert_abs_diff_eq!(section.label_position().x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(section.label_position().y, 55.0, epsilon = TOL);
    }

    #[test]
    fn test_full_turn_reproduces_wells() {
        let section = Section::new(50.0, 2.0, 0.1, 0.0).unwrap();

        let once = section.rotated(360.0);
        let mut stepped = section.clone();
        for _ in 0..6 {
            stepped = stepped.rotated(60.0);
        }

        for other in [&once, &stepped] {
            assert_abs_diff_eq!(other.rotation_angle(), 0.0, epsilon = TOL);
            assert_eq!(other.num_wells(), section.num_wells());
            for (a, b) in section.well_centers().iter().zip(other.well_centers()) {
                assert_abs_diff_eq!(a.x, b.x, epsilon = TOL);
                assert_abs_diff_eq!(a.y, b.y, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_wells_stay_inside_their_wedge() {
        for i in 0..6 {
            let angle = 60.0 * i as f64;
            let section = Section::new(50.0, 1.0, 0.1, angle).unwrap();
            let wedge = section.wedge();
            for well in section.wells() {
                assert!(wedge.contains_point(well.center), "rotation {}: {:?}", angle, well);
                assert_eq!(well.radius, 0.5);
            }
            assert!(!wedge.contains_point(section.label_position()), "label sits outside");
        }
    }

    #[test]
    fn test_neighbouring_wedges_do_not_share_wells() {
        let a = Section::new(50.0, 2.0, 0.1, 0.0).unwrap();
        let b = Section::new(50.0, 2.0, 0.1, 60.0).unwrap();
        let wedge_b = b.wedge();
        assert!(a.well_centers().iter().all(|&c| !wedge_b.contains_point(c)));
    }

    #[test]
    fn test_degraded_section_is_flagged() {
        let section = Section::new(25.0, 8.0, 0.1, 0.0).unwrap();
        assert!(section.is_degraded());
        assert_eq!(section.num_wells(), 1);
    }
}
