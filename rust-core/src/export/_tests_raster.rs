#[cfg(test)]
mod _tests_raster {
    use super::super::allocation::EventMode;
    use super::super::raster::*;
    use crate::error::DerenzoError;
    use crate::phantom::Phantom;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{DMatrix, Vector2};

    const SIDE: usize = 500;

    fn reference_phantom() -> Phantom {
        Phantom::new(50.0, &[10.0, 8.0, 6.0, 4.0, 2.0, 1.0]).unwrap()
    }

    fn filled(stencil: &DMatrix<f64>) -> usize {
        stencil.iter().filter(|&&v| v > 0.0).count()
    }

    #[test]
    fn test_disk_stencil_sizes() {
        let tiny = disk_stencil(0.3, 2.0);
        assert_eq!(tiny.shape(), (1, 1));
        assert_eq!(tiny[(0, 0)], 2.0);

        // Even 2r rounds up to the next odd side
        let unit = disk_stencil(1.0, 1.0);
        assert_eq!(unit.shape(), (3, 3));
        assert_eq!(filled(&unit), 5);
        assert_eq!(unit[(0, 0)], 0.0);

        let wide = disk_stencil(2.5, 1.0);
        assert_eq!(wide.shape(), (5, 5));
        assert_eq!(filled(&wide), 21);
    }

    #[test]
    fn test_pixel_mapping_flips_y() {
        let image = reference_phantom().rasterize(SIDE, "equal_activity").unwrap();
        assert_eq!(image.side(), SIDE);
        assert_abs_diff_eq!(image.px_per_unit(), 5.0, epsilon = 1e-12);

        let (row, col) = image.pixel_of(Vector2::new(0.0, 40.0));
        assert_eq!((row, col), (50, 250));
        let (row, _) = image.pixel_of(Vector2::new(0.0, -40.0));
        assert_eq!(row, 450);
        let (_, col) = image.pixel_of(Vector2::new(-40.0, 0.0));
        assert_eq!(col, 50);

        let centre = image.pixel_center(10, 20);
        assert_eq!(image.pixel_of(centre), (10, 20));
        assert_abs_diff_eq!(centre.x, 20.5 / 5.0 - 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centre.y, 50.0 - 10.5 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_pixels_are_masked() {
        let image = reference_phantom().rasterize(SIDE, "equal_counts").unwrap();
        for row in 0..SIDE {
            for col in 0..SIDE {
                let distance = image.pixel_center(row, col).norm();
                if (distance - 50.0).abs() < 1e-9 {
                    continue;
                }
                assert_eq!(image.is_masked(row, col), distance > 50.0, "pixel ({}, {})", row, col);
            }
        }
        assert_eq!(image.value(0, 0), None);
        assert_eq!(image.value(SIDE, 0), None);
        assert!(image.is_masked(SIDE, 0));
        assert!(image.is_masked(0, SIDE + 3));
        assert_eq!(image.value(250, 250), Some(0.0));
        assert!(image.to_nan_filled()[(0, 0)].is_nan());
    }

    #[test]
    fn test_raw_sum_counts_every_stamped_pixel() {
        let phantom = reference_phantom();
        for mode in [EventMode::EqualActivity, EventMode::EqualCounts] {
            let image = Rasterizer::new(SIDE)
                .with_mode(mode)
                .with_num_events(1000.0)
                .rasterize(&phantom)
                .unwrap();

            let expected: f64 = phantom
                .sections()
                .iter()
                .zip(phantom.section_allocations(1000.0, mode))
                .map(|(section, allocation)| {
                    let stencil = disk_stencil(section.well_radius() * image.px_per_unit(), 1.0);
                    section.num_wells() as f64 * filled(&stencil) as f64 * allocation.events_per_well
                })
                .sum();
            assert_relative_eq!(image.values().sum(), expected, max_relative = 1e-9);
            assert!(image.total_intensity() <= image.values().sum() + 1e-9);
        }
    }

    #[test]
    fn test_well_pixels_hold_events_per_well() {
        let phantom = reference_phantom();
        let image = Rasterizer::new(SIDE)
            .with_mode(EventMode::EqualCounts)
            .rasterize(&phantom)
            .unwrap();
        let per_well = 1.0 / phantom.total_well_count() as f64;

        // Every well equally bright, whatever its size
        for section in phantom.sections() {
            for &center in section.well_centers() {
                let (row, col) = image.pixel_of(center);
                let value = image.value(row as usize, col as usize).unwrap();
                assert_relative_eq!(value, per_well, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_equal_activity_brightness_scales_with_area() {
        let phantom = reference_phantom();
        let image = phantom.rasterize(SIDE, "equal_activity").unwrap();
        let allocations = phantom.section_allocations(1.0, EventMode::EqualActivity);

        let values: Vec<f64> = phantom
            .sections()
            .iter()
            .map(|s| {
                let (row, col) = image.pixel_of(s.well_centers()[0]);
                image.value(row as usize, col as usize).unwrap()
            })
            .collect();

        for (value, allocation) in values.iter().zip(&allocations) {
            assert_relative_eq!(*value, allocation.events_per_well, max_relative = 1e-9);
        }
        // f = 10 against f = 1
        assert_relative_eq!(values[0] / values[5], 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_overlapping_stamps_add_up() {
        let mut values = DMatrix::zeros(5, 5);
        let stencil = disk_stencil(1.0, 2.0);

        stamp(&mut values, &stencil, (2, 2));
        stamp(&mut values, &stencil, (2, 3));
        assert_eq!(values[(2, 2)], 4.0);
        assert_eq!(values[(2, 3)], 4.0);
        assert_eq!(values[(2, 1)], 2.0);
        assert_eq!(values[(1, 3)], 2.0);
        assert_eq!(values[(1, 1)], 0.0);

        // No clamping
        stamp(&mut values, &stencil, (2, 2));
        assert_eq!(values[(2, 2)], 6.0);

        // Left and top arms fall off the image
        stamp(&mut values, &stencil, (0, 0));
        assert_eq!(values[(0, 0)], 2.0);
        assert_eq!(values[(0, 1)], 2.0);
        stamp(&mut values, &stencil, (-5, -5));
        // Three full plus-shapes and one clipped to three cells
        assert_eq!(values.sum(), 2.0 * (3.0 * 5.0 + 3.0));
    }

    #[test]
    fn test_coarse_image_sums_wells_sharing_a_pixel() {
        let phantom = reference_phantom();
        let image = Rasterizer::new(20)
            .with_mode(EventMode::EqualCounts)
            .rasterize(&phantom)
            .unwrap();
        let per_well = 1.0 / phantom.total_well_count() as f64;

        // The 1 mm wells sit 0.4 px apart, so several land in the same pixel
        let brightest = image.values().max();
        let wells_in_pixel = brightest / per_well;
        assert!(wells_in_pixel >= 2.0 - 1e-9);
        assert_abs_diff_eq!(wells_in_pixel, wells_in_pixel.round(), epsilon = 1e-6);
    }

    #[test]
    fn test_small_image_clips_without_panicking() {
        let phantom = reference_phantom();
        let image = phantom.rasterize(8, "equal_activity").unwrap();
        assert_eq!(image.side(), 8);
        assert!(image.total_intensity() <= 1.0 + 1e-9);
    }

    #[test]
    fn test_invalid_raster_requests() {
        let phantom = reference_phantom();
        assert!(matches!(
            phantom.rasterize(SIDE, "subsection_area"),
            Err(DerenzoError::UnsupportedRasterMode(EventMode::SubsectionArea))
        ));
        assert!(matches!(
            phantom.rasterize(SIDE, "uniform"),
            Err(DerenzoError::UnknownEventMode(_))
        ));
        assert!(matches!(
            phantom.rasterize(0, "equal_counts"),
            Err(DerenzoError::InvalidImageSide(0))
        ));
    }
}
