use proptest::prelude::*;

use picsq_core::error::SquareError;
use picsq_core::geometry::{
    compute_display_geometry, display_to_original, original_to_display, original_to_display_rect,
    CropCenter, DisplayGeometry, DisplayPoint, DisplayRect, ImageSize, Viewport,
};

const VIEWPORT: Viewport = Viewport::new(600, 600);

fn landscape() -> (ImageSize, DisplayGeometry) {
    let size = ImageSize::new(800, 600);
    (size, compute_display_geometry(size, VIEWPORT).unwrap())
}

// ---------------------------------------------------------------------------
// compute_display_geometry
// ---------------------------------------------------------------------------

#[test]
fn test_landscape_fits_width_and_letterboxes_vertically() {
    let (_, g) = landscape();
    assert_eq!(
        g,
        DisplayGeometry {
            offset_x: 0,
            offset_y: 75,
            scaled_width: 600,
            scaled_height: 450,
        }
    );
}

#[test]
fn test_portrait_fits_height() {
    let g = compute_display_geometry(ImageSize::new(600, 1200), VIEWPORT).unwrap();
    assert_eq!((g.scaled_width, g.scaled_height), (300, 600));
    assert_eq!((g.offset_x, g.offset_y), (150, 0));
}

#[test]
fn test_small_image_is_never_upscaled() {
    let g = compute_display_geometry(ImageSize::new(300, 200), VIEWPORT).unwrap();
    assert_eq!((g.scaled_width, g.scaled_height), (300, 200));
    assert_eq!((g.offset_x, g.offset_y), (150, 200));
}

#[test]
fn test_awkward_ratio_hits_viewport_exactly() {
    // 600/700 is not representable exactly in binary floating point.
    let g = compute_display_geometry(ImageSize::new(700, 300), VIEWPORT).unwrap();
    assert_eq!(g.scaled_width, 600);
    assert_eq!(g.scaled_height, 257);
}

#[test]
fn test_very_thin_image_keeps_one_pixel_row() {
    let g = compute_display_geometry(ImageSize::new(10_000, 1), VIEWPORT).unwrap();
    assert_eq!((g.scaled_width, g.scaled_height), (600, 1));
    assert_eq!(g.offset_y, 299);
}

#[test]
fn test_zero_image_dimension_is_rejected() {
    let err = compute_display_geometry(ImageSize::new(0, 600), VIEWPORT).unwrap_err();
    assert!(matches!(
        err,
        SquareError::InvalidDimension {
            width: 0,
            height: 600
        }
    ));
}

#[test]
fn test_zero_viewport_is_rejected() {
    let err = compute_display_geometry(ImageSize::new(800, 600), Viewport::new(600, 0));
    assert!(matches!(err, Err(SquareError::InvalidDimension { .. })));
}

// ---------------------------------------------------------------------------
// display_to_original / original_to_display
// ---------------------------------------------------------------------------

#[test]
fn test_display_center_maps_to_image_center() {
    let (size, g) = landscape();
    let c = display_to_original(DisplayPoint::new(300, 300), size, &g);
    assert_eq!(c, Some(CropCenter::new(400, 300)));
}

#[test]
fn test_letterbox_click_is_ignored() {
    let (size, g) = landscape();
    assert_eq!(display_to_original(DisplayPoint::new(300, 10), size, &g), None);
    assert_eq!(display_to_original(DisplayPoint::new(300, 560), size, &g), None);
    assert_eq!(display_to_original(DisplayPoint::new(-1, 300), size, &g), None);
}

#[test]
fn test_displayed_edges_are_inclusive() {
    let (size, g) = landscape();
    assert_eq!(
        display_to_original(DisplayPoint::new(0, 75), size, &g),
        Some(CropCenter::new(0, 0))
    );
    assert_eq!(
        display_to_original(DisplayPoint::new(600, 525), size, &g),
        Some(CropCenter::new(800, 600))
    );
}

#[test]
fn test_original_to_display_forward() {
    let (size, g) = landscape();
    let p = original_to_display(CropCenter::new(400, 300), size, &g);
    assert_eq!(p, DisplayPoint::new(300, 300));
}

#[test]
fn test_original_to_display_truncates_negative_centers() {
    let (size, g) = landscape();
    // -10 * 600 / 800 = -7.5 -> -7, not -8
    let p = original_to_display(CropCenter::new(-10, -10), size, &g);
    assert_eq!(p, DisplayPoint::new(-7, 75 - 7));
}

// ---------------------------------------------------------------------------
// original_to_display_rect
// ---------------------------------------------------------------------------

#[test]
fn test_overlay_for_centered_selection() {
    let (size, g) = landscape();
    let r = original_to_display_rect(CropCenter::new(400, 300), size, &g);
    assert_eq!(
        r,
        DisplayRect {
            left: 75,
            top: 75,
            right: 525,
            bottom: 525,
        }
    );
    assert_eq!(r.width(), 450);
    assert_eq!(r.height(), 450);
}

#[test]
fn test_overlay_is_clipped_to_displayed_image() {
    let (size, g) = landscape();
    let r = original_to_display_rect(CropCenter::new(10, 10), size, &g);
    assert_eq!(r.left, 0);
    assert_eq!(r.top, 75);
    assert_eq!(r.right, 7 + 225);
    assert_eq!(r.bottom, 82 + 225);
}

#[test]
fn test_overlay_stays_ordered_for_far_away_center() {
    let (size, g) = landscape();
    let r = original_to_display_rect(CropCenter::new(100_000, -100_000), size, &g);
    assert!(r.left <= r.right);
    assert!(r.top <= r.bottom);
    assert_eq!((r.left, r.right), (600, 600));
    assert_eq!((r.top, r.bottom), (75, 75));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn size_strategy() -> impl Strategy<Value = ImageSize> {
    (1u32..=20_000, 1u32..=20_000).prop_map(|(w, h)| ImageSize::new(w, h))
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (1u32..=2_000, 1u32..=2_000).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    /// The preview never spills out of the viewport.
    #[test]
    fn prop_scaled_fits_viewport(size in size_strategy(), viewport in viewport_strategy()) {
        let g = compute_display_geometry(size, viewport).unwrap();
        prop_assert!(g.scaled_width <= viewport.width);
        prop_assert!(g.scaled_height <= viewport.height);
        prop_assert!(g.offset_x + g.scaled_width <= viewport.width);
        prop_assert!(g.offset_y + g.scaled_height <= viewport.height);
    }

    /// Either the image is shown at 1:1 or one edge fills the viewport.
    #[test]
    fn prop_fit_touches_viewport_or_is_unscaled(
        size in size_strategy(),
        viewport in viewport_strategy(),
    ) {
        let g = compute_display_geometry(size, viewport).unwrap();
        if size.width <= viewport.width && size.height <= viewport.height {
            prop_assert_eq!((g.scaled_width, g.scaled_height), (size.width, size.height));
        } else {
            prop_assert!(g.scaled_width == viewport.width || g.scaled_height == viewport.height);
        }
    }

    /// Mapping back and forth lands within one display pixel.
    #[test]
    fn prop_round_trip_within_one_pixel(
        size in size_strategy(),
        viewport in viewport_strategy(),
        rx in any::<u32>(),
        ry in any::<u32>(),
    ) {
        let g = compute_display_geometry(size, viewport).unwrap();
        prop_assume!(g.scaled_width >= 2 && g.scaled_height >= 2);

        let p = DisplayPoint::new(
            (g.offset_x + 1 + rx % (g.scaled_width - 1)) as i32,
            (g.offset_y + 1 + ry % (g.scaled_height - 1)) as i32,
        );
        let c = display_to_original(p, size, &g).unwrap();
        let back = original_to_display(c, size, &g);

        prop_assert!((back.x - p.x).abs() <= 1, "x: {} -> {:?} -> {}", p.x, c, back.x);
        prop_assert!((back.y - p.y).abs() <= 1, "y: {} -> {:?} -> {}", p.y, c, back.y);
    }

    /// Points left of or above the preview never produce a center.
    #[test]
    fn prop_margin_points_map_to_nothing(
        size in size_strategy(),
        viewport in viewport_strategy(),
        dx in 1i32..500,
        y in 0i32..2_000,
    ) {
        let g = compute_display_geometry(size, viewport).unwrap();
        let p = DisplayPoint::new(g.offset_x as i32 - dx, y);
        prop_assert_eq!(display_to_original(p, size, &g), None);
    }
}
