use crate::consts::MIN_DISPLAY_EDGE;
use crate::error::Result;

use super::types::{CropCenter, DisplayGeometry, DisplayPoint, DisplayRect, ImageSize, Viewport};

/// Fit `image` inside `viewport` without upscaling, then center it.
///
/// The binding axis is chosen by cross-multiplication so the fitted edge is
/// exactly the viewport edge rather than a float-rounded neighbour.
pub fn compute_display_geometry(image: ImageSize, viewport: Viewport) -> Result<DisplayGeometry> {
    image.validate()?;
    viewport.validate()?;

    let (scaled_width, scaled_height) = fit_within(image, viewport);

    Ok(DisplayGeometry {
        offset_x: (viewport.width - scaled_width) / 2,
        offset_y: (viewport.height - scaled_height) / 2,
        scaled_width,
        scaled_height,
    })
}

fn fit_within(image: ImageSize, viewport: Viewport) -> (u32, u32) {
    if image.width <= viewport.width && image.height <= viewport.height {
        return (image.width, image.height);
    }

    let (w, h) = (image.width as u64, image.height as u64);
    let (vw, vh) = (viewport.width as u64, viewport.height as u64);

    // vw / w <= vh / h  <=>  vw * h <= vh * w
    let (sw, sh) = if vw * h <= vh * w {
        (vw, h * vw / w)
    } else {
        (w * vh / h, vh)
    };

    (
        (sw as u32).max(MIN_DISPLAY_EDGE),
        (sh as u32).max(MIN_DISPLAY_EDGE),
    )
}

/// Map a display point back to original pixel coordinates.
///
/// Returns `None` for points on the letterbox margin; callers must leave any
/// stored crop center untouched in that case.
pub fn display_to_original(
    point: DisplayPoint,
    image: ImageSize,
    geometry: &DisplayGeometry,
) -> Option<CropCenter> {
    if geometry.scaled_width == 0 || geometry.scaled_height == 0 || !geometry.contains(point) {
        return None;
    }

    let rel_x = point.x as i64 - geometry.offset_x as i64;
    let rel_y = point.y as i64 - geometry.offset_y as i64;
    let x = rel_x * image.width as i64 / geometry.scaled_width as i64;
    let y = rel_y * image.height as i64 / geometry.scaled_height as i64;

    Some(CropCenter {
        x: i32::try_from(x).ok()?,
        y: i32::try_from(y).ok()?,
    })
}

/// Map an original pixel coordinate forward into display space.
pub fn original_to_display(
    center: CropCenter,
    image: ImageSize,
    geometry: &DisplayGeometry,
) -> DisplayPoint {
    // Truncates toward zero, so negative centers round toward the image.
    let x = center.x as i64 * geometry.scaled_width as i64 / image.width.max(1) as i64;
    let y = center.y as i64 * geometry.scaled_height as i64 / image.height.max(1) as i64;

    DisplayPoint {
        x: saturate(geometry.offset_x as i64 + x),
        y: saturate(geometry.offset_y as i64 + y),
    }
}

/// Overlay rectangle for the square crop around `center`, clipped to the
/// rendered image. Clipping is cosmetic; the crop itself is resolved by
/// [`crate::transform::crop_window`].
pub fn original_to_display_rect(
    center: CropCenter,
    image: ImageSize,
    geometry: &DisplayGeometry,
) -> DisplayRect {
    let side = image.shorter_edge() as i64;
    let half = side * geometry.scaled_width as i64 / image.width.max(1) as i64 / 2;
    let c = original_to_display(center, image, geometry);

    let x0 = geometry.offset_x as i64;
    let y0 = geometry.offset_y as i64;
    let x1 = x0 + geometry.scaled_width as i64;
    let y1 = y0 + geometry.scaled_height as i64;

    let (cx, cy) = (c.x as i64, c.y as i64);

    DisplayRect {
        left: saturate((cx - half).clamp(x0, x1)),
        top: saturate((cy - half).clamp(y0, y1)),
        right: saturate((cx + half).clamp(x0, x1)),
        bottom: saturate((cy + half).clamp(y0, y1)),
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
