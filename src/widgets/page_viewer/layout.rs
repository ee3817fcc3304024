// src/widgets/page_viewer/layout.rs
//! Surface sizing for one page image.

/// Sizes for drawing a page: `display` is in layout pixels, `backing` in
/// device pixels (`display * density`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub fit_scale: f64,
    pub effective_scale: f64,
    pub display: (u32, u32),
    pub backing: (u32, u32),
}

/// Fit the page to `container_width` without ever upscaling, apply `zoom`,
/// then multiply by `density` for the backing resolution.
pub fn surface_layout(
    natural: (u32, u32),
    container_width: f64,
    zoom: f64,
    density: f64,
) -> SurfaceLayout {
    let (natural_w, natural_h) = natural;
    let fit_scale = if natural_w == 0 || container_width <= 0.0 {
        1.0
    } else {
        (container_width / f64::from(natural_w)).min(1.0)
    };
    let effective_scale = zoom * fit_scale;

    let scaled = |len: u32, factor: f64| -> u32 { ((f64::from(len) * factor).round() as u32).max(1) };

    SurfaceLayout {
        fit_scale,
        effective_scale,
        display: (
            scaled(natural_w, effective_scale),
            scaled(natural_h, effective_scale),
        ),
        backing: (
            scaled(natural_w, effective_scale * density),
            scaled(natural_h, effective_scale * density),
        ),
    }
}

/// Terminal cells needed to show `display` pixels with the given font size.
pub fn display_cells(display: (u32, u32), font_size: (u16, u16)) -> (u16, u16) {
    let cells = |px: u32, font: u16| -> u16 {
        let font = u32::from(font.max(1));
        px.div_ceil(font).min(u32::from(u16::MAX)) as u16
    };
    (cells(display.0, font_size.0), cells(display.1, font_size.1))
}

/// The part of the backing image that falls inside `visible_cells`, as
/// backing pixels from the top-left corner.
pub fn visible_backing(
    layout: &SurfaceLayout,
    visible_cells: (u16, u16),
    font_size: (u16, u16),
) -> (u32, u32) {
    let ratio_w = f64::from(layout.backing.0) / f64::from(layout.display.0.max(1));
    let ratio_h = f64::from(layout.backing.1) / f64::from(layout.display.1.max(1));
    let visible_px_w = u32::from(visible_cells.0) * u32::from(font_size.0);
    let visible_px_h = u32::from(visible_cells.1) * u32::from(font_size.1);

    let w = ((f64::from(visible_px_w) * ratio_w).round() as u32).clamp(1, layout.backing.0);
    let h = ((f64::from(visible_px_h) * ratio_h).round() as u32).clamp(1, layout.backing.1);
    (w, h)
}

/// The region of the natural image that scales onto `crop` backing pixels,
/// rounded up so the resampled crop never comes up short.
pub fn visible_natural(natural: (u32, u32), layout: &SurfaceLayout, crop: (u32, u32)) -> (u32, u32) {
    let span = |crop: u32, natural: u32, backing: u32| -> u32 {
        let natural = u64::from(natural.max(1));
        let region = (u64::from(crop) * natural).div_ceil(u64::from(backing.max(1)));
        region.clamp(1, natural) as u32
    };
    (
        span(crop.0, natural.0, layout.backing.0),
        span(crop.1, natural.1, layout.backing.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_upscales_to_fit() {
        let layout = surface_layout((400, 600), 1200.0, 1.0, 1.0);
        assert_eq!(layout.fit_scale, 1.0);
        assert_eq!(layout.display, (400, 600));
    }

    #[test]
    fn test_shrinks_to_container() {
        let layout = surface_layout((1000, 1400), 500.0, 1.0, 1.0);
        assert_eq!(layout.fit_scale, 0.5);
        assert_eq!(layout.display, (500, 700));
        assert_eq!(layout.backing, (500, 700));
    }

    #[test]
    fn test_zoom_and_density() {
        let layout = surface_layout((1000, 1400), 500.0, 1.5, 2.0);
        assert_eq!(layout.effective_scale, 0.75);
        assert_eq!(layout.display, (750, 1050));
        assert_eq!(layout.backing, (1500, 2100));
    }

    #[test]
    fn test_zero_width_image() {
        let layout = surface_layout((0, 10), 300.0, 1.0, 1.0);
        assert_eq!(layout.fit_scale, 1.0);
        assert_eq!(layout.display, (1, 10));
    }

    #[test]
    fn test_display_cells_round_up() {
        assert_eq!(display_cells((81, 160), (8, 16)), (11, 10));
    }

    #[test]
    fn test_visible_backing_clips() {
        let layout = surface_layout((1000, 1400), 500.0, 1.0, 2.0);
        // 500x700 display, 1000x1400 backing; 40x20 cells at 8x16 is 320x320 px
        assert_eq!(visible_backing(&layout, (40, 20), (8, 16)), (640, 640));
        // Larger than the image clamps to the full backing
        assert_eq!(visible_backing(&layout, (200, 200), (8, 16)), (1000, 1400));
    }

    #[test]
    fn test_visible_natural_maps_crop_back_to_source() {
        // A4 at 300 dpi, zoom 3, density 2: the backing is 9600x13579 but only
        // a 200x50 cell window is shown.
        let natural = (2480, 3508);
        let layout = surface_layout(natural, 1600.0, 3.0, 2.0);
        assert_eq!(layout.backing, (9600, 13579));
        let crop = visible_backing(&layout, (200, 50), (8, 16));
        assert_eq!(crop, (3200, 1600));
        assert_eq!(visible_natural(natural, &layout, crop), (827, 414));
    }

    #[test]
    fn test_visible_natural_full_page() {
        let natural = (1000, 1400);
        let layout = surface_layout(natural, 500.0, 1.0, 2.0);
        assert_eq!(visible_natural(natural, &layout, layout.backing), natural);
        assert_eq!(visible_natural(natural, &layout, (640, 640)), (640, 640));
    }
}
