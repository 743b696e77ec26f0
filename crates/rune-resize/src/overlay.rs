//! Debug overlay: wireframe rectangles showing how common device aspect
//! ratios would be fitted by the current bounds. Read-only; it runs the same
//! decision as the live canvas.

use palette::Srgb;

use crate::config::ResolutionConfig;
use crate::geometry::Size2D;
use crate::matcher::decide;

/// Device aspect ratios drawn by the overlay, as width:height.
pub const SAMPLE_ASPECTS: [Size2D; 5] = [
    Size2D::new(812.0, 375.0), // notched iOS handsets
    Size2D::new(16.0, 9.0),    // iPhone 5 and later
    Size2D::new(16.0, 10.0),   // common Android handsets/tablets
    Size2D::new(3.0, 2.0),     // iPhone 4S and earlier
    Size2D::new(4.0, 3.0),     // iPad
];

/// Colors cycled across overlay rectangles.
pub fn overlay_colors() -> [Srgb; 4] {
    [
        Srgb::new(0.0, 1.0, 1.0), // cyan
        Srgb::new(1.0, 0.0, 1.0), // magenta
        Srgb::new(1.0, 0.92, 0.016), // yellow
        Srgb::new(0.0, 1.0, 0.0), // green
    ]
}

/// One centered wireframe rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub color: Srgb,
    pub aspect: Size2D,
    pub size: Size2D,
}

/// Rectangles for [`SAMPLE_ASPECTS`], sized in reference units and multiplied
/// by `scale` (the host transform's local scale).
pub fn debug_overlay(config: &ResolutionConfig, scale: Size2D) -> Vec<OverlayRect> {
    overlay_for(config, &SAMPLE_ASPECTS, scale)
}

/// Same as [`debug_overlay`] with caller-supplied aspect ratios. Aspects that
/// are not positive are skipped.
pub fn overlay_for(config: &ResolutionConfig, aspects: &[Size2D], scale: Size2D) -> Vec<OverlayRect> {
    let colors = overlay_colors();
    aspects
        .iter()
        .enumerate()
        .filter_map(|(i, &aspect)| {
            let decision = decide(config, aspect).ok()?;
            let unit = decision.unit_scale(aspect);
            Some(OverlayRect {
                color: colors[i % colors.len()],
                aspect,
                size: aspect.scale(unit).component_mul(scale),
            })
        })
        .collect()
}
