//! rune-resize: fit a UI canvas to the current screen aspect ratio.
//!
//! Responsibilities:
//! - Decide whether the canvas scaler should match screen width or height.
//! - Pick the reference resolution to scale against, extending the standard
//!   resolution within `[minimum, maximum]` and clamping to the maximum.
//! - Apply decisions to a host [`CanvasScaler`] through [`CanvasResizer`].
//! - Produce debug overlay rectangles for common device aspect ratios.

pub mod config;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod overlay;
pub mod resizer;

pub use config::{
    DEFAULT_MAXIMUM_RESOLUTION, DEFAULT_MINIMUM_RESOLUTION, DEFAULT_STANDARD_RESOLUTION,
    ResolutionConfig,
};
pub use error::{BoundsViolation, Dimension, ResizeError, ResolutionRole, Result};
pub use geometry::Size2D;
pub use matcher::{Axis, Fit, MatchDecision, RESOLUTION_BUFFER, decide, select_axis};
pub use overlay::{OverlayRect, SAMPLE_ASPECTS, debug_overlay, overlay_for};
pub use resizer::{CanvasResizer, CanvasScaler};
