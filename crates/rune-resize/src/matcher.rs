//! Resolution matching: decide whether the canvas scaler should match the
//! screen's width or height, and which reference resolution to scale against.
//!
//! The decision is a pure function of the configured bounds and the current
//! screen size. It holds no state between calls.

use crate::config::{ResolutionConfig, ensure_positive};
use crate::error::{BoundsViolation, ResolutionRole, Result};
use crate::geometry::Size2D;

/// Slack added before comparing an extended dimension against the minimum
/// bound, so a screen landing a few pixels from the bound does not flip axes.
pub const RESOLUTION_BUFFER: f32 = 10.0;

/// Which screen axis the scaler treats as authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MatchWidth,
    MatchHeight,
}

impl Axis {
    /// The host scaler's `matchWidthOrHeight` value: 0.0 for width, 1.0 for height.
    pub fn match_value(self) -> f32 {
        match self {
            Axis::MatchWidth => 0.0,
            Axis::MatchHeight => 1.0,
        }
    }

    /// Nearest axis for a host blend value in `[0, 1]`.
    pub fn from_match_value(value: f32) -> Axis {
        if value < 0.5 { Axis::MatchWidth } else { Axis::MatchHeight }
    }
}

/// How the reference resolution was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// The standard resolution is used as-is.
    Standard,
    /// One axis of the standard resolution was stretched to the screen's aspect.
    Extended,
    /// Extension would overflow the maximum bound; the maximum is used.
    Clamped,
}

/// Result of a single matching pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchDecision {
    pub axis: Axis,
    pub reference: Size2D,
    pub fit: Fit,
    /// Set when the config's bounds are not ordered around the standard
    /// resolution. The decision is still computed but may not be what the
    /// bounds intended.
    pub bounds_warning: Option<BoundsViolation>,
}

impl MatchDecision {
    pub fn match_value(&self) -> f32 {
        self.axis.match_value()
    }

    /// Uniform scale that maps `size` onto the reference resolution along the
    /// selected axis.
    pub fn unit_scale(&self, size: Size2D) -> f32 {
        match self.axis {
            Axis::MatchWidth => self.reference.x / size.x,
            Axis::MatchHeight => self.reference.y / size.y,
        }
    }
}

/// Decide how a canvas designed for `config` fits `screen`.
///
/// Fails with `InvalidResolution` if `screen` has a zero, negative or
/// non-finite component.
pub fn decide(config: &ResolutionConfig, screen: Size2D) -> Result<MatchDecision> {
    ensure_positive(ResolutionRole::Screen, screen)?;

    let standard = config.standard();
    let minimum = config.minimum();
    let maximum = config.maximum();

    // Standard resolution with the complementary axis stretched to the
    // screen's aspect ratio.
    let extended = Size2D::new(
        standard.y * screen.x / screen.y,
        standard.x * screen.y / screen.x,
    );

    let (axis, reference, fit) = if screen.aspect() > standard.aspect() {
        // Taller than the design: tablets, near-square panels.
        if extended.x + RESOLUTION_BUFFER > minimum.x {
            (Axis::MatchHeight, standard, Fit::Standard)
        } else if extended.y > maximum.y {
            (Axis::MatchHeight, maximum, Fit::Clamped)
        } else {
            (Axis::MatchWidth, Size2D::new(standard.x, extended.y), Fit::Extended)
        }
    } else {
        // Flatter than the design: handsets.
        if extended.y + RESOLUTION_BUFFER > minimum.y {
            (Axis::MatchWidth, standard, Fit::Standard)
        } else if extended.x > maximum.x {
            (Axis::MatchWidth, maximum, Fit::Clamped)
        } else {
            (Axis::MatchHeight, Size2D::new(extended.x, standard.y), Fit::Extended)
        }
    };

    log::debug!(
        "screen {} -> {:?} against {} ({:?})",
        screen,
        axis,
        reference,
        fit
    );

    Ok(MatchDecision {
        axis,
        reference,
        fit,
        bounds_warning: config.bounds_violation(),
    })
}

/// Axis selection against a bare reference resolution: match height when the
/// screen is taller than the reference, width otherwise (including an exact
/// tie).
pub fn select_axis(screen: Size2D, reference: Size2D) -> Result<Axis> {
    let config = ResolutionConfig::unbounded(reference)?;
    decide(&config, screen).map(|d| d.axis)
}
