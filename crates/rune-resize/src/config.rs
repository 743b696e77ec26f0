//! Resolution bounds the matcher works against.

use crate::error::{BoundsViolation, Dimension, ResizeError, ResolutionRole, Result};
use crate::geometry::Size2D;

/// Design-time resolution of the canvas.
pub const DEFAULT_STANDARD_RESOLUTION: Size2D = Size2D::new(2272.0, 1536.0);
/// Smallest reference resolution the canvas may be extended down to.
pub const DEFAULT_MINIMUM_RESOLUTION: Size2D = Size2D::new(2048.0, 1278.0);
/// Largest reference resolution the canvas may be extended up to.
pub const DEFAULT_MAXIMUM_RESOLUTION: Size2D = Size2D::new(2768.0, 1536.0);

/// Lower bound used when no minimum is configured.
const OPEN_MINIMUM: Size2D = Size2D::new(f32::MIN_POSITIVE, f32::MIN_POSITIVE);
/// Upper bound used when no maximum is configured.
const OPEN_MAXIMUM: Size2D = Size2D::new(f32::MAX, f32::MAX);

/// Standard, minimum and maximum resolutions. Immutable once built; every
/// component is known to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionConfig {
    standard: Size2D,
    minimum: Size2D,
    maximum: Size2D,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            standard: DEFAULT_STANDARD_RESOLUTION,
            minimum: DEFAULT_MINIMUM_RESOLUTION,
            maximum: DEFAULT_MAXIMUM_RESOLUTION,
        }
    }
}

impl ResolutionConfig {
    /// Build a config, rejecting any non-positive or non-finite component.
    ///
    /// Bound ordering is not enforced here; see [`ResolutionConfig::check_bounds`].
    pub fn new(standard: Size2D, minimum: Size2D, maximum: Size2D) -> Result<Self> {
        ensure_positive(ResolutionRole::Standard, standard)?;
        ensure_positive(ResolutionRole::Minimum, minimum)?;
        ensure_positive(ResolutionRole::Maximum, maximum)?;
        Ok(Self { standard, minimum, maximum })
    }

    /// A config with only a reference resolution: any extension is allowed,
    /// so the decision reduces to comparing aspect ratios.
    pub fn unbounded(reference: Size2D) -> Result<Self> {
        Self::new(reference, OPEN_MINIMUM, OPEN_MAXIMUM)
    }

    pub fn standard(&self) -> Size2D {
        self.standard
    }

    pub fn minimum(&self) -> Size2D {
        self.minimum
    }

    pub fn maximum(&self) -> Size2D {
        self.maximum
    }

    /// Reports the first axis on which `minimum <= standard <= maximum` fails.
    pub fn check_bounds(&self) -> Result<()> {
        if let Some(violation) = self.bounds_violation() {
            return Err(ResizeError::InconsistentBounds(violation));
        }
        Ok(())
    }

    pub(crate) fn bounds_violation(&self) -> Option<BoundsViolation> {
        let axes = [
            (Dimension::Width, self.minimum.x, self.standard.x, self.maximum.x),
            (Dimension::Height, self.minimum.y, self.standard.y, self.maximum.y),
        ];
        axes.into_iter()
            .find(|&(_, min, standard, max)| !(min <= standard && standard <= max))
            .map(|(dimension, minimum, standard, maximum)| BoundsViolation {
                dimension,
                minimum,
                standard,
                maximum,
            })
    }
}

impl TryFrom<&rune_config::ResizeConfig> for ResolutionConfig {
    type Error = ResizeError;

    fn try_from(cfg: &rune_config::ResizeConfig) -> Result<Self> {
        Self::new(
            Size2D::from(cfg.standard),
            cfg.minimum.map(Size2D::from).unwrap_or(OPEN_MINIMUM),
            cfg.maximum.map(Size2D::from).unwrap_or(OPEN_MAXIMUM),
        )
    }
}

pub(crate) fn ensure_positive(role: ResolutionRole, size: Size2D) -> Result<()> {
    if size.is_positive() {
        Ok(())
    } else {
        Err(ResizeError::InvalidResolution { role, size })
    }
}
