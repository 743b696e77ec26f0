//! Adapter between the host's canvas scaler and the matcher.
//!
//! The host calls [`CanvasResizer::on_start`] once, then either
//! [`CanvasResizer::poll`] on every frame or [`CanvasResizer::resize`] from
//! its resize event. Each successful pass writes the reference resolution and
//! the match value into the host's [`CanvasScaler`].

use crate::config::ResolutionConfig;
use crate::error::{ResizeError, Result};
use crate::geometry::Size2D;
use crate::matcher::{MatchDecision, decide};
use crate::overlay::{OverlayRect, debug_overlay};

/// The host component that performs the actual pixel scaling.
pub trait CanvasScaler {
    fn set_reference_resolution(&mut self, reference: Size2D);
    /// 0.0 matches width, 1.0 matches height.
    fn set_match_width_or_height(&mut self, value: f32);
}

pub struct CanvasResizer<S: CanvasScaler> {
    config: ResolutionConfig,
    scaler: S,
    /// Treat out-of-order bounds as an error instead of a warning.
    strict_bounds: bool,
    last_screen: Option<Size2D>,
    decision: Option<MatchDecision>,
}

impl<S: CanvasScaler> CanvasResizer<S> {
    pub fn new(config: ResolutionConfig, scaler: S) -> Self {
        Self {
            config,
            scaler,
            strict_bounds: false,
            last_screen: None,
            decision: None,
        }
    }

    /// Build from the `[resize]` section of a loaded `RuneConfig`.
    pub fn from_config(cfg: &rune_config::ResizeConfig, scaler: S) -> Result<Self> {
        let config = ResolutionConfig::try_from(cfg)?;
        Ok(Self::new(config, scaler).with_strict_bounds(cfg.strict_bounds))
    }

    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict_bounds = strict;
        self
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    pub fn scaler(&self) -> &S {
        &self.scaler
    }

    pub fn scaler_mut(&mut self) -> &mut S {
        &mut self.scaler
    }

    pub fn into_scaler(self) -> S {
        self.scaler
    }

    /// The last decision written to the scaler, if any.
    pub fn decision(&self) -> Option<&MatchDecision> {
        self.decision.as_ref()
    }

    /// Initial pass when the canvas comes up.
    pub fn on_start(&mut self, screen: Size2D) -> Result<MatchDecision> {
        self.resize(screen)
    }

    /// Recompute only if `screen` differs from the previously sampled size.
    /// Returns `Ok(None)` when nothing changed.
    pub fn poll(&mut self, screen: Size2D) -> Result<Option<MatchDecision>> {
        if self.last_screen == Some(screen) {
            return Ok(None);
        }
        self.resize(screen).map(Some)
    }

    /// Decide for `screen` and apply the result to the scaler.
    ///
    /// On error nothing is applied and the previous decision stays in effect.
    /// The sample is remembered either way, so `poll` debounces against it.
    pub fn resize(&mut self, screen: Size2D) -> Result<MatchDecision> {
        self.last_screen = Some(screen);
        let decision = match self.evaluate(screen) {
            Ok(d) => d,
            Err(err) => {
                log::warn!("skipping canvas resize for {}: {}", screen, err);
                return Err(err);
            }
        };

        if let Some(warning) = decision.bounds_warning {
            log::warn!("canvas resize bounds: {}", warning);
        }

        self.scaler.set_reference_resolution(decision.reference);
        self.scaler.set_match_width_or_height(decision.match_value());

        if self.decision.as_ref() != Some(&decision) {
            log::info!(
                "canvas matched to {:?} with reference {} for screen {}",
                decision.axis,
                decision.reference,
                screen
            );
        }
        self.decision = Some(decision);
        Ok(decision)
    }

    /// Debug rectangles for the standard sample aspect ratios.
    pub fn overlay(&self, scale: Size2D) -> Vec<OverlayRect> {
        debug_overlay(&self.config, scale)
    }

    fn evaluate(&self, screen: Size2D) -> Result<MatchDecision> {
        let decision = decide(&self.config, screen)?;
        if self.strict_bounds
            && let Some(violation) = decision.bounds_warning
        {
            return Err(ResizeError::InconsistentBounds(violation));
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Axis;

    #[derive(Default)]
    struct RecordingScaler {
        reference: Option<Size2D>,
        match_value: Option<f32>,
        writes: usize,
    }

    impl CanvasScaler for RecordingScaler {
        fn set_reference_resolution(&mut self, reference: Size2D) {
            self.reference = Some(reference);
            self.writes += 1;
        }

        fn set_match_width_or_height(&mut self, value: f32) {
            self.match_value = Some(value);
        }
    }

    fn resizer() -> CanvasResizer<RecordingScaler> {
        CanvasResizer::new(ResolutionConfig::default(), RecordingScaler::default())
    }

    #[test]
    fn test_on_start_applies_decision() {
        let mut r = resizer();
        let d = r.on_start(Size2D::new(2048.0, 1536.0)).unwrap();
        assert_eq!(d.axis, Axis::MatchHeight);
        assert_eq!(r.scaler().reference, Some(Size2D::new(2272.0, 1536.0)));
        assert_eq!(r.scaler().match_value, Some(1.0));
        assert_eq!(r.decision(), Some(&d));
    }

    #[test]
    fn test_poll_is_debounced() {
        let mut r = resizer();
        assert!(r.poll(Size2D::new(1136.0, 640.0)).unwrap().is_some());
        assert!(r.poll(Size2D::new(1136.0, 640.0)).unwrap().is_none());
        assert_eq!(r.scaler().writes, 1);

        let d = r.poll(Size2D::new(2048.0, 1536.0)).unwrap().unwrap();
        assert_eq!(d.axis, Axis::MatchHeight);
        assert_eq!(r.scaler().writes, 2);
    }

    #[test]
    fn test_poll_after_start_skips_same_size() {
        let mut r = resizer();
        r.on_start(Size2D::new(1024.0, 640.0)).unwrap();
        assert!(r.poll(Size2D::new(1024.0, 640.0)).unwrap().is_none());
    }

    #[test]
    fn test_poll_after_explicit_resize_reapplies() {
        let mut r = resizer();
        r.on_start(Size2D::new(1136.0, 640.0)).unwrap();
        r.resize(Size2D::new(2048.0, 1536.0)).unwrap();
        assert_eq!(r.scaler().match_value, Some(1.0));

        let d = r.poll(Size2D::new(1136.0, 640.0)).unwrap();
        assert_eq!(d.map(|d| d.axis), Some(Axis::MatchWidth));
        assert_eq!(r.scaler().match_value, Some(0.0));
        assert_eq!(r.scaler().writes, 3);

        // The explicit resize also counts as a sample.
        r.resize(Size2D::new(2048.0, 1536.0)).unwrap();
        assert!(r.poll(Size2D::new(2048.0, 1536.0)).unwrap().is_none());
    }

    #[test]
    fn test_invalid_screen_keeps_previous_decision() {
        let mut r = resizer();
        let first = r.resize(Size2D::new(1136.0, 640.0)).unwrap();
        let err = r.resize(Size2D::new(0.0, 600.0)).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidResolution { .. }));
        assert_eq!(r.decision(), Some(&first));
        assert_eq!(r.scaler().writes, 1);
        assert_eq!(r.scaler().match_value, Some(0.0));
    }

    #[test]
    fn test_strict_bounds_skip_cycle() {
        let config = ResolutionConfig::new(
            Size2D::new(2272.0, 1536.0),
            Size2D::new(2400.0, 1278.0),
            Size2D::new(2768.0, 1536.0),
        )
        .unwrap();

        let mut lenient = CanvasResizer::new(config, RecordingScaler::default());
        let d = lenient.resize(Size2D::new(1136.0, 640.0)).unwrap();
        assert!(d.bounds_warning.is_some());

        let mut strict =
            CanvasResizer::new(config, RecordingScaler::default()).with_strict_bounds(true);
        let err = strict.resize(Size2D::new(1136.0, 640.0)).unwrap_err();
        assert!(matches!(err, ResizeError::InconsistentBounds(_)));
        assert!(strict.decision().is_none());
        assert_eq!(strict.scaler().writes, 0);
    }

    #[test]
    fn test_from_config() {
        let mut cfg = rune_config::ResizeConfig::default();
        cfg.strict_bounds = true;
        let r = CanvasResizer::from_config(&cfg, RecordingScaler::default()).unwrap();
        assert_eq!(r.config(), &ResolutionConfig::default());
        assert!(r.strict_bounds);

        cfg.standard = [0.0, 1536.0];
        assert!(CanvasResizer::from_config(&cfg, RecordingScaler::default()).is_err());
    }
}
