use anyhow::Result;
use rune_resize::{
    Axis, CanvasResizer, CanvasScaler, Fit, ResizeError, ResolutionConfig, ResolutionRole, Size2D,
    decide,
};

/// Mirrors what a host scaler stores: the last reference and match value.
#[derive(Debug, Default)]
struct HostScaler {
    reference: Size2D,
    match_width_or_height: f32,
}

impl CanvasScaler for HostScaler {
    fn set_reference_resolution(&mut self, reference: Size2D) {
        self.reference = reference;
    }

    fn set_match_width_or_height(&mut self, value: f32) {
        self.match_width_or_height = value;
    }
}

#[test]
fn handset_1136x640_matches_width() -> Result<()> {
    let d = decide(&ResolutionConfig::default(), Size2D::new(1136.0, 640.0))?;
    assert_eq!(d.axis, Axis::MatchWidth);
    assert_eq!(d.reference, Size2D::new(2272.0, 1536.0));
    Ok(())
}

#[test]
fn tablet_2048x1536_matches_height() -> Result<()> {
    let d = decide(&ResolutionConfig::default(), Size2D::new(2048.0, 1536.0))?;
    assert_eq!(d.axis, Axis::MatchHeight);
    assert_eq!(d.reference, Size2D::new(2272.0, 1536.0));
    Ok(())
}

#[test]
fn android_1024x640_matches_width() -> Result<()> {
    let d = decide(&ResolutionConfig::default(), Size2D::new(1024.0, 640.0))?;
    assert_eq!(d.axis, Axis::MatchWidth);
    assert_eq!(d.reference, Size2D::new(2272.0, 1536.0));
    Ok(())
}

#[test]
fn extreme_tall_screen_clamps_to_maximum() -> Result<()> {
    let d = decide(&ResolutionConfig::default(), Size2D::new(100.0, 1000.0))?;
    assert_eq!(d.axis, Axis::MatchHeight);
    assert_eq!(d.fit, Fit::Clamped);
    assert_eq!(d.reference, Size2D::new(2768.0, 1536.0));
    Ok(())
}

#[test]
fn zero_width_screen_is_rejected() {
    let err = decide(&ResolutionConfig::default(), Size2D::new(0.0, 600.0)).unwrap_err();
    assert!(matches!(
        err,
        ResizeError::InvalidResolution { role: ResolutionRole::Screen, .. }
    ));
}

#[test]
fn resizer_tracks_device_rotation() -> Result<()> {
    let mut resizer = CanvasResizer::new(ResolutionConfig::default(), HostScaler::default());

    resizer.on_start(Size2D::from((1136, 640)))?;
    assert_eq!(resizer.scaler().match_width_or_height, 0.0);
    assert_eq!(resizer.scaler().reference, Size2D::new(2272.0, 1536.0));

    // Same size polled again: nothing to do.
    assert!(resizer.poll(Size2D::from((1136, 640)))?.is_none());

    // Switch to a tablet-shaped window.
    let d = resizer.poll(Size2D::from((2048, 1536)))?.expect("size changed");
    assert_eq!(d.axis, Axis::MatchHeight);
    assert_eq!(resizer.scaler().match_width_or_height, 1.0);

    // A minimized (zero-sized) window is skipped and the tablet decision stays.
    assert!(resizer.poll(Size2D::from((0, 0))).is_err());
    assert_eq!(resizer.scaler().match_width_or_height, 1.0);
    assert_eq!(resizer.decision().map(|d| d.axis), Some(Axis::MatchHeight));
    Ok(())
}

#[test]
fn resizer_from_rune_config() -> Result<()> {
    let mut config = rune_config::RuneConfig::default();
    config.resize.maximum = Some([2768.0, 2048.0]);

    let mut resizer = CanvasResizer::from_config(&config.resize, HostScaler::default())?;
    let d = resizer.resize(Size2D::new(1000.0, 800.0))?;
    assert_eq!(d.axis, Axis::MatchWidth);
    assert_eq!(d.fit, Fit::Extended);
    assert_eq!(resizer.scaler().reference.x, 2272.0);
    Ok(())
}
