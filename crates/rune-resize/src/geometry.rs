//! Plain 2D size type shared by the matcher, the adapter and the overlay.

/// A width/height pair in resolution units (pixels for screens, design units
/// for reference resolutions).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size2D {
    pub x: f32,
    pub y: f32,
}

impl Size2D {
    pub const ZERO: Size2D = Size2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Height over width. Larger values mean a taller (more portrait) shape.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.y / self.x
    }

    /// Both components are finite and strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }

    #[inline]
    pub fn scale(&self, factor: f32) -> Size2D {
        Size2D::new(self.x * factor, self.y * factor)
    }

    /// Component-wise multiply.
    #[inline]
    pub fn component_mul(&self, other: Size2D) -> Size2D {
        Size2D::new(self.x * other.x, self.y * other.y)
    }
}

impl From<[f32; 2]> for Size2D {
    fn from(v: [f32; 2]) -> Self {
        Size2D::new(v[0], v[1])
    }
}

impl From<Size2D> for [f32; 2] {
    fn from(s: Size2D) -> Self {
        [s.x, s.y]
    }
}

impl From<(u32, u32)> for Size2D {
    fn from((w, h): (u32, u32)) -> Self {
        Size2D::new(w as f32, h as f32)
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalSize<u32>> for Size2D {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Size2D::new(size.width as f32, size.height as f32)
    }
}

impl std::fmt::Display for Size2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
