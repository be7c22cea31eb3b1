/// Drawing surface abstraction shared by all hosts
use nalgebra::Point2;
use std::fmt;
use thiserror::Error;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background fill color (#101010)
pub const BACKGROUND: Rgb = Rgb::new(0x10, 0x10, 0x10);
/// Wireframe line color (#50FF50)
pub const FOREGROUND: Rgb = Rgb::new(0x50, 0xFF, 0x50);

/// Errors raised while drawing on a surface
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("surface was torn down")]
    Lost,
    #[error("surface backend failed: {0}")]
    Backend(String),
}

/// Identifier used to locate a drawing surface in the hosting environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SurfaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mutable 2-D pixel target.
///
/// A frame step clears the surface, then draws each edge as a segment in
/// pixel coordinates. Drawing errors fail the current frame outright; the
/// instance manager reacts by stopping the instance.
pub trait Surface {
    /// Pixel dimensions (width, height).
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError>;

    /// Draw a straight segment between two pixel-space points. Endpoints
    /// outside the surface are allowed; out-of-bounds pixels are dropped.
    fn draw_line(
        &mut self,
        from: Point2<f64>,
        to: Point2<f64>,
        color: Rgb,
    ) -> Result<(), SurfaceError>;
}

/// Resolves surface ids to surfaces on behalf of the instance manager.
///
/// Lookup may start failing mid-run when the host tears a surface down;
/// the manager treats that as the end of the affected instance.
pub trait SurfaceProvider {
    type Surface: Surface;

    fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut Self::Surface>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// One recorded drawing call
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Rgb),
        Line(Point2<f64>, Point2<f64>, Rgb),
    }

    /// Surface that records every drawing call instead of rasterizing
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub ops: Vec<Op>,
        pub fail: bool,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
                fail: false,
            }
        }

        /// Segments drawn since the most recent clear.
        pub fn last_frame_segments(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
            let mut segments = Vec::new();
            for op in &self.ops {
                match op {
                    Op::Clear(_) => segments.clear(),
                    Op::Line(from, to, _) => segments.push((*from, *to)),
                }
            }
            segments
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError> {
            if self.fail {
                return Err(SurfaceError::Lost);
            }
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn draw_line(
            &mut self,
            from: Point2<f64>,
            to: Point2<f64>,
            color: Rgb,
        ) -> Result<(), SurfaceError> {
            if self.fail {
                return Err(SurfaceError::Lost);
            }
            self.ops.push(Op::Line(from, to, color));
            Ok(())
        }
    }

    /// Map-backed provider for manager tests
    #[derive(Default)]
    pub struct MapHost {
        pub surfaces: HashMap<SurfaceId, RecordingSurface>,
    }

    impl MapHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_surface(mut self, id: &str, width: u32, height: u32) -> Self {
            self.surfaces
                .insert(id.into(), RecordingSurface::new(width, height));
            self
        }
    }

    impl SurfaceProvider for MapHost {
        type Surface = RecordingSurface;

        fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut RecordingSurface> {
            self.surfaces.get_mut(id)
        }
    }
}
