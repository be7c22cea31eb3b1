/// Per-surface render instance: animation state and the frame step
use crate::model::{Model, Vertex};
use crate::projection::{project, Viewport};
use crate::surface::{Surface, SurfaceError, SurfaceId, BACKGROUND, FOREGROUND};
use crate::transform::{rotate_xz, translate_z};
use nalgebra::Point2;
use std::f64::consts::{PI, TAU};
use std::sync::Arc;
use std::time::Duration;

/// Frames per second of every instance
pub const FRAME_RATE: u32 = 60;
/// Interval between two frames of one instance
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);
/// Angular velocity in radians per simulated second; one revolution per 2 s
pub const SPIN_RATE: f64 = PI;
/// Distance the model is pushed away from the camera along +Z
pub const CAMERA_OFFSET: f64 = 4.0;

/// Lifecycle state of a render instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// Run one vertex through the per-frame pipeline: rotate, push back,
/// project, map to pixels.
pub fn project_vertex(v: &Vertex, angle: f64, offset: f64, viewport: Viewport) -> Point2<f64> {
    viewport.to_screen(&project(&translate_z(&rotate_xz(v, angle), offset)))
}

/// Draw one wireframe frame of `model` at the given angle onto `surface`.
pub fn draw_frame(
    model: &Model,
    angle: f64,
    offset: f64,
    surface: &mut impl Surface,
) -> Result<(), SurfaceError> {
    let (width, height) = surface.size();
    let viewport = Viewport::new(width, height);
    surface.clear(BACKGROUND)?;
    let vertices = model.vertices();
    for face in model.faces() {
        for (i, j) in face.edges() {
            let from = project_vertex(&vertices[i], angle, offset, viewport);
            let to = project_vertex(&vertices[j], angle, offset, viewport);
            surface.draw_line(from, to, FOREGROUND)?;
        }
    }
    Ok(())
}

/// One independently scheduled animation bound to one surface and one model.
///
/// The angle is owned exclusively by the instance; two instances never share
/// mutable state, even when they render the same (shared, read-only) model.
pub struct RenderInstance {
    id: SurfaceId,
    model: Arc<Model>,
    angle: f64,
    phase: Phase,
}

impl RenderInstance {
    pub fn new(id: SurfaceId, model: Arc<Model>) -> Self {
        Self {
            id,
            model,
            angle: 0.0,
            phase: Phase::Running,
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    /// Current rotation angle in radians, always in [0, 2π).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Run one frame: advance the angle by one tick's worth of rotation,
    /// then redraw the whole wireframe. A drawing error stops the instance
    /// and is handed back to the caller.
    pub fn step(&mut self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        if !self.is_running() {
            return Ok(());
        }
        self.angle = (self.angle + SPIN_RATE / FRAME_RATE as f64).rem_euclid(TAU);
        if let Err(err) = draw_frame(&self.model, self.angle, CAMERA_OFFSET, surface) {
            self.phase = Phase::Stopped;
            return Err(err);
        }
        Ok(())
    }
}
