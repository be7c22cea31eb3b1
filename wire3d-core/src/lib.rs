/// Wire3D Core Library - Host-agnostic wireframe rendering
///
/// This library provides the model data, coordinate transforms, perspective
/// projection, and the per-surface render loop. Hosts supply drawing
/// surfaces through the `Surface` and `SurfaceProvider` traits and drive
/// the `InstanceManager` from their event loop.

pub mod model;
pub mod transform;
pub mod projection;
pub mod surface;
pub mod instance;
pub mod manager;

// Re-export commonly used types
pub use model::{Face, Model, ModelError, Vertex};
pub use projection::{project, Viewport, NEAR_EPSILON};
pub use transform::{rotate_xz, translate_z};
pub use surface::{Rgb, Surface, SurfaceError, SurfaceId, SurfaceProvider, BACKGROUND, FOREGROUND};
pub use instance::{
    draw_frame, project_vertex, Phase, RenderInstance, CAMERA_OFFSET, FRAME_RATE, FRAME_TIME,
    SPIN_RATE,
};
pub use manager::{InstanceManager, StartError};
