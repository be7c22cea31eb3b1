/// Instance lifecycle and cooperative frame scheduling
use crate::instance::{RenderInstance, FRAME_TIME};
use crate::model::Model;
use crate::surface::{SurfaceId, SurfaceProvider};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Errors reported by [`InstanceManager::start`]
#[derive(Error, Debug)]
pub enum StartError {
    #[error("no drawing surface named \"{0}\"")]
    MissingSurface(SurfaceId),
}

struct Slot {
    instance: RenderInstance,
    /// When the next frame is due; `None` right after start, meaning the
    /// first frame runs on the next pump.
    next_due: Option<Instant>,
}

/// Owns every live render instance plus the surface provider they draw
/// through.
///
/// Scheduling is cooperative and single-threaded: the host calls
/// [`pump`](Self::pump) from its event loop, each due instance runs exactly
/// one frame synchronously, and the returned deadline tells the host how
/// long it may sleep. Frames of different instances interleave freely;
/// frames of one instance are strictly ordered.
pub struct InstanceManager<P: SurfaceProvider> {
    provider: P,
    instances: HashMap<SurfaceId, Slot>,
}

impl<P: SurfaceProvider> InstanceManager<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            instances: HashMap::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Begin rendering `model` on the surface named `id`.
    ///
    /// Fails if the id resolves to no surface. Starting on an id that is
    /// already animating replaces the running instance: its remaining
    /// frames are cancelled and the new instance begins at angle zero.
    pub fn start(
        &mut self,
        id: impl Into<SurfaceId>,
        model: Arc<Model>,
    ) -> Result<(), StartError> {
        let id = id.into();
        if self.provider.surface_mut(&id).is_none() {
            log::error!("cannot start renderer: no drawing surface named \"{id}\"");
            return Err(StartError::MissingSurface(id));
        }
        if self.instances.contains_key(&id) {
            log::info!("surface \"{id}\" already animating, replacing the running instance");
        }
        let instance = RenderInstance::new(id.clone(), model);
        self.instances.insert(
            id,
            Slot {
                instance,
                next_due: None,
            },
        );
        Ok(())
    }

    /// Cancel the instance on `id`, if any. After this returns, no further
    /// frame of that instance can run. Returns whether one was running.
    pub fn stop(&mut self, id: &SurfaceId) -> bool {
        match self.instances.remove(id) {
            Some(mut slot) => {
                slot.instance.stop();
                true
            }
            None => false,
        }
    }

    pub fn instance(&self, id: &SurfaceId) -> Option<&RenderInstance> {
        self.instances.get(id).map(|slot| &slot.instance)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Run one frame for every instance whose deadline has passed and
    /// reschedule it. Instances whose surface disappeared or whose drawing
    /// failed are stopped, logged once, and dropped. Returns the earliest
    /// upcoming deadline, or `None` when no instance remains.
    pub fn pump(&mut self, now: Instant) -> Option<Instant> {
        let mut stopped = Vec::new();
        for (id, slot) in &mut self.instances {
            if slot.next_due.is_some_and(|due| due > now) {
                continue;
            }
            match self.provider.surface_mut(id) {
                None => {
                    log::warn!("surface \"{id}\" disappeared, stopping its renderer");
                    slot.instance.stop();
                    stopped.push(id.clone());
                }
                Some(surface) => match slot.instance.step(surface) {
                    Ok(()) => slot.next_due = Some(now + FRAME_TIME),
                    Err(err) => {
                        log::warn!("frame on surface \"{id}\" failed: {err}; stopping its renderer");
                        stopped.push(id.clone());
                    }
                },
            }
        }
        for id in stopped {
            self.instances.remove(&id);
        }
        self.instances
            .values()
            .filter_map(|slot| slot.next_due)
            .min()
    }
}
